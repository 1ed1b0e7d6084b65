pub mod catalog;
pub mod depth;
pub mod descriptor;

pub use catalog::{builtin_catalog, CatalogError, TypeCatalog};
pub use depth::LowCardinalityDepth;
pub use descriptor::TypeDescriptor;
