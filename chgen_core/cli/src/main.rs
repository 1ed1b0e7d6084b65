use chgen::commands::{
    handle_generate, handle_init, handle_list, GenerateArgs, InitArgs, ListArgs,
};
use clap::{Parser, Subcommand};
use common::error::GenError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chgen", about = "Generate the ClickHouse all-types test fixture")]
pub struct Cli {
    #[arg(
        long = "config-path",
        short = 'c',
        help = "directory containing chgen-project.yml",
        global = true
    )]
    pub config_path: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Emit the DROP/CREATE TABLE script
    Generate(GenerateArgs),
    /// Show the derived tables and their LowCardinality flag
    List(ListArgs),
    /// Create a project file and an editable type catalog
    Init(InitArgs),
}

fn run_cmd(func: Result<(), GenError>) {
    if let Err(e) = func {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    logging::init_logger("info");
    let cli = Cli::parse();

    match cli.command {
        Cmd::Generate(args) => run_cmd(handle_generate(&args, cli.config_path)),
        Cmd::List(args) => run_cmd(handle_list(&args, cli.config_path)),
        Cmd::Init(args) => run_cmd(handle_init(&args.path, args.project_name)),
    }
}
