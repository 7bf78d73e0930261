use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "formtree")]
#[command(about = "Converts xlsform survey workbooks into renderable form definitions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    Convert(ConvertArgs),
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub(crate) struct ConvertArgs {
    #[arg(required = true)]
    pub(crate) inputs: Vec<PathBuf>,
    #[arg(long = "out-dir")]
    pub(crate) out_dir: Option<PathBuf>,
    #[arg(long = "pretty")]
    pub(crate) pretty: bool,
}

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    #[arg(required = true)]
    pub(crate) inputs: Vec<PathBuf>,
}
