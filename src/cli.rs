use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "packdir",
    version,
    about = "Generate C byte arrays from files in a directory"
)]
pub struct Cli {
    #[arg(help = "Path to the directory containing files to convert")]
    pub directory: PathBuf,
    #[arg(help = "Path to the output .c file to store the byte arrays")]
    pub output_file: PathBuf,
    #[arg(long, help = "Emit arrays in file name order instead of listing order")]
    pub sort: bool,
    #[arg(
        long,
        help = "Fail when two file names map to the same identifier"
    )]
    pub deny_collisions: bool,
    #[arg(long, help = "Output a machine-readable JSON report")]
    pub json: bool,
}
