use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version)]
#[command(about = "Interactive customer catalog kept in a JSON file", long_about = None)]
pub struct Cli {
    /// Customer file to use instead of the one in the rolodex home directory
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
