use clap::Parser;
use std::path::PathBuf;

/// Directory scanned when `--directory` is not given
pub const DEFAULT_DIRECTORY: &str = "data/rebuild/json";

#[derive(Parser, Debug)]
#[command(name = "archive-rename")]
#[command(author, version, about, long_about = None)]
#[command(about = "Rename JSON chat-archive files to the compact [ID].json form")]
pub struct Args {
    /// Directory containing the JSON archive files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_DIRECTORY)]
    pub directory: PathBuf,

    /// Perform the renames (default is a dry run that changes nothing)
    #[arg(long)]
    pub execute: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
