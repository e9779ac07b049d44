use archive_rename::cli::Args;
use archive_rename::error::AppError;
use archive_rename::logging;
use archive_rename::output::display_summary;
use archive_rename::progress::{configure_colors, Progress};
use archive_rename::rename::{rename_directory, RenameOptions};
use clap::Parser;
use tracing::{debug, error};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    debug!(directory = ?args.directory, execute = args.execute, "Arguments parsed");

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let colors_enabled = configure_colors();

    let mut progress = Progress::new_with_ui(args.verbose > 0, colors_enabled);

    let options = RenameOptions {
        execute: args.execute,
    };

    let summary = rename_directory(&args.directory, &options, &mut progress)?;

    display_summary(&summary, &mut std::io::stdout())
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    Ok(())
}
