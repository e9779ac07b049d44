use crate::rename::RunSummary;
use std::io::{self, Write};

/// Display the end-of-run summary
pub fn display_summary(summary: &RunSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    if summary.dry_run {
        writeln!(writer, "          DRY RUN SUMMARY")?;
    } else {
        writeln!(writer, "              SUMMARY")?;
    }
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Directory: {}", summary.directory.display())?;
    writeln!(writer)?;

    if summary.is_empty() {
        writeln!(writer, "No JSON files found.")?;
        return Ok(());
    }

    let renamed_label = if summary.dry_run {
        "Would rename"
    } else {
        "Renamed"
    };
    writeln!(writer, "  {:<13} {}", format!("{}:", renamed_label), summary.renamed())?;
    writeln!(writer, "  {:<13} {}", "Skipped:", summary.skipped())?;
    writeln!(writer, "  {:<13} {}", "Errors:", summary.errored())?;
    writeln!(writer, "  {:<13} {}", "Total:", summary.total())?;

    let long_paths = summary.long_paths();
    if long_paths > 0 {
        writeln!(writer)?;
        writeln!(writer, "  [!] {} paths exceed the long-path threshold", long_paths)?;
    }

    if summary.errored() > 0 {
        writeln!(writer)?;
        writeln!(writer, "Failed files:")?;
        for record in summary.errors() {
            writeln!(writer, "  - {}", record.source_name)?;
            writeln!(writer, "    {}", record.outcome)?;
        }
    }

    if summary.dry_run && summary.renamed() > 0 {
        writeln!(writer)?;
        writeln!(writer, "Run again with --execute to apply these changes.")?;
    }

    Ok(())
}
