// docpack CLI
//
// Packages one converter HTML file and its resource directory into a single
// self-contained HTML document. Exit code 0 on success, 1 on any hard error.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use docpack::{BaseDirectory, Packager};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let base_dir = BaseDirectory::new(cli.resolved_base_dir())?;
    let packager = Packager::new(cli.packager_config());

    let report = packager
        .package_file(&cli.html_file, &base_dir)
        .with_context(|| format!("Failed to package {}", cli.html_file.display()))?;

    log::info!(
        "Embedded {} resources ({} skipped)",
        report.embedded,
        report.skipped.len()
    );
    for skipped in &report.skipped {
        log::info!("Kept {} reference {}: {}", skipped.kind, skipped.reference, skipped.reason);
    }

    if let Some(report_path) = &cli.report {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        std::fs::write(report_path, json)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
    }

    match &cli.output {
        Some(output) => std::fs::write(output, &report.html)
            .with_context(|| format!("Failed to write {}", output.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(report.html.as_bytes())
            .context("Failed to write to stdout")?,
    }

    Ok(())
}
