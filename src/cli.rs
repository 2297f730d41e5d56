//! CLI definitions using clap derive API

use clap::Parser;
use std::path::PathBuf;

use docpack::PackagerConfig;

/// Pack converter HTML and its resource directory into one self-contained file
#[derive(Parser, Debug)]
#[command(name = "docpack", author, version)]
pub struct Cli {
    /// HTML file written by the document converter
    pub html_file: PathBuf,

    /// Directory holding the converter's resources (defaults to the HTML file's directory)
    pub base_dir: Option<PathBuf>,

    /// Write the packaged HTML here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write a JSON report of embedded and skipped references
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Leave resources larger than this many bytes as references
    #[arg(long)]
    pub max_resource_bytes: Option<u64>,

    /// Keep `pt` lengths as written
    #[arg(long)]
    pub no_units: bool,

    /// Keep `<link rel="stylesheet">` elements as written
    #[arg(long)]
    pub no_link_stylesheets: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resource directory, falling back to the HTML file's parent
    pub fn resolved_base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(|| {
            self.html_file
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from)
        })
    }

    pub fn packager_config(&self) -> PackagerConfig {
        let builder = PackagerConfig::builder()
            .normalize_units(!self.no_units)
            .inline_stylesheets(!self.no_link_stylesheets);

        match self.max_resource_bytes {
            Some(limit) => builder.max_resource_bytes(limit),
            None => builder,
        }
        .build()
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
