use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "puslespill")]
#[command(about = "Search the Puslespill spreadsheet by barcode", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter by barcode prefix and print the result
    Search {
        /// Barcode or the start of one (empty shows everything)
        #[arg(default_value = "")]
        query: String,

        /// Viewport width in pixels (default: terminal width)
        #[arg(short, long)]
        width: Option<u32>,

        /// Sort ascending by barcode after loading
        #[arg(long)]
        sort: bool,
    },

    /// Interactive search, one query per line
    Browse {
        /// Viewport width in pixels (default: terminal width)
        #[arg(short, long)]
        width: Option<u32>,

        /// Sort ascending by barcode after loading
        #[arg(long)]
        sort: bool,
    },

    /// Write the (filtered) table to JSON and/or Excel
    Export {
        /// Barcode prefix filter
        #[arg(short, long, default_value = "")]
        query: String,

        /// Output format (json/excel/both)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sort ascending by barcode after loading
        #[arg(long)]
        sort: bool,
    },

    /// Serve the web view and /api/records
    Serve {
        /// Listen address (default from config)
        #[arg(short, long)]
        bind: Option<String>,

        /// Directory with the built web bundle
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Show or edit settings
    Config {
        /// Path to the service account JSON key
        #[arg(long)]
        set_credentials: Option<PathBuf>,

        /// Sort ascending by barcode on every load
        #[arg(long)]
        sort_on_load: Option<bool>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    #[default]
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!("XLSX".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
        assert_eq!("both".parse::<ExportFormat>(), Ok(ExportFormat::Both));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_parse_search_defaults() {
        let cli = Cli::try_parse_from(["puslespill", "search"]).expect("parse failed");
        match cli.command {
            Commands::Search { query, width, sort } => {
                assert_eq!(query, "");
                assert_eq!(width, None);
                assert!(!sort);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_parse_search_with_width() {
        let cli = Cli::try_parse_from(["puslespill", "-v", "search", "704", "--width", "480"])
            .expect("parse failed");
        assert!(cli.verbose);
        match cli.command {
            Commands::Search { query, width, .. } => {
                assert_eq!(query, "704");
                assert_eq!(width, Some(480));
            }
            _ => panic!("expected search"),
        }
    }
}
