use std::path::PathBuf;

use clap::Parser;

/// Browse the Art Institute of Chicago catalog in the terminal.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "artwork_browser", version, about)]
pub struct Args {
    /// Settings file (RON). Defaults to ./artwork_browser.ron when present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog API root, e.g. https://api.artic.edu/api/v1
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Rows per page: 12, 24 or 48.
    #[arg(short = 'p', long, value_name = "ROWS")]
    pub page_size: Option<u32>,

    /// Where to write logs: file, terminal or both.
    #[arg(long, value_name = "DEST")]
    pub log: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "artwork_browser",
            "--config",
            "custom.ron",
            "--base-url",
            "http://localhost:9000/api/v1",
            "-p",
            "24",
            "--log",
            "both",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("custom.ron")));
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:9000/api/v1"));
        assert_eq!(args.page_size, Some(24));
        assert_eq!(args.log.as_deref(), Some("both"));
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::try_parse_from(["artwork_browser"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.page_size.is_none());
    }
}
