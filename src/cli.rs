use clap::Parser;
use std::path::PathBuf;

/// Collect the license texts referenced by a CycloneDX SBOM
#[derive(Parser, Debug)]
#[command(name = "sbom-licenses")]
#[command(version)]
#[command(about = "Collect the license texts referenced by a CycloneDX SBOM", long_about = None)]
pub struct Args {
    /// Path to the CycloneDX JSON SBOM
    #[arg(short, long, value_name = "FILE")]
    pub sbom: PathBuf,

    /// Directory the license files are written to [default: licenses]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Directory of the persistent license cache
    #[arg(short, long, value_name = "DIR", conflicts_with = "no_cache")]
    pub cache: Option<PathBuf>,

    /// Disable the license cache, even if a config file enables it
    #[arg(long)]
    pub no_cache: bool,

    /// Path to a config file (defaults to ./sbom-licenses.config.yml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Timeout in seconds for each download attempt
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::try_parse_from(["sbom-licenses", "--sbom", "bom.json"]).unwrap();
        assert_eq!(args.sbom, PathBuf::from("bom.json"));
        assert!(args.output.is_none());
        assert!(args.cache.is_none());
        assert!(!args.no_cache);
        assert!(args.config.is_none());
        assert!(args.timeout.is_none());
    }

    #[test]
    fn test_parse_all_args() {
        let args = Args::try_parse_from([
            "sbom-licenses",
            "-s",
            "bom.json",
            "-o",
            "out",
            "-c",
            ".cache",
            "--config",
            "custom.yml",
            "--timeout",
            "10",
        ])
        .unwrap();

        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.cache, Some(PathBuf::from(".cache")));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(args.timeout, Some(10));
    }

    #[test]
    fn test_sbom_is_required() {
        assert!(Args::try_parse_from(["sbom-licenses"]).is_err());
    }

    #[test]
    fn test_cache_conflicts_with_no_cache() {
        let result = Args::try_parse_from([
            "sbom-licenses",
            "--sbom",
            "bom.json",
            "--cache",
            ".cache",
            "--no-cache",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_timeout_must_be_numeric() {
        let result =
            Args::try_parse_from(["sbom-licenses", "--sbom", "bom.json", "--timeout", "soon"]);
        assert!(result.is_err());
    }
}
