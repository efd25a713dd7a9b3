mod cli;

use cli::Args;
use sbom_licenses::adapters::outbound::console::StderrUserLogger;
use sbom_licenses::adapters::outbound::filesystem::{DirectoryTargetHandler, FileSystemReader};
use sbom_licenses::application::factories::LicenseDownloaderFactory;
use sbom_licenses::config::{self, Configuration};
use sbom_licenses::ports::outbound::SbomReader;
use sbom_licenses::shared::error::ExitCode;
use sbom_licenses::shared::Result;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args).await {
        Ok(()) => process::exit(ExitCode::Success.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = resolve_configuration(&args)?;

    // Read the SBOM before touching the network
    let sbom = FileSystemReader::new().read_sbom(&args.sbom)?;

    // Create adapters and use case (Dependency Injection)
    let downloader = LicenseDownloaderFactory::create(&config)?;
    let logger = StderrUserLogger::new();
    let mut target = DirectoryTargetHandler::new(config.output_dir());

    downloader.download(&logger, &sbom, &mut target).await?;

    Ok(())
}

/// Merges the config file (explicit or discovered) with CLI overrides
fn resolve_configuration(args: &Args) -> Result<Configuration> {
    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };

    let mut configuration = config_file
        .as_ref()
        .map(Configuration::from_config_file)
        .unwrap_or_default();

    if args.no_cache {
        configuration = configuration.with_license_cache_path(None);
    } else if let Some(cache) = &args.cache {
        configuration = configuration.with_license_cache_path(Some(cache.clone()));
    }
    if let Some(output) = &args.output {
        configuration = configuration.with_output_dir(output.clone());
    }
    if let Some(secs) = args.timeout {
        configuration = configuration.with_timeout_secs(secs)?;
    }

    Ok(configuration)
}
