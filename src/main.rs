mod cli;
mod config;
mod logging;

use clap::Parser;
use cli::Args;
use config::{Settings, CONFIG_FILENAME};
use datacert::adapters::outbound::checks::SimulatedRiskChecks;
use datacert::adapters::outbound::console::StderrProgressReporter;
use datacert::adapters::outbound::filesystem::DatasetScanner;
use datacert::application::dto::CertifyRequest;
use datacert::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use datacert::application::read_models::CertificateReportBuilder;
use datacert::application::use_cases::CertifyDatasetUseCase;
use datacert::shared::error::ExitCode;
use datacert::shared::security::validate_dataset_root;
use datacert::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here and are not failures
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    logging::init_logger(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let dataset_root = validate_dataset_root(&args.input)?;
    let (config, discovered) = load_config(args.config.as_deref(), &dataset_root)?;

    let mut settings = Settings::merge(args, config)?;
    if discovered && !settings.exclude_patterns.iter().any(|p| p == CONFIG_FILENAME) {
        // the config file describes the run, it is not part of the dataset
        settings.exclude_patterns.push(CONFIG_FILENAME.to_string());
    }
    tracing::debug!(?settings, "effective settings");

    let request = CertifyRequest::builder(dataset_root)
        .exclude_patterns(settings.exclude_patterns.clone())
        .max_concurrent_checks(settings.max_concurrent_checks)
        .check_timeout(settings.check_timeout)
        .fail_on(settings.fail_on)
        .build()?;

    let use_case = CertifyDatasetUseCase::new(
        DatasetScanner::new(),
        SimulatedRiskChecks::new(settings.seed),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(request).await?;

    // Render everything before writing anything, so a failure leaves no partial output
    let report = CertificateReportBuilder::build(&response)?;
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let verification_url = settings.verification_base_url.as_deref();
    let primary = FormatterFactory::create_with_verification_url(settings.format, verification_url)
        .format(&report)?;
    let certificate = match settings.certificate {
        Some(ref path) => Some((
            path.clone(),
            FormatterFactory::create_certificate(verification_url).format(&report)?,
        )),
        None => None,
    };

    PresenterFactory::create(PresenterType::from(settings.output.clone())).present(&primary)?;
    if let Some(path) = &settings.output {
        eprintln!("✔ Report saved to: {}", path.display());
    }

    if let Some((path, document)) = certificate {
        PresenterFactory::create(PresenterType::File(path.clone())).present(&document)?;
        eprintln!("✔ Certificate saved to: {}", path.display());
    }

    if response.threshold_exceeded {
        eprintln!(
            "\n⚠️  Dataset risk band {} meets the --fail-on threshold.",
            response.aggregate.risk_band
        );
        return Ok(ExitCode::RiskThresholdExceeded);
    }

    Ok(ExitCode::Success)
}

/// Loads the explicit config file, or the one found in the dataset folder
///
/// The flag is true when the file was auto-discovered.
fn load_config(
    explicit: Option<&Path>,
    dataset_root: &Path,
) -> Result<(Option<config::ConfigFile>, bool)> {
    if let Some(path) = explicit {
        let config = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok((Some(config), false));
    }

    match config::discover_config(dataset_root)? {
        Some(config) => {
            eprintln!(
                "📄 Auto-discovered config file: {}",
                dataset_root.join(CONFIG_FILENAME).display()
            );
            Ok((Some(config), true))
        }
        None => Ok((None, false)),
    }
}
