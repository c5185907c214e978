mod cli;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Args;
use deptree::adapters::outbound::console::StderrProgressReporter;
use deptree::application::dto::ResolveRequest;
use deptree::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, SourceFactory,
};
use deptree::application::use_cases::ResolveDependenciesUseCase;
use deptree::config::{discover_config, load_config_from_path, ResolverConfig};
use deptree::ports::outbound::ProgressReporter;
use deptree::resolution::domain::Cycle;
use deptree::shared::error::ExitCode;
use deptree::shared::Result;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Diagnostic logs go to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<ExitCode> {
    // Load configuration: explicit path, else auto-discovery
    let config_file = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let config = ResolverConfig::from_sources(config_file.as_ref(), &args.overrides())?;

    let progress_reporter = StderrProgressReporter::new();

    if args.show_config {
        progress_reporter.report("⚙️  Effective configuration:");
        for (key, value) in config.entries() {
            progress_reporter.report(&format!("   {}: {}", key, value));
        }
    }

    // Create adapters (Dependency Injection)
    progress_reporter.report(&SourceFactory::progress_message(&config));
    let (dependency_source, load_error) = SourceFactory::create(&config)?;
    if let Some(reason) = load_error {
        progress_reporter.report_error(&format!(
            "⚠️  Warning: Fixture could not be loaded, every lookup will fail: {}",
            reason
        ));
    }

    // Execute use case
    let use_case = ResolveDependenciesUseCase::new(dependency_source, &progress_reporter);
    let request = ResolveRequest::new(config.package.clone(), config.max_depth);
    let response = use_case.execute(request)?;

    // Format and present output
    let format = args.output_format(config.tree_output);
    progress_reporter.report(FormatterFactory::progress_message(format));
    let formatted_output = FormatterFactory::create(format).format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&formatted_output)?;

    report_cycles(&progress_reporter, &response.cycles);

    if response.has_cycles() && args.fail_on_cycles {
        return Ok(ExitCode::CyclesDetected);
    }
    Ok(ExitCode::Success)
}

fn report_cycles(reporter: &impl ProgressReporter, cycles: &[Cycle]) {
    if cycles.is_empty() {
        return;
    }
    reporter.report_error(&format!(
        "⚠️  Warning: {} circular dependency chain(s) detected:",
        cycles.len()
    ));
    for cycle in cycles {
        reporter.report_error(&format!("   - {}", cycle));
    }
}
