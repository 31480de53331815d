use clap::{CommandFactory, Parser};
use npm_audit_report::adapters::outbound::console::{terminal_width, StderrProgressReporter};
use npm_audit_report::adapters::outbound::npm::{NpmAuditRunner, NpmJsonReportParser};
use npm_audit_report::application::dto::{AuditRequest, OutputFormat};
use npm_audit_report::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use npm_audit_report::application::read_models::AuditReadModelBuilder;
use npm_audit_report::application::use_cases::RunAuditUseCase;
use npm_audit_report::cli::Args;
use npm_audit_report::config::{merge, resolve_config};
use npm_audit_report::ports::outbound::ProgressReporter;
use npm_audit_report::shared::error::{AuditError, ExitCode};
use npm_audit_report::shared::security::validate_project_dir;
use npm_audit_report::shared::Result;
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here and are not failures
            let code = if e.use_stderr() {
                ExitCode::Failure.as_i32()
            } else {
                ExitCode::Success.as_i32()
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            if matches!(
                e.downcast_ref::<AuditError>(),
                Some(AuditError::InvalidSeverityThreshold { .. })
            ) {
                eprintln!("\n{}", Args::command().render_usage());
                eprintln!("\nFor more information, try '--help'.");
            }

            eprintln!();
            process::exit(ExitCode::Failure.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    // Validate project directory
    validate_project_dir(&args.project)?;

    // Merge command-line flags with the optional config file
    let config = resolve_config(args.config.as_deref(), &args.project)?;
    let settings = merge(args.cli_options(), config.as_ref())?;

    // Create adapters (Dependency Injection)
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let audit_runner = NpmAuditRunner::with_executable(args.npm.clone());
    let report_parser = NpmJsonReportParser::new();

    // Create use case with injected dependencies
    let use_case = RunAuditUseCase::new(audit_runner, report_parser, &progress_reporter);

    let request = AuditRequest::new(args.project.clone())
        .with_ignore_ids(settings.ignore_ids)
        .with_ignore_reasons(settings.ignore_reasons)
        .with_production(settings.production)
        .with_threshold(settings.threshold);

    // Execute use case
    let response = use_case.execute(request).await?;
    let read_model =
        AuditReadModelBuilder::build(&response.report, &response.outcome, response.generated_at);

    // Render the report
    let format = OutputFormat::from_xml_flag(settings.xml);
    progress_reporter.report(FormatterFactory::progress_message(format));
    let formatter = FormatterFactory::create(format, terminal_width());
    let formatted_output = formatter.format(&read_model)?;

    // Present output
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&formatted_output)?;

    if let Some(output_path) = &args.output {
        progress_reporter.report_completion(&format!(
            "✅ Report written to: {}",
            output_path.display()
        ));
    }

    Ok(response.exit_code())
}
