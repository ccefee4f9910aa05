mod cli;

use clap::Parser;
use cli::{Cli, Command};
use colored::Colorize;
use color_eyre::eyre::eyre;
use mlp_core::config::manager::ConfigurationManager;
use mlp_core::logging::init_logging;
use mlp_core::pipeline::PipelineRunner;
use mlp_protocol::report_models::{StageReport, StageStatus};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let _guard = init_logging(&cli.log_options())?;

    let manager = ConfigurationManager::new(&cli.config, &cli.params)?;

    match cli.command.clone().unwrap_or_default() {
        Command::Run { json } => run_pipeline(manager, json),
        Command::ShowConfig => show_config(&manager),
    }
}

fn run_pipeline(manager: ConfigurationManager, json: bool) -> color_eyre::Result<()> {
    let runner = PipelineRunner::with_default_stages(manager);

    let result = runner.run_with(|report| {
        if !json {
            print_report(report);
        }
    });

    match result {
        Ok(summary) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{} {} stage(s) completed (run {})",
                    "done:".green().bold(),
                    summary.stages.len(),
                    summary.run_id
                );
            }
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = ?err, "pipeline run aborted");
            Err(eyre!("{err:#}"))
        }
    }
}

fn print_report(report: &StageReport) {
    match report.status {
        StageStatus::Completed => println!("{} {}", "✔".green(), report.name),
        StageStatus::Failed => println!(
            "{} {}: {}",
            "✘".red(),
            report.name,
            report.error.as_deref().unwrap_or("unknown error")
        ),
        StageStatus::Running => println!("{} {}", "…".yellow(), report.name),
    }
}

fn show_config(manager: &ConfigurationManager) -> color_eyre::Result<()> {
    let config = manager.get_data_ingestion_config()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
