use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "rolegate")]
#[command(about = "Session role tracking and write guard hooks for agent hosts", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter (EnvFilter syntax)
    #[arg(long, global = true, env = "ROLEGATE_LOG", default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "ROLEGATE_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// UserPromptSubmit hook: record the role invoked by the prompt on stdin
    Track,
    /// PreToolUse hook: deny non-markdown writes for document-only roles
    Guard,
    /// Print the session table of a project
    Show {
        /// Project directory (the host's cwd)
        #[arg(long, default_value = ".")]
        cwd: String,
        /// Only print this session
        #[arg(long)]
        session: Option<String>,
    },
    /// List known roles and their write access
    Roles,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Hooks must never fail the host's invocation, even when misconfigured.
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    let _log_guard = logging::init(&cli.log_level, cli.log_file.as_deref());

    match cli.command {
        Commands::Track => {
            match commands::track::run(std::io::stdin().lock()) {
                Ok(outcome) => tracing::debug!("[Tracker] Outcome: {:?}", outcome),
                Err(e) => tracing::warn!("[Tracker] Skipped after error: {:#}", e),
            }
            ExitCode::SUCCESS
        }
        Commands::Guard => {
            match commands::guard::run(std::io::stdin().lock(), std::io::stdout().lock()) {
                Ok(decision) => tracing::debug!("[Guard] Decision: {:?}", decision),
                Err(e) => tracing::warn!("[Guard] Allowing after error: {:#}", e),
            }
            ExitCode::SUCCESS
        }
        Commands::Show { cwd, session } => {
            report(commands::show::run(&cwd, session.as_deref(), std::io::stdout().lock()))
        }
        Commands::Roles => report(commands::roles::run(std::io::stdout().lock())),
    }
}

fn report(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
