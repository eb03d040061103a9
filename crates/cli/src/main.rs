// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lsh: an interactive shell that asks a local model to fix failed commands.

mod args;
mod color;
mod exit_error;
mod logging;
mod report;
mod session;

use std::process::ExitCode;

use clap::Parser;
use lsh_adapters::{LineReader, OllamaClient, TerminalConfirm};
use lsh_engine::{Engine, EngineDeps, EngineSettings};
use lsh_shell::ShellRunner;

use crate::args::Args;
use crate::exit_error::ExitError;
use crate::report::TerminalReporter;
use crate::session::Session;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("{exit}");
                exit.exit_code()
            }
            None => {
                eprintln!("lsh: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let _log_guard = match logging::init(lsh_core::env::state_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("lsh: logging disabled: {e:#}");
            None
        }
    };

    let config = args::load_config(&args)?;
    tracing::info!(
        model = %config.model.name,
        host = %config.model.host,
        agent = config.agent_mode,
        max_depth = config.recovery.max_depth,
        "starting"
    );

    let client = OllamaClient::new(&config.model)?;
    if args.no_probe {
        tracing::info!("startup probe skipped");
    } else {
        println!("Connecting to Ollama at {} using model '{}'...", client.host(), config.model.name);
        if let Err(e) = client.probe().await {
            tracing::error!(error = %e, "startup probe failed");
            return Err(ExitError::new(
                1,
                format!(
                    "Failed to initialize Ollama: {e}\n\
                     Make sure ollama is running and the model is pulled: ollama pull {}",
                    config.model.name
                ),
            )
            .into());
        }
        println!("LLM connected successfully!");
    }

    let colorize = color::should_colorize();
    let reader = LineReader::stdin();
    let engine = Engine::new(
        EngineDeps {
            runner: ShellRunner::new(config.capture.clone()),
            model: client,
            confirm: TerminalConfirm::new(reader.clone()),
            reporter: TerminalReporter::new(colorize),
        },
        EngineSettings::from_config(&config),
    );
    Session::new(engine, reader, colorize).run().await;
    Ok(())
}
