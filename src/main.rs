use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use teny::cli::{CliArgs, StartupText};
use teny::config::AssistConfig;
use teny::model::{AppModel, Severity, EXAMPLE_TEXT};
use teny::prompt::{PromptCommand, HELP};
use teny::runtime::{Runtime, SystemPlayer};
use teny::service::{Gateway, HttpTransport, Transport};
use teny::{view, Msg};

fn redraw<T: Transport>(runtime: &Runtime<T>) {
    print!("{}", view::render(runtime.model()));
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    teny::tracing::init();

    let mut config = match &startup.config_path {
        Some(path) => AssistConfig::load_from(path),
        None => load_or_create_config(),
    };
    startup.apply(&mut config);

    let text = match &startup.text {
        StartupText::Empty => String::new(),
        StartupText::Example => EXAMPLE_TEXT.to_string(),
        StartupText::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
    };

    let transport = HttpTransport::new(&config.service_url, config.request_timeout())
        .context("Invalid service URL")?;
    tracing::info!("Using language service at {}", transport.base());

    let model = AppModel::with_text(config, &text);
    let mut runtime = Runtime::new(model, Gateway::new(transport), Arc::new(SystemPlayer));

    runtime.dispatch(Msg::notify("Welcome! Editor ready 🚀", Severity::Info));
    redraw(&runtime);
    println!("Type :help for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                match PromptCommand::parse(&line) {
                    Ok(PromptCommand::Quit) => break,
                    Ok(PromptCommand::Help) => println!("{}", HELP),
                    Ok(PromptCommand::Show) => redraw(&runtime),
                    Ok(command) => {
                        if let Some(msg) = command.to_msg(runtime.model()) {
                            if runtime.dispatch(msg) {
                                redraw(&runtime);
                            }
                        }
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }
            needs_redraw = runtime.next() => {
                if needs_redraw {
                    redraw(&runtime);
                }
            }
        }
    }

    tracing::info!("Exiting");
    Ok(())
}

/// Load the default config, writing one with default values on first run
fn load_or_create_config() -> AssistConfig {
    let exists = teny::config_paths::config_file().is_some_and(|path| path.exists());
    let config = AssistConfig::load();
    if !exists {
        if let Err(e) = config.save() {
            tracing::warn!("Could not write default config: {}", e);
        }
    }
    config
}
