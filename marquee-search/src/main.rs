use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;
use tokio::io::{AsyncBufReadExt, BufReader};

use marquee_config::ConfigLoader;
use marquee_search::app::console::{self, Command, HELP};
use marquee_search::app::{self, SearchRuntime};

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("marquee_search", LevelFilter::Debug)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let load = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;
    log::info!(
        "[Marquee] server={} config_file={:?} warnings={}",
        load.config.server_url(),
        load.config.metadata.config_path,
        load.warnings.len()
    );

    let mut runtime = SearchRuntime::new(app::build_domain(&load.config)?);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                match console::parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(command) => match command.into_message(runtime.state()) {
                        Some(message) => {
                            runtime.dispatch(message);
                            println!("{}", console::render(runtime.state()));
                        }
                        None => println!("no such suggestion"),
                    },
                    Err(err) => println!("{err}"),
                }
            }
            Some(_) = runtime.next(), if runtime.has_pending() => {
                println!("{}", console::render(runtime.state()));
            }
        }
    }

    Ok(())
}
