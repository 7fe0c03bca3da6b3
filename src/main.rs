use pokedex_cli::client::HttpPokeApi;
use pokedex_cli::commands::{CommandStatus, Repl};
use pokedex_cli::config::Config;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let api = match HttpPokeApi::new(&config.pokeapi) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Failed to build API client: {}", e);
            std::process::exit(1);
        }
    };

    let mut repl = Repl::new(&config, api, rand::rng());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        // Read
        print!("pokedex > ");
        if std::io::stdout().flush().is_err() {
            break;
        }
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };
        println!("---------------");
        // Eval
        let status = repl.execute(&line).await;
        println!();
        if status == CommandStatus::Quit {
            break;
        }
    }
}
