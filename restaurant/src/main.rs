use actix::prelude::*;
use colored::Color;
use common::clock::{Clock, SystemClock};
use common::logger::Logger;
use restaurant::api::OrderApi;
use restaurant::api::http::HttpOrderApi;
use restaurant::api::memory::InMemoryOrderApi;
use restaurant::config::{OwnerConfig, USAGE};
use restaurant::messages::RunCommand;
use restaurant::restaurant_actors::orders_board::OrdersBoard;
use restaurant::restaurant_actors::ui_handler::{Command, UIHandler};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::ctrl_c;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let logger = Logger::new("Owner", Color::BrightMagenta);

    let config = match OwnerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let policy = config.policy();

    let api: Arc<dyn OrderApi> = if config.offline {
        logger.warn("Running offline with demo orders");
        Arc::new(InMemoryOrderApi::with_demo_orders(config.restaurant_id, policy, clock.clone()).await)
    } else {
        match HttpOrderApi::new(config.api_url.clone(), config.api_token.clone()) {
            Ok(api) => Arc::new(api),
            Err(e) => {
                logger.error(format!("Could not build HTTP client: {}", e));
                std::process::exit(1);
            }
        }
    };

    logger.info(format!(
        "Orders of restaurant {} from {}",
        config.restaurant_id,
        if config.offline { "memory" } else { config.api_url.as_str() }
    ));

    let board = OrdersBoard::new(config.restaurant_id, api, policy, clock).start();
    let ui = UIHandler::new(board).start();
    ui.do_send(RunCommand {
        command: Command::Refresh,
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => ui.do_send(RunCommand { command }),
                    Err(e) => logger.warn(e),
                },
                Ok(None) => break,
                Err(e) => {
                    logger.error(format!("Error while reading input: {}", e));
                    break;
                }
            },
            _ = ctrl_c() => {
                println!("Ctrl-C recibido, apagando...");
                break;
            }
        }
    }

    System::current().stop();
    Ok(())
}
