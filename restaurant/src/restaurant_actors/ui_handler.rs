use crate::errors::OwnerError;
use crate::messages::{BackwardOrder, FetchOrders, ForwardOrder, GetOrderCards, RunCommand};
use crate::restaurant_actors::orders_board::OrdersBoard;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::presentation::{OrderCard, render_cards};

/// Comandos que entiende la pantalla de órdenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Botón "Next" sobre una orden.
    Next(u64),
    /// Botón "Previous" sobre una orden.
    Previous(u64),
    Refresh,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Command, String> {
        let mut parts = input.split_whitespace();
        let verb = parts.next().ok_or_else(|| "Empty command".to_string())?;
        let order_id = |arg: Option<&str>| -> Result<u64, String> {
            let raw = arg.ok_or_else(|| format!("'{}' needs an order id", verb))?;
            raw.parse::<u64>()
                .map_err(|_| format!("Invalid order id: {}", raw))
        };
        let command = match verb {
            "n" | "next" => Command::Next(order_id(parts.next())?),
            "p" | "previous" => Command::Previous(order_id(parts.next())?),
            "r" | "refresh" => Command::Refresh,
            "q" | "quit" => Command::Quit,
            other => return Err(format!("Unknown command: {}", other)),
        };
        match parts.next() {
            Some(extra) => Err(format!("Unexpected argument: {}", extra)),
            None => Ok(command),
        }
    }

    /// Mensaje que ve el dueño cuando el comando falla.
    pub fn failure_message(&self, error: &OwnerError) -> String {
        match self {
            Command::Next(_) => format!(
                "There was an error while trying to forward the order status. {} ",
                error
            ),
            Command::Previous(_) => format!(
                "There was an error while trying to backward the order status. {} ",
                error
            ),
            Command::Refresh | Command::Quit => format!(
                "There was an error while retrieving restaurant orders. {} ",
                error
            ),
        }
    }
}

pub const HELP: &str = "Commands: n <id> = Next, p <id> = Previous, r = refresh, q = quit";

/// Ejecuta el comando contra el tablero y devuelve las tarjetas actualizadas.
pub async fn run_command(
    board: Addr<OrdersBoard>,
    command: Command,
) -> Result<Vec<OrderCard>, OwnerError> {
    match command {
        Command::Next(order_id) => {
            board.send(ForwardOrder { order_id }).await??;
        }
        Command::Previous(order_id) => {
            board.send(BackwardOrder { order_id }).await??;
        }
        Command::Refresh => {
            board.send(FetchOrders).await??;
        }
        Command::Quit => {}
    }
    Ok(board.send(GetOrderCards).await?)
}

/// Actor UIHandler: pantalla de órdenes en la terminal.
pub struct UIHandler {
    pub board: Addr<OrdersBoard>,
    pub logger: Logger,
}

impl UIHandler {
    pub fn new(board: Addr<OrdersBoard>) -> Self {
        Self {
            board,
            logger: Logger::new("Orders", Color::BrightCyan),
        }
    }
}

impl Actor for UIHandler {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info(HELP);
    }
}

impl Handler<RunCommand> for UIHandler {
    type Result = ResponseActFuture<Self, ()>;

    fn handle(&mut self, msg: RunCommand, _ctx: &mut Self::Context) -> Self::Result {
        let command = msg.command;
        let fut = run_command(self.board.clone(), command);
        Box::pin(fut.into_actor(self).map(move |result, actor, _ctx| match result {
            Ok(cards) => println!("{}", render_cards(&cards)),
            Err(e) => actor.logger.error(command.failure_message(&e)),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::InMemoryOrderApi;
    use chrono::{TimeZone, Utc};
    use common::clock::{Clock, ManualClock};
    use common::policy::OrderTransitionPolicy;
    use common::types::dtos::OrderDTO;
    use std::sync::Arc;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("n 4"), Ok(Command::Next(4)));
        assert_eq!(Command::parse("  previous 12 "), Ok(Command::Previous(12)));
        assert_eq!(Command::parse("r"), Ok(Command::Refresh));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert!(Command::parse("").is_err());
        assert!(Command::parse("n").is_err());
        assert!(Command::parse("n x").is_err());
        assert!(Command::parse("n 1 2").is_err());
        assert!(Command::parse("delete 1").is_err());
    }

    #[test]
    fn failure_messages_name_the_action() {
        let error = OwnerError::OrderNotFound(3);
        assert!(
            Command::Next(3)
                .failure_message(&error)
                .starts_with("There was an error while trying to forward the order status.")
        );
        assert!(
            Command::Previous(3)
                .failure_message(&error)
                .starts_with("There was an error while trying to backward the order status.")
        );
        assert!(
            Command::Refresh
                .failure_message(&error)
                .starts_with("There was an error while retrieving restaurant orders.")
        );
    }

    #[actix_rt::test]
    async fn run_command_returns_refreshed_cards() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap(),
        ));
        let policy = OrderTransitionPolicy::default();
        let api = Arc::new(InMemoryOrderApi::new(policy, clock.clone()));
        api.insert(1, OrderDTO::new(5, clock.now())).await;
        let board = OrdersBoard::new(1, api, policy, clock).start();

        let cards = run_command(board.clone(), Command::Refresh).await.unwrap();
        assert_eq!(cards[0].title, "pending");
        let cards = run_command(board.clone(), Command::Next(5)).await.unwrap();
        assert_eq!(cards[0].title, "in process");
        assert!(cards[0].actions.previous);
        let cards = run_command(board, Command::Previous(5)).await.unwrap();
        assert_eq!(cards[0].title, "pending");
        assert!(!cards[0].actions.previous);
    }
}
