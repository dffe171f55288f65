use crate::api::ApiError;
use common::errors::TransitionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OwnerError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("Order {0} is not on the board")]
    OrderNotFound(u64),
    #[error("Board unavailable: {0}")]
    Mailbox(#[from] actix::MailboxError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing restaurant id")]
    MissingRestaurantId,
    #[error("Invalid restaurant id: {0}")]
    InvalidRestaurantId(String),
    #[error("Invalid revert window (minutes): {0}")]
    InvalidRevertWindow(String),
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}
