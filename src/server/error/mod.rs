//! Error types for the server.
//!
//! `AppError` is the top-level error type and wraps the domain errors. Nothing
//! here is rendered as an HTTP response: startup failures abort `dioxus::serve`
//! and websocket sessions report the display text to the composer instead.

pub mod assemble;
pub mod config;

use thiserror::Error;

use crate::server::error::{assemble::AssembleError, config::ConfigError};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The composed message was rejected before reaching Discord.
    #[error(transparent)]
    AssembleErr(#[from] AssembleError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. The display text is Discord's own error message,
    /// which is what the composer shows when a send fails.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// A Discord resource the application depends on is not reachable.
    #[error("{0}")]
    NotFound(String),
}

/// Boxes the error to keep `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that wrapped errors keep their own message.
    ///
    /// Expected: the composer sees the assemble error text unchanged
    #[test]
    fn wrapped_errors_are_transparent() {
        let err = AppError::from(AssembleError::EmptyMessage);

        assert_eq!(err.to_string(), AssembleError::EmptyMessage.to_string());
        assert!(matches!(err, AppError::AssembleErr(AssembleError::EmptyMessage)));
    }
}
