//! Outbound message assembly and delivery.
//!
//! A composer request is assembled into an [`OutboundMessage`] first: the channel id
//! is validated, staged files are decoded and embed images are pointed at their
//! uploads. Only a successfully assembled message is handed to Discord.

pub mod assemble;
pub mod decode;

#[cfg(test)]
mod test;

use dioxus_logger::tracing;
use serenity::{all::MessageId, http::Http};
use std::sync::Arc;

pub use assemble::{assemble, LinkButton, OutboundEmbed, OutboundMessage};

use crate::{
    model::{composer::ComposerOptions, message::SendMessageDto},
    server::error::AppError,
};

pub struct MessageService {
    http: Arc<Http>,
    options: ComposerOptions,
}

impl MessageService {
    pub fn new(http: Arc<Http>, options: ComposerOptions) -> Self {
        Self { http, options }
    }

    /// Assembles and posts a composed message.
    ///
    /// # Returns
    /// - `Ok(MessageId)` - Id of the message Discord created
    /// - `Err(AppError::AssembleErr)` - The request was rejected before any network call
    /// - `Err(AppError::DiscordErr)` - Discord refused the message
    pub async fn send(&self, request: SendMessageDto) -> Result<MessageId, AppError> {
        let message = assemble(request, self.options).await?;
        let channel_id = message.channel_id;

        tracing::debug!(
            "Sending message to channel {} with {} file(s)",
            channel_id,
            message.files.len()
        );

        let sent = channel_id
            .send_message(&self.http, message.into_create_message())
            .await?;

        tracing::info!("Posted message {} in channel {}", sent.id, channel_id);

        Ok(sent.id)
    }
}
