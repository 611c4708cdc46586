//! Per-connection handling of composer websocket events.

use dioxus_logger::tracing;
use serenity::{all::GuildId, http::Http};
use std::sync::Arc;

use crate::{
    model::{
        composer::ComposerOptions,
        message::SendMessageDto,
        socket::{ClientEvent, MessageSentDto, ServerEvent},
    },
    server::{
        error::AppError,
        service::{discord::ReferenceService, message::MessageService},
    },
};

/// State owned by one composer connection.
///
/// Each websocket gets its own session; sessions share nothing but the Discord
/// HTTP client.
pub struct ComposerSession {
    references: ReferenceService,
    messages: MessageService,
    options: ComposerOptions,
}

impl ComposerSession {
    pub fn new(http: Arc<Http>, guild_id: GuildId, options: ComposerOptions) -> Self {
        Self {
            references: ReferenceService::new(http.clone(), guild_id),
            messages: MessageService::new(http, options),
            options,
        }
    }

    /// Handles one raw text frame, always producing a reply.
    pub async fn handle_frame(&self, frame: &str) -> ServerEvent {
        match serde_json::from_str::<ClientEvent>(frame) {
            Ok(event) => self.handle(event).await,
            Err(err) => {
                tracing::warn!("Rejected composer frame: {}", err);
                ServerEvent::Error {
                    message: format!("Invalid request: {}", err),
                }
            }
        }
    }

    pub async fn handle(&self, event: ClientEvent) -> ServerEvent {
        let reply = match event {
            ClientEvent::GetChannels => self
                .references
                .channels()
                .await
                .map(ServerEvent::ChannelsList),
            ClientEvent::GetRoles => self.references.roles().await.map(ServerEvent::RolesList),
            ClientEvent::GetCustomEmojis => self
                .references
                .emojis()
                .await
                .map(ServerEvent::CustomEmojisList),
            ClientEvent::GetBotInfo => self
                .references
                .bot_info(self.options)
                .await
                .map(ServerEvent::BotInfo),
            ClientEvent::SendMessage(request) => {
                return ServerEvent::MessageSent(self.send(request).await);
            }
        };

        reply.unwrap_or_else(|err| {
            tracing::error!("Failed to load guild references: {}", err);
            ServerEvent::Error {
                message: err.to_string(),
            }
        })
    }

    async fn send(&self, request: SendMessageDto) -> MessageSentDto {
        match self.messages.send(request).await {
            Ok(_) => MessageSentDto::sent(),
            Err(AppError::AssembleErr(err)) => {
                tracing::warn!("Rejected composed message: {}", err);
                MessageSentDto::failed(err.to_string())
            }
            Err(err) => {
                tracing::error!("Failed to send composed message: {}", err);
                MessageSentDto::failed(err.to_string())
            }
        }
    }
}
