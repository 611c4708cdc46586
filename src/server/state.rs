//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through axum's
//! state extraction. Composer sessions take what they need from it when a
//! websocket connects and keep no state here.

use serenity::{all::GuildId, http::Http};
use std::sync::Arc;

use crate::{model::composer::ComposerOptions, server::config::Config};

#[derive(Clone)]
pub struct AppState {
    /// Discord HTTP client shared with the bot.
    pub discord_http: Arc<Http>,

    /// Guild the composer reads roles, channels and emojis from.
    pub guild_id: GuildId,

    /// Composer options handed to every client in the `botInfo` event.
    pub options: ComposerOptions,
}

impl AppState {
    pub fn new(discord_http: Arc<Http>, config: &Config) -> Self {
        Self {
            discord_http,
            guild_id: config.guild_id(),
            options: ComposerOptions {
                title_url_accepts_attachment: config.title_url_accepts_attachment,
            },
        }
    }
}
