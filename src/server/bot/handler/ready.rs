//! Ready event handler for bot initialization.
//!
//! Fired once the bot completes the gateway handshake. Sets the member count
//! activity and posts the online announcement when a channel is configured.

use dioxus_logger::tracing;
use serenity::all::{ChannelId, Context, CreateMessage, GuildId, Ready};

use super::presence::update_member_activity;

pub const ONLINE_ANNOUNCEMENT: &str = "The bot is online!";

pub async fn handle_ready(
    ctx: Context,
    ready: Ready,
    guild_id: GuildId,
    announce_channel_id: Option<ChannelId>,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    update_member_activity(&ctx, guild_id).await;

    let Some(channel_id) = announce_channel_id else {
        return;
    };

    let message = CreateMessage::new().content(ONLINE_ANNOUNCEMENT);
    if let Err(e) = channel_id.send_message(&ctx.http, message).await {
        tracing::error!(
            "Failed to post online announcement in channel {}: {:?}",
            channel_id,
            e
        );
    }
}
