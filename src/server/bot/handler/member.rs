use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Member};

use super::presence::update_member_activity;

/// Handles the guild_member_addition event by refreshing the member count activity
pub async fn handle_guild_member_addition(ctx: Context, new_member: Member, guild_id: GuildId) {
    if new_member.guild_id != guild_id {
        return;
    }

    tracing::info!("{} joined guild {}", new_member.user.name, guild_id);

    update_member_activity(&ctx, guild_id).await;
}
