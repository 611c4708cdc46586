use serenity::all::{ChannelId, Context, EventHandler, GuildId, Interaction, Member, Ready};
use serenity::async_trait;

pub mod interaction;
pub mod member;
pub mod presence;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub guild_id: GuildId,
    pub announce_channel_id: Option<ChannelId>,
}

impl Handler {
    pub fn new(guild_id: GuildId, announce_channel_id: Option<ChannelId>) -> Self {
        Self {
            guild_id,
            announce_channel_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.guild_id, self.announce_channel_id).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(ctx, new_member, self.guild_id).await;
    }

    /// Called for slash commands and message components
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(ctx, interaction).await;
    }
}
