use dioxus_logger::tracing;
use serenity::{all::GuildId, http::Http};

use crate::server::error::AppError;

/// Verifies the bot can see the configured guild before serving the composer.
///
/// # Returns
/// - `Ok(())` - The guild is reachable
/// - `Err(AppError::NotFound)` - Discord does not know the guild or the bot is not a member
pub async fn check_guild_access(http: &Http, guild_id: GuildId) -> Result<(), AppError> {
    match http.get_guild(guild_id).await {
        Ok(guild) => {
            tracing::info!("Composing for guild {} ({})", guild.name, guild.id);
            Ok(())
        }
        Err(err) => {
            tracing::error!("Cannot access guild {}: {}", guild_id, err);
            Err(AppError::NotFound(format!(
                "Guild {} is not reachable with the configured bot token",
                guild_id
            )))
        }
    }
}
