use serenity::all::{ChannelId, GuildId};

use crate::server::error::{config::ConfigError, AppError};

pub struct Config {
    pub discord_bot_token: String,
    pub discord_guild_id: u64,

    /// Channel that receives the "bot online" announcement.
    pub announce_channel_id: Option<u64>,
    /// Whether the embed title link slot accepts a staged image.
    pub title_url_accepts_attachment: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok()).map_err(AppError::from)
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let discord_bot_token = required("DISCORD_BOT_TOKEN")?;
        let discord_guild_id = parse_id("DISCORD_GUILD_ID", required("DISCORD_GUILD_ID")?)?;
        let announce_channel_id = lookup("ANNOUNCE_CHANNEL_ID")
            .filter(|value| !value.is_empty())
            .map(|value| parse_id("ANNOUNCE_CHANNEL_ID", value))
            .transpose()?;
        let title_url_accepts_attachment = lookup("TITLE_URL_ACCEPTS_ATTACHMENT")
            .map(|value| parse_flag("TITLE_URL_ACCEPTS_ATTACHMENT", value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            discord_bot_token,
            discord_guild_id,
            announce_channel_id,
            title_url_accepts_attachment,
        })
    }

    pub fn guild_id(&self) -> GuildId {
        GuildId::new(self.discord_guild_id)
    }

    pub fn announce_channel_id(&self) -> Option<ChannelId> {
        self.announce_channel_id.map(ChannelId::new)
    }
}

/// Discord snowflakes are non-zero u64 values.
fn parse_id(name: &str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

fn parse_flag(name: &str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
