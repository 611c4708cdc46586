use dioxus_logger::tracing;
use serenity::{
    all::{ChannelType, Emoji, GuildChannel, GuildId, Role},
    http::Http,
};
use std::{cmp::Reverse, sync::Arc};

use crate::{
    model::{
        composer::ComposerOptions,
        reference::{BotInfoDto, ChannelDto, EmojiDto, RoleDto},
    },
    server::error::AppError,
};

/// Reads the guild snapshots the composer needs to resolve references.
///
/// Every call goes to Discord; nothing is cached between requests.
pub struct ReferenceService {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl ReferenceService {
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }

    /// Roles ordered from highest to lowest, without `@everyone`.
    pub async fn roles(&self) -> Result<Vec<RoleDto>, AppError> {
        let roles = self.http.get_guild_roles(self.guild_id).await?;
        tracing::debug!("Fetched {} roles for guild {}", roles.len(), self.guild_id);

        Ok(role_dtos(self.guild_id, roles))
    }

    /// Text and announcement channels in sidebar order.
    pub async fn channels(&self) -> Result<Vec<ChannelDto>, AppError> {
        let channels = self.http.get_channels(self.guild_id).await?;
        tracing::debug!(
            "Fetched {} channels for guild {}",
            channels.len(),
            self.guild_id
        );

        Ok(channel_dtos(channels))
    }

    pub async fn emojis(&self) -> Result<Vec<EmojiDto>, AppError> {
        let emojis = self.http.get_emojis(self.guild_id).await?;

        Ok(emojis.iter().map(emoji_dto).collect())
    }

    pub async fn bot_info(&self, options: ComposerOptions) -> Result<BotInfoDto, AppError> {
        let user = self.http.get_current_user().await?;

        Ok(BotInfoDto {
            username: user.name.clone(),
            avatar_url: user.face(),
            title_url_accepts_attachment: options.title_url_accepts_attachment,
        })
    }
}

pub fn role_dto(role: &Role) -> RoleDto {
    RoleDto {
        id: role.id.to_string(),
        name: role.name.clone(),
        color: format!("#{:06x}", role.colour.0),
    }
}

/// The `@everyone` role shares the guild's id; the picker offers it separately.
pub fn role_dtos(guild_id: GuildId, mut roles: Vec<Role>) -> Vec<RoleDto> {
    roles.retain(|role| role.id.get() != guild_id.get());
    roles.sort_by_key(|role| Reverse(role.position));

    roles.iter().map(role_dto).collect()
}

pub fn channel_dtos(mut channels: Vec<GuildChannel>) -> Vec<ChannelDto> {
    channels.retain(|channel| matches!(channel.kind, ChannelType::Text | ChannelType::News));
    channels.sort_by_key(|channel| channel.position);

    channels
        .into_iter()
        .map(|channel| ChannelDto {
            id: channel.id.to_string(),
            name: channel.name,
        })
        .collect()
}

pub fn emoji_dto(emoji: &Emoji) -> EmojiDto {
    EmojiDto {
        id: emoji.id.to_string(),
        name: emoji.name.clone(),
        url: emoji.url(),
        animated: emoji.animated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reference::NO_ROLE_COLOR;
    use test_utils::serenity::{create_test_channel, create_test_emoji, create_test_role};

    const GUILD_ID: u64 = 100;

    /// Tests converting roles for the composer.
    ///
    /// Verifies that `@everyone` is dropped, roles are ordered highest first and
    /// colors are rendered as lowercase hex.
    ///
    /// Expected: Admins then Members
    #[test]
    fn converts_roles() {
        let roles = vec![
            create_test_role(GUILD_ID, "@everyone", 0, 0),
            create_test_role(2, "Members", 0, 1),
            create_test_role(3, "Admins", 0xFF00AA, 5),
        ];

        let dtos = role_dtos(GuildId::new(GUILD_ID), roles);

        assert_eq!(
            dtos,
            vec![
                RoleDto {
                    id: "3".to_string(),
                    name: "Admins".to_string(),
                    color: "#ff00aa".to_string(),
                },
                RoleDto {
                    id: "2".to_string(),
                    name: "Members".to_string(),
                    color: NO_ROLE_COLOR.to_string(),
                },
            ]
        );
    }

    /// Tests that only text and announcement channels are listed.
    ///
    /// Expected: channels sorted by position, voice and category channels dropped
    #[test]
    fn lists_messageable_channels_by_position() {
        let channels = vec![
            create_test_channel(GUILD_ID, 1, "rules", ChannelType::Text, 2),
            create_test_channel(GUILD_ID, 2, "voice", ChannelType::Voice, 0),
            create_test_channel(GUILD_ID, 3, "news", ChannelType::News, 1),
            create_test_channel(GUILD_ID, 4, "General", ChannelType::Category, 0),
            create_test_channel(GUILD_ID, 5, "general", ChannelType::Text, 0),
        ];

        let names: Vec<_> = channel_dtos(channels)
            .into_iter()
            .map(|channel| channel.name)
            .collect();

        assert_eq!(names, vec!["general", "news", "rules"]);
    }

    #[test]
    fn converts_emojis_with_cdn_url() {
        let still = emoji_dto(&create_test_emoji(42, "wave", false));
        let animated = emoji_dto(&create_test_emoji(77, "dance", true));

        assert_eq!(still.url, "https://cdn.discordapp.com/emojis/42.png");
        assert_eq!(still.token(), "<:wave:42>");
        assert!(animated.url.ends_with("/77.gif"));
        assert_eq!(animated.token(), "<a:dance:77>");
    }
}
