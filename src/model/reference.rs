//! Guild reference snapshots used to resolve mentions, channels and emojis.
//!
//! The lists arrive from the server once per composer session. The pickers keep
//! the ordered lists while the markup transformer looks entries up by id through
//! [`ReferenceTable`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role color Discord reports for roles without an explicit color.
pub const NO_ROLE_COLOR: &str = "#000000";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoleDto {
    pub id: String,
    pub name: String,
    /// Role color as `#rrggbb`.
    pub color: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChannelDto {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmojiDto {
    pub id: String,
    pub name: String,
    pub url: String,
    pub animated: bool,
}

impl EmojiDto {
    /// Token that inserts this emoji into message text.
    pub fn token(&self) -> String {
        if self.animated {
            format!("<a:{}:{}>", self.name, self.id)
        } else {
            format!("<:{}:{}>", self.name, self.id)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BotInfoDto {
    pub username: String,
    pub avatar_url: String,
    /// Whether the embed title link slot accepts a staged image.
    pub title_url_accepts_attachment: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleRef {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmojiRef {
    pub name: String,
    pub url: String,
    pub animated: bool,
}

/// Id-keyed lookup tables for one composer session.
///
/// Each table is replaced wholesale when a fresh snapshot arrives; entries are
/// never patched individually.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTable {
    pub roles: HashMap<String, RoleRef>,
    pub channels: HashMap<String, ChannelRef>,
    pub emojis: HashMap<String, EmojiRef>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_roles(&mut self, roles: &[RoleDto]) {
        self.roles = roles
            .iter()
            .map(|r| {
                (
                    r.id.clone(),
                    RoleRef {
                        name: r.name.clone(),
                        color: r.color.clone(),
                    },
                )
            })
            .collect();
    }

    pub fn set_channels(&mut self, channels: &[ChannelDto]) {
        self.channels = channels
            .iter()
            .map(|c| {
                (
                    c.id.clone(),
                    ChannelRef {
                        name: c.name.clone(),
                    },
                )
            })
            .collect();
    }

    pub fn set_emojis(&mut self, emojis: &[EmojiDto]) {
        self.emojis = emojis
            .iter()
            .map(|e| {
                (
                    e.id.clone(),
                    EmojiRef {
                        name: e.name.clone(),
                        url: e.url.clone(),
                        animated: e.animated,
                    },
                )
            })
            .collect();
    }

    pub fn with_roles(mut self, roles: &[RoleDto]) -> Self {
        self.set_roles(roles);
        self
    }

    pub fn with_channels(mut self, channels: &[ChannelDto]) -> Self {
        self.set_channels(channels);
        self
    }

    pub fn with_emojis(mut self, emojis: &[EmojiDto]) -> Self {
        self.set_emojis(emojis);
        self
    }
}
