//! Reference resolution for mentions, channel links and custom emojis.

use crate::model::reference::{EmojiRef, ReferenceTable, NO_ROLE_COLOR};

/// Highlight color for mentions without a usable role color.
pub const DEFAULT_HIGHLIGHT: &str = "#7289da";
/// Display label for user mentions; users are never looked up.
pub const USER_PLACEHOLDER: &str = "@user";
pub const UNKNOWN_ROLE: &str = "@unknown-role";
pub const UNKNOWN_CHANNEL: &str = "#unknown-channel";

/// A mention token recognized in message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mention<'a> {
    Everyone,
    Here,
    Role(&'a str),
    User(&'a str),
}

/// Display form of a resolved mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub name: String,
    pub color: String,
}

/// Resolves raw reference ids against a session's [`ReferenceTable`].
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    table: &'a ReferenceTable,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    pub fn mention(&self, mention: Mention<'_>) -> Resolved {
        match mention {
            Mention::Everyone => Resolved {
                name: "@everyone".to_string(),
                color: DEFAULT_HIGHLIGHT.to_string(),
            },
            Mention::Here => Resolved {
                name: "@here".to_string(),
                color: DEFAULT_HIGHLIGHT.to_string(),
            },
            Mention::Role(id) => match self.table.roles.get(id) {
                Some(role) => Resolved {
                    name: format!("@{}", role.name),
                    color: highlight_color(&role.color),
                },
                None => Resolved {
                    name: UNKNOWN_ROLE.to_string(),
                    color: DEFAULT_HIGHLIGHT.to_string(),
                },
            },
            Mention::User(_) => Resolved {
                name: USER_PLACEHOLDER.to_string(),
                color: DEFAULT_HIGHLIGHT.to_string(),
            },
        }
    }

    pub fn channel(&self, id: &str) -> String {
        match self.table.channels.get(id) {
            Some(channel) => format!("#{}", channel.name),
            None => UNKNOWN_CHANNEL.to_string(),
        }
    }

    /// Returns `None` for emojis outside the snapshot; callers keep the raw token.
    pub fn emoji(&self, id: &str) -> Option<&'a EmojiRef> {
        self.table.emojis.get(id)
    }
}

/// Role colors must be `#rrggbb`; the no-color sentinel and anything else map
/// to the default highlight.
fn highlight_color(color: &str) -> String {
    let is_hex = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());

    if is_hex && !color.eq_ignore_ascii_case(NO_ROLE_COLOR) {
        color.to_string()
    } else {
        DEFAULT_HIGHLIGHT.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reference::{ChannelDto, RoleDto};

    fn table() -> ReferenceTable {
        ReferenceTable::new()
            .with_roles(&[
                RoleDto {
                    id: "123".to_string(),
                    name: "Admins".to_string(),
                    color: "#ff0000".to_string(),
                },
                RoleDto {
                    id: "456".to_string(),
                    name: "Members".to_string(),
                    color: NO_ROLE_COLOR.to_string(),
                },
            ])
            .with_channels(&[ChannelDto {
                id: "789".to_string(),
                name: "general".to_string(),
            }])
    }

    #[test]
    fn resolves_known_role_with_its_color() {
        let table = table();
        let resolved = Resolver::new(&table).mention(Mention::Role("123"));

        assert_eq!(resolved.name, "@Admins");
        assert_eq!(resolved.color, "#ff0000");
    }

    #[test]
    fn uncolored_role_falls_back_to_default_highlight() {
        let table = table();
        let resolved = Resolver::new(&table).mention(Mention::Role("456"));

        assert_eq!(resolved.name, "@Members");
        assert_eq!(resolved.color, DEFAULT_HIGHLIGHT);
    }

    #[test]
    fn unknown_role_uses_placeholder() {
        let table = table();
        let resolved = Resolver::new(&table).mention(Mention::Role("999"));

        assert_eq!(resolved.name, UNKNOWN_ROLE);
    }

    #[test]
    fn everyone_and_here_resolve_without_table() {
        let table = ReferenceTable::new();
        let resolver = Resolver::new(&table);

        assert_eq!(resolver.mention(Mention::Everyone).name, "@everyone");
        assert_eq!(resolver.mention(Mention::Here).name, "@here");
    }

    #[test]
    fn users_are_never_looked_up() {
        let table = table();
        let resolved = Resolver::new(&table).mention(Mention::User("123"));

        assert_eq!(resolved.name, USER_PLACEHOLDER);
    }

    #[test]
    fn resolves_channels() {
        let table = table();
        let resolver = Resolver::new(&table);

        assert_eq!(resolver.channel("789"), "#general");
        assert_eq!(resolver.channel("000"), UNKNOWN_CHANNEL);
    }

    #[test]
    fn malformed_role_color_is_not_trusted() {
        assert_eq!(highlight_color("red;background:url(x)"), DEFAULT_HIGHLIGHT);
        assert_eq!(highlight_color("#00FF00"), "#00FF00");
    }
}
