use crate::markup::{transform, DEFAULT_HIGHLIGHT};
use crate::model::reference::{ChannelDto, EmojiDto, ReferenceTable, RoleDto};

mod emphasis;
mod reference;

/// Builds the reference table shared by the transformer tests.
///
/// - role `123` "Admins" colored `#ff0000`
/// - role `456` "Members" without a color
/// - channel `789` "general"
/// - emojis `42` "wave" and animated `77` "dance"
fn test_table() -> ReferenceTable {
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
                color: "#000000".to_string(),
            },
        ])
        .with_channels(&[ChannelDto {
            id: "789".to_string(),
            name: "general".to_string(),
        }])
        .with_emojis(&[
            EmojiDto {
                id: "42".to_string(),
                name: "wave".to_string(),
                url: "https://cdn.discordapp.com/emojis/42.png".to_string(),
                animated: false,
            },
            EmojiDto {
                id: "77".to_string(),
                name: "dance".to_string(),
                url: "https://cdn.discordapp.com/emojis/77.gif".to_string(),
                animated: true,
            },
        ])
}

fn mention_span(color: &str, name: &str) -> String {
    format!(
        r#"<span class="discord-mention" style="background-color: {};">{}</span>"#,
        color, name
    )
}

/// Tests the documented end-to-end example.
///
/// Verifies that bold text and a colored role mention render together in a
/// single pass.
///
/// Expected: `Hello <strong>world</strong>` followed by a `#ff0000` `@Admins` span
#[test]
fn renders_bold_text_with_role_mention() {
    let table = test_table();

    let markup = transform("Hello **world** <@&123>", &table);

    assert_eq!(
        markup,
        format!(
            "Hello <strong>world</strong> {}",
            mention_span("#ff0000", "@Admins")
        )
    );
}

/// Tests that an empty message renders to empty markup.
///
/// Expected: empty string
#[test]
fn empty_text_renders_empty_markup() {
    assert_eq!(transform("", &ReferenceTable::new()), "");
}

/// Tests that transformation is deterministic.
///
/// Expected: identical markup for identical input
#[test]
fn transform_is_deterministic() {
    let table = test_table();
    let text = "**a** <@&123> <#789> <:wave:42>\n~~b~~";

    assert_eq!(transform(text, &table), transform(text, &table));
}

/// Tests that mentions render before the reference table is populated.
///
/// Expected: `@unknown-role` placeholder highlighted with the default color
#[test]
fn renders_with_empty_table() {
    let markup = transform("<@&123>", &ReferenceTable::new());

    assert_eq!(markup, mention_span(DEFAULT_HIGHLIGHT, "@unknown-role"));
}
