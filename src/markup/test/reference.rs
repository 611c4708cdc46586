use super::*;

/// Tests a known role mention.
///
/// Expected: span colored with the role's stored color
#[test]
fn role_mention_carries_role_color() {
    let markup = transform("<@&123>", &test_table());

    assert_eq!(markup, mention_span("#ff0000", "@Admins"));
}

/// Tests a role without an explicit color.
///
/// Expected: span uses the default highlight color
#[test]
fn uncolored_role_uses_default_highlight() {
    let markup = transform("<@&456>", &test_table());

    assert_eq!(markup, mention_span(DEFAULT_HIGHLIGHT, "@Members"));
}

/// Tests a role missing from the table.
///
/// Expected: exactly `@unknown-role`
#[test]
fn unknown_role_renders_placeholder() {
    let markup = transform("<@&999>", &test_table());

    assert_eq!(markup, mention_span(DEFAULT_HIGHLIGHT, "@unknown-role"));
}

/// Tests `@everyone` and `@here` against an empty table.
///
/// Expected: both resolve regardless of table contents
#[test]
fn everyone_and_here_always_resolve() {
    let table = ReferenceTable::new();

    assert_eq!(
        transform("@everyone @here", &table),
        format!(
            "{} {}",
            mention_span(DEFAULT_HIGHLIGHT, "@everyone"),
            mention_span(DEFAULT_HIGHLIGHT, "@here")
        )
    );
}

/// Tests a user mention.
///
/// Expected: generic placeholder label, never a lookup
#[test]
fn user_mention_renders_placeholder() {
    let markup = transform("<@555>", &test_table());

    assert_eq!(markup, mention_span(DEFAULT_HIGHLIGHT, "@user"));
}

/// Tests known and unknown channel references.
///
/// Expected: `#general` for the known id, `#unknown-channel` otherwise
#[test]
fn resolves_channel_references() {
    let table = test_table();

    assert_eq!(
        transform("<#789>", &table),
        r##"<span class="discord-channel">#general</span>"##
    );
    assert_eq!(
        transform("<#1>", &table),
        r##"<span class="discord-channel">#unknown-channel</span>"##
    );
}

/// Tests static and animated custom emojis present in the table.
///
/// Expected: image markup pointing at the stored URL
#[test]
fn resolves_custom_emojis() {
    let table = test_table();

    assert_eq!(
        transform("<:wave:42>", &table),
        r#"<img src="https://cdn.discordapp.com/emojis/42.png" class="discord-custom-emoji" alt="wave">"#
    );
    assert_eq!(
        transform("<a:dance:77>", &table),
        r#"<img src="https://cdn.discordapp.com/emojis/77.gif" class="discord-custom-emoji" alt="dance">"#
    );
}

/// Tests a custom emoji missing from the table.
///
/// Expected: raw token passed through in escaped form
#[test]
fn unknown_emoji_passes_through() {
    let markup = transform("<:ghost:1>", &test_table());

    assert_eq!(markup, "&lt;:ghost:1&gt;");
}

/// Tests a mention wrapped in bold.
///
/// Expected: bold applied around the resolved mention span
#[test]
fn emphasis_wraps_mentions() {
    let markup = transform("**<@&123>**", &test_table());

    assert_eq!(
        markup,
        format!("<strong>{}</strong>", mention_span("#ff0000", "@Admins"))
    );
}
