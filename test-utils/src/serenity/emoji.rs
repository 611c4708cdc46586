//! Test factory for creating Serenity Emoji objects.

use serenity::all::Emoji;

/// Creates a test custom Serenity Emoji.
///
/// The emoji is available, not managed and not restricted to any role.
///
/// # Panics
/// - If the JSON cannot be deserialized into an Emoji (indicates invalid test data)
pub fn create_test_emoji(emoji_id: u64, name: &str, animated: bool) -> Emoji {
    serde_json::from_value(serde_json::json!({
        "id": emoji_id.to_string(),
        "name": name,
        "animated": animated,
        "available": true,
        "managed": false,
        "require_colons": true,
        "roles": [],
        "user": null,
    }))
    .expect("Failed to create test emoji - invalid JSON structure")
}
