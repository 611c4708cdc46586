use dioxus_logger::tracing;
use serenity::{
    all::{ActivityData, Context, GuildId},
    cache::Cache,
};

pub fn member_activity(member_count: u64) -> ActivityData {
    ActivityData::watching(format!("{} members", member_count))
}

/// Member count of a guild the gateway has already delivered to the cache.
pub fn cached_member_count(cache: &Cache, guild_id: GuildId) -> Option<u64> {
    cache.guild(guild_id).map(|guild| guild.member_count)
}

/// Sets the "Watching N members" activity from the guild's current member count.
///
/// The count comes from the cache; Discord is only asked when the guild is not
/// cached yet. Failures are logged and the previous activity stays in place.
pub async fn update_member_activity(ctx: &Context, guild_id: GuildId) {
    let member_count = match cached_member_count(&ctx.cache, guild_id) {
        Some(count) => Some(count),
        None => match ctx.http.get_guild_with_counts(guild_id).await {
            Ok(guild) => guild.approximate_member_count,
            Err(e) => {
                tracing::error!("Failed to fetch member count for guild {}: {:?}", guild_id, e);
                return;
            }
        },
    };

    let Some(member_count) = member_count else {
        tracing::warn!("Discord returned no member count for guild {}", guild_id);
        return;
    };

    ctx.set_activity(Some(member_activity(member_count)));
    tracing::info!("Activity set to watching {} members", member_count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::ActivityType;

    #[test]
    fn watches_member_count() {
        let activity = member_activity(42);

        assert_eq!(activity.name, "42 members");
        assert_eq!(activity.kind, ActivityType::Watching);
    }

    /// Tests the lookup for a guild the gateway has not delivered yet.
    ///
    /// Expected: None, so the count is fetched over HTTP instead
    #[test]
    fn uncached_guild_has_no_member_count() {
        let cache = Cache::new();

        assert_eq!(cached_member_count(&cache, GuildId::new(1)), None);
    }
}
