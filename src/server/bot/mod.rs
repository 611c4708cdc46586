//! Discord bot for the composer's guild.
//!
//! The bot keeps its presence in sync with the guild's member count, announces
//! itself when it comes online and answers interactions on its messages. It is
//! initialized during server startup and runs in a separate tokio task; its HTTP
//! client is shared with the composer so messages are posted as the bot.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability and the member count used for presence
//! - `GUILD_MEMBERS` - Member join events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
