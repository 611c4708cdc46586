//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's API would return, with sensible defaults for
//! every field the caller does not choose.
//!
//! # Available Factories
//!
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `emoji::create_test_emoji` - Create Serenity Emoji objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod channel;
pub mod emoji;
pub mod role;

pub use channel::create_test_channel;
pub use emoji::create_test_emoji;
pub use role::create_test_role;
