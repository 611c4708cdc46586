//! Herald Test Utils
//!
//! Shared testing utilities for the herald crate. The factories build Serenity
//! objects from JSON shaped like Discord's API responses, so guild snapshot
//! conversions can be tested without a bot token.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_channel, create_test_role};
//! use serenity::all::ChannelType;
//!
//! #[test]
//! fn test_snapshot() {
//!     let role = create_test_role(111111111, "Admin", 0xFF0000, 10);
//!     let channel = create_test_channel(1, 222222222, "general", ChannelType::Text, 0);
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
