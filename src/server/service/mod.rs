pub mod composer;
pub mod discord;
pub mod message;
