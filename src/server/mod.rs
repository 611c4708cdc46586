//! Server side: the composer websocket backend and the Discord bot.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - Websocket upgrade and frame loop
//! - **Service Layer** (`service/`) - Composer sessions, guild reference lookups and
//!   outbound message assembly
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Bot** (`bot/`) - Discord gateway event handlers
//!
//! Supporting modules: `config` (environment configuration), `state` (shared
//! application state), `startup` (startup checks) and `router` (axum routes).
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod bot;
pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
