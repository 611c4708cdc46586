pub mod cache;
pub mod error;
pub mod session;
pub mod status;
