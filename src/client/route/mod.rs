pub mod compose;
pub mod not_found;

pub use compose::Compose;
pub use not_found::NotFound;
