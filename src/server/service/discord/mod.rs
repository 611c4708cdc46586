pub mod reference;

pub use reference::ReferenceService;
