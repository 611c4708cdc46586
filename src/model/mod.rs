pub mod composer;
pub mod message;
pub mod reference;
pub mod socket;
