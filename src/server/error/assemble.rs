use thiserror::Error;

use crate::model::{composer::MAX_BUTTONS, message::AttachmentSlot};

/// Reasons a composed message cannot be turned into a Discord message.
///
/// The display text is sent back to the composer as-is, so it is written for
/// the person composing the message.
#[derive(Error, Debug, PartialEq)]
pub enum AssembleError {
    #[error("Invalid channel id '{0}'")]
    InvalidChannel(String),

    #[error("The message is empty: add text, an embed, a button or an attachment")]
    EmptyMessage,

    #[error("Attachment {name} could not be decoded: {reason}")]
    MalformedAttachment { name: String, reason: String },

    #[error("The {} slot does not accept files", .0.label())]
    SlotDisabled(AttachmentSlot),

    #[error("A message can have at most {} buttons, got {}", MAX_BUTTONS, .0)]
    TooManyButtons(usize),

    #[error("Invalid embed timestamp '{0}'")]
    InvalidTimestamp(String),

    /// The blocking decode task panicked or was cancelled.
    #[error("Attachment decoding was interrupted: {0}")]
    DecodeInterrupted(String),
}
