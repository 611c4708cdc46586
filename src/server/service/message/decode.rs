//! Decoding of staged attachments from `data:` URIs.

use base64::{engine::general_purpose::STANDARD, Engine};
use futures_util::future::try_join_all;

use crate::{
    model::message::{AttachmentDto, AttachmentSlot, AttachmentsDto},
    server::error::assemble::AssembleError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFile {
    pub slot: AttachmentSlot,
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Decodes a base64 `data:` URI into its payload bytes.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, String> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| "not a data URI".to_string())?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| "missing payload separator".to_string())?;
    if !meta.ends_with(";base64") {
        return Err("payload is not base64 encoded".to_string());
    }

    STANDARD.decode(payload.trim()).map_err(|err| err.to_string())
}

fn decode_attachment(
    slot: AttachmentSlot,
    attachment: AttachmentDto,
) -> Result<DecodedFile, AssembleError> {
    let malformed = |reason: String| AssembleError::MalformedAttachment {
        name: attachment.name.clone(),
        reason,
    };

    if attachment.name.trim().is_empty() {
        return Err(malformed("missing file name".to_string()));
    }
    let bytes = decode_data_uri(&attachment.data).map_err(malformed)?;

    Ok(DecodedFile {
        slot,
        name: attachment.name,
        bytes,
    })
}

/// Decodes every staged attachment on the blocking pool.
///
/// All or nothing: the first failure aborts the whole request.
pub async fn decode_attachments(
    attachments: &AttachmentsDto,
) -> Result<Vec<DecodedFile>, AssembleError> {
    let jobs = attachments.iter().map(|(slot, attachment)| {
        let attachment = attachment.clone();
        async move {
            match tokio::task::spawn_blocking(move || decode_attachment(slot, attachment)).await {
                Ok(decoded) => decoded,
                Err(err) => Err(AssembleError::DecodeInterrupted(err.to_string())),
            }
        }
    });

    try_join_all(jobs).await
}
