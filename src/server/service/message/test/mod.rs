use crate::model::{
    composer::ComposerOptions,
    message::{AttachmentDto, AttachmentSlot, SendMessageDto},
};

mod button;
mod embed;

const PNG_DATA: &str = "data:image/png;base64,iVBORw0KGgo=";

fn request(content: Option<&str>) -> SendMessageDto {
    SendMessageDto {
        channel_id: "1234".to_string(),
        content: content.map(str::to_string),
        ..Default::default()
    }
}

fn staged(request: &mut SendMessageDto, slot: AttachmentSlot, name: &str) {
    request.attachments.set(
        slot,
        Some(AttachmentDto {
            name: name.to_string(),
            data: PNG_DATA.to_string(),
        }),
    );
}

fn options() -> ComposerOptions {
    ComposerOptions::default()
}
