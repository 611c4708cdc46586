//! Wire format of a composed message, from the composer to the assembler.
//!
//! Every optional part is an `Option` that is omitted from the JSON when absent,
//! so the payload only carries what the user actually filled in.

use serde::{Deserialize, Serialize};

/// Placeholder for an empty embed field name or value whose sibling is set.
pub const ZERO_WIDTH_SPACE: &str = "\u{200B}";

/// Reference to an uploaded file from inside an embed.
pub fn attachment_reference(file_name: &str) -> String {
    format!("attachment://{}", file_name)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageDto {
    pub channel_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed: Option<EmbedDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<LinkButtonDto>,
    #[serde(default)]
    pub attachments: AttachmentsDto,
}

impl SendMessageDto {
    /// True when nothing would be sent: no text, embed, buttons or files.
    pub fn is_empty(&self) -> bool {
        self.content.as_deref().is_none_or(str::is_empty)
            && self.embed.is_none()
            && self.buttons.is_empty()
            && self.attachments.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct EmbedDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 24-bit RGB color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthorDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMediaDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMediaDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooterDto>,
    /// ISO-8601 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedFieldDto>,
}

impl EmbedDto {
    /// Whether any visible part of the embed is set.
    ///
    /// Color and timestamp alone do not make an embed worth sending.
    pub fn has_content(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.url.is_some()
            || self.author.is_some()
            || self.thumbnail.is_some()
            || self.image.is_some()
            || self.footer.is_some()
            || !self.fields.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmbedAuthorDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmbedFooterDto {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmbedMediaDto {
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmbedFieldDto {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyleDto {
    #[default]
    Link,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinkButtonDto {
    pub label: String,
    #[serde(default)]
    pub style: ButtonStyleDto,
    #[serde(default)]
    pub url: Option<String>,
}

/// Places a staged file can be attached to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AttachmentSlot {
    Message,
    AuthorIcon,
    FooterIcon,
    Thumbnail,
    Image,
    TitleUrl,
}

impl AttachmentSlot {
    pub const ALL: [AttachmentSlot; 6] = [
        AttachmentSlot::Message,
        AttachmentSlot::AuthorIcon,
        AttachmentSlot::FooterIcon,
        AttachmentSlot::Thumbnail,
        AttachmentSlot::Image,
        AttachmentSlot::TitleUrl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AttachmentSlot::Message => "Message attachment",
            AttachmentSlot::AuthorIcon => "Author icon",
            AttachmentSlot::FooterIcon => "Footer icon",
            AttachmentSlot::Thumbnail => "Thumbnail",
            AttachmentSlot::Image => "Image",
            AttachmentSlot::TitleUrl => "Title link",
        }
    }
}

/// A staged file: a `data:` URI plus the file name it is uploaded under.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AttachmentDto {
    pub name: String,
    pub data: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<AttachmentDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_icon: Option<AttachmentDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<AttachmentDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<AttachmentDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<AttachmentDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_url: Option<AttachmentDto>,
}

impl AttachmentsDto {
    pub fn get(&self, slot: AttachmentSlot) -> Option<&AttachmentDto> {
        match slot {
            AttachmentSlot::Message => self.message.as_ref(),
            AttachmentSlot::AuthorIcon => self.author_icon.as_ref(),
            AttachmentSlot::FooterIcon => self.footer_icon.as_ref(),
            AttachmentSlot::Thumbnail => self.thumbnail.as_ref(),
            AttachmentSlot::Image => self.image.as_ref(),
            AttachmentSlot::TitleUrl => self.title_url.as_ref(),
        }
    }

    pub fn set(&mut self, slot: AttachmentSlot, attachment: Option<AttachmentDto>) {
        let target = match slot {
            AttachmentSlot::Message => &mut self.message,
            AttachmentSlot::AuthorIcon => &mut self.author_icon,
            AttachmentSlot::FooterIcon => &mut self.footer_icon,
            AttachmentSlot::Thumbnail => &mut self.thumbnail,
            AttachmentSlot::Image => &mut self.image,
            AttachmentSlot::TitleUrl => &mut self.title_url,
        };
        *target = attachment;
    }

    /// Staged attachments in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (AttachmentSlot, &AttachmentDto)> + '_ {
        AttachmentSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|attachment| (slot, attachment)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
