//! Client-side composer state.
//!
//! The composer owns everything the user is editing: the target channel, the
//! text, the embed form, link buttons and one staged file per attachment slot.
//! It is a plain value so the UI can hold it in a signal and the rules can be
//! tested without a browser.

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;
use url::Url;

use crate::model::message::{
    attachment_reference, AttachmentDto, AttachmentSlot, AttachmentsDto, EmbedAuthorDto,
    EmbedDto, EmbedFieldDto, EmbedFooterDto, EmbedMediaDto, LinkButtonDto, SendMessageDto,
    ZERO_WIDTH_SPACE,
};

pub const MAX_BUTTONS: usize = 5;
pub const DEFAULT_EMBED_COLOR: &str = "#5865F2";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposerError {
    #[error("{name} is not an image")]
    NotAnImage { name: String },
    #[error("The {} slot does not accept files", .0.label())]
    SlotDisabled(AttachmentSlot),
    #[error("A message can have at most {} buttons", MAX_BUTTONS)]
    TooManyButtons,
    #[error("Please select a channel")]
    NoChannel,
    #[error("The message is empty: add text, an embed, a button or an attachment")]
    EmptyMessage,
}

/// A file read in the browser, ready to be sent as a `data:` URI.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub name: String,
    pub media_type: String,
    pub data_url: String,
}

impl StagedFile {
    pub fn from_bytes(name: impl Into<String>, media_type: impl Into<String>, bytes: &[u8]) -> Self {
        let media_type = media_type.into();
        let data_url = format!("data:{};base64,{}", media_type, STANDARD.encode(bytes));

        Self {
            name: name.into(),
            media_type,
            data_url,
        }
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// The media type the browser declared for a file, or a guess from its name
/// when the browser reported none.
pub fn resolve_media_type(declared: Option<String>, file_name: &str) -> String {
    declared
        .filter(|media_type| !media_type.is_empty())
        .unwrap_or_else(|| media_type_for(file_name).to_string())
}

/// Guesses a media type from a file name when the browser does not report one.
pub fn media_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Parses a `#RRGGBB` picker value into a 24-bit color.
pub fn parse_color(value: &str) -> Option<u32> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDraft {
    pub id: u64,
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonDraft {
    pub id: u64,
    pub label: String,
    pub url: String,
}

impl ButtonDraft {
    /// The button's target when it has a label and an http(s) URL.
    pub fn link(&self) -> Option<Url> {
        if self.label.is_empty() {
            return None;
        }
        Url::parse(&self.url)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedDraft {
    pub enabled: bool,
    pub color: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub author: String,
    pub author_icon_url: String,
    pub thumbnail_url: String,
    pub image_url: String,
    pub footer: String,
    pub footer_icon_url: String,
    pub timestamp: bool,
    pub fields: Vec<FieldDraft>,
}

impl Default for EmbedDraft {
    fn default() -> Self {
        Self {
            enabled: false,
            color: DEFAULT_EMBED_COLOR.to_string(),
            title: String::new(),
            description: String::new(),
            url: String::new(),
            author: String::new(),
            author_icon_url: String::new(),
            thumbnail_url: String::new(),
            image_url: String::new(),
            footer: String::new(),
            footer_icon_url: String::new(),
            timestamp: false,
            fields: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComposerOptions {
    pub title_url_accepts_attachment: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composer {
    pub channel_id: Option<String>,
    pub content: String,
    pub embed: EmbedDraft,
    buttons: Vec<ButtonDraft>,
    staged: HashMap<AttachmentSlot, StagedFile>,
    options: ComposerOptions,
    next_id: u64,
}

impl Composer {
    pub fn new(options: ComposerOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> ComposerOptions {
        self.options
    }

    /// Applies server-provided options, dropping a staged file whose slot was
    /// just disabled.
    pub fn set_options(&mut self, options: ComposerOptions) {
        self.options = options;
        if !self.slot_enabled(AttachmentSlot::TitleUrl) {
            self.staged.remove(&AttachmentSlot::TitleUrl);
        }
    }

    pub fn slot_enabled(&self, slot: AttachmentSlot) -> bool {
        slot != AttachmentSlot::TitleUrl || self.options.title_url_accepts_attachment
    }

    /// Appends a mention or emoji token followed by a space.
    pub fn insert_token(&mut self, token: &str) {
        self.content.push_str(token);
        self.content.push(' ');
    }

    pub fn staged(&self, slot: AttachmentSlot) -> Option<&StagedFile> {
        self.staged.get(&slot)
    }

    /// Stages `file` in `slot`, replacing any previous file and clearing the
    /// slot's URL field.
    pub fn stage(&mut self, slot: AttachmentSlot, file: StagedFile) -> Result<(), ComposerError> {
        if !self.slot_enabled(slot) {
            return Err(ComposerError::SlotDisabled(slot));
        }
        if !file.is_image() {
            return Err(ComposerError::NotAnImage { name: file.name });
        }

        if let Some(url) = self.slot_url_mut(slot) {
            url.clear();
        }
        self.staged.insert(slot, file);

        Ok(())
    }

    pub fn unstage(&mut self, slot: AttachmentSlot) {
        self.staged.remove(&slot);
    }

    /// Image to show in the preview for `slot`: the staged file, else the URL
    /// typed by the user.
    pub fn preview_source(&self, slot: AttachmentSlot) -> Option<String> {
        match self.staged.get(&slot) {
            Some(file) => Some(file.data_url.clone()),
            None => self.slot_url(slot).and_then(non_empty),
        }
    }

    /// URL field that competes with `slot`; the message body slot has none.
    pub fn slot_url(&self, slot: AttachmentSlot) -> Option<&str> {
        let url = match slot {
            AttachmentSlot::Message => return None,
            AttachmentSlot::AuthorIcon => &self.embed.author_icon_url,
            AttachmentSlot::FooterIcon => &self.embed.footer_icon_url,
            AttachmentSlot::Thumbnail => &self.embed.thumbnail_url,
            AttachmentSlot::Image => &self.embed.image_url,
            AttachmentSlot::TitleUrl => &self.embed.url,
        };
        Some(url)
    }

    pub fn slot_url_mut(&mut self, slot: AttachmentSlot) -> Option<&mut String> {
        match slot {
            AttachmentSlot::Message => None,
            AttachmentSlot::AuthorIcon => Some(&mut self.embed.author_icon_url),
            AttachmentSlot::FooterIcon => Some(&mut self.embed.footer_icon_url),
            AttachmentSlot::Thumbnail => Some(&mut self.embed.thumbnail_url),
            AttachmentSlot::Image => Some(&mut self.embed.image_url),
            AttachmentSlot::TitleUrl => Some(&mut self.embed.url),
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn buttons(&self) -> &[ButtonDraft] {
        &self.buttons
    }

    pub fn add_button(&mut self) -> Result<u64, ComposerError> {
        if self.buttons.len() >= MAX_BUTTONS {
            return Err(ComposerError::TooManyButtons);
        }
        let id = self.next_id();
        self.buttons.push(ButtonDraft {
            id,
            ..Default::default()
        });
        Ok(id)
    }

    pub fn button_mut(&mut self, id: u64) -> Option<&mut ButtonDraft> {
        self.buttons.iter_mut().find(|button| button.id == id)
    }

    pub fn remove_button(&mut self, id: u64) {
        self.buttons.retain(|button| button.id != id);
    }

    pub fn add_field(&mut self) -> u64 {
        let id = self.next_id();
        self.embed.fields.push(FieldDraft {
            id,
            ..Default::default()
        });
        id
    }

    pub fn field_mut(&mut self, id: u64) -> Option<&mut FieldDraft> {
        self.embed.fields.iter_mut().find(|field| field.id == id)
    }

    pub fn remove_field(&mut self, id: u64) {
        self.embed.fields.retain(|field| field.id != id);
    }

    /// Clears the message back to an empty form. The selected channel and the
    /// server options survive.
    pub fn reset(&mut self) {
        *self = Self {
            channel_id: self.channel_id.take(),
            options: self.options,
            next_id: self.next_id,
            ..Default::default()
        };
    }

    /// Builds the send request, or explains why the form cannot be sent.
    ///
    /// `now` becomes the embed timestamp when the timestamp toggle is on.
    pub fn build_request(&self, now: DateTime<Utc>) -> Result<SendMessageDto, ComposerError> {
        let channel_id = self
            .channel_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or(ComposerError::NoChannel)?;

        let mut attachments = AttachmentsDto::default();
        for (slot, file) in &self.staged {
            attachments.set(
                *slot,
                Some(AttachmentDto {
                    name: file.name.clone(),
                    data: file.data_url.clone(),
                }),
            );
        }

        let buttons = self
            .buttons
            .iter()
            .filter_map(|button| {
                button.link()?;
                Some(LinkButtonDto {
                    label: button.label.clone(),
                    style: Default::default(),
                    url: Some(button.url.clone()),
                })
            })
            .collect();

        let request = SendMessageDto {
            channel_id,
            content: non_empty(&self.content),
            embed: self.build_embed(now),
            buttons,
            attachments,
        };

        if request.is_empty() {
            return Err(ComposerError::EmptyMessage);
        }

        Ok(request)
    }

    fn build_embed(&self, now: DateTime<Utc>) -> Option<EmbedDto> {
        let draft = &self.embed;
        if !draft.enabled {
            return None;
        }

        let image_source = |slot: AttachmentSlot, url: &str| -> Option<String> {
            match self.staged.get(&slot) {
                Some(file) => Some(attachment_reference(&file.name)),
                None => non_empty(url),
            }
        };

        let url = match self.staged.get(&AttachmentSlot::TitleUrl) {
            Some(file) => Some(attachment_reference(&file.name)),
            None => Some(draft.url.clone()).filter(|url| url.starts_with("http")),
        };

        let fields = draft
            .fields
            .iter()
            .filter(|field| !field.name.is_empty() || !field.value.is_empty())
            .map(|field| EmbedFieldDto {
                name: non_empty(&field.name).unwrap_or_else(|| ZERO_WIDTH_SPACE.to_string()),
                value: non_empty(&field.value).unwrap_or_else(|| ZERO_WIDTH_SPACE.to_string()),
                inline: field.inline,
            })
            .collect();

        let embed = EmbedDto {
            title: non_empty(&draft.title),
            description: non_empty(&draft.description),
            url,
            color: parse_color(&draft.color),
            author: non_empty(&draft.author).map(|name| EmbedAuthorDto {
                name,
                icon_url: image_source(AttachmentSlot::AuthorIcon, &draft.author_icon_url),
            }),
            thumbnail: image_source(AttachmentSlot::Thumbnail, &draft.thumbnail_url)
                .map(|url| EmbedMediaDto { url }),
            image: image_source(AttachmentSlot::Image, &draft.image_url)
                .map(|url| EmbedMediaDto { url }),
            footer: non_empty(&draft.footer).map(|text| EmbedFooterDto {
                text,
                icon_url: image_source(AttachmentSlot::FooterIcon, &draft.footer_icon_url),
            }),
            timestamp: draft
                .timestamp
                .then(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            fields,
        };

        embed.has_content().then_some(embed)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
