//! Turns a composer request into a message Discord will accept.

use serenity::all::{
    ChannelId, CreateActionRow, CreateAttachment, CreateButton, CreateEmbed, CreateEmbedAuthor,
    CreateEmbedFooter, CreateMessage, Timestamp,
};
use url::Url;

use crate::{
    model::{
        composer::{ComposerOptions, MAX_BUTTONS},
        message::{
            attachment_reference, AttachmentSlot, AttachmentsDto, ButtonStyleDto, EmbedDto,
            EmbedMediaDto, LinkButtonDto, SendMessageDto,
        },
    },
    server::{
        error::assemble::AssembleError,
        service::message::decode::{decode_attachments, DecodedFile},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct LinkButton {
    pub label: String,
    pub url: Url,
}

impl LinkButton {
    /// Keeps only link buttons with a label and an http(s) URL.
    pub fn from_dto(dto: LinkButtonDto) -> Option<Self> {
        if dto.style != ButtonStyleDto::Link || dto.label.is_empty() {
            return None;
        }
        let url = Url::parse(dto.url.as_deref()?)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))?;

        Some(Self {
            label: dto.label,
            url,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmbed {
    pub embed: EmbedDto,
    pub timestamp: Option<Timestamp>,
}

/// A validated message with its files decoded, ready for Discord.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub channel_id: ChannelId,
    pub content: Option<String>,
    pub embed: Option<OutboundEmbed>,
    pub buttons: Vec<LinkButton>,
    pub files: Vec<DecodedFile>,
}

impl OutboundMessage {
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.embed.is_none()
            && self.buttons.is_empty()
            && self.files.is_empty()
    }

    pub fn into_create_message(self) -> CreateMessage {
        let mut message = CreateMessage::new();

        if let Some(content) = self.content {
            message = message.content(content);
        }
        if let Some(embed) = self.embed {
            message = message.embed(build_embed(embed));
        }
        if !self.buttons.is_empty() {
            let buttons = self
                .buttons
                .into_iter()
                .map(|button| CreateButton::new_link(button.url.as_str()).label(button.label))
                .collect();
            message = message.components(vec![CreateActionRow::Buttons(buttons)]);
        }
        for file in self.files {
            message = message.add_file(CreateAttachment::bytes(file.bytes, file.name));
        }

        message
    }
}

fn build_embed(outbound: OutboundEmbed) -> CreateEmbed {
    let dto = outbound.embed;
    let mut embed = CreateEmbed::new();

    if let Some(title) = dto.title {
        embed = embed.title(title);
    }
    if let Some(description) = dto.description {
        embed = embed.description(description);
    }
    if let Some(url) = dto.url {
        embed = embed.url(url);
    }
    if let Some(color) = dto.color {
        embed = embed.color(color);
    }
    if let Some(author) = dto.author {
        let mut builder = CreateEmbedAuthor::new(author.name);
        if let Some(icon_url) = author.icon_url {
            builder = builder.icon_url(icon_url);
        }
        embed = embed.author(builder);
    }
    if let Some(thumbnail) = dto.thumbnail {
        embed = embed.thumbnail(thumbnail.url);
    }
    if let Some(image) = dto.image {
        embed = embed.image(image.url);
    }
    if let Some(footer) = dto.footer {
        let mut builder = CreateEmbedFooter::new(footer.text);
        if let Some(icon_url) = footer.icon_url {
            builder = builder.icon_url(icon_url);
        }
        embed = embed.footer(builder);
    }
    if let Some(timestamp) = outbound.timestamp {
        embed = embed.timestamp(timestamp);
    }

    embed.fields(
        dto.fields
            .into_iter()
            .map(|field| (field.name, field.value, field.inline)),
    )
}

/// Points every embed image whose slot carries a staged file at that file.
pub fn rewrite_attachment_urls(mut embed: EmbedDto, attachments: &AttachmentsDto) -> EmbedDto {
    for (slot, attachment) in attachments.iter() {
        let reference = attachment_reference(&attachment.name);
        match slot {
            AttachmentSlot::Message => {}
            AttachmentSlot::AuthorIcon => {
                if let Some(author) = embed.author.as_mut() {
                    author.icon_url = Some(reference);
                }
            }
            AttachmentSlot::FooterIcon => {
                if let Some(footer) = embed.footer.as_mut() {
                    footer.icon_url = Some(reference);
                }
            }
            AttachmentSlot::Thumbnail => embed.thumbnail = Some(EmbedMediaDto { url: reference }),
            AttachmentSlot::Image => embed.image = Some(EmbedMediaDto { url: reference }),
            AttachmentSlot::TitleUrl => embed.url = Some(reference),
        }
    }

    embed
}

/// Validates `request`, decodes its files and builds the outbound message.
///
/// Nothing here talks to Discord, so every rejection happens before a network
/// call is made.
pub async fn assemble(
    request: SendMessageDto,
    options: ComposerOptions,
) -> Result<OutboundMessage, AssembleError> {
    let channel_id = request
        .channel_id
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(ChannelId::new)
        .ok_or_else(|| AssembleError::InvalidChannel(request.channel_id.clone()))?;

    if request.attachments.title_url.is_some() && !options.title_url_accepts_attachment {
        return Err(AssembleError::SlotDisabled(AttachmentSlot::TitleUrl));
    }

    if request.buttons.len() > MAX_BUTTONS {
        return Err(AssembleError::TooManyButtons(request.buttons.len()));
    }

    let files = decode_attachments(&request.attachments).await?;

    let embed = match request.embed {
        Some(embed) => {
            let mut embed = rewrite_attachment_urls(embed, &request.attachments);
            let timestamp = embed
                .timestamp
                .take()
                .map(|raw| Timestamp::parse(&raw).map_err(|_| AssembleError::InvalidTimestamp(raw)))
                .transpose()?;

            embed
                .has_content()
                .then_some(OutboundEmbed { embed, timestamp })
        }
        None => None,
    };

    let message = OutboundMessage {
        channel_id,
        content: request.content.filter(|content| !content.is_empty()),
        embed,
        buttons: request
            .buttons
            .into_iter()
            .filter_map(LinkButton::from_dto)
            .collect(),
        files,
    };

    if message.is_empty() {
        return Err(AssembleError::EmptyMessage);
    }

    Ok(message)
}
