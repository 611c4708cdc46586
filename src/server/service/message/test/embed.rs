use serenity::all::Timestamp;

use super::*;
use crate::{
    model::message::{EmbedAuthorDto, EmbedDto, EmbedFooterDto, EmbedMediaDto},
    server::{
        error::assemble::AssembleError,
        service::message::{assemble, assemble::rewrite_attachment_urls},
    },
};

fn embed() -> EmbedDto {
    EmbedDto {
        title: Some("Release".to_string()),
        author: Some(EmbedAuthorDto {
            name: "Herald".to_string(),
            icon_url: Some("https://example.com/old.png".to_string()),
        }),
        footer: Some(EmbedFooterDto {
            text: "v1".to_string(),
            icon_url: None,
        }),
        ..Default::default()
    }
}

/// Tests that staged slots replace the matching embed image URLs.
///
/// Expected: author icon, footer icon and thumbnail point at `attachment://`
#[test]
fn rewrites_staged_image_slots() {
    let mut request = request(None);
    staged(&mut request, AttachmentSlot::AuthorIcon, "author.png");
    staged(&mut request, AttachmentSlot::FooterIcon, "footer.png");
    staged(&mut request, AttachmentSlot::Thumbnail, "thumb.png");

    let rewritten = rewrite_attachment_urls(embed(), &request.attachments);

    assert_eq!(
        rewritten.author.unwrap().icon_url.as_deref(),
        Some("attachment://author.png")
    );
    assert_eq!(
        rewritten.footer.unwrap().icon_url.as_deref(),
        Some("attachment://footer.png")
    );
    assert_eq!(
        rewritten.thumbnail,
        Some(EmbedMediaDto {
            url: "attachment://thumb.png".to_string()
        })
    );
    assert_eq!(rewritten.image, None);
}

#[test]
fn message_attachment_leaves_embed_alone() {
    let mut request = request(None);
    staged(&mut request, AttachmentSlot::Message, "body.png");

    let rewritten = rewrite_attachment_urls(embed(), &request.attachments);

    assert_eq!(rewritten, embed());
}

#[tokio::test]
async fn parses_embed_timestamp() {
    let mut request = request(None);
    request.embed = Some(EmbedDto {
        timestamp: Some("2026-03-01T12:30:00.000Z".to_string()),
        ..embed()
    });

    let message = assemble(request, options()).await.unwrap();

    let outbound = message.embed.unwrap();
    assert_eq!(outbound.embed.timestamp, None);
    assert_eq!(
        outbound.timestamp,
        Some(Timestamp::parse("2026-03-01T12:30:00.000Z").unwrap())
    );
}

#[tokio::test]
async fn rejects_invalid_timestamp() {
    let mut request = request(None);
    request.embed = Some(EmbedDto {
        timestamp: Some("yesterday".to_string()),
        ..embed()
    });

    let result = assemble(request, options()).await;

    assert_eq!(
        result,
        Err(AssembleError::InvalidTimestamp("yesterday".to_string()))
    );
}

/// Tests that an embed with only a color is dropped.
///
/// Expected: Err(EmptyMessage) since nothing visible remains
#[tokio::test]
async fn drops_invisible_embed() {
    let mut request = request(None);
    request.embed = Some(EmbedDto {
        color: Some(0xff0000),
        ..Default::default()
    });

    let result = assemble(request, options()).await;

    assert_eq!(result, Err(AssembleError::EmptyMessage));
}
