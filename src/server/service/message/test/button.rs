use super::*;
use crate::{
    model::{
        composer::MAX_BUTTONS,
        message::{ButtonStyleDto, LinkButtonDto},
    },
    server::{
        error::assemble::AssembleError,
        service::message::{assemble, LinkButton},
    },
};

fn button(label: &str, url: Option<&str>) -> LinkButtonDto {
    LinkButtonDto {
        label: label.to_string(),
        style: ButtonStyleDto::Link,
        url: url.map(str::to_string),
    }
}

#[test]
fn keeps_complete_link_button() {
    let button = LinkButton::from_dto(button("Docs", Some("https://example.com/docs"))).unwrap();

    assert_eq!(button.label, "Docs");
    assert_eq!(button.url.as_str(), "https://example.com/docs");
}

#[test]
fn drops_incomplete_buttons() {
    assert_eq!(LinkButton::from_dto(button("Docs", None)), None);
    assert_eq!(LinkButton::from_dto(button("Docs", Some("not a url"))), None);
    assert_eq!(
        LinkButton::from_dto(button("Docs", Some("javascript:alert(1)"))),
        None
    );
    assert_eq!(
        LinkButton::from_dto(button("", Some("https://example.com"))),
        None
    );
}

/// Tests that buttons are filtered without failing the request.
///
/// Expected: Ok with only the valid button
#[tokio::test]
async fn filters_buttons_silently() {
    let mut request = request(Some("pick one"));
    request.buttons = vec![
        button("Site", Some("https://example.com")),
        button("Nowhere", None),
    ];

    let message = assemble(request, options()).await.unwrap();

    assert_eq!(message.buttons.len(), 1);
    assert_eq!(message.buttons[0].label, "Site");
}

/// Tests that a message whose only buttons are invalid is empty.
///
/// Expected: Err(EmptyMessage)
#[tokio::test]
async fn only_invalid_buttons_is_empty() {
    let mut request = request(None);
    request.buttons = vec![button("Nowhere", None)];

    let result = assemble(request, options()).await;

    assert!(result.is_err());
}

/// Tests that the button limit holds even when the client skips its own check.
///
/// Expected: Err(TooManyButtons) for six valid link buttons
#[tokio::test]
async fn rejects_more_than_five_buttons() {
    let mut request = request(Some("too many"));
    request.buttons = (0..=MAX_BUTTONS)
        .map(|i| button(&format!("Link {}", i), Some("https://example.com")))
        .collect();

    let result = assemble(request, options()).await;

    assert_eq!(result, Err(AssembleError::TooManyButtons(MAX_BUTTONS + 1)));
}

#[tokio::test]
async fn accepts_exactly_five_buttons() {
    let mut request = request(None);
    request.buttons = (0..MAX_BUTTONS)
        .map(|i| button(&format!("Link {}", i), Some("https://example.com")))
        .collect();

    let message = assemble(request, options()).await.unwrap();

    assert_eq!(message.buttons.len(), MAX_BUTTONS);
}
