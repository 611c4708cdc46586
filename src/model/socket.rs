//! Events exchanged over the composer websocket.
//!
//! Frames are JSON objects of the form `{"event": NAME, "data": PAYLOAD}`.

use serde::{Deserialize, Serialize};

use crate::model::{
    message::SendMessageDto,
    reference::{BotInfoDto, ChannelDto, EmojiDto, RoleDto},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    GetChannels,
    GetRoles,
    GetCustomEmojis,
    GetBotInfo,
    SendMessage(SendMessageDto),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    ChannelsList(Vec<ChannelDto>),
    RolesList(Vec<RoleDto>),
    CustomEmojisList(Vec<EmojiDto>),
    BotInfo(BotInfoDto),
    MessageSent(MessageSentDto),
    /// A frame the server could not understand or a lookup that failed.
    Error { message: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageSentDto {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageSentDto {
    pub fn sent() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_request_without_payload() {
        let event: ClientEvent = serde_json::from_str(r#"{"event":"getRoles"}"#).unwrap();

        assert_eq!(event, ClientEvent::GetRoles);
    }

    #[test]
    fn decodes_send_message_request() {
        let event: ClientEvent = serde_json::from_str(
            r#"{"event":"sendMessage","data":{"channelId":"42","content":"hello"}}"#,
        )
        .unwrap();

        let ClientEvent::SendMessage(request) = event else {
            panic!("expected sendMessage");
        };
        assert_eq!(request.channel_id, "42");
        assert_eq!(request.content.as_deref(), Some("hello"));
    }

    #[test]
    fn rejects_unknown_event() {
        let result = serde_json::from_str::<ClientEvent>(r#"{"event":"dropTables"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn encodes_failed_send_with_error() {
        let json = serde_json::to_value(ServerEvent::MessageSent(MessageSentDto::failed(
            "Missing Access",
        )))
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "event": "messageSent",
                "data": { "success": false, "error": "Missing Access" }
            })
        );
    }

    #[test]
    fn encodes_successful_send_without_error() {
        let json = serde_json::to_value(ServerEvent::MessageSent(MessageSentDto::sent())).unwrap();

        assert_eq!(json["data"], serde_json::json!({ "success": true }));
    }

    #[test]
    fn encodes_error_with_message() {
        let json = serde_json::to_value(ServerEvent::Error {
            message: "Invalid request".to_string(),
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "event": "error", "data": { "message": "Invalid request" } })
        );
    }

    #[test]
    fn encodes_role_list() {
        let json = serde_json::to_value(ServerEvent::RolesList(vec![RoleDto {
            id: "1".to_string(),
            name: "Admins".to_string(),
            color: "#ff0000".to_string(),
        }]))
        .unwrap();

        assert_eq!(json["event"], "rolesList");
        assert_eq!(json["data"][0]["name"], "Admins");
    }
}
