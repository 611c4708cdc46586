//! Client view of one composer websocket session.

use crate::{
    client::model::{
        cache::Cache,
        error::ApiError,
        status::{Status, StatusKind},
    },
    model::{
        composer::{Composer, ComposerOptions},
        reference::{BotInfoDto, ChannelDto, EmojiDto, ReferenceTable, RoleDto},
        socket::{ClientEvent, ServerEvent},
    },
};

/// Guild snapshots, connection flags and the status banner for the composer page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub channels: Cache<Vec<ChannelDto>>,
    pub roles: Cache<Vec<RoleDto>>,
    pub emojis: Cache<Vec<EmojiDto>>,
    pub bot: Cache<BotInfoDto>,
    /// Lookup tables rebuilt from the snapshots above.
    pub table: ReferenceTable,
    pub connected: bool,
    pub sending: bool,
    pub status: Option<Status>,
    serial: u64,
}

impl Session {
    /// Requests sent as soon as the socket opens.
    pub fn initial_requests(&mut self) -> Vec<ClientEvent> {
        self.connected = true;
        self.channels = Cache::Loading;
        self.roles = Cache::Loading;
        self.emojis = Cache::Loading;
        self.bot = Cache::Loading;

        vec![
            ClientEvent::GetBotInfo,
            ClientEvent::GetChannels,
            ClientEvent::GetRoles,
            ClientEvent::GetCustomEmojis,
        ]
    }

    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) -> &Status {
        self.serial += 1;
        self.status.insert(Status {
            kind,
            message: message.into(),
            serial: self.serial,
        })
    }

    /// Hides the banner only if it is still the one with `serial`.
    pub fn hide_status(&mut self, serial: u64) {
        if self.status.as_ref().is_some_and(|status| status.serial == serial) {
            self.status = None;
        }
    }

    /// Marks a send in flight, or explains locally why the form cannot be sent.
    pub fn begin_send(&mut self, composer: &Composer) -> Option<ClientEvent> {
        if self.sending {
            return None;
        }

        match composer.build_request(chrono::Utc::now()) {
            Ok(request) => {
                self.sending = true;
                self.set_status(StatusKind::Info, "Sending message...");
                Some(ClientEvent::SendMessage(request))
            }
            Err(err) => {
                self.set_status(StatusKind::Error, err.to_string());
                None
            }
        }
    }

    /// Folds one server event into the session and the composer.
    ///
    /// A successful send resets the composer; a failed one leaves it intact so
    /// the user can fix and retry.
    pub fn apply(&mut self, event: ServerEvent, composer: &mut Composer) {
        match event {
            ServerEvent::ChannelsList(channels) => {
                self.table.set_channels(&channels);
                if composer.channel_id.is_none() {
                    composer.channel_id = channels.first().map(|channel| channel.id.clone());
                }
                self.channels = Cache::Fetched(channels);
            }
            ServerEvent::RolesList(roles) => {
                self.table.set_roles(&roles);
                self.roles = Cache::Fetched(roles);
            }
            ServerEvent::CustomEmojisList(emojis) => {
                self.table.set_emojis(&emojis);
                self.emojis = Cache::Fetched(emojis);
            }
            ServerEvent::BotInfo(info) => {
                composer.set_options(ComposerOptions {
                    title_url_accepts_attachment: info.title_url_accepts_attachment,
                });
                self.bot = Cache::Fetched(info);
            }
            ServerEvent::MessageSent(result) => {
                self.sending = false;
                if result.success {
                    composer.reset();
                    self.set_status(StatusKind::Success, "Message sent!");
                } else {
                    let reason = result.error.unwrap_or_else(|| "unknown error".to_string());
                    self.set_status(StatusKind::Error, format!("Failed to send: {}", reason));
                }
            }
            ServerEvent::Error { message } => {
                let error = ApiError::server(message.clone());
                self.fail_pending(&error);
                self.set_status(StatusKind::Error, message);
            }
        }
    }

    /// The socket closed or could not be opened.
    pub fn disconnect(&mut self, message: impl Into<String>) {
        let error = ApiError::socket(message);
        self.connected = false;
        self.sending = false;
        self.fail_pending(&error);
        self.set_status(StatusKind::Error, error.message);
    }

    fn fail_pending(&mut self, error: &ApiError) {
        self.channels.fail_pending(error);
        self.roles.fail_pending(error);
        self.emojis.fail_pending(error);
        self.bot.fail_pending(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        message::AttachmentSlot,
        socket::MessageSentDto,
    };

    fn composer_with_text() -> Composer {
        let mut composer = Composer::new(ComposerOptions::default());
        composer.channel_id = Some("1".to_string());
        composer.content = "hello".to_string();
        composer
    }

    #[test]
    fn selects_first_channel_when_none_chosen() {
        let mut session = Session::default();
        let mut composer = Composer::default();

        session.apply(
            ServerEvent::ChannelsList(vec![
                ChannelDto {
                    id: "10".to_string(),
                    name: "general".to_string(),
                },
                ChannelDto {
                    id: "11".to_string(),
                    name: "news".to_string(),
                },
            ]),
            &mut composer,
        );

        assert_eq!(composer.channel_id.as_deref(), Some("10"));
        assert!(session.table.channels.contains_key("11"));
    }

    #[test]
    fn roles_replace_table() {
        let mut session = Session::default();
        let mut composer = Composer::default();
        let role = |id: &str| RoleDto {
            id: id.to_string(),
            name: format!("role-{}", id),
            color: "#ffffff".to_string(),
        };

        session.apply(ServerEvent::RolesList(vec![role("1")]), &mut composer);
        session.apply(ServerEvent::RolesList(vec![role("2")]), &mut composer);

        assert!(!session.table.roles.contains_key("1"));
        assert!(session.table.roles.contains_key("2"));
    }

    #[test]
    fn bot_info_enables_title_slot() {
        let mut session = Session::default();
        let mut composer = Composer::default();

        session.apply(
            ServerEvent::BotInfo(BotInfoDto {
                username: "Herald".to_string(),
                avatar_url: "https://cdn.example/a.png".to_string(),
                title_url_accepts_attachment: true,
            }),
            &mut composer,
        );

        assert!(composer.slot_enabled(AttachmentSlot::TitleUrl));
    }

    /// Tests the send round trip on success.
    ///
    /// Expected: composer reset, success banner that hides itself
    #[test]
    fn successful_send_resets_composer() {
        let mut session = Session::default();
        let mut composer = composer_with_text();

        let request = session.begin_send(&composer);
        assert!(matches!(request, Some(ClientEvent::SendMessage(_))));
        assert!(session.sending);

        session.apply(ServerEvent::MessageSent(MessageSentDto::sent()), &mut composer);

        assert!(!session.sending);
        assert!(composer.content.is_empty());
        assert_eq!(composer.channel_id.as_deref(), Some("1"));
        let status = session.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert!(status.auto_hides());
    }

    /// Tests the send round trip on failure.
    ///
    /// Expected: composer untouched, error banner with the server's reason
    #[test]
    fn failed_send_keeps_composer() {
        let mut session = Session::default();
        let mut composer = composer_with_text();
        session.begin_send(&composer);

        session.apply(
            ServerEvent::MessageSent(MessageSentDto::failed("Missing Access")),
            &mut composer,
        );

        assert_eq!(composer.content, "hello");
        let status = session.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, "Failed to send: Missing Access");
        assert!(!status.auto_hides());
    }

    #[test]
    fn invalid_form_is_not_sent() {
        let mut session = Session::default();
        let composer = Composer::default();

        assert_eq!(session.begin_send(&composer), None);
        assert!(!session.sending);
        assert_eq!(
            session.status.as_ref().map(|status| status.kind),
            Some(StatusKind::Error)
        );
    }

    #[test]
    fn ignores_double_submit() {
        let mut session = Session::default();
        let composer = composer_with_text();

        assert!(session.begin_send(&composer).is_some());
        assert!(session.begin_send(&composer).is_none());
    }

    #[test]
    fn error_fails_pending_lists() {
        let mut session = Session::default();
        let mut composer = Composer::default();
        session.initial_requests();
        session.apply(ServerEvent::RolesList(Vec::new()), &mut composer);

        session.apply(
            ServerEvent::Error {
                message: "Missing Permissions".to_string(),
            },
            &mut composer,
        );

        assert_eq!(session.roles, Cache::Fetched(Vec::new()));
        assert_eq!(
            session.channels,
            Cache::Error(ApiError::server("Missing Permissions"))
        );
    }

    #[test]
    fn stale_timer_keeps_newer_status() {
        let mut session = Session::default();
        let first = session.set_status(StatusKind::Success, "Message sent!").serial;
        session.set_status(StatusKind::Success, "Message sent!");

        session.hide_status(first);

        assert!(session.status.is_some());
    }
}
