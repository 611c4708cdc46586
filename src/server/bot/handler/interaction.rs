//! Fallback replies for slash commands and message components.
//!
//! Commands are not registered by this application; these replies cover
//! commands registered elsewhere and components on messages the composer sent.
//! Every reply is ephemeral.

use dioxus_logger::tracing;
use serenity::all::{
    ComponentInteractionDataKind, Context, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseMessage, Interaction, Timestamp,
};

pub const UNKNOWN_COMMAND: &str = "This command does not exist.";
pub const NOT_CONFIGURED: &str = "This interaction is not configured yet.";
const INFO_COLOR: u32 = 0xf5aa20;

pub fn info_embed(bot_name: &str, avatar_url: &str) -> CreateEmbed {
    CreateEmbed::new()
        .color(INFO_COLOR)
        .title(format!("About {}", bot_name))
        .description(format!(
            "Hi! I am **{}**, the bot of this server. Staff use my web composer to post announcements.",
            bot_name
        ))
        .field("Host", "Self-hosted", true)
        .field("Terms of Service", "Work in progress", false)
        .field("Privacy Policy", "Work in progress", false)
        .footer(CreateEmbedFooter::new(bot_name).icon_url(avatar_url))
        .timestamp(Timestamp::now())
}

/// Reply text for a component interaction, if the kind is handled.
pub fn component_reply(kind: &ComponentInteractionDataKind) -> Option<String> {
    match kind {
        ComponentInteractionDataKind::Button => Some(NOT_CONFIGURED.to_string()),
        ComponentInteractionDataKind::StringSelect { values } => {
            Some(format!("You selected: {}", values.join(", ")))
        }
        _ => None,
    }
}

fn ephemeral() -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new().ephemeral(true)
}

pub async fn handle_interaction(ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            let reply = if command.data.name == "info" {
                let (name, avatar_url) = {
                    let user = ctx.cache.current_user();
                    (user.name.clone(), user.face())
                };
                ephemeral().embed(info_embed(&name, &avatar_url))
            } else {
                tracing::debug!("Unknown command /{}", command.data.name);
                ephemeral().content(UNKNOWN_COMMAND)
            };

            if let Err(e) = command
                .create_response(&ctx.http, CreateInteractionResponse::Message(reply))
                .await
            {
                tracing::error!("Failed to answer /{}: {:?}", command.data.name, e);
            }
        }
        Interaction::Component(component) => {
            let Some(content) = component_reply(&component.data.kind) else {
                return;
            };

            tracing::info!(
                "Component {} used by {}",
                component.data.custom_id,
                component.user.name
            );

            let reply = CreateInteractionResponse::Message(ephemeral().content(content));
            if let Err(e) = component.create_response(&ctx.http, reply).await {
                tracing::error!(
                    "Failed to answer component {}: {:?}",
                    component.data.custom_id,
                    e
                );
            }
        }
        _ => {}
    }
}
