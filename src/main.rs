mod client;
mod markup;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{bot, config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        tracing::info!("Starting server");

        // The composer posts through the bot's HTTP client
        let (bot_client, discord_http) = bot::start::init_bot(&config).await?;

        startup::check_guild_access(&discord_http, config.guild_id()).await?;

        tokio::spawn(async move {
            if let Err(e) = bot::start::start_bot(bot_client).await {
                tracing::error!("Discord bot error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes =
            server::router::router().with_state(AppState::new(discord_http, &config));
        router = router.merge(server_routes);

        Ok(router)
    })
}
