use dotenvy::dotenv;
use serenity::all::GatewayIntents;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pong::config::Config;
use pong::error::BotError;
use pong::handlers::Handler;

#[tokio::main]
async fn main() -> Result<(), BotError> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting pong bot...");

    let config = Config::from_env()?;

    // MESSAGE_CONTENT is required for the body match; without it the gateway
    // delivers messages with an empty content field.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::Client::builder(&config.token, intents)
        .event_handler(Handler)
        .await
        .map_err(|e| BotError::Client(format!("Failed to create client: {}", e)))?;

    client
        .start()
        .await
        .map_err(|e| BotError::Client(format!("Failed to start client: {}", e)))?;

    Ok(())
}
