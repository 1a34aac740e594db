use std::num::NonZeroU16;

use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;
use tracing::{debug, error, info};

use crate::commands::ping;

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            "Logged in as {}",
            bot_tag(&ready.user.name, ready.user.discriminator)
        );
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let Some(reply) = ping::reply_for(&msg.content) else {
            return;
        };

        match msg.reply(&ctx.http, reply).await {
            Ok(_) => debug!(channel = %msg.channel_id, "Replied to {}", ping::TRIGGER),
            Err(e) => error!("Failed to send reply: {}", e),
        }
    }
}

// Pomelo accounts have no discriminator.
fn bot_tag(name: &str, discriminator: Option<NonZeroU16>) -> String {
    match discriminator {
        Some(d) => format!("{}#{:04}", name, d),
        None => name.to_string(),
    }
}
