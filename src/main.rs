use anyhow::Context as _;
use draftcord::adapters::{MessageSender, SerenityMessageSender};
use draftcord::draft::MessageBuilder;
use draftcord::params::Params;
use serenity::http::Http;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Default: draftcord=info, serenity=warn (suppress serenity's normal operation logs)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "draftcord=info,serenity=warn".into()),
        )
        .init();

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = Params::new()?;
    info!(?params, "Application parameters loaded");

    let message = params
        .build_message()
        .context("Building message from parameters")?;
    if message.draft().is_empty() {
        anyhow::bail!("Nothing to send: set CONTENT or ATTACHMENTS");
    }

    let http = Arc::new(Http::new(&params.discord_token));
    let sender = SerenityMessageSender::new(http);

    let message_id = sender
        .send_message(params.channel_id(), &message)
        .await?;
    info!(%message_id, "Done");

    Ok(())
}
