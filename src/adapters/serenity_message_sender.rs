use anyhow::Context as _;
use serenity::async_trait;
use serenity::builder::Builder as _;
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId};
use serenity::model::webhook::Webhook;
use std::future::Future;
use std::sync::Arc;
use tracing::{info, warn};

use super::message_sender::MessageSender;
use super::serenity_convert::{to_create_message, to_execute_webhook, to_followup};
use crate::draft::{FollowupMessage, MessageBuilder, NewMessage, WebhookMessage};

/// Implementation for sending drafts via Serenity's HTTP client
pub struct SerenityMessageSender {
    http: Arc<Http>,
}

impl SerenityMessageSender {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

/// Seek file streams back after a send attempt, whatever its outcome
fn restore_file_positions<B: MessageBuilder + ?Sized>(message: &B) {
    if let Err(err) = message.reset_file_positions() {
        warn!(?err, "Failed to restore file stream positions after sending");
    }
}

/// Run a send attempt, then restore file positions even if it failed
async fn send_then_restore<B, T, F>(message: &B, attempt: F) -> anyhow::Result<T>
where
    B: MessageBuilder + ?Sized,
    F: Future<Output = anyhow::Result<T>>,
{
    let result = attempt.await;
    restore_file_positions(message);
    result
}

#[async_trait]
impl MessageSender for SerenityMessageSender {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: &NewMessage,
    ) -> anyhow::Result<MessageId> {
        let sent = send_then_restore(message, async {
            channel_id
                .send_message(&self.http, to_create_message(message)?)
                .await
                .context("Failed to send message to Discord")
        })
        .await?;
        info!(
            %channel_id,
            message_id = %sent.id,
            files = message.files().len(),
            "Successfully sent message"
        );

        Ok(sent.id)
    }

    async fn send_followup(
        &self,
        interaction_token: &str,
        message: &FollowupMessage,
    ) -> anyhow::Result<MessageId> {
        let sent = send_then_restore(message, async {
            to_followup(message)?
                .execute(&self.http, (None, interaction_token))
                .await
                .context("Failed to send followup to Discord")
        })
        .await?;
        info!(
            message_id = %sent.id,
            ephemeral = message.is_ephemeral(),
            "Successfully sent followup"
        );

        Ok(sent.id)
    }

    async fn execute_webhook(
        &self,
        webhook_url: &str,
        message: &WebhookMessage,
    ) -> anyhow::Result<Option<MessageId>> {
        let webhook = Webhook::from_url(&self.http, webhook_url)
            .await
            .context("Resolving webhook URL")?;

        let sent = send_then_restore(message, async {
            webhook
                .execute(&self.http, true, to_execute_webhook(message)?)
                .await
                .context("Failed to execute webhook")
        })
        .await?;

        let message_id = sent.map(|sent| sent.id);
        info!(
            webhook_id = %webhook.id,
            ?message_id,
            "Successfully executed webhook"
        );

        Ok(message_id)
    }
}
