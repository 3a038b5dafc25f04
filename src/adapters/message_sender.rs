use serenity::async_trait;
use serenity::model::id::{ChannelId, MessageId};

use crate::draft::{FollowupMessage, NewMessage, WebhookMessage};

/// Transport delivering finished drafts to Discord
///
/// Implementations leave the drafts untouched apart from file stream
/// positions, which are restored after every attempt.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Post a message to a channel
    ///
    /// # Returns
    ///
    /// ID of the created message
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: &NewMessage,
    ) -> anyhow::Result<MessageId>;

    /// Send a followup for the interaction identified by `interaction_token`
    async fn send_followup(
        &self,
        interaction_token: &str,
        message: &FollowupMessage,
    ) -> anyhow::Result<MessageId>;

    /// Execute the webhook at `webhook_url`
    ///
    /// # Returns
    ///
    /// ID of the created message, if Discord reported one back
    async fn execute_webhook(
        &self,
        webhook_url: &str,
        message: &WebhookMessage,
    ) -> anyhow::Result<Option<MessageId>>;
}
