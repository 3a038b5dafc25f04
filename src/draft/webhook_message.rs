use serenity::model::id::ChannelId;
use tracing::debug;

use super::builder::MessageBuilder;
use super::error::ValidationError;
use super::limits::{MAX_USERNAME_LEN, char_len};
use super::message_draft::MessageDraft;

/// Message executed through a webhook
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WebhookMessage {
    draft: MessageDraft,
    username: Option<String>,
    avatar_url: Option<String>,
    thread_id: Option<ChannelId>,
}

impl WebhookMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`MessageDraft::copy_from`]
    pub fn from_builder<B>(source: &B) -> Result<Self, ValidationError>
    where
        B: MessageBuilder + ?Sized,
    {
        Ok(Self {
            draft: MessageDraft::copy_from(source)?,
            ..Self::default()
        })
    }

    /// Override the webhook's display name
    ///
    /// # Errors
    ///
    /// * `UsernameTooLong` - more than 80 characters
    pub fn username(&mut self, username: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let username = username.into();
        let len = char_len(&username);

        if len > MAX_USERNAME_LEN {
            debug!(len, "Rejected webhook username exceeding {MAX_USERNAME_LEN} chars");
            return Err(ValidationError::UsernameTooLong { len });
        }

        self.username = Some(username);
        Ok(self)
    }

    /// Override the webhook's avatar
    pub fn avatar_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Post into a thread of the webhook's channel
    pub fn in_thread(&mut self, thread_id: ChannelId) -> &mut Self {
        self.thread_id = Some(thread_id);
        self
    }

    pub fn username_override(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn avatar_url_override(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn thread_id(&self) -> Option<ChannelId> {
        self.thread_id
    }
}

impl MessageBuilder for WebhookMessage {
    fn draft(&self) -> &MessageDraft {
        &self.draft
    }

    fn draft_mut(&mut self) -> &mut MessageDraft {
        &mut self.draft
    }
}
