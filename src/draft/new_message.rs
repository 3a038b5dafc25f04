use serenity::model::id::{ChannelId, MessageId};

use super::builder::MessageBuilder;
use super::error::ValidationError;
use super::mention::Mention;
use super::message_draft::MessageDraft;

/// Message posted to a channel
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NewMessage {
    draft: MessageDraft,
    reply_to: Option<(ChannelId, MessageId)>,
    reply_ping: Option<bool>,
}

impl NewMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the content of another builder
    ///
    /// See [`MessageDraft::copy_from`].
    pub fn from_builder<B>(source: &B) -> Result<Self, ValidationError>
    where
        B: MessageBuilder + ?Sized,
    {
        Ok(Self {
            draft: MessageDraft::copy_from(source)?,
            reply_to: None,
            reply_ping: None,
        })
    }

    /// Send as a reply to `message_id`
    pub fn reply_to(&mut self, channel_id: ChannelId, message_id: MessageId) -> &mut Self {
        self.reply_to = Some((channel_id, message_id));
        self
    }

    /// Referenced message, if this is a reply
    pub fn reply_target(&self) -> Option<(ChannelId, MessageId)> {
        self.reply_to
    }

    /// Whether the author of the replied message gets pinged
    ///
    /// Toggles the [`Mention::RepliedUser`] rule and remembers the choice, so
    /// an explicit `false` still reaches Discord when no other rule is set.
    pub fn mention_on_reply(&mut self, mention: bool) -> &mut Self {
        let draft = &mut self.draft;
        draft.remove_mentions(|rule| *rule == Mention::RepliedUser);
        if mention {
            draft.add_mention(Mention::RepliedUser);
        }
        self.reply_ping = Some(mention);
        self
    }

    /// Explicit reply ping choice, `None` if never set
    pub fn reply_ping(&self) -> Option<bool> {
        self.reply_ping
    }
}

impl MessageBuilder for NewMessage {
    fn draft(&self) -> &MessageDraft {
        &self.draft
    }

    fn draft_mut(&mut self) -> &mut MessageDraft {
        &mut self.draft
    }
}
