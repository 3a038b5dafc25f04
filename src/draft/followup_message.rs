use super::builder::MessageBuilder;
use super::error::ValidationError;
use super::message_draft::MessageDraft;

/// Followup to an interaction response
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FollowupMessage {
    draft: MessageDraft,
    ephemeral: bool,
}

impl FollowupMessage {
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
            ephemeral: false,
        })
    }

    /// Only show the followup to the user who triggered the interaction
    pub fn ephemeral(&mut self, ephemeral: bool) -> &mut Self {
        self.ephemeral = ephemeral;
        self
    }

    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }
}

impl MessageBuilder for FollowupMessage {
    fn draft(&self) -> &MessageDraft {
        &self.draft
    }

    fn draft_mut(&mut self) -> &mut MessageDraft {
        &mut self.draft
    }
}
