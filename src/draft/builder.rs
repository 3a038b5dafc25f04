use std::io;
use std::path::Path;

use super::attached_file::{AttachedFile, FileStream};
use super::component::{Component, ComponentRow};
use super::embed::Embed;
use super::error::ValidationError;
use super::message_draft::MessageDraft;
use super::mention::Mention;

/// Capability shared by every kind of outbound message
///
/// Implementors only expose the [`MessageDraft`] they wrap. The read-only views
/// are object safe, so a transport can take `&dyn MessageBuilder`. The chainable
/// mutators return the implementor's own type, so a variant keeps its
/// variant-specific methods available mid-chain:
///
/// ```
/// use draftcord::draft::{Embed, MessageBuilder, NewMessage};
///
/// let mut message = NewMessage::new();
/// message
///     .set_content("Deploy finished")?
///     .add_embed(Embed::new().title("v1.2.0"))
///     .mention_on_reply(false);
///
/// assert_eq!(message.content(), Some("Deploy finished"));
/// # Ok::<(), draftcord::draft::ValidationError>(())
/// ```
///
/// Code holding a `dyn MessageBuilder` mutates through [`draft_mut`](Self::draft_mut).
pub trait MessageBuilder {
    /// Accumulated state
    fn draft(&self) -> &MessageDraft;

    /// Mutable view over the accumulated state
    fn draft_mut(&mut self) -> &mut MessageDraft;

    fn content(&self) -> Option<&str> {
        self.draft().content()
    }

    fn is_tts(&self) -> bool {
        self.draft().is_tts()
    }

    fn embeds(&self) -> &[Embed] {
        self.draft().embeds()
    }

    fn files(&self) -> &[AttachedFile] {
        self.draft().files()
    }

    fn components(&self) -> &[ComponentRow] {
        self.draft().components()
    }

    fn mentions(&self) -> &[Mention] {
        self.draft().mentions()
    }

    /// See [`MessageDraft::set_content`]
    fn set_content(&mut self, text: impl Into<String>) -> Result<&mut Self, ValidationError>
    where
        Self: Sized,
    {
        self.draft_mut().set_content(text)?;
        Ok(self)
    }

    fn set_tts(&mut self, tts: bool) -> &mut Self
    where
        Self: Sized,
    {
        self.draft_mut().set_tts(tts);
        self
    }

    /// See [`MessageDraft::add_embed`]
    fn add_embed(&mut self, embed: impl Into<Option<Embed>>) -> &mut Self
    where
        Self: Sized,
    {
        self.draft_mut().add_embed(embed);
        self
    }

    fn add_embeds(&mut self, embeds: impl IntoIterator<Item = Embed>) -> &mut Self
    where
        Self: Sized,
    {
        self.draft_mut().add_embeds(embeds);
        self
    }

    /// See [`MessageDraft::add_component_row`]
    fn add_component_row(
        &mut self,
        components: Vec<Component>,
    ) -> Result<&mut Self, ValidationError>
    where
        Self: Sized,
    {
        self.draft_mut().add_component_row(components)?;
        Ok(self)
    }

    /// See [`MessageDraft::add_component_rows`]
    fn add_component_rows(
        &mut self,
        rows: impl IntoIterator<Item = ComponentRow>,
    ) -> Result<&mut Self, ValidationError>
    where
        Self: Sized,
    {
        self.draft_mut().add_component_rows(rows)?;
        Ok(self)
    }

    fn clear_components(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.draft_mut().clear_components();
        self
    }

    /// See [`MessageDraft::add_file`]
    fn add_file(
        &mut self,
        name: impl Into<String>,
        stream: FileStream,
        reset_position: bool,
    ) -> Result<&mut Self, ValidationError>
    where
        Self: Sized,
    {
        self.draft_mut().add_file(name, stream, reset_position)?;
        Ok(self)
    }

    /// See [`MessageDraft::add_files`]
    fn add_files<N>(
        &mut self,
        files: impl IntoIterator<Item = (N, FileStream)>,
        reset_position: bool,
    ) -> Result<&mut Self, ValidationError>
    where
        N: Into<String>,
        Self: Sized,
    {
        self.draft_mut().add_files(files, reset_position)?;
        Ok(self)
    }

    /// See [`MessageDraft::add_file_from_path`]
    fn add_file_from_path(
        &mut self,
        path: impl AsRef<Path>,
        reset_position: bool,
    ) -> Result<&mut Self, ValidationError>
    where
        Self: Sized,
    {
        self.draft_mut().add_file_from_path(path, reset_position)?;
        Ok(self)
    }

    /// See [`MessageDraft::reattach_files`]
    fn reattach_files(&mut self, files: impl IntoIterator<Item = AttachedFile>) -> &mut Self
    where
        Self: Sized,
    {
        self.draft_mut().reattach_files(files);
        self
    }

    fn reset_file_positions(&self) -> io::Result<()> {
        self.draft().reset_file_positions()
    }

    fn add_mention(&mut self, mention: Mention) -> &mut Self
    where
        Self: Sized,
    {
        self.draft_mut().add_mention(mention);
        self
    }

    fn add_mentions(&mut self, mentions: impl IntoIterator<Item = Mention>) -> &mut Self
    where
        Self: Sized,
    {
        self.draft_mut().add_mentions(mentions);
        self
    }

    /// See [`MessageDraft::clear`]
    fn clear(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.draft_mut().clear();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{FollowupMessage, NewMessage, WebhookMessage};

    fn fill<B: MessageBuilder>(builder: &mut B) -> Result<(), ValidationError> {
        builder
            .set_content("generic")?
            .set_tts(true)
            .add_embed(Embed::new().title("generic"))
            .add_mention(Mention::AllRoles)
            .add_component_row(vec![Component::button("Ok", "ok")])?;
        Ok(())
    }

    fn describe(builder: &dyn MessageBuilder) -> String {
        format!(
            "{}:{}:{}",
            builder.content().unwrap_or_default(),
            builder.embeds().len(),
            builder.components().len()
        )
    }

    #[test]
    fn test_generic_code_builds_every_variant() {
        let mut new_message = NewMessage::new();
        let mut followup = FollowupMessage::new();
        let mut webhook = WebhookMessage::new();

        fill(&mut new_message).unwrap();
        fill(&mut followup).unwrap();
        fill(&mut webhook).unwrap();

        for builder in [
            &new_message as &dyn MessageBuilder,
            &followup as &dyn MessageBuilder,
            &webhook as &dyn MessageBuilder,
        ] {
            assert_eq!(describe(builder), "generic:1:1");
            assert!(builder.is_tts());
            assert_eq!(builder.mentions(), &[Mention::AllRoles]);
        }
    }

    #[test]
    fn test_dyn_builder_mutates_through_draft_mut() {
        let mut webhook = WebhookMessage::new();
        {
            let builder: &mut dyn MessageBuilder = &mut webhook;
            builder.draft_mut().set_content("via dyn").unwrap();
        }

        assert_eq!(webhook.content(), Some("via dyn"));
    }

    #[test]
    fn test_failed_mutation_through_variant_leaves_state() {
        let mut followup = FollowupMessage::new();
        followup.set_content("kept").unwrap();

        let result = followup.set_content("x".repeat(2001));

        assert!(result.is_err());
        assert_eq!(followup.content(), Some("kept"));
    }
}
