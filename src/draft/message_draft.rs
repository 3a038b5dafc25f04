use std::fs::File;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use super::attached_file::{AttachedFile, FileStream, file_stream};
use super::builder::MessageBuilder;
use super::component::{Component, ComponentRow};
use super::embed::Embed;
use super::error::ValidationError;
use super::limits::{MAX_COMPONENT_ROWS, MAX_CONTENT_LEN, MAX_FILES, char_len};
use super::mention::Mention;

/// Accumulated, not-yet-sent message
///
/// Every fallible mutation validates before touching any field, so a rejected
/// call leaves the draft unchanged. The one exception is [`add_files`], which
/// stops at the first rejected entry and keeps the ones attached before it.
///
/// [`add_files`]: MessageDraft::add_files
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MessageDraft {
    content: Option<String>,
    tts: bool,
    embeds: Vec<Embed>,
    files: Vec<AttachedFile>,
    components: Vec<ComponentRow>,
    mentions: Vec<Mention>,
}

impl MessageDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the accumulated state of another builder
    ///
    /// Embeds, components and mentions are cloned. Files share their stream
    /// handles with `source`, and every shared stream is rewound to its start.
    ///
    /// # Errors
    ///
    /// * `StreamPosition` - a file stream could not be rewound
    pub fn copy_from<B>(source: &B) -> Result<Self, ValidationError>
    where
        B: MessageBuilder + ?Sized,
    {
        let source = source.draft();

        for file in &source.files {
            file.rewind().map_err(ValidationError::StreamPosition)?;
        }

        Ok(source.clone())
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_tts(&self) -> bool {
        self.tts
    }

    pub fn embeds(&self) -> &[Embed] {
        &self.embeds
    }

    pub fn files(&self) -> &[AttachedFile] {
        &self.files
    }

    pub fn components(&self) -> &[ComponentRow] {
        &self.components
    }

    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    /// Whether there is nothing Discord would accept as a message body
    pub fn is_empty(&self) -> bool {
        self.content.as_deref().is_none_or(str::is_empty)
            && self.embeds.is_empty()
            && self.files.is_empty()
            && self.components.is_empty()
    }

    /// Replace the message content
    ///
    /// # Errors
    ///
    /// * `ContentTooLong` - more than 2000 characters
    pub fn set_content(&mut self, text: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let text = text.into();
        let len = char_len(&text);

        if len > MAX_CONTENT_LEN {
            debug!(len, "Rejected content exceeding {MAX_CONTENT_LEN} chars");
            return Err(ValidationError::ContentTooLong { len });
        }

        self.content = Some(text);
        Ok(self)
    }

    pub fn set_tts(&mut self, tts: bool) -> &mut Self {
        self.tts = tts;
        self
    }

    /// Append an embed, doing nothing for `None`
    pub fn add_embed(&mut self, embed: impl Into<Option<Embed>>) -> &mut Self {
        if let Some(embed) = embed.into() {
            self.embeds.push(embed);
        }
        self
    }

    pub fn add_embeds(&mut self, embeds: impl IntoIterator<Item = Embed>) -> &mut Self {
        self.embeds.extend(embeds);
        self
    }

    /// Wrap `components` into a new row and append it
    ///
    /// # Errors
    ///
    /// * `EmptyComponentRow` - `components` is empty
    /// * `ComponentRowTooLarge` - more than 5 components
    /// * `TooManyComponentRows` - the draft already has 5 rows
    pub fn add_component_row(
        &mut self,
        components: Vec<Component>,
    ) -> Result<&mut Self, ValidationError> {
        let row = ComponentRow::new(components)?;
        self.check_row_capacity(1)?;

        self.components.push(row);
        Ok(self)
    }

    /// Append several rows at once
    ///
    /// # Errors
    ///
    /// * `TooManyComponentRows` - the draft would end up with more than 5 rows
    pub fn add_component_rows(
        &mut self,
        rows: impl IntoIterator<Item = ComponentRow>,
    ) -> Result<&mut Self, ValidationError> {
        let rows: Vec<ComponentRow> = rows.into_iter().collect();
        self.check_row_capacity(rows.len())?;

        self.components.extend(rows);
        Ok(self)
    }

    pub fn clear_components(&mut self) -> &mut Self {
        self.components.clear();
        self
    }

    /// Attach a file under `name`
    ///
    /// With `reset_position` set, the stream's current offset is recorded so the
    /// transport can seek back to it after sending.
    ///
    /// # Errors
    ///
    /// * `TooManyFiles` - 10 files are already attached
    /// * `DuplicateFileName` - a file with the same name is already attached
    /// * `StreamPosition` - the stream offset could not be read
    pub fn add_file(
        &mut self,
        name: impl Into<String>,
        stream: FileStream,
        reset_position: bool,
    ) -> Result<&mut Self, ValidationError> {
        let name = name.into();
        self.check_file_slot(&name)?;

        let mut file = AttachedFile::new(name, stream, None);
        if reset_position {
            file.record_position()
                .map_err(ValidationError::StreamPosition)?;
        }

        self.files.push(file);
        Ok(self)
    }

    /// Attach several files, applying the [`add_file`](Self::add_file) rules to each
    ///
    /// Entries are attached in iteration order. On the first rejected entry the
    /// call returns the error, and the entries before it stay attached.
    pub fn add_files<N>(
        &mut self,
        files: impl IntoIterator<Item = (N, FileStream)>,
        reset_position: bool,
    ) -> Result<&mut Self, ValidationError>
    where
        N: Into<String>,
    {
        for (name, stream) in files {
            self.add_file(name, stream, reset_position)?;
        }
        Ok(self)
    }

    /// Open a file from disk and attach it under its file name
    ///
    /// # Errors
    ///
    /// Same as [`add_file`](Self::add_file), plus `FileOpen` if the path has no
    /// file name or cannot be opened.
    pub fn add_file_from_path(
        &mut self,
        path: impl AsRef<Path>,
        reset_position: bool,
    ) -> Result<&mut Self, ValidationError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| ValidationError::FileOpen {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
            })?;

        self.check_file_slot(&name)?;

        let file = File::open(path).map_err(|source| ValidationError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        self.add_file(name, file_stream(file), reset_position)
    }

    /// Append previously attached files as they are
    ///
    /// Names and the file limit are not checked; this is meant for carrying
    /// files over from a draft that already validated them.
    pub fn reattach_files(&mut self, files: impl IntoIterator<Item = AttachedFile>) -> &mut Self {
        self.files.extend(files);
        self
    }

    /// Seek every file that recorded a position back to it
    ///
    /// All files are attempted; the first error is returned.
    pub fn reset_file_positions(&self) -> io::Result<()> {
        let mut first_error = None;

        for file in &self.files {
            if let Err(err) = file.restore_position() {
                warn!(file = %file.name(), ?err, "Failed to restore file stream position");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn add_mention(&mut self, mention: Mention) -> &mut Self {
        self.mentions.push(mention);
        self
    }

    pub fn add_mentions(&mut self, mentions: impl IntoIterator<Item = Mention>) -> &mut Self {
        self.mentions.extend(mentions);
        self
    }

    /// Drop all mention rules matching `predicate`
    pub(crate) fn remove_mentions(&mut self, predicate: impl Fn(&Mention) -> bool) {
        self.mentions.retain(|mention| !predicate(mention));
    }

    /// Reset the draft for reuse
    ///
    /// Content becomes an empty string rather than unset, so an edit built from
    /// a cleared draft blanks the message.
    pub fn clear(&mut self) -> &mut Self {
        self.content = Some(String::new());
        self.tts = false;
        self.embeds.clear();
        self.files.clear();
        self.components.clear();
        self.mentions.clear();
        self
    }

    fn check_row_capacity(&self, additional: usize) -> Result<(), ValidationError> {
        let len = self.components.len() + additional;

        if len > MAX_COMPONENT_ROWS {
            debug!(len, "Rejected component rows exceeding {MAX_COMPONENT_ROWS}");
            return Err(ValidationError::TooManyComponentRows { len });
        }

        Ok(())
    }

    fn check_file_slot(&self, name: &str) -> Result<(), ValidationError> {
        if self.files.len() >= MAX_FILES {
            debug!(file = %name, "Rejected file, already at {MAX_FILES} attachments");
            return Err(ValidationError::TooManyFiles);
        }

        if self.files.iter().any(|file| file.name() == name) {
            debug!(file = %name, "Rejected file, name already attached");
            return Err(ValidationError::DuplicateFileName {
                name: name.to_string(),
            });
        }

        Ok(())
    }
}

impl MessageBuilder for MessageDraft {
    fn draft(&self) -> &MessageDraft {
        self
    }

    fn draft_mut(&mut self) -> &mut MessageDraft {
        self
    }
}
