use anyhow::Context as _;
use serde::Deserialize;
use serenity::model::id::{ChannelId, MessageId};
use std::num::NonZeroU64;
use std::path::PathBuf;

use crate::draft::{MessageBuilder, NewMessage, ValidationError};

/// Deserialize a comma-separated environment variable into a list of paths
fn deserialize_path_list<'de, D>(deserializer: D) -> Result<Vec<PathBuf>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|list| parse_path_list(&list)).unwrap_or_default())
}

/// Split `a.png, b.txt` into paths, skipping empty entries
fn parse_path_list(list: &str) -> Vec<PathBuf> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[derive(Deserialize, Clone)]
pub struct Params {
    pub discord_token: String,
    pub channel_id: NonZeroU64,

    // Message Configuration
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tts: bool,
    #[serde(default, deserialize_with = "deserialize_path_list")]
    pub attachments: Vec<PathBuf>,
    #[serde(default)]
    pub reply_to: Option<NonZeroU64>,
    #[serde(default)]
    pub mention_on_reply: bool,
}

/// Mask sensitive strings by showing only first and last few characters
fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    let chars: Vec<char> = s.chars().collect();
    let Some(first) = chars.first() else {
        return "<empty>".to_string();
    };

    if chars.len() <= VISIBLE_CHARS * 2 {
        // If string is too short, mask everything except first char
        return format!("{first}***");
    }

    let head: String = chars[..VISIBLE_CHARS].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE_CHARS..].iter().collect();
    format!("{head}***{tail}")
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("discord_token", &mask_token(&self.discord_token))
            .field("channel_id", &self.channel_id)
            .field("content", &self.content)
            .field("tts", &self.tts)
            .field("attachments", &self.attachments)
            .field("reply_to", &self.reply_to)
            .field("mention_on_reply", &self.mention_on_reply)
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        Self::from_vars(std::env::vars())
    }

    /// Load from `(NAME, value)` pairs; zero ids are rejected here
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Params>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Params>(vars).context("Failed to load configuration")
    }

    pub fn channel_id(&self) -> ChannelId {
        ChannelId::new(self.channel_id.get())
    }

    /// Build the message described by the configuration
    ///
    /// Attachments are opened from disk in the configured order.
    pub fn build_message(&self) -> Result<NewMessage, ValidationError> {
        let mut message = NewMessage::new();

        if let Some(content) = &self.content {
            message.set_content(content.as_str())?;
        }
        message.set_tts(self.tts);

        for path in &self.attachments {
            message.add_file_from_path(path, false)?;
        }

        if let Some(reply_to) = self.reply_to {
            message
                .reply_to(self.channel_id(), MessageId::new(reply_to.get()))
                .mention_on_reply(self.mention_on_reply);
        }

        Ok(message)
    }
}
