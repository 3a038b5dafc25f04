mod attached_file;
mod builder;
mod component;
mod embed;
mod error;
mod followup_message;
pub mod limits;
mod mention;
mod message_draft;
mod new_message;
mod webhook_message;

// Re-export public API
pub use attached_file::{AttachedFile, FileStream, ReadSeek, file_stream};
pub use builder::MessageBuilder;
pub use component::{ButtonStyle, Component, ComponentRow, SelectMenu, SelectOption};
pub use embed::{Embed, EmbedField};
pub use error::ValidationError;
pub use followup_message::FollowupMessage;
pub use mention::Mention;
pub use message_draft::MessageDraft;
pub use new_message::NewMessage;
pub use webhook_message::WebhookMessage;
