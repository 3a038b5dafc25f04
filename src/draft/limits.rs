//! Discord API limits enforced while accumulating a draft
//!
//! Text lengths are counted in characters (Unicode scalar values), not bytes,
//! matching how Discord measures them.

/// Maximum message content length
pub const MAX_CONTENT_LEN: usize = 2000;

/// Maximum number of attachments per message
pub const MAX_FILES: usize = 10;

/// Maximum number of action rows per message
pub const MAX_COMPONENT_ROWS: usize = 5;

/// Maximum number of components in a single action row
pub const MAX_COMPONENTS_PER_ROW: usize = 5;

/// Maximum length of a webhook username override
pub const MAX_USERNAME_LEN: usize = 80;

/// Count characters the way Discord does
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
