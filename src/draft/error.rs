use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::limits::{
    MAX_COMPONENT_ROWS, MAX_COMPONENTS_PER_ROW, MAX_CONTENT_LEN, MAX_FILES, MAX_USERNAME_LEN,
};

/// Rejected mutation of a message draft
///
/// A failed call leaves the draft exactly as it was, except for `add_files`
/// which may already have attached the entries preceding the rejected one.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("content is {len} characters long, the limit is {max}", max = MAX_CONTENT_LEN)]
    ContentTooLong { len: usize },

    #[error("cannot attach more than {max} files", max = MAX_FILES)]
    TooManyFiles,

    #[error("a file named {name:?} is already attached")]
    DuplicateFileName { name: String },

    #[error("a component row needs at least one component")]
    EmptyComponentRow,

    #[error("component row has {len} components, the limit is {max}", max = MAX_COMPONENTS_PER_ROW)]
    ComponentRowTooLarge { len: usize },

    #[error("message would have {len} component rows, the limit is {max}", max = MAX_COMPONENT_ROWS)]
    TooManyComponentRows { len: usize },

    #[error("webhook username is {len} characters long, the limit is {max}", max = MAX_USERNAME_LEN)]
    UsernameTooLong { len: usize },

    #[error("failed to query or move the file stream position")]
    StreamPosition(#[source] io::Error),

    #[error("failed to open {path:?} for attaching")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
