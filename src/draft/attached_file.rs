use std::fmt;
use std::io::{self, Read, Seek, SeekFrom};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Readable and seekable byte source
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// Shared handle to a file's byte stream
///
/// Drafts only hold the handle; the bytes are read by the transport at send time.
/// Cloning an [`AttachedFile`] shares the same underlying stream.
pub type FileStream = Arc<Mutex<dyn ReadSeek + Send>>;

/// Wrap any seekable reader into a [`FileStream`]
pub fn file_stream<S>(stream: S) -> FileStream
where
    S: Read + Seek + Send + 'static,
{
    Arc::new(Mutex::new(stream))
}

/// File attached to a draft
#[derive(Clone)]
pub struct AttachedFile {
    name: String,
    stream: FileStream,
    reset_position: Option<u64>,
}

impl AttachedFile {
    pub(crate) fn new(name: String, stream: FileStream, reset_position: Option<u64>) -> Self {
        Self {
            name,
            stream,
            reset_position,
        }
    }

    /// File name, unique within a draft
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stream(&self) -> &FileStream {
        &self.stream
    }

    /// Offset the stream is restored to after transmission, if requested
    pub fn reset_position(&self) -> Option<u64> {
        self.reset_position
    }

    /// Current offset of the stream
    pub fn position(&self) -> io::Result<u64> {
        self.lock().stream_position()
    }

    /// Remember the current offset as the reset position
    pub(crate) fn record_position(&mut self) -> io::Result<u64> {
        let position = self.position()?;
        self.reset_position = Some(position);
        Ok(position)
    }

    /// Seek back to the recorded reset position
    ///
    /// Returns `Ok(false)` if no position was recorded.
    pub fn restore_position(&self) -> io::Result<bool> {
        match self.reset_position {
            Some(position) => {
                self.lock().seek(SeekFrom::Start(position))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Seek the stream to its start
    pub fn rewind(&self) -> io::Result<()> {
        self.lock().rewind()
    }

    /// Read the stream from its current position to the end
    pub fn read_remaining(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.lock().read_to_end(&mut buffer)?;
        Ok(buffer)
    }

    /// Whether both entries point at the same underlying stream
    pub fn shares_stream_with(&self, other: &AttachedFile) -> bool {
        Arc::ptr_eq(&self.stream, &other.stream)
    }

    fn lock(&self) -> MutexGuard<'_, dyn ReadSeek + Send + 'static> {
        self.stream.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq for AttachedFile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.reset_position == other.reset_position
            && self.shares_stream_with(other)
    }
}

impl fmt::Debug for AttachedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedFile")
            .field("name", &self.name)
            .field("reset_position", &self.reset_position)
            .finish_non_exhaustive()
    }
}
