//! Owned output buffers produced by command handlers.

use bytes::{Bytes, BytesMut};

/// Growable byte buffer returned by a command handler.
///
/// Ownership moves from the handler to the caller on return; the buffer is
/// released exactly once, when the last owner drops it. Unlike the borrowed
/// argument spans, a fragment owns its bytes and may outlive the scanned
/// document.
///
/// # Example
///
/// ```
/// use shtml_directives::OutputFragment;
///
/// let mut fragment = OutputFragment::with_capacity(11);
/// fragment.append(b"hello ");
/// fragment.append(b"world");
/// assert_eq!(fragment.as_slice(), b"hello world");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputFragment {
    buf: BytesMut,
}

impl OutputFragment {
    /// Create an empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty fragment with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Create a fragment holding a copy of `bytes`.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            buf: BytesMut::from(bytes),
        }
    }

    /// Append `bytes`, growing the buffer as needed.
    pub fn append(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// The fragment's bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Number of bytes in the fragment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if the fragment holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Convert into an immutable, cheaply cloneable byte buffer.
    #[must_use]
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

impl AsRef<[u8]> for OutputFragment {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
