//! # Novade Buffer Manager
//!
//! Owns the raw pixel memory of every compositor window. Each buffer is a
//! zero-initialized RGBA8 block of `width * height * 4` bytes kept behind its
//! own lock, so updates to one window never wait on another.
//!
//! Updates are swapped in whole: the new content is copied into a freshly
//! allocated block first and only then replaces the old one, so a reader
//! holding the lock sees either the previous frame or the new one.

pub mod buffer;
pub mod error;

pub use buffer::{rgba_byte_len, BufferId, BufferManager, PixelBuffer, SharedBuffer, BYTES_PER_PIXEL};
pub use error::BufferError;
