//! Window pixel buffers and the store that owns them.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, trace};

use crate::error::BufferError;

/// RGBA8: one byte per channel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Unique identifier for a buffer held by a [`BufferManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(u64);

impl BufferId {
    /// Creates a new, process-wide unique `BufferId`.
    fn new_unique() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        BufferId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Number of bytes an RGBA8 buffer of `width x height` occupies.
///
/// # Errors
///
/// [`BufferError::InvalidDimensions`] if either dimension is zero,
/// [`BufferError::AllocationFailure`] if the size overflows `usize`.
pub fn rgba_byte_len(width: u32, height: u32) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or(BufferError::AllocationFailure { bytes: usize::MAX })
}

fn try_alloc(bytes: usize) -> Result<Vec<u8>, BufferError> {
    let mut data = Vec::new();
    data.try_reserve_exact(bytes)
        .map_err(|_| BufferError::AllocationFailure { bytes })?;
    Ok(data)
}

/// An RGBA8 pixel block, row-major with no padding between rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zero-filled buffer.
    pub fn zeroed(width: u32, height: u32) -> Result<Self, BufferError> {
        let bytes = rgba_byte_len(width, height)?;
        let mut data = try_alloc(bytes)?;
        data.resize(bytes, 0);
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Replaces the whole content with `source`.
    ///
    /// The copy goes into a new block which is then swapped in, so on error the
    /// old content is untouched.
    pub fn replace_with(&mut self, source: &[u8]) -> Result<(), BufferError> {
        let expected = self.data.len();
        if source.len() != expected {
            return Err(BufferError::SizeMismatch { expected, actual: source.len() });
        }
        let mut fresh = try_alloc(expected)?;
        fresh.extend_from_slice(source);
        self.data = fresh;
        Ok(())
    }
}

/// A buffer shared between the store and its readers.
pub type SharedBuffer = Arc<Mutex<PixelBuffer>>;

/// Owns every window buffer, keyed by [`BufferId`].
#[derive(Debug, Default)]
pub struct BufferManager {
    buffers: HashMap<BufferId, SharedBuffer>,
}

impl BufferManager {
    /// Creates a new, empty `BufferManager`.
    pub fn new() -> Self {
        Self {
            buffers: HashMap::new(),
        }
    }

    /// Allocates a zero-filled `width x height` RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidDimensions`] for a zero dimension and
    /// [`BufferError::AllocationFailure`] when the memory cannot be obtained.
    /// The store is unchanged on error.
    pub fn allocate(&mut self, width: u32, height: u32) -> Result<BufferId, BufferError> {
        let buffer = PixelBuffer::zeroed(width, height)?;
        let id = BufferId::new_unique();
        debug!(buffer = %id, width, height, bytes = buffer.byte_len(), "Allocated pixel buffer");
        self.buffers.insert(id, Arc::new(Mutex::new(buffer)));
        Ok(id)
    }

    /// Replaces the content of buffer `id` with `source`, byte for byte.
    ///
    /// Only the lock of this one buffer is taken.
    pub fn update(&self, id: BufferId, source: &[u8]) -> Result<(), BufferError> {
        let shared = self.get(id)?;
        let mut buffer = shared.lock().map_err(|_| BufferError::Poisoned(id))?;
        buffer.replace_with(source)?;
        trace!(buffer = %id, bytes = source.len(), "Swapped in new buffer content");
        Ok(())
    }

    /// Returns a shared handle to buffer `id`.
    pub fn get(&self, id: BufferId) -> Result<SharedBuffer, BufferError> {
        self.buffers
            .get(&id)
            .cloned()
            .ok_or(BufferError::UnknownBuffer(id))
    }

    /// Drops the store's handle to buffer `id`. Handles already given out stay
    /// valid until dropped.
    pub fn release(&mut self, id: BufferId) -> Result<(), BufferError> {
        self.buffers
            .remove(&id)
            .map(|_| debug!(buffer = %id, "Released pixel buffer"))
            .ok_or(BufferError::UnknownBuffer(id))
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}
