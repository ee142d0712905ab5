//! Working buffers for staged encoding.
//!
//! Small requests are served from a per-thread buffer with no contention
//! and no allocation; larger ones borrow from a shared pool. Both paths
//! hand out a [`PooledBuffer`] whose `Drop` returns the buffer, so a
//! borrow is released exactly once on every exit path.

use std::cell::Cell;
use std::sync::Arc;

use ntex_bytes::{BufMut, BytesMut};
use parking_lot::Mutex;

use strata_core::ConvertError;

use crate::convert::{MAX_PAYLOAD, RECORD_HEADER_SIZE};

/// Requests at or below this size are served from the thread-local buffer.
pub const SMALL_BUFFER_SIZE: usize = 8 * 1024;

/// Default capacity for freshly pooled buffers.
const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Maximum number of buffers to keep in the pool.
const DEFAULT_POOL_CAPACITY: usize = 64;

enum LocalSlot {
    /// No buffer has been created on this thread yet.
    Vacant,
    /// The thread-local buffer is parked and available.
    Ready(BytesMut),
    /// The buffer is held by a live `PooledBuffer` on this thread.
    CheckedOut,
}

thread_local! {
    static LOCAL: Cell<LocalSlot> = const { Cell::new(LocalSlot::Vacant) };
}

/// A buffer borrowed from the thread-local slot or the shared pool.
///
/// Dropping the handle returns the buffer to wherever it came from.
pub struct PooledBuffer {
    buf: Option<BytesMut>,
    origin: Origin,
}

enum Origin {
    Local,
    Pool(Arc<PoolInner>),
    Detached,
}

impl PooledBuffer {
    /// Get read access to the inner buffer.
    #[must_use]
    pub fn inner(&self) -> &BytesMut {
        self.buf.as_ref().expect("buffer already detached")
    }

    /// Get mutable access to the inner buffer.
    #[must_use]
    pub fn inner_mut(&mut self) -> &mut BytesMut {
        self.buf.as_mut().expect("buffer already detached")
    }

    /// Take ownership of the inner buffer, preventing return to the pool.
    #[must_use]
    pub fn detach(mut self) -> BytesMut {
        self.buf.take().expect("buffer already detached")
    }
}

impl std::ops::Deref for PooledBuffer {
    type Target = BytesMut;

    fn deref(&self) -> &Self::Target {
        self.inner()
    }
}

impl std::ops::DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner_mut()
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        let origin = std::mem::replace(&mut self.origin, Origin::Detached);
        match (origin, self.buf.take()) {
            (Origin::Local, Some(mut buf)) => {
                buf.clear();
                LOCAL.with(|slot| slot.set(LocalSlot::Ready(buf)));
            }
            // Detached while holding the thread-local buffer: leave the
            // slot empty so the next take allocates a fresh one.
            (Origin::Local, None) => LOCAL.with(|slot| slot.set(LocalSlot::Vacant)),
            (Origin::Pool(inner), Some(buf)) => inner.release(buf),
            _ => {}
        }
    }
}

struct PoolInner {
    free: Mutex<Vec<BytesMut>>,
    buffer_size: usize,
    capacity: usize,
}

impl PoolInner {
    fn release(&self, mut buf: BytesMut) {
        // Oversized buffers are dropped instead of parked (memory bloat guard)
        if buf.capacity() > self.buffer_size * 4 {
            tracing::debug!(capacity = buf.capacity(), "discarding oversized buffer");
            return;
        }
        buf.clear();
        let mut free = self.free.lock();
        if free.len() < self.capacity {
            free.push(buf);
        }
    }
}

/// Shared pool of reusable byte buffers.
///
/// `take` prefers the thread-local buffer for small requests; the shared
/// free list backs everything else. A nested small take on the same
/// thread finds the local slot checked out and falls through to the
/// pool, so the thread-local buffer can never be aliased.
///
/// ## Example
///
/// ```rust
/// use strata_codec::BufferPool;
///
/// let pool = BufferPool::with_config(16 * 1024, 4);
///
/// let mut buffer = pool.take(16 * 1024);
/// buffer.extend_from_slice(b"hello");
///
/// // Buffer is returned to the pool when dropped
/// drop(buffer);
/// assert_eq!(pool.available(), 1);
/// ```
#[derive(Clone)]
pub struct BufferPool {
    inner: Arc<PoolInner>,
}

impl BufferPool {
    /// Create a pool with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_BUFFER_SIZE, DEFAULT_POOL_CAPACITY)
    }

    /// Create a pool with custom buffer size and capacity.
    ///
    /// # Arguments
    /// * `buffer_size` - Initial size for new pooled buffers
    /// * `capacity` - Maximum number of buffers kept in the free list
    #[must_use]
    pub fn with_config(buffer_size: usize, capacity: usize) -> Self {
        Self {
            inner: Arc::new(PoolInner {
                free: Mutex::new(Vec::with_capacity(capacity)),
                buffer_size,
                capacity,
            }),
        }
    }

    /// Borrow a buffer with at least `min_size` bytes of capacity.
    ///
    /// The buffer is cleared and automatically returned when dropped.
    #[must_use]
    pub fn take(&self, min_size: usize) -> PooledBuffer {
        if min_size <= SMALL_BUFFER_SIZE {
            match LOCAL.with(|slot| slot.replace(LocalSlot::CheckedOut)) {
                LocalSlot::Ready(buf) => {
                    return PooledBuffer {
                        buf: Some(buf),
                        origin: Origin::Local,
                    };
                }
                LocalSlot::Vacant => {
                    return PooledBuffer {
                        buf: Some(BytesMut::with_capacity(SMALL_BUFFER_SIZE)),
                        origin: Origin::Local,
                    };
                }
                // Already held further up this thread's stack
                LocalSlot::CheckedOut => {}
            }
        }

        let parked = self.inner.free.lock().pop();
        let mut buf = match parked {
            Some(buf) => buf,
            None => {
                tracing::trace!(min_size, "buffer pool miss, allocating");
                BytesMut::with_capacity(min_size.max(self.inner.buffer_size))
            }
        };
        if buf.capacity() < min_size {
            buf.reserve(min_size);
        }

        PooledBuffer {
            buf: Some(buf),
            origin: Origin::Pool(self.inner.clone()),
        }
    }

    /// Number of buffers currently parked in the shared free list.
    #[must_use]
    pub fn available(&self) -> usize {
        self.inner.free.lock().len()
    }

    /// Pre-allocate buffers in the free list.
    pub fn preallocate(&self, count: usize) {
        let mut free = self.inner.free.lock();
        let to_add = count.min(self.inner.capacity.saturating_sub(free.len()));
        for _ in 0..to_add {
            free.push(BytesMut::with_capacity(self.inner.buffer_size));
        }
    }

    /// Drop all parked buffers.
    pub fn clear(&self) {
        self.inner.free.lock().clear();
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient buffer holding one fully-rendered record before it is
/// copied to its final destination.
///
/// A staging buffer is valid for a single in-flight encode: the caller
/// lends it to `size_of`, which renders the record, then hands it to
/// `write_to`, which copies the bytes verbatim. Exclusive use is
/// enforced by ownership; the backing buffer is acquired lazily at
/// first render and returned to its source on drop.
pub struct Staging {
    pool: BufferPool,
    buf: Option<PooledBuffer>,
}

impl Staging {
    /// Create an empty staging buffer drawing from `pool`.
    #[must_use]
    pub fn new(pool: &BufferPool) -> Self {
        Self {
            pool: pool.clone(),
            buf: None,
        }
    }

    /// Render a whole record (header plus payload) into the buffer.
    ///
    /// Returns the record's total size. Fails with
    /// [`ConvertError::SizeOverflow`] before acquiring any buffer when
    /// the payload exceeds the header's length range.
    pub fn render(&mut self, version: i32, payload: &[u8]) -> Result<usize, ConvertError> {
        if payload.len() > MAX_PAYLOAD {
            return Err(ConvertError::SizeOverflow { len: payload.len() });
        }
        let total = RECORD_HEADER_SIZE + payload.len();
        let buf = self.buf.get_or_insert_with(|| self.pool.take(total));
        buf.clear();
        buf.put_i32_le(version);
        buf.put_i32_le(payload.len() as i32);
        buf.put_slice(payload);
        Ok(total)
    }

    /// The rendered record, if `render` has run since the last clear.
    #[must_use]
    pub fn rendered(&self) -> Option<&[u8]> {
        self.buf.as_ref().filter(|buf| !buf.is_empty()).map(|buf| &buf[..])
    }

    /// Discard any rendered record, keeping the backing buffer.
    pub fn clear(&mut self) {
        if let Some(buf) = &mut self.buf {
            buf.clear();
        }
    }
}
