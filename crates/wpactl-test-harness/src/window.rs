//! Model of the transport's fixed-size receive buffer.
//!
//! The transport reads each reply into a buffer of a fixed size and silently
//! drops whatever does not fit. [`ReceiveWindow`] reproduces that so tests
//! can feed decoders the same cut-off bytes a real transport would.

use bytes::Bytes;

/// A receive buffer of fixed capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiveWindow {
    size: usize,
}

impl ReceiveWindow {
    /// A window of `size` bytes.
    pub fn new(size: usize) -> Self {
        ReceiveWindow { size }
    }

    /// Capacity of the window in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return what the transport would hand over for `reply`: at most
    /// [`size`](Self::size) leading bytes.
    pub fn receive(&self, reply: &[u8]) -> Bytes {
        let len = reply.len().min(self.size);
        Bytes::copy_from_slice(&reply[..len])
    }

    /// Whether `received` filled the window completely.
    pub fn is_saturated(&self, received: &[u8]) -> bool {
        received.len() >= self.size
    }
}

impl Default for ReceiveWindow {
    fn default() -> Self {
        ReceiveWindow::new(wpactl_core::DEFAULT_MAX_RECEIVE_SIZE)
    }
}
