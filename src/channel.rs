//! Command byte queue between the serial port and the main loop.
//!
//! The serial interrupt (or a reader task) pushes raw bytes, the main loop
//! takes at most one per tick. Built on `critical-section` and
//! `heapless::Deque`, so it is safe to share with interrupt handlers.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;
use heapless::Deque;

/// Default queue depth
pub const DEFAULT_CHANNEL_SIZE: usize = 16;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub u8);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

impl fmt::Display for TrySendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command channel full, dropped byte 0x{:02X}", self.0)
    }
}

impl fmt::Display for TryReceiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("command channel empty")
    }
}

/// Bounded, interrupt-safe queue of command bytes
pub struct CommandChannel<const SIZE: usize = DEFAULT_CHANNEL_SIZE> {
    inner: Mutex<RefCell<Deque<u8, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    /// Queue one byte.
    ///
    /// Returns `Err(TrySendError(byte))` if the channel is full.
    pub fn try_send(&self, byte: u8) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(byte).map_err(TrySendError)
        })
    }

    /// Queue as many bytes as fit, returning how many were accepted.
    pub fn feed(&self, bytes: &[u8]) -> usize {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            bytes
                .iter()
                .take_while(|&&byte| queue.push_back(byte).is_ok())
                .count()
        })
    }

    /// Take the oldest queued byte.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<u8, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of bytes waiting.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of a [`CommandChannel`], held by the serial reader.
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, byte: u8) -> Result<(), TrySendError> {
        self.channel.try_send(byte)
    }

    pub fn feed(&self, bytes: &[u8]) -> usize {
        self.channel.feed(bytes)
    }
}

/// Consumer side of a [`CommandChannel`], held by the controller.
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<u8, TryReceiveError> {
        self.channel.try_receive()
    }
}
