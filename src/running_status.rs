//! Running status, the omission of repeated status bytes on an outgoing MIDI stream.
//!
//! Consecutive channel messages sharing the same status byte may leave out every status byte but
//! the first one.
//! Running status rules:
//! - Channel Voice and Channel Mode messages use and set running status.
//! - System Common and System Exclusive messages cancel running status.
//! - System Realtime messages leave running status untouched, since they may appear anywhere in
//!   the stream, even in between the data bytes of another message.

use crate::prelude::*;

/// The running status of an output stream.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum StreamState {
    /// No status can be reused: nothing was sent yet, or the last non-realtime message was a
    /// system message.
    NoStatus,
    /// The status byte of the last channel message sent.
    LastStatus(u8),
}
impl Default for StreamState {
    #[inline]
    fn default() -> StreamState {
        StreamState::NoStatus
    }
}

/// How a message should be framed on the stream, as decided by a [`RunningStatusEncoder`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Framing {
    /// The status byte of the message.
    pub status: u8,
    /// Whether the status byte can be left out.
    pub elide_status: bool,
}

/// Tracks the running status of one output stream, and decides for each outgoing message whether
/// its status byte can be left out.
///
/// Each output stream must own its own encoder, and messages must be submitted in the exact order
/// in which they are sent.
/// The encoder does no synchronization of its own; streams fed from several producers must
/// serialize access to it.
///
/// Note that it's usually discouraged to feed messages with running status to OS APIs, which
/// expect each message to be complete.
/// Use [`RunningStatusEncoder::with_running_status`] to turn elision off in that case.
///
/// ```rust
/// # #[cfg(feature = "alloc")] {
/// use midi_wire::{Message, RunningStatusEncoder};
///
/// let mut encoder = RunningStatusEncoder::new();
/// let mut bytes = Vec::new();
/// encoder.write(&Message::note_on(1, 60, 100).unwrap(), &mut bytes).unwrap();
/// encoder.write(&Message::note_on(1, 64, 100).unwrap(), &mut bytes).unwrap();
/// assert_eq!(bytes, [0x90, 60, 100, 64, 100]);
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct RunningStatusEncoder {
    state: StreamState,
    enabled: bool,
}
impl Default for RunningStatusEncoder {
    #[inline]
    fn default() -> RunningStatusEncoder {
        RunningStatusEncoder::new()
    }
}
impl RunningStatusEncoder {
    /// Create an encoder for a fresh stream, with running status enabled.
    #[inline]
    pub fn new() -> RunningStatusEncoder {
        RunningStatusEncoder::with_running_status(true)
    }

    /// Create an encoder for a fresh stream.
    ///
    /// If `enabled` is `false` status bytes are never elided, although the stream state is still
    /// tracked.
    #[inline]
    pub fn with_running_status(enabled: bool) -> RunningStatusEncoder {
        RunningStatusEncoder {
            state: StreamState::NoStatus,
            enabled,
        }
    }

    /// Enable or disable status elision for the following messages.
    #[inline]
    pub fn set_running_status(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether status elision is enabled.
    #[inline]
    pub fn running_status(&self) -> bool {
        self.enabled
    }

    /// The current stream state.
    #[inline]
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Forget the running status, as when the stream is (re)initialized.
    #[inline]
    pub fn reset(&mut self) {
        log::trace!("running status reset");
        self.state = StreamState::NoStatus;
    }

    /// Advance the stream state past `msg`, and decide how it should be framed.
    ///
    /// Every call counts as `msg` being sent, so messages must be processed exactly once and in
    /// stream order.
    pub fn process(&mut self, msg: &Message) -> Framing {
        let (framing, next) = self.plan(msg);
        self.transition(next);
        framing
    }

    /// Decide the framing of `msg` and the state that follows it, without committing anything.
    fn plan(&self, msg: &Message) -> (Framing, StreamState) {
        let status = msg.status_byte();
        let (elide_status, next) = match msg.category() {
            Category::SystemCommon | Category::SystemExclusive => (false, StreamState::NoStatus),
            Category::SystemRealtime => (false, self.state),
            Category::ChannelVoice | Category::ChannelMode => {
                let next = StreamState::LastStatus(status);
                (self.enabled && self.state == next, next)
            }
        };
        (
            Framing {
                status,
                elide_status,
            },
            next,
        )
    }

    fn transition(&mut self, next: StreamState) {
        if self.state != next {
            log::trace!("running status {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Process `msg` and write it to `out`, leaving out its status byte when possible.
    ///
    /// The stream state only advances once `out` accepted the whole message.
    /// If writing fails the receiver may have seen part of the message, so running status is
    /// dropped and the next channel message carries its status byte again.
    pub fn write<W: Write>(&mut self, msg: &Message, out: &mut W) -> WriteResult<W> {
        let (framing, next) = self.plan(msg);
        match serialize(msg, framing.elide_status, out) {
            Ok(()) => {
                self.transition(next);
                Ok(())
            }
            Err(err) => {
                log::debug!("failed to write midi message, dropping running status");
                self.transition(StreamState::NoStatus);
                Err(err)
            }
        }
    }

    /// Process and encode a whole sequence of messages into a single byte stream.
    ///
    /// This method is only available with the `alloc` feature enabled.
    #[cfg(feature = "alloc")]
    pub fn encode_all<'m, 'a: 'm, I>(&mut self, msgs: I) -> Vec<u8>
    where
        I: IntoIterator<Item = &'m Message<'a>>,
    {
        let mut out = Vec::new();
        for msg in msgs {
            match self.write(msg, &mut out) {
                Ok(()) => {}
                Err(never) => match never {},
            }
        }
        out
    }
}
