//! # Overview
//!
//! `midi-wire` builds outgoing MIDI 1.0 messages and encodes them into their canonical bytes,
//! optionally making use of running status.
//!
//! Building a message validates every argument, and writing it can never produce a malformed
//! byte stream:
//!
//! ```rust
//! # #[cfg(feature = "alloc")] {
//! use midi_wire::Message;
//!
//! let msg = Message::note_on(1, 60, 100).unwrap();
//! assert_eq!(msg.to_bytes(), [0x90, 60, 100]);
//!
//! // Channels are numbered 1 to 16, and data bytes only hold 7 bits
//! assert!(Message::note_on(17, 60, 100).is_err());
//! assert!(Message::note_on(1, 128, 100).is_err());
//! # }
//! ```
//!
//! The [`Message`](enum.Message.html) enum is the main type in the crate.
//! It is a closed set covering every MIDI 1.0 message: channel voice, channel mode, system
//! common, system realtime and system exclusive.
//!
//! # Validation
//!
//! The checked constructors (`Message::note_on`, `Message::control_change`, ...) take loosely
//! typed integers, as they usually come from user input, and return an
//! [`Error::OutOfRange`](enum.Error.html) naming the offending field, the rejected value and its
//! legal range.
//! Nothing is ever clamped or masked.
//!
//! Messages can also be assembled directly out of the restricted integer types in the
//! [`num`](num/index.html) module, which cannot hold out-of-range values to begin with.
//!
//! # Running status
//!
//! When several channel messages with the same status byte are sent in a row, the status byte of
//! all but the first can be left out.
//! A [`RunningStatusEncoder`](struct.RunningStatusEncoder.html) tracks this for one output
//! stream:
//!
//! ```rust
//! # #[cfg(feature = "alloc")] {
//! use midi_wire::{Message, RunningStatusEncoder};
//!
//! let mut encoder = RunningStatusEncoder::new();
//! let bytes = encoder.encode_all(&[
//!     Message::note_on(1, 60, 100).unwrap(),
//!     Message::timing_clock(),
//!     Message::note_on(1, 62, 100).unwrap(),
//! ]);
//! assert_eq!(bytes, [0x90, 60, 100, 0xF8, 62, 100]);
//! # }
//! ```
//!
//! # About features
//!
//! - The `alloc` feature enables the `Vec<u8>` output sink and the methods returning vectors.
//! - The `std` feature enables writing to any `std::io::Write` through
//!   [`IoWrap`](io/struct.IoWrap.html).
//!
//! Both are enabled by default. Disabling them with `default-features = false` makes the crate
//! `no_std`; messages can still be written into fixed-size buffers.
//!
//! # Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: rejected constructor arguments
//! at debug level and running status transitions at trace level.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

macro_rules! bail {
    ($err:expr) => {{
        return Err($err.into());
    }};
}
macro_rules! ensure {
    ($cond:expr, $err:expr) => {{
        if !$cond {
            bail!($err)
        }
    }};
}

/// All of the errors this crate produces.
mod error;

mod prelude {
    pub(crate) use crate::{
        control,
        error::{Error, Result, StdResult},
        io::{Write, WriteResult},
        message::{
            status, Category, ChannelMode, ChannelVoice, Message, MonoChannels,
            MtcQuarterFrameMessage, PitchBend, SystemCommon, SystemRealtime,
        },
        primitive::{
            u14, u4, u7, validate_14bit, validate_channel, validate_data_byte, validate_nibble,
            validate_range, Channel,
        },
        wire::serialize,
    };
    #[cfg(feature = "std")]
    pub(crate) use crate::io::IoWrap;
    #[cfg(feature = "alloc")]
    pub(crate) use alloc::vec::Vec;
    pub(crate) use core::{fmt, mem};
    #[cfg(feature = "std")]
    pub(crate) use std::io;
}

mod builder;
pub mod control;
pub mod io;
mod message;
mod primitive;
mod running_status;
mod wire;

#[cfg(feature = "alloc")]
pub use crate::wire::serialize_to_vec;
pub use crate::{
    error::{Error, Result},
    message::{
        status, Arity, Category, ChannelMode, ChannelVoice, Message, MessageKind, MonoChannels,
        MtcQuarterFrameMessage, PitchBend, SystemCommon, SystemRealtime,
    },
    primitive::{
        split_14bit, validate_14bit, validate_channel, validate_data_byte, validate_nibble,
        validate_range, Channel,
    },
    running_status::{Framing, RunningStatusEncoder, StreamState},
    wire::serialize,
};

/// Exotically-sized integers used by the MIDI standard.
pub mod num {
    pub use crate::primitive::{u14, u4, u7};
}

#[cfg(test)]
mod test;
