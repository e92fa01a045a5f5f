//! Canonical byte encoding of messages.
//!
//! Encoding is total: a [`Message`](enum.Message.html) is valid by construction, so the only
//! possible failure comes from the output sink.

use crate::prelude::*;

/// The data bytes of a message, in wire order.
enum Payload<'a> {
    Fixed([u8; 2], usize),
    SysEx(&'a [u7]),
}
impl<'a> Payload<'a> {
    fn of(msg: &Message<'a>) -> Payload<'a> {
        let none = Payload::Fixed([0, 0], 0);
        let one = |a: u7| Payload::Fixed([a.as_int(), 0], 1);
        let two = |a: u7, b: u7| Payload::Fixed([a.as_int(), b.as_int()], 2);
        match *msg {
            Message::ChannelVoice { message, .. } => match message {
                ChannelVoice::NoteOff { key, vel } => two(key, vel),
                ChannelVoice::NoteOn { key, vel } => two(key, vel),
                ChannelVoice::PolyKeyPressure { key, pressure } => two(key, pressure),
                ChannelVoice::ControlChange { controller, value } => two(controller, value),
                ChannelVoice::ProgramChange { program } => one(program),
                ChannelVoice::ChannelPressure { pressure } => one(pressure),
                ChannelVoice::PitchBendChange { bend } => {
                    //Note the little-endian order
                    let (lsb, msb) = bend.0.split();
                    two(lsb, msb)
                }
            },
            Message::ChannelMode { mode, .. } => two(mode.controller(), mode.value()),
            Message::Common(common) => match common {
                SystemCommon::MidiTimeCodeQuarterFrame(piece, value) => one(u7::from_int_lossy(
                    piece.as_code() << 4 | value.as_int(),
                )),
                SystemCommon::SongPosition(pos) => {
                    let (lsb, msb) = pos.split();
                    two(lsb, msb)
                }
                SystemCommon::SongSelect(song) => one(song),
                SystemCommon::TuneRequest => none,
            },
            Message::Realtime(_) => none,
            Message::SysEx(data) => Payload::SysEx(data),
        }
    }
}

/// Write `msg` to `out`, omitting the status byte if `elide_status` is set.
///
/// Only channel messages may have their status elided: the status byte of system messages is
/// always written, and System Exclusive is always framed by `0xF0` and `0xF7`.
/// Usually `elide_status` comes from a
/// [`RunningStatusEncoder`](struct.RunningStatusEncoder.html).
pub fn serialize<W: Write>(msg: &Message, elide_status: bool, out: &mut W) -> WriteResult<W> {
    let elide = elide_status && msg.category().allows_running_status();
    match Payload::of(msg) {
        Payload::Fixed(data, len) => {
            if elide {
                out.write(&data[..len])
            } else {
                let mut buf = [msg.status_byte(), 0, 0];
                buf[1..=len].copy_from_slice(&data[..len]);
                out.write(&buf[..=len])
            }
        }
        Payload::SysEx(data) => {
            out.write(&[status::SOX])?;
            out.write(u7::slice_as_int(data))?;
            out.write(&[status::EOX])
        }
    }
}

/// Encode `msg` into a freshly allocated vector.
///
/// This function is only available with the `alloc` feature enabled.
#[cfg(feature = "alloc")]
pub fn serialize_to_vec(msg: &Message, elide_status: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(msg.encoded_len(elide_status));
    match serialize(msg, elide_status, &mut out) {
        Ok(()) => out,
        Err(never) => match never {},
    }
}

impl<'a> Message<'a> {
    /// Write this standalone message, including its status byte.
    #[inline]
    pub fn write<W: Write>(&self, out: &mut W) -> WriteResult<W> {
        serialize(self, false, out)
    }

    /// Write this standalone message to the given `std::io::Write` output.
    ///
    /// This method is only available with the `std` feature enabled.
    #[cfg(feature = "std")]
    #[inline]
    pub fn write_std<W: io::Write>(&self, out: W) -> io::Result<()> {
        self.write(&mut IoWrap(out))
    }

    /// Encode this standalone message into a vector.
    ///
    /// This method is only available with the `alloc` feature enabled.
    #[cfg(feature = "alloc")]
    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        serialize_to_vec(self, false)
    }

    /// The exact amount of bytes this message takes on the wire.
    pub fn encoded_len(&self, elide_status: bool) -> usize {
        match Payload::of(self) {
            Payload::Fixed(_, len) => {
                if elide_status && self.category().allows_running_status() {
                    len
                } else {
                    1 + len
                }
            }
            Payload::SysEx(data) => data.len() + 2,
        }
    }
}
