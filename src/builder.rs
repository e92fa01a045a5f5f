//! Checked constructors, turning loosely-typed caller input into valid messages.
//!
//! Every constructor validates all of its arguments before building anything, and reports the
//! first offending field as an [`Error::OutOfRange`](enum.Error.html).
//! Values are never clamped or truncated.

use crate::prelude::*;

/// Log a rejected argument before handing the error back.
fn rejected(err: Error) -> Error {
    log::debug!("rejected midi message: {}", err);
    err
}

/// Channel Voice and Channel Mode messages.
impl Message<'static> {
    /// Build a Channel Voice message from an already validated channel.
    #[inline]
    pub fn channel_voice(channel: Channel, message: ChannelVoice) -> Message<'static> {
        Message::ChannelVoice { channel, message }
    }

    fn voice(
        channel: i32,
        build: impl FnOnce() -> Result<ChannelVoice>,
    ) -> Result<Message<'static>> {
        let channel = validate_channel(channel).map_err(rejected)?;
        let message = build().map_err(rejected)?;
        Ok(Message::ChannelVoice { channel, message })
    }

    /// Stop playing `note` on `channel` (`1 ..= 16`), released with `velocity`.
    pub fn note_off(channel: i32, note: i32, velocity: i32) -> Result<Message<'static>> {
        Self::voice(channel, || {
            Ok(ChannelVoice::NoteOff {
                key: validate_data_byte("note", note)?,
                vel: validate_data_byte("velocity", velocity)?,
            })
        })
    }

    /// Stop playing `note`, with the default release velocity of 64.
    pub fn note_off_default_velocity(channel: i32, note: i32) -> Result<Message<'static>> {
        Self::note_off(channel, note, control::DEFAULT_VELOCITY.as_int().into())
    }

    /// Stop playing `note` by sending a Note On with velocity 0.
    ///
    /// Receivers treat this as a Note Off, and since it shares its status with the surrounding
    /// Note On messages it benefits from running status.
    pub fn note_off_as_note_on(channel: i32, note: i32) -> Result<Message<'static>> {
        Self::note_on(channel, note, 0)
    }

    /// Start playing `note` on `channel` (`1 ..= 16`) with `velocity`.
    pub fn note_on(channel: i32, note: i32, velocity: i32) -> Result<Message<'static>> {
        Self::voice(channel, || {
            Ok(ChannelVoice::NoteOn {
                key: validate_data_byte("note", note)?,
                vel: validate_data_byte("velocity", velocity)?,
            })
        })
    }

    /// Start playing `note`, with the default velocity of 64.
    pub fn note_on_default_velocity(channel: i32, note: i32) -> Result<Message<'static>> {
        Self::note_on(channel, note, control::DEFAULT_VELOCITY.as_int().into())
    }

    /// Change the pressure of a held `note`.
    pub fn poly_key_pressure(channel: i32, note: i32, pressure: i32) -> Result<Message<'static>> {
        Self::voice(channel, || {
            Ok(ChannelVoice::PolyKeyPressure {
                key: validate_data_byte("note", note)?,
                pressure: validate_data_byte("pressure", pressure)?,
            })
        })
    }

    /// Set `controller` to `value`.
    ///
    /// Any controller number in `0 ..= 127` is accepted and written as a plain Control Change,
    /// including the ones reserved for Channel Mode messages.
    /// Values sent on those are checked the way [`Message::channel_mode`] checks them, so a
    /// Mono On channel count must be in `0 ..= 16`.
    pub fn control_change(channel: i32, controller: i32, value: i32) -> Result<Message<'static>> {
        Self::voice(channel, || {
            let controller = validate_data_byte("controller", controller)?;
            let value = validate_data_byte("value", value)?;
            if controller == control::MONO_ON {
                MonoChannels::validate(value.as_int().into())?;
            }
            Ok(ChannelVoice::ControlChange { controller, value })
        })
    }

    /// Turn a switch controller (`64 ..= 69`, such as the damper pedal) on or off.
    pub fn control_switch(channel: i32, controller: i32, on: bool) -> Result<Message<'static>> {
        Self::voice(channel, || {
            let controller = validate_range(
                "controller",
                controller,
                control::DAMPER_PEDAL.as_int().into(),
                control::HOLD_2.as_int().into(),
            )?;
            Ok(ChannelVoice::ControlChange {
                controller: u7::from_int_lossy(controller as u8),
                value: control::boolean_to_control(on),
            })
        })
    }

    /// Set a 14-bit controller, sending its MSB controller (`0 ..= 31`) followed by the
    /// matching LSB controller (`32 ..= 63`).
    pub fn control_change_14bit(
        channel: i32,
        controller: i32,
        value: i32,
    ) -> Result<[Message<'static>; 2]> {
        let channel = validate_channel(channel).map_err(rejected)?;
        let msb_controller = validate_range(
            "controller",
            controller,
            0,
            i32::from(control::LSB_BASE.as_int()) - 1,
        )
        .map_err(rejected)?;
        let (lsb, msb) = validate_14bit("value", value).map_err(rejected)?.split();
        let lsb_controller =
            u7::from_int_lossy(msb_controller as u8 + control::LSB_BASE.as_int());
        let msb_controller = u7::from_int_lossy(msb_controller as u8);
        Ok([
            Message::ChannelVoice {
                channel,
                message: ChannelVoice::ControlChange {
                    controller: msb_controller,
                    value: msb,
                },
            },
            Message::ChannelVoice {
                channel,
                message: ChannelVoice::ControlChange {
                    controller: lsb_controller,
                    value: lsb,
                },
            },
        ])
    }

    /// Change the program (instrument) of `channel`.
    pub fn program_change(channel: i32, program: i32) -> Result<Message<'static>> {
        Self::voice(channel, || {
            Ok(ChannelVoice::ProgramChange {
                program: validate_data_byte("program", program)?,
            })
        })
    }

    /// Change the pressure of every held note in `channel`.
    pub fn channel_pressure(channel: i32, pressure: i32) -> Result<Message<'static>> {
        Self::voice(channel, || {
            Ok(ChannelVoice::ChannelPressure {
                pressure: validate_data_byte("pressure", pressure)?,
            })
        })
    }

    /// Set the pitch bend of `channel` from a raw 14-bit value in `0 ..= 16383`, where 8192 is
    /// the center.
    pub fn pitch_bend_change(channel: i32, value: i32) -> Result<Message<'static>> {
        Self::voice(channel, || {
            Ok(ChannelVoice::PitchBendChange {
                bend: PitchBend(validate_14bit("pitch bend", value)?),
            })
        })
    }

    /// Set the pitch bend of `channel` from its two data bytes, in wire order.
    pub fn pitch_bend_change_split(channel: i32, lsb: i32, msb: i32) -> Result<Message<'static>> {
        Self::voice(channel, || {
            let lsb = validate_data_byte("pitch bend lsb", lsb)?;
            let msb = validate_data_byte("pitch bend msb", msb)?;
            Ok(ChannelVoice::PitchBendChange {
                bend: PitchBend(u14::join(lsb, msb)),
            })
        })
    }

    /// Send a Channel Mode message to `channel`.
    pub fn channel_mode(channel: i32, mode: ChannelMode) -> Result<Message<'static>> {
        let channel = validate_channel(channel).map_err(rejected)?;
        Ok(Message::ChannelMode { channel, mode })
    }

    /// Mute every sounding note in `channel`.
    pub fn all_sound_off(channel: i32) -> Result<Message<'static>> {
        Self::channel_mode(channel, ChannelMode::AllSoundOff)
    }

    /// Reset every controller of `channel` to its default value.
    pub fn reset_all_controllers(channel: i32) -> Result<Message<'static>> {
        Self::channel_mode(channel, ChannelMode::ResetAllControllers)
    }

    /// Connect or disconnect the local keyboard from the sound engine.
    pub fn local_control(channel: i32, on: bool) -> Result<Message<'static>> {
        Self::channel_mode(channel, ChannelMode::LocalControl(on))
    }

    /// Release every held note in `channel`.
    pub fn all_notes_off(channel: i32) -> Result<Message<'static>> {
        Self::channel_mode(channel, ChannelMode::AllNotesOff)
    }

    /// Make `channel` respond only to messages on its own channel.
    pub fn omni_off(channel: i32) -> Result<Message<'static>> {
        Self::channel_mode(channel, ChannelMode::OmniOff)
    }

    /// Make `channel` respond to messages on every channel.
    pub fn omni_on(channel: i32) -> Result<Message<'static>> {
        Self::channel_mode(channel, ChannelMode::OmniOn)
    }

    /// Switch to monophonic mode over `channels` channels (`0 ..= 16`, 0 meaning as many as
    /// there are voices).
    pub fn mono_on(channel: i32, channels: i32) -> Result<Message<'static>> {
        let channel = validate_channel(channel).map_err(rejected)?;
        let channels = MonoChannels::validate(channels).map_err(rejected)?;
        Ok(Message::ChannelMode {
            channel,
            mode: ChannelMode::MonoOn(channels),
        })
    }

    /// Switch to polyphonic mode.
    pub fn poly_on(channel: i32) -> Result<Message<'static>> {
        Self::channel_mode(channel, ChannelMode::PolyOn)
    }
}

/// System messages.
impl Message<'static> {
    /// Send one piece of a MIDI Time Code: `message_type` in `0 ..= 7` selects the piece and
    /// `value` in `0 ..= 15` is its nibble.
    pub fn mtc_quarter_frame(message_type: i32, value: i32) -> Result<Message<'static>> {
        let code = validate_range("mtc message type", message_type, 0, 7).map_err(rejected)?;
        let value = validate_nibble("mtc value", value).map_err(rejected)?;
        let piece = MtcQuarterFrameMessage::from_code(code as u8).ok_or_else(|| {
            rejected(Error::out_of_range("mtc message type", message_type, 0, 7))
        })?;
        Ok(SystemCommon::MidiTimeCodeQuarterFrame(piece, value).into())
    }

    /// Set the song position, in MIDI beats (`0 ..= 16383`) since the start of the song.
    pub fn song_position(beats: i32) -> Result<Message<'static>> {
        let beats = validate_14bit("song position", beats).map_err(rejected)?;
        Ok(SystemCommon::SongPosition(beats).into())
    }

    /// Set the song position from its two data bytes, in wire order.
    pub fn song_position_split(lsb: i32, msb: i32) -> Result<Message<'static>> {
        let lsb = validate_data_byte("song position lsb", lsb).map_err(rejected)?;
        let msb = validate_data_byte("song position msb", msb).map_err(rejected)?;
        Ok(SystemCommon::SongPosition(u14::join(lsb, msb)).into())
    }

    /// Select a song by index.
    pub fn song_select(song: i32) -> Result<Message<'static>> {
        let song = validate_data_byte("song", song).map_err(rejected)?;
        Ok(SystemCommon::SongSelect(song).into())
    }

    /// Ask analog synthesizers to tune their oscillators.
    #[inline]
    pub const fn tune_request() -> Message<'static> {
        Message::Common(SystemCommon::TuneRequest)
    }

    /// One of the 24 clock ticks per quarter note.
    #[inline]
    pub const fn timing_clock() -> Message<'static> {
        Message::Realtime(SystemRealtime::TimingClock)
    }

    /// Start playback from the beginning of the song.
    #[inline]
    pub const fn start() -> Message<'static> {
        Message::Realtime(SystemRealtime::Start)
    }

    /// Resume playback from the current song position.
    #[inline]
    pub const fn continue_playback() -> Message<'static> {
        Message::Realtime(SystemRealtime::Continue)
    }

    /// Stop playback, keeping the song position.
    #[inline]
    pub const fn stop() -> Message<'static> {
        Message::Realtime(SystemRealtime::Stop)
    }

    /// Tell the receiver the connection is still alive.
    #[inline]
    pub const fn active_sensing() -> Message<'static> {
        Message::Realtime(SystemRealtime::ActiveSensing)
    }

    /// Reset every receiver to its power-up state.
    #[inline]
    pub const fn system_reset() -> Message<'static> {
        Message::Realtime(SystemRealtime::Reset)
    }
}

impl<'a> Message<'a> {
    /// Build a System Exclusive message around `payload`, which must only contain data bytes
    /// (`0x00 ..= 0x7F`).
    ///
    /// The payload excludes the `0xF0` and `0xF7` framing bytes, which are added when writing.
    /// An empty payload is allowed.
    pub fn sysex(payload: &'a [u8]) -> Result<Message<'a>> {
        match u7::slice_try_from_int(payload) {
            Some(data) => Ok(Message::SysEx(data)),
            None => {
                let bad = payload.iter().copied().find(|&byte| byte > 0x7F).unwrap_or(0x80);
                Err(rejected(Error::out_of_range("sysex data", bad.into(), 0, 0x7F)))
            }
        }
    }
}
