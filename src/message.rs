//! The closed set of MIDI 1.0 messages and their status byte layout.

use crate::prelude::*;

/// Status bytes and status templates for every message type.
///
/// Channel message templates have their low nibble cleared; the channel nibble is OR'd into it.
pub mod status {
    pub const NOTE_OFF: u8 = 0x80;
    pub const NOTE_ON: u8 = 0x90;
    pub const POLY_KEY_PRESSURE: u8 = 0xA0;
    pub const CONTROL_CHANGE: u8 = 0xB0;
    pub const PROGRAM_CHANGE: u8 = 0xC0;
    pub const CHANNEL_PRESSURE: u8 = 0xD0;
    pub const PITCH_BEND_CHANGE: u8 = 0xE0;
    /// Channel Mode messages share the Control Change status.
    pub const CHANNEL_MODE: u8 = CONTROL_CHANGE;

    pub const MTC_QUARTER_FRAME: u8 = 0xF1;
    pub const SONG_POSITION: u8 = 0xF2;
    pub const SONG_SELECT: u8 = 0xF3;
    pub const TUNE_REQUEST: u8 = 0xF6;

    pub const TIMING_CLOCK: u8 = 0xF8;
    pub const START: u8 = 0xFA;
    pub const CONTINUE: u8 = 0xFB;
    pub const STOP: u8 = 0xFC;
    pub const ACTIVE_SENSING: u8 = 0xFE;
    pub const SYSTEM_RESET: u8 = 0xFF;

    /// Start of exclusive.
    pub const SOX: u8 = 0xF0;
    /// End of exclusive.
    pub const EOX: u8 = 0xF7;
}

/// The broad class a message belongs to.
///
/// The class decides how a message interacts with running status.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Category {
    /// Musical data addressed to a channel.
    ChannelVoice,
    /// Control Change messages with reserved controller numbers, changing how a channel
    /// responds.
    ChannelMode,
    /// Channel-independent messages that cancel running status.
    SystemCommon,
    /// Single-byte timing messages, which may be interleaved anywhere without disturbing
    /// running status.
    SystemRealtime,
    /// Vendor-defined data framed by `0xF0` and `0xF7`. Cancels running status.
    SystemExclusive,
}
impl Category {
    /// Whether messages in this category carry a channel in their status byte.
    #[inline]
    pub fn is_channel(self) -> bool {
        matches!(self, Category::ChannelVoice | Category::ChannelMode)
    }

    /// Whether messages in this category may omit a repeated status byte.
    #[inline]
    pub fn allows_running_status(self) -> bool {
        self.is_channel()
    }
}

/// The number of data bytes following the status byte.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Arity {
    /// Exactly this many data bytes (0, 1 or 2).
    Fixed(usize),
    /// Any number of data bytes, as in System Exclusive.
    Variable,
}
impl Arity {
    /// The fixed amount of data bytes, if any.
    #[inline]
    pub fn fixed_len(self) -> Option<usize> {
        match self {
            Arity::Fixed(len) => Some(len),
            Arity::Variable => None,
        }
    }
}

/// The tag of a [`Message`], without any of its data.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum MessageKind {
    NoteOff,
    NoteOn,
    PolyKeyPressure,
    ControlChange,
    ProgramChange,
    ChannelPressure,
    PitchBendChange,
    ChannelMode,
    MtcQuarterFrame,
    SongPosition,
    SongSelect,
    TuneRequest,
    TimingClock,
    Start,
    Continue,
    Stop,
    ActiveSensing,
    SystemReset,
    SysEx,
}
impl MessageKind {
    /// The status byte template for this kind of message.
    ///
    /// For channel messages the low nibble is zero, and must be filled with the channel.
    /// For system messages this is the full status byte.
    pub fn status_template(self) -> u8 {
        use MessageKind::*;
        match self {
            NoteOff => status::NOTE_OFF,
            NoteOn => status::NOTE_ON,
            PolyKeyPressure => status::POLY_KEY_PRESSURE,
            ControlChange => status::CONTROL_CHANGE,
            ProgramChange => status::PROGRAM_CHANGE,
            ChannelPressure => status::CHANNEL_PRESSURE,
            PitchBendChange => status::PITCH_BEND_CHANGE,
            ChannelMode => status::CHANNEL_MODE,
            MtcQuarterFrame => status::MTC_QUARTER_FRAME,
            SongPosition => status::SONG_POSITION,
            SongSelect => status::SONG_SELECT,
            TuneRequest => status::TUNE_REQUEST,
            TimingClock => status::TIMING_CLOCK,
            Start => status::START,
            Continue => status::CONTINUE,
            Stop => status::STOP,
            ActiveSensing => status::ACTIVE_SENSING,
            SystemReset => status::SYSTEM_RESET,
            SysEx => status::SOX,
        }
    }

    /// How many data bytes follow the status byte.
    pub fn arity(self) -> Arity {
        use MessageKind::*;
        match self {
            NoteOff | NoteOn | PolyKeyPressure | ControlChange | PitchBendChange | ChannelMode
            | SongPosition => Arity::Fixed(2),
            ProgramChange | ChannelPressure | MtcQuarterFrame | SongSelect => Arity::Fixed(1),
            TuneRequest | TimingClock | Start | Continue | Stop | ActiveSensing | SystemReset => {
                Arity::Fixed(0)
            }
            SysEx => Arity::Variable,
        }
    }

    /// The category this kind of message belongs to.
    pub fn category(self) -> Category {
        use MessageKind::*;
        match self {
            NoteOff | NoteOn | PolyKeyPressure | ControlChange | ProgramChange
            | ChannelPressure | PitchBendChange => Category::ChannelVoice,
            ChannelMode => Category::ChannelMode,
            MtcQuarterFrame | SongPosition | SongSelect | TuneRequest => Category::SystemCommon,
            TimingClock | Start | Continue | Stop | ActiveSensing | SystemReset => {
                Category::SystemRealtime
            }
            SysEx => Category::SystemExclusive,
        }
    }

    /// Whether this is a System Exclusive message.
    #[inline]
    pub fn is_sysex(self) -> bool {
        self == MessageKind::SysEx
    }
}

/// A complete MIDI 1.0 message, ready to be written.
///
/// Every field is range-restricted, so any `Message` value is valid by construction and can
/// always be serialized.
/// Use the checked constructors (such as [`Message::note_on`]) to build messages from
/// loosely-typed input.
///
/// Messages are plain data and are `Copy`; System Exclusive messages borrow their payload.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Message<'a> {
    /// A Channel Voice message.
    ///
    /// Status byte in the range `0x80 ..= 0xEF`.
    ChannelVoice {
        /// The channel this message is addressed to.
        channel: Channel,
        /// The message type and its data.
        message: ChannelVoice,
    },
    /// A Channel Mode message.
    ///
    /// Status byte in the range `0xB0 ..= 0xBF`, with a controller number in `120 ..= 127`.
    ChannelMode {
        /// The channel this message is addressed to.
        channel: Channel,
        /// The mode change.
        mode: ChannelMode,
    },
    /// A System Common message, excluding System Exclusive.
    ///
    /// Status byte in the range `0xF1 ..= 0xF6`.
    Common(SystemCommon),
    /// A one-byte System Realtime message.
    ///
    /// Status byte in the range `0xF8 ..= 0xFF`.
    Realtime(SystemRealtime),
    /// A System Exclusive message.
    ///
    /// The payload does not include the `0xF0` and `0xF7` framing bytes; those are added when
    /// writing.
    SysEx(&'a [u7]),
}
impl<'a> Message<'a> {
    /// The tag of this message.
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::ChannelVoice { message, .. } => message.kind(),
            Message::ChannelMode { .. } => MessageKind::ChannelMode,
            Message::Common(common) => common.kind(),
            Message::Realtime(realtime) => realtime.kind(),
            Message::SysEx(_) => MessageKind::SysEx,
        }
    }

    /// The channel of channel messages, or `None` for system messages.
    #[inline]
    pub fn channel(&self) -> Option<Channel> {
        match *self {
            Message::ChannelVoice { channel, .. } | Message::ChannelMode { channel, .. } => {
                Some(channel)
            }
            _ => None,
        }
    }

    /// The status byte that starts this message on the wire.
    ///
    /// For channel messages this is the status template OR'd with `channel - 1`.
    #[inline]
    pub fn status_byte(&self) -> u8 {
        let template = self.kind().status_template();
        match self.channel() {
            Some(channel) => template | channel.nibble().as_int(),
            None => template,
        }
    }

    /// The category of this message.
    #[inline]
    pub fn category(&self) -> Category {
        self.kind().category()
    }

    /// The number of data bytes following the status byte.
    #[inline]
    pub fn data_arity(&self) -> Arity {
        self.kind().arity()
    }

    /// Whether this is a System Exclusive message.
    #[inline]
    pub fn is_sysex(&self) -> bool {
        matches!(self, Message::SysEx(_))
    }
}
impl From<SystemCommon> for Message<'_> {
    #[inline]
    fn from(common: SystemCommon) -> Self {
        Message::Common(common)
    }
}
impl From<SystemRealtime> for Message<'_> {
    #[inline]
    fn from(realtime: SystemRealtime) -> Self {
        Message::Realtime(realtime)
    }
}

/// A Channel Voice message, without its channel.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum ChannelVoice {
    /// Stop playing a note.
    NoteOff {
        /// The key to stop playing.
        key: u7,
        /// The velocity with which the key was released.
        vel: u7,
    },
    /// Start playing a note.
    NoteOn {
        /// The key to start playing.
        key: u7,
        /// The velocity (strength) with which to press it.
        ///
        /// By convention a `NoteOn` with a velocity of 0 is equivalent to a `NoteOff`.
        vel: u7,
    },
    /// Change the pressure of a single held key.
    PolyKeyPressure {
        /// The key being pressed.
        key: u7,
        /// The new pressure.
        pressure: u7,
    },
    /// Modify the value of a controller.
    ControlChange {
        /// The controller to modify. See the [`control`](../control/index.html) module.
        controller: u7,
        /// The value to set it to.
        value: u7,
    },
    /// Change the program (instrument) of the channel.
    ProgramChange {
        /// The new program.
        program: u7,
    },
    /// Change the pressure of all keys held in the channel at once.
    ChannelPressure {
        /// The new pressure.
        pressure: u7,
    },
    /// Set the pitch bend of the whole channel.
    PitchBendChange {
        /// The new pitch bend.
        bend: PitchBend,
    },
}
impl ChannelVoice {
    /// The tag of this message.
    pub fn kind(&self) -> MessageKind {
        match self {
            ChannelVoice::NoteOff { .. } => MessageKind::NoteOff,
            ChannelVoice::NoteOn { .. } => MessageKind::NoteOn,
            ChannelVoice::PolyKeyPressure { .. } => MessageKind::PolyKeyPressure,
            ChannelVoice::ControlChange { .. } => MessageKind::ControlChange,
            ChannelVoice::ProgramChange { .. } => MessageKind::ProgramChange,
            ChannelVoice::ChannelPressure { .. } => MessageKind::ChannelPressure,
            ChannelVoice::PitchBendChange { .. } => MessageKind::PitchBendChange,
        }
    }
}

/// A Channel Mode message.
///
/// These are sent as Control Change messages on controllers `120 ..= 127`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum ChannelMode {
    /// Mute all sounding notes immediately, ignoring release times.
    AllSoundOff,
    /// Reset all controllers to their default values.
    ResetAllControllers,
    /// Connect (`true`) or disconnect (`false`) the device's keyboard from its sound engine.
    LocalControl(bool),
    /// Release all held notes.
    AllNotesOff,
    /// Respond only to the basic channel.
    OmniOff,
    /// Respond to all channels.
    OmniOn,
    /// Switch to monophonic mode, using the given amount of channels.
    MonoOn(MonoChannels),
    /// Switch to polyphonic mode.
    PolyOn,
}
impl ChannelMode {
    /// The reserved controller number carrying this message.
    pub fn controller(self) -> u7 {
        match self {
            ChannelMode::AllSoundOff => control::ALL_SOUND_OFF,
            ChannelMode::ResetAllControllers => control::RESET_ALL_CONTROLLERS,
            ChannelMode::LocalControl(_) => control::LOCAL_CONTROL,
            ChannelMode::AllNotesOff => control::ALL_NOTES_OFF,
            ChannelMode::OmniOff => control::OMNI_OFF,
            ChannelMode::OmniOn => control::OMNI_ON,
            ChannelMode::MonoOn(_) => control::MONO_ON,
            ChannelMode::PolyOn => control::POLY_ON,
        }
    }

    /// The controller value carrying this message.
    pub fn value(self) -> u7 {
        match self {
            ChannelMode::LocalControl(on) => control::boolean_to_control(on),
            ChannelMode::MonoOn(channels) => channels.as_u7(),
            _ => control::OFF_VALUE,
        }
    }

    /// Interpret a control change as a Channel Mode message.
    ///
    /// Returns `None` if the controller is not reserved for Channel Mode messages, or if it is
    /// a Mono On with a channel count above 16.
    pub fn from_control(controller: u7, value: u7) -> Option<ChannelMode> {
        Some(match controller.as_int() {
            0x78 => ChannelMode::AllSoundOff,
            0x79 => ChannelMode::ResetAllControllers,
            0x7A => ChannelMode::LocalControl(control::control_to_boolean(value)),
            0x7B => ChannelMode::AllNotesOff,
            0x7C => ChannelMode::OmniOff,
            0x7D => ChannelMode::OmniOn,
            0x7E => ChannelMode::MonoOn(MonoChannels::new(value.as_int())?),
            0x7F => ChannelMode::PolyOn,
            _ => return None,
        })
    }
}

/// The amount of channels requested by a Mono On message, in `0 ..= 16`.
///
/// A count of 0 means as many channels as the receiver has voices.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct MonoChannels(u8);
impl MonoChannels {
    /// Use as many channels as the receiver has voices.
    pub const VOICES: MonoChannels = MonoChannels(0);
    /// The largest possible count.
    pub const MAX: MonoChannels = MonoChannels(16);

    /// Returns `None` if `count` is above 16.
    #[inline]
    pub const fn new(count: u8) -> Option<MonoChannels> {
        if count <= 16 {
            Some(MonoChannels(count))
        } else {
            None
        }
    }

    /// The amount of channels, 0 meaning as many as there are voices.
    #[inline]
    pub const fn count(self) -> u8 {
        self.0
    }

    /// The count as a controller value.
    #[inline]
    pub fn as_u7(self) -> u7 {
        u7::from_int_lossy(self.0)
    }

    /// Check a loosely-typed channel count.
    pub(crate) fn validate(count: i32) -> Result<MonoChannels> {
        let count = validate_range("mono channels", count, 0, 16)?;
        Ok(MonoChannels(count as u8))
    }
}

/// A System Common message, as defined by the MIDI 1.0 standard.
///
/// System Exclusive is kept apart, in [`Message::SysEx`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum SystemCommon {
    /// A MIDI Time Code Quarter Frame message, carrying a piece type and a 4-bit piece value.
    MidiTimeCodeQuarterFrame(MtcQuarterFrameMessage, u4),
    /// The number of MIDI beats (6 x MIDI clocks) that have elapsed since the start of the
    /// sequence.
    SongPosition(u14),
    /// Select a given song index.
    SongSelect(u7),
    /// Request the device to tune itself.
    TuneRequest,
}
impl SystemCommon {
    /// The tag of this message.
    pub fn kind(&self) -> MessageKind {
        match self {
            SystemCommon::MidiTimeCodeQuarterFrame(..) => MessageKind::MtcQuarterFrame,
            SystemCommon::SongPosition(_) => MessageKind::SongPosition,
            SystemCommon::SongSelect(_) => MessageKind::SongSelect,
            SystemCommon::TuneRequest => MessageKind::TuneRequest,
        }
    }
}

/// The different kinds of info a Midi Time Code Quarter Frame message can carry.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum MtcQuarterFrameMessage {
    /// The low nibble of the frame count.
    FramesLow,
    /// The high nibble of the frame count.
    FramesHigh,
    /// The low nibble of the second count.
    SecondsLow,
    /// The high nibble of the second count.
    SecondsHigh,
    /// The low nibble of the minute count.
    MinutesLow,
    /// The high nibble of the minute count.
    MinutesHigh,
    /// The low nibble of the hour count.
    HoursLow,
    /// The high nibble of the hour count, along with the frame rate.
    HoursHigh,
}
impl MtcQuarterFrameMessage {
    /// The 3-bit code of this piece, placed in bits 4 to 6 of the data byte.
    pub fn as_code(self) -> u8 {
        use MtcQuarterFrameMessage::*;
        match self {
            FramesLow => 0,
            FramesHigh => 1,
            SecondsLow => 2,
            SecondsHigh => 3,
            MinutesLow => 4,
            MinutesHigh => 5,
            HoursLow => 6,
            HoursHigh => 7,
        }
    }

    /// Get the piece from its 3-bit code, if in range.
    pub fn from_code(code: u8) -> Option<MtcQuarterFrameMessage> {
        use MtcQuarterFrameMessage::*;
        Some(match code {
            0 => FramesLow,
            1 => FramesHigh,
            2 => SecondsLow,
            3 => SecondsHigh,
            4 => MinutesLow,
            5 => MinutesHigh,
            6 => HoursLow,
            7 => HoursHigh,
            _ => return None,
        })
    }
}

/// System Realtime messages are one-byte messages that only occur within live MIDI streams.
/// They are usually time-sensitive, get top priority and can even be transmitted in between other
/// messages.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum SystemRealtime {
    /// If sent, they should be sent 24 times per quarter note.
    TimingClock,
    /// Request the device to start playing at position 0.
    Start,
    /// Request the device to continue playing without resetting the position.
    Continue,
    /// Request the device to stop playing, but keep track of the position where it stopped.
    Stop,
    /// Once one of these messages is transmitted, a message should arrive every 300ms or else the
    /// connection is considered broken.
    ActiveSensing,
    /// Request the device to reset itself, usually to the same state as it was after turning on.
    Reset,
}
impl SystemRealtime {
    /// The tag of this message.
    pub fn kind(self) -> MessageKind {
        match self {
            SystemRealtime::TimingClock => MessageKind::TimingClock,
            SystemRealtime::Start => MessageKind::Start,
            SystemRealtime::Continue => MessageKind::Continue,
            SystemRealtime::Stop => MessageKind::Stop,
            SystemRealtime::ActiveSensing => MessageKind::ActiveSensing,
            SystemRealtime::Reset => MessageKind::SystemReset,
        }
    }

    /// Get the status byte for this system realtime message.
    #[inline]
    pub fn encode(self) -> u8 {
        self.kind().status_template()
    }
}

/// The value of a pitch bend, represented as 14 bits.
///
/// A value of `0x0000` indicates full bend downwards.
/// A value of `0x2000` indicates no bend.
/// A value of `0x3FFF` indicates full bend upwards.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct PitchBend(pub u14);
impl PitchBend {
    /// The minimum value of `0x0000`, indicating full bend downwards.
    #[inline]
    pub const fn min_raw_value() -> PitchBend {
        PitchBend(u14::from_int_lossy(0x0000))
    }

    /// The middle value of `0x2000`, indicating no bend.
    #[inline]
    pub const fn mid_raw_value() -> PitchBend {
        PitchBend(u14::from_int_lossy(0x2000))
    }

    /// The maximum value of `0x3FFF`, indicating full bend upwards.
    #[inline]
    pub const fn max_raw_value() -> PitchBend {
        PitchBend(u14::from_int_lossy(0x3FFF))
    }

    /// Create a `PitchBend` value from an int in the range `[-0x2000, 0x1FFF]`.
    ///
    /// Integers outside this range will be clamped.
    #[inline]
    pub fn from_int(int: i16) -> PitchBend {
        PitchBend(u14::from_int_lossy(
            (int.max(-0x2000).min(0x1FFF) + 0x2000) as u16,
        ))
    }

    /// Create a `PitchBend` value from a number in the range `[-1.0, 1.0)`.
    ///
    /// Floats outside this range will be clamped.
    #[inline]
    pub fn from_f32(float: f32) -> PitchBend {
        PitchBend::from_int((float.max(-1.0).min(1.0) * 0x2000 as f32) as i16)
    }

    /// Returns an int in the range `[-0x2000, 0x1FFF]`.
    #[inline]
    pub fn as_int(self) -> i16 {
        self.0.as_int() as i16 - 0x2000
    }

    /// Returns an `f32` in the range `[-1.0, 1.0)`.
    #[inline]
    pub fn as_f32(self) -> f32 {
        self.as_int() as f32 * (1.0 / 0x2000 as f32)
    }
}
