//! Controller numbers and values for Control Change messages.
//!
//! Controllers `0 ..= 31` carry the most significant byte of a 14-bit value, and controllers
//! `32 ..= 63` optionally carry the matching least significant byte.
//! Controllers `64 ..= 69` are switches, which are off below 64 and on from 64 upwards.
//! Controllers `120 ..= 127` are reserved for Channel Mode messages.

use crate::prelude::*;

/// Value sent to turn a switch controller on.
pub const ON_VALUE: u7 = u7::from_int_lossy(0x7F);
/// Value sent to turn a switch controller off.
pub const OFF_VALUE: u7 = u7::from_int_lossy(0x00);
/// Velocity used by the `*_default_velocity` note constructors.
pub const DEFAULT_VELOCITY: u7 = u7::from_int_lossy(0x40);

macro_rules! controllers {
    {$( $(#[$attr:meta])* $name:ident = $num:expr; )*} => {
        $(
            $(#[$attr])*
            pub const $name: u7 = u7::from_int_lossy($num);
        )*
    };
}

controllers! {
    // MSB of 14-bit controllers
    /// Bank select MSB.
    BANK_SELECT = 0x00;
    /// Modulation wheel MSB.
    MOD_WHEEL = 0x01;
    BREATH_CONTROLLER = 0x02;
    FOOT_CONTROLLER = 0x04;
    PORTAMENTO_TIME = 0x05;
    /// Data entry MSB, used along with registered and non-registered parameter numbers.
    DATA_ENTRY_MSB = 0x06;
    CHANNEL_VOLUME = 0x07;
    BALANCE = 0x08;
    PAN = 0x0A;
    EXPRESSION_CONTROLLER = 0x0B;
    EFFECT_CONTROL_1 = 0x0C;
    EFFECT_CONTROL_2 = 0x0D;
    GENERAL_PURPOSE_1 = 0x10;
    GENERAL_PURPOSE_2 = 0x11;
    GENERAL_PURPOSE_3 = 0x12;
    GENERAL_PURPOSE_4 = 0x13;

    /// The LSB counterpart of controller 0.
    /// The LSB of controller `n` (for `n` in `0 ..= 31`) is controller `n + 32`.
    LSB_BASE = 0x20;
    /// Data entry LSB.
    DATA_ENTRY_LSB = 0x26;

    // Switches
    /// Damper pedal (sustain).
    DAMPER_PEDAL = 0x40;
    PORTAMENTO_ON_OFF = 0x41;
    SOSTENUTO = 0x42;
    SOFT_PEDAL = 0x43;
    LEGATO_FOOTSWITCH = 0x44;
    HOLD_2 = 0x45;

    // Effect depth and sound controllers
    SOUND_CONTROLLER_1 = 0x46;
    SOUND_CONTROLLER_2 = 0x47;
    SOUND_CONTROLLER_3 = 0x48;
    SOUND_CONTROLLER_4 = 0x49;
    SOUND_CONTROLLER_5 = 0x4A;
    SOUND_CONTROLLER_6 = 0x4B;
    SOUND_CONTROLLER_7 = 0x4C;
    SOUND_CONTROLLER_8 = 0x4D;
    SOUND_CONTROLLER_9 = 0x4E;
    SOUND_CONTROLLER_10 = 0x4F;
    GENERAL_PURPOSE_5 = 0x50;
    GENERAL_PURPOSE_6 = 0x51;
    GENERAL_PURPOSE_7 = 0x52;
    GENERAL_PURPOSE_8 = 0x53;
    PORTAMENTO_CONTROL = 0x54;
    EFFECTS_1_DEPTH = 0x5B;
    EFFECTS_2_DEPTH = 0x5C;
    EFFECTS_3_DEPTH = 0x5D;
    EFFECTS_4_DEPTH = 0x5E;
    EFFECTS_5_DEPTH = 0x5F;

    // Increment/decrement and parameter numbers
    DATA_INCREMENT = 0x60;
    DATA_DECREMENT = 0x61;
    NRPN_LSB = 0x62;
    NRPN_MSB = 0x63;
    RPN_LSB = 0x64;
    RPN_MSB = 0x65;

    // Channel mode
    /// First controller number reserved for Channel Mode messages.
    ALL_SOUND_OFF = 0x78;
    RESET_ALL_CONTROLLERS = 0x79;
    LOCAL_CONTROL = 0x7A;
    ALL_NOTES_OFF = 0x7B;
    OMNI_OFF = 0x7C;
    OMNI_ON = 0x7D;
    MONO_ON = 0x7E;
    POLY_ON = 0x7F;
}

/// Whether the given controller is a switch (on/off) controller, in the range `64 ..= 69`.
///
/// Switch controllers interpret their value through [`control_to_boolean`].
#[inline]
pub fn is_switch_control(controller: u7) -> bool {
    controller >= DAMPER_PEDAL && controller <= HOLD_2
}

/// Whether the controller number is one of the 14-bit MSB controllers, in the range `0 ..= 31`.
#[inline]
pub fn is_14bit_msb_control(controller: u7) -> bool {
    controller < LSB_BASE
}

/// Whether the controller number is reserved for Channel Mode messages, in the range
/// `120 ..= 127`.
#[inline]
pub fn is_channel_mode_control(controller: u7) -> bool {
    controller >= ALL_SOUND_OFF
}

/// Interpret a switch controller value: values of 64 and up are "on", lower values are "off".
#[inline]
pub fn control_to_boolean(value: u7) -> bool {
    value >= 64
}

/// The value to send to a switch controller.
#[inline]
pub fn boolean_to_control(on: bool) -> u7 {
    if on {
        ON_VALUE
    } else {
        OFF_VALUE
    }
}
