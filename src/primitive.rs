//! Value domains of the MIDI wire protocol.
//!
//! Every data byte carries 7 bits, channels are 4-bit nibbles and a few fields are 14-bit values
//! split across two data bytes.
//! The restricted integer types defined here make out-of-range values unrepresentable, and the
//! `validate_*` functions convert loosely-typed caller input into them.

use crate::prelude::*;

/// Slightly restricted integers.
macro_rules! restricted_int {
    {$(#[$attr:meta])* $name:ident : $inner:tt => $bits:expr} => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
        #[repr(transparent)]
        #[allow(non_camel_case_types)]
        pub struct $name($inner);
        impl From<$name> for $inner {
            #[inline]
            fn from(restricted: $name) -> $inner {restricted.0}
        }
        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
        impl $name {
            const MASK: $inner = (1 << $bits) - 1;

            /// The maximum value that this restricted integer can hold.
            #[inline]
            pub const fn max_value() -> $name {
                $name (Self::MASK)
            }

            /// Creates a restricted int from its non-restricted counterpart by masking off the
            /// extra bits.
            ///
            /// Prefer the checked constructors when the input comes from a caller.
            #[inline]
            pub const fn from_int_lossy(raw: $inner) -> $name {
                $name (raw & Self::MASK)
            }

            /// Returns `Some` if the raw integer is within range of the restricted integer, and
            /// `None` otherwise.
            #[inline]
            pub const fn try_from(raw: $inner) -> Option<$name> {
                if raw <= Self::MASK {
                    Some($name(raw))
                } else {
                    None
                }
            }

            /// Get the inner integer out of the wrapper.
            /// The inner integer is guaranteed to be in range of the restricted wrapper.
            #[inline]
            pub const fn as_int(self) -> $inner {
                self.0
            }

            /// Cast a slice of raw integers to a slice of restricted integers, only if there are
            /// no out-of-range integers.
            #[inline]
            pub fn slice_try_from_int(raw: &[$inner]) -> Option<&[$name]> {
                if raw.iter().any(|&int| int > Self::MASK) {
                    return None;
                }
                // SAFETY: `$name` is `repr(transparent)` over `$inner` and every element was
                // checked to be in range.
                unsafe { Some(&*(raw as *const [$inner] as *const [$name])) }
            }

            /// Cast a slice of restricted integers to the corresponding raw integers.
            ///
            /// All integers are guaranteed to be within range of the restricted int.
            #[inline]
            pub fn slice_as_int(slice: &[$name]) -> &[$inner] {
                // SAFETY: `$name` is `repr(transparent)` over `$inner`.
                unsafe { &*(slice as *const [$name] as *const [$inner]) }
            }
        }
        impl PartialEq<$inner> for $name {
            fn eq(&self, rhs: &$inner) -> bool {
                self.as_int() == *rhs
            }
        }
        impl PartialOrd<$inner> for $name {
            fn partial_cmp(&self, rhs: &$inner) -> Option<core::cmp::Ordering> {
                Some(self.as_int().cmp(rhs))
            }
        }
        impl PartialEq<$name> for $inner {
            fn eq(&self, rhs: &$name) -> bool {
                *self == rhs.as_int()
            }
        }
        impl PartialOrd<$name> for $inner {
            fn partial_cmp(&self, rhs: &$name) -> Option<core::cmp::Ordering> {
                Some(self.cmp(&rhs.as_int()))
            }
        }
    };
}
restricted_int! {
    /// A 14-bit integer type.
    ///
    /// Wraps the `u16` type and ensures that the top two bits are always zero.
    u14: u16 => 14
}
restricted_int! {
    /// A 7-bit integer type, the payload of every MIDI data byte.
    ///
    /// Wraps the `u8` type and ensures that the top bit is always zero.
    u7: u8 => 7
}
restricted_int! {
    /// A 4-bit integer type.
    ///
    /// Wraps the `u8` type and ensures that the top 4 bits are always zero.
    u4: u8 => 4
}

impl u14 {
    /// Split into the `(lsb, msb)` pair of data bytes, in wire order.
    #[inline]
    pub const fn split(self) -> (u7, u7) {
        (
            u7::from_int_lossy(self.0 as u8),
            u7::from_int_lossy((self.0 >> 7) as u8),
        )
    }

    /// Join an `(lsb, msb)` pair of data bytes.
    #[inline]
    pub const fn join(lsb: u7, msb: u7) -> u14 {
        u14((msb.0 as u16) << 7 | lsb.0 as u16)
    }
}

/// One of the 16 MIDI channels.
///
/// Channels are numbered `1 ..= 16` in user-facing code, as printed on MIDI devices, but are
/// transmitted as a zero-based nibble in the low half of the status byte.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Channel(u4);
impl Channel {
    /// The lowest channel, channel 1.
    pub const MIN: Channel = Channel(u4(0));
    /// The highest channel, channel 16.
    pub const MAX: Channel = Channel(u4(15));

    /// Create a channel from its user-facing number, in the range `1 ..= 16`.
    #[inline]
    pub const fn new(number: u8) -> Option<Channel> {
        if number >= 1 && number <= 16 {
            Some(Channel(u4(number - 1)))
        } else {
            None
        }
    }

    /// Create a channel from its zero-based wire nibble.
    #[inline]
    pub const fn from_nibble(nibble: u4) -> Channel {
        Channel(nibble)
    }

    /// The user-facing channel number, in the range `1 ..= 16`.
    #[inline]
    pub const fn number(self) -> u8 {
        self.0.as_int() + 1
    }

    /// The zero-based nibble OR'd into the status byte.
    #[inline]
    pub const fn nibble(self) -> u4 {
        self.0
    }

    /// Iterate over all 16 channels, in order.
    pub fn iter() -> impl Iterator<Item = Channel> {
        (0..16).map(|nibble| Channel(u4(nibble)))
    }
}
impl fmt::Display for Channel {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.number(), f)
    }
}

/// Check that `value` is within `min ..= max`, naming `field` in the error otherwise.
#[inline]
pub fn validate_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<i32> {
    ensure!(
        value >= min && value <= max,
        Error::out_of_range(field, value, min, max)
    );
    Ok(value)
}

/// Validate a user-facing channel number, which must be in the range `1 ..= 16`.
#[inline]
pub fn validate_channel(channel: i32) -> Result<Channel> {
    let number = validate_range("channel", channel, 1, 16)?;
    Ok(Channel(u4(number as u8 - 1)))
}

/// Validate a data byte value, which must be in the range `0 ..= 127`.
#[inline]
pub fn validate_data_byte(field: &'static str, value: i32) -> Result<u7> {
    let value = validate_range(field, value, 0, u7::MASK as i32)?;
    Ok(u7(value as u8))
}

/// Validate a nibble, which must be in the range `0 ..= 15`.
#[inline]
pub fn validate_nibble(field: &'static str, value: i32) -> Result<u4> {
    let value = validate_range(field, value, 0, u4::MASK as i32)?;
    Ok(u4(value as u8))
}

/// Validate a 14-bit value, which must be in the range `0 ..= 16383`.
#[inline]
pub fn validate_14bit(field: &'static str, value: i32) -> Result<u14> {
    let value = validate_range(field, value, 0, u14::MASK as i32)?;
    Ok(u14(value as u16))
}

/// Split a 14-bit value in the range `0 ..= 16383` into its `(lsb, msb)` data bytes.
///
/// `lsb = value & 0x7F` and `msb = (value >> 7) & 0x7F`.
#[inline]
pub fn split_14bit(value: i32) -> Result<(u7, u7)> {
    Ok(validate_14bit("value", value)?.split())
}
