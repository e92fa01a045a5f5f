//! Output sinks that MIDI bytes can be written to.
//!
//! Messages never fail to encode, but the place they are written to might, for example a
//! fixed-size buffer running out of space.
//! The [`Write`] trait abstracts over these sinks without requiring `std`.

use crate::prelude::*;

/// The result of writing to a sink of type `W`.
pub type WriteResult<W> = StdResult<(), <W as Write>::Error>;

/// A byte sink.
///
/// Implemented for `Vec<u8>` (with the `alloc` feature), `&mut [u8]`, [`Cursor`] and, with the
/// `std` feature, any `std::io::Write` through [`IoWrap`].
pub trait Write {
    /// The error produced when the sink cannot take more bytes.
    type Error;

    /// Write all of `buf`, or fail.
    fn write(&mut self, buf: &[u8]) -> WriteResult<Self>;
}

#[cfg(feature = "alloc")]
impl Write for Vec<u8> {
    type Error = core::convert::Infallible;
    #[inline]
    fn write(&mut self, buf: &[u8]) -> WriteResult<Self> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// Error raised by fixed-size buffers.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, thiserror::Error)]
pub enum CursorError {
    /// The buffer is full. Whatever fit was written.
    #[error("midi output buffer out of space")]
    OutOfSpace,
}

/// Writing to a mutable slice advances the slice past the written bytes.
impl<'a> Write for &'a mut [u8] {
    type Error = CursorError;
    fn write(&mut self, buf: &[u8]) -> WriteResult<Self> {
        if buf.len() > self.len() {
            let len = self.len();
            self.copy_from_slice(&buf[..len]);
            *self = &mut [];
            Err(CursorError::OutOfSpace)
        } else {
            let slice = mem::take(self);
            let (head, tail) = slice.split_at_mut(buf.len());
            head.copy_from_slice(buf);
            *self = tail;
            Ok(())
        }
    }
}

/// A fixed buffer along with a write position, useful to find out how many bytes were written.
pub struct Cursor<'a> {
    buf: &'a mut [u8],
    cur: usize,
}
impl<'a> Cursor<'a> {
    /// Start writing at the beginning of `slice`.
    pub fn new(slice: &'a mut [u8]) -> Cursor<'a> {
        Cursor { buf: slice, cur: 0 }
    }
    /// Get back the buffer and the amount of bytes written into it.
    pub fn into_parts(self) -> (&'a mut [u8], usize) {
        (self.buf, self.cur)
    }
    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.cur]
    }
    /// The write position, equal to the amount of bytes written.
    pub fn cursor(&self) -> usize {
        self.cur
    }
    /// Rewind to the start of the buffer, so it can be reused for the next message.
    pub fn clear(&mut self) {
        self.cur = 0;
    }
}
impl<'a> Write for Cursor<'a> {
    type Error = CursorError;
    fn write(&mut self, buf: &[u8]) -> WriteResult<Self> {
        //Cannot overflow because `cur <= buf.len()` is always true.
        let up_to = self.cur + buf.len();
        if up_to > self.buf.len() {
            let space = self.buf.len() - self.cur;
            self.buf[self.cur..].copy_from_slice(&buf[..space]);
            self.cur = self.buf.len();
            Err(CursorError::OutOfSpace)
        } else {
            self.buf[self.cur..up_to].copy_from_slice(buf);
            self.cur = up_to;
            Ok(())
        }
    }
}

/// Adapts any `std::io::Write` into a MIDI sink.
///
/// Only available with the `std` feature enabled.
#[cfg(feature = "std")]
pub struct IoWrap<T>(pub T);
#[cfg(feature = "std")]
impl<T: io::Write> Write for IoWrap<T> {
    type Error = io::Error;
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<()> {
        io::Write::write_all(&mut self.0, buf)
    }
}
