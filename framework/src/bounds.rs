//! Offset/length views into caller-owned buffers.

use core::ops::Range;

use crate::{Error, Result};

/// Validates that `[off, off + len)` lies inside a buffer of `buf_len`
/// bytes and returns it as a range.
pub fn range(buf_len: usize, off: usize, len: usize) -> Result<Range<usize>> {
    match off.checked_add(len) {
        Some(end) if end <= buf_len => Ok(off..end),
        _ => Err(Error::OutOfBounds { buf_len, off, len }),
    }
}

/// Returns the mutable subslice `buf[off..off + len]`, bounds checked.
pub fn slice_mut(buf: &mut [u8], off: usize, len: usize) -> Result<&mut [u8]> {
    let r = range(buf.len(), off, len)?;
    Ok(&mut buf[r])
}

/// Returns the subslice `buf[off..off + len]`, bounds checked.
pub fn slice(buf: &[u8], off: usize, len: usize) -> Result<&[u8]> {
    let r = range(buf.len(), off, len)?;
    Ok(&buf[r])
}
