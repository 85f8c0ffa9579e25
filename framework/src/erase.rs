use crate::Result;

/// Secure erasure of key material and internal state.
///
/// Zeroizing overwrites every internal array that may hold sensitive data
/// and leaves the instance permanently unusable. Calling `zeroize` on an
/// instance that is already zeroized fails with
/// [`Error::AlreadyZeroized`](crate::Error::AlreadyZeroized), like every
/// other operation on it.
pub trait Zeroizable {
    /// Wipes the instance and marks it as destroyed.
    fn zeroize(&mut self) -> Result<()>;

    /// Returns `true` once [`zeroize`](Zeroizable::zeroize) has succeeded.
    fn is_zeroized(&self) -> bool;
}
