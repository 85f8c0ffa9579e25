use alloc::{boxed::Box, vec::Vec};
use core::{fmt, str::FromStr};

use crate::Error;

/// A finished digest.
///
/// Equality is byte-wise. `Display` renders uppercase hexadecimal, which
/// is also the format accepted by `FromStr` (either case).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashValue(Box<[u8]>);

impl HashValue {
    /// Wraps a copy of `bytes`.
    pub fn new(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }

    /// Returns the digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the digest length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for a zero-length digest.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the digest bytes as an owned vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl From<&[u8]> for HashValue {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for HashValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}

impl AsRef<[u8]> for HashValue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0.iter() {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashValue({})", self)
    }
}

impl FromStr for HashValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.as_bytes();
        if s.len() % 2 != 0 {
            return Err(Error::InvalidHex);
        }
        s.chunks_exact(2)
            .map(|pair| Ok(nibble(pair[0])? << 4 | nibble(pair[1])?))
            .collect::<Result<Vec<u8>, Error>>()
            .map(Self::from)
    }
}

fn nibble(c: u8) -> Result<u8, Error> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::InvalidHex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn renders_uppercase_hex() {
        let v = HashValue::new(&[0xE8, 0xB7, 0xBE, 0x43]);
        assert_eq!(v.to_string(), "E8B7BE43");
        assert_eq!(HashValue::new(&[]).to_string(), "");
    }

    #[test]
    fn parses_either_case() {
        let v: HashValue = "e8B7be43".parse().unwrap();
        assert_eq!(v.as_bytes(), &[0xE8, 0xB7, 0xBE, 0x43]);
        assert_eq!("ABC".parse::<HashValue>(), Err(Error::InvalidHex));
        assert_eq!("0G".parse::<HashValue>(), Err(Error::InvalidHex));
    }
}
