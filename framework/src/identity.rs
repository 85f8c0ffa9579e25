//! Ciphers that leave the message unchanged.

use alloc::borrow::Cow;

use crate::{
    check_key_len, BlockCipherCore, BlockCipherer, Cipher, Result, StreamCipherCore,
    StreamCipherer,
};

/// The null cipher: a block cipher with a 1-byte block and an empty key
/// whose encryption and decryption are both the identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NullCipher;

/// Block transform of [`NullCipher`].
#[derive(Clone, Debug, Default)]
pub struct NullCore;

impl BlockCipherCore for NullCore {
    const BLOCK_LEN: usize = 1;

    fn encrypt_block(&self, _block: &mut [u8]) {}

    fn decrypt_block(&self, _block: &mut [u8]) {}

    fn wipe(&mut self) {}
}

impl Cipher for NullCipher {
    type Cipherer = BlockCipherer<NullCore>;

    fn name(&self) -> Cow<'static, str> {
        "Null cipher".into()
    }

    fn key_len(&self) -> usize {
        0
    }

    fn block_len(&self) -> usize {
        NullCore::BLOCK_LEN
    }

    fn new_cipherer(&self, key: &[u8]) -> Result<Self::Cipherer> {
        check_key_len(0, key)?;
        Ok(BlockCipherer::new(NullCore))
    }
}

/// The identity stream cipher, whose keystream is all zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IdentityStreamCipher;

/// Keystream of [`IdentityStreamCipher`].
#[derive(Clone, Debug, Default)]
pub struct ZeroKeystream;

impl StreamCipherCore for ZeroKeystream {
    fn apply_keystream(&mut self, _buf: &mut [u8]) {}

    fn wipe(&mut self) {}
}

impl Cipher for IdentityStreamCipher {
    type Cipherer = StreamCipherer<ZeroKeystream>;

    fn name(&self) -> Cow<'static, str> {
        "Identity stream cipher".into()
    }

    fn key_len(&self) -> usize {
        0
    }

    fn block_len(&self) -> usize {
        1
    }

    fn new_cipherer(&self, key: &[u8]) -> Result<Self::Cipherer> {
        check_key_len(0, key)?;
        Ok(StreamCipherer::new(ZeroKeystream))
    }
}
