use std::borrow::Cow;

use hex_literal::hex;
use hmac::{
    framework::{Error, Result, Zeroizable},
    BlockHashFunction, HashFunction, Hasher, Hmac,
};
use md5::Md5;
use proptest::prelude::*;
use whirlpool::Whirlpool;

fn hmac_md5(key: &[u8], data: &[u8]) -> Vec<u8> {
    Hmac::new(Md5, key).unwrap().mac(data).unwrap().to_vec()
}

#[test]
fn rfc2202_hmac_md5() {
    assert_eq!(
        hmac_md5(&[0x0b; 16], b"Hi There"),
        hex!("9294727a3638bb1c13f48ef8158bfc9d")
    );
    assert_eq!(
        hmac_md5(b"Jefe", b"what do ya want for nothing?"),
        hex!("750c783e6ab0b503eaa86e310a5db738")
    );
    assert_eq!(
        hmac_md5(&[0xaa; 16], &[0xdd; 50]),
        hex!("56be34521d144c88dbb8c733f0e8b3f6")
    );
    assert_eq!(
        hmac_md5(&hex!("0102030405060708090a0b0c0d0e0f10111213141516171819"), &[0xcd; 50]),
        hex!("697eaf0aca3a3aea3a75164746ffaa79")
    );
    assert_eq!(
        hmac_md5(&[0x0c; 16], b"Test With Truncation"),
        hex!("56461ef2342edc00f9bab995690efd4c")
    );
    assert_eq!(
        hmac_md5(
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key - Hash Key First"
        ),
        hex!("6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd")
    );
    assert_eq!(
        hmac_md5(
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data"
        ),
        hex!("6f630fad67cda0ee1fb1f562db3aa53e")
    );
}

#[test]
fn key_of_exactly_one_block_is_not_hashed() {
    assert_eq!(
        hmac_md5(&[b'k'; 64], b"exact"),
        hex!("b8192d2be130533a4cbee4464fc94a70")
    );
    assert_eq!(hmac_md5(b"", b""), hex!("74e6f7298a9c2d168935f58c001bad88"));
}

#[test]
fn hmac_whirlpool() {
    let hmac = Hmac::new(Whirlpool::default(), b"key").unwrap();
    assert_eq!(hmac.name(), "HMAC-Whirlpool");
    assert_eq!(hmac.hash_len(), 64);
    assert_eq!(
        hmac.mac(b"The quick brown fox jumps over the lazy dog")
            .unwrap()
            .as_bytes(),
        &hex!(
            "7f7192e3a155cb6a8171584ba146882f26821658112dfd2601272db013517a31"
            "e573637d146584596f86a884eb0decc9514dde000ecf2476dc5d436a92197527"
        )[..]
    );
    assert_eq!(
        Hmac::new(Whirlpool::default(), &[0xaa; 100])
            .unwrap()
            .mac(b"abc")
            .unwrap()
            .as_bytes(),
        &hex!(
            "d7db8b3470431f46aa93e8d6ecffb87b8ffd6a62495f5eb577e55c6c29b26467"
            "295228bd868088cbb11257e41f0dee9d654296799d46c5fb275e66a29fbd09ed"
        )[..]
    );
}

#[test]
fn effective_key_short_key_is_zero_extended() {
    let k = Hmac::effective_key(&Md5, b"Jefe").unwrap();
    let mut expected = vec![0u8; 64];
    expected[..4].copy_from_slice(b"Jefe");
    assert_eq!(&k[..], &expected[..]);
}

#[test]
fn effective_key_long_key_is_hashed() {
    let k = Hmac::effective_key(&Md5, &[0xaa; 80]).unwrap();
    assert_eq!(k.len(), 64);
    assert_eq!(k[..16], hex!("8fb6ab01840023ec453ecdec73dc1b66"));
    assert!(k[16..].iter().all(|&b| b == 0));
}

#[test]
fn pads_match_manual_construction() {
    // HMAC(K, m) = H((K ^ opad) || H((K ^ ipad) || m))
    let key = b"a moderately long secret key";
    let msg = b"message";
    let k = Hmac::effective_key(&Md5, key).unwrap();
    let ipad: Vec<u8> = k.iter().map(|b| b ^ 0x36).collect();
    let opad: Vec<u8> = k.iter().map(|b| b ^ 0x5c).collect();

    let mut inner = Md5.new_hasher().unwrap();
    inner.update(&ipad).unwrap();
    inner.update(msg).unwrap();
    let inner = inner.finalize().unwrap();
    let mut outer = Md5.new_hasher().unwrap();
    outer.update(&opad).unwrap();
    outer.update(inner.as_bytes()).unwrap();

    assert_eq!(
        outer.finalize().unwrap().to_vec(),
        hmac_md5(key, msg)
    );
}

/// MD5 that claims an 8-byte block, shorter than its digest.
#[derive(Clone, Copy)]
struct NarrowMd5;

impl HashFunction for NarrowMd5 {
    type Hasher = <Md5 as HashFunction>::Hasher;

    fn name(&self) -> Cow<'static, str> {
        "narrow MD5".into()
    }

    fn hash_len(&self) -> usize {
        16
    }

    fn new_hasher(&self) -> Result<Self::Hasher> {
        Md5.new_hasher()
    }
}

impl BlockHashFunction for NarrowMd5 {
    fn block_len(&self) -> usize {
        8
    }
}

#[test]
fn rejects_block_shorter_than_digest() {
    assert!(matches!(
        Hmac::new(NarrowMd5, b"key"),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Hmac::effective_key(&NarrowMd5, b"key"),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn instances_are_independent() {
    let hmac = Hmac::new(Md5, b"Jefe").unwrap();
    let mut a = hmac.new_hasher().unwrap();
    let mut b = hmac.new_hasher().unwrap();
    a.update(b"what do ya want for nothing?").unwrap();
    b.update(b"something else").unwrap();
    let c = a.clone();
    assert_eq!(
        a.finalize().unwrap().to_vec(),
        hex!("750c783e6ab0b503eaa86e310a5db738")
    );
    assert_eq!(
        c.finalize().unwrap().to_vec(),
        hex!("750c783e6ab0b503eaa86e310a5db738")
    );
    assert_eq!(b.hash_len(), 16);
    assert_ne!(
        b.finalize().unwrap().to_vec(),
        hex!("750c783e6ab0b503eaa86e310a5db738")
    );
    // the templates are untouched
    assert_eq!(
        hmac.mac(b"what do ya want for nothing?").unwrap().to_vec(),
        hex!("750c783e6ab0b503eaa86e310a5db738")
    );
}

#[test]
fn zeroize_hmac() {
    let mut hmac = Hmac::new(Md5, b"Jefe").unwrap();
    let live = hmac.new_hasher().unwrap();
    hmac.zeroize().unwrap();
    assert!(hmac.is_zeroized());
    assert_eq!(hmac.new_hasher().unwrap_err(), Error::AlreadyZeroized);
    assert_eq!(hmac.mac(b"x").unwrap_err(), Error::AlreadyZeroized);
    assert_eq!(hmac.zeroize(), Err(Error::AlreadyZeroized));
    assert_eq!(hmac.name(), "HMAC-MD5");

    // hashers created before are separate copies
    assert!(live.finalize().is_ok());
}

#[test]
fn zeroize_hmac_hasher() {
    let hmac = Hmac::new(Md5, b"Jefe").unwrap();
    let mut h = hmac.new_hasher().unwrap();
    h.update(b"abc").unwrap();
    h.zeroize().unwrap();
    assert!(h.is_zeroized());
    assert_eq!(h.update(b"abc"), Err(Error::AlreadyZeroized));
    assert_eq!(h.zeroize(), Err(Error::AlreadyZeroized));
    assert_eq!(h.finalize().unwrap_err(), Error::AlreadyZeroized);
}

proptest! {
    #[test]
    fn incremental_matches_one_shot(
        key in proptest::collection::vec(any::<u8>(), 0..100),
        data in proptest::collection::vec(any::<u8>(), 0..200),
        step in 1usize..70,
    ) {
        let hmac = Hmac::new(Md5, &key).unwrap();
        let mut h = hmac.new_hasher().unwrap();
        for chunk in data.chunks(step) {
            h.update(chunk).unwrap();
        }
        prop_assert_eq!(h.finalize().unwrap(), hmac.mac(&data).unwrap());
    }
}
