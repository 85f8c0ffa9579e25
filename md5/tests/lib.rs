use hex_literal::hex;
use md5::{framework::Zeroizable, BlockHashFunction, HashFunction, Hasher, Md5};
use proptest::prelude::*;

fn md5(data: &[u8]) -> Vec<u8> {
    Md5.hash(data).unwrap().to_vec()
}

#[test]
fn rfc1321_suite() {
    assert_eq!(md5(b""), hex!("d41d8cd98f00b204e9800998ecf8427e"));
    assert_eq!(md5(b"a"), hex!("0cc175b9c0f1b6a831c399e269772661"));
    assert_eq!(md5(b"abc"), hex!("900150983cd24fb0d6963f7d28e17f72"));
    assert_eq!(md5(b"message digest"), hex!("f96b697d7cb7938d525a2f31aaf161d0"));
    assert_eq!(
        md5(b"abcdefghijklmnopqrstuvwxyz"),
        hex!("c3fcd3d76192e4007dfb496cca67e13b")
    );
    assert_eq!(
        md5(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"),
        hex!("d174ab98d277d9f5a5611c2c9f419d9f")
    );
    assert_eq!(
        md5(b"12345678901234567890123456789012345678901234567890123456789012345678901234567890"),
        hex!("57edf4a22be3c955ac49da2e2107b67a")
    );
}

#[test]
fn padding_boundaries() {
    assert_eq!(md5(&[b'a'; 55]), hex!("ef1772b6dff9a122358552954ad0df65"));
    assert_eq!(md5(&[b'a'; 56]), hex!("3b0c8ac703f828b04c6c197006d17218"));
    assert_eq!(md5(&[b'a'; 64]), hex!("014842d480b571495a4a0363793f7367"));
}

#[test]
fn million_a() {
    let mut h = Md5.new_hasher().unwrap();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        h.update(&chunk).unwrap();
    }
    assert_eq!(
        h.finalize().unwrap().to_string(),
        "7707D6AE4E027C70EEA2A935C2296F21"
    );
}

#[test]
fn descriptor() {
    assert_eq!(Md5.name(), "MD5");
    assert_eq!(Md5.hash_len(), 16);
    assert_eq!(Md5.block_len(), 64);
    assert_eq!(Md5.new_hasher().unwrap().hash_len(), 16);
}

#[test]
fn byte_updates_match_slice_update() {
    let mut h = Md5.new_hasher().unwrap();
    for &b in b"message digest" {
        h.update_byte(b).unwrap();
    }
    assert_eq!(h.finalize().unwrap().to_vec(), md5(b"message digest"));
}

#[test]
fn zeroized_hasher_fails() {
    let mut h = Md5.new_hasher().unwrap();
    h.update(b"abc").unwrap();
    h.zeroize().unwrap();
    assert!(h.update(b"abc").is_err());
    assert!(h.finalize().is_err());
}

proptest! {
    #[test]
    fn split_updates_match_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..300),
        split in any::<prop::sample::Index>(),
        step in 1usize..80,
    ) {
        let at = split.index(data.len() + 1);
        let mut h = Md5.new_hasher().unwrap();
        h.update(&data[..at]).unwrap();
        for chunk in data[at..].chunks(step) {
            h.update(chunk).unwrap();
        }
        prop_assert_eq!(h.finalize().unwrap().to_vec(), md5(&data));
    }
}
