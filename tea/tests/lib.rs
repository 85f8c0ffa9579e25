use hex_literal::hex;
use proptest::prelude::*;
use tea::{
    framework::{Error, Zeroizable},
    Cipher, Cipherer, Tea, Xtea,
};

fn encrypt<C: Cipher>(cipher: C, key: &[u8], block: [u8; 8]) -> [u8; 8] {
    let mut c = cipher.new_cipherer(key).unwrap();
    let mut buf = block;
    c.encrypt(&mut buf).unwrap();
    let mut back = buf;
    c.decrypt(&mut back).unwrap();
    assert_eq!(back, block);
    buf
}

const KEYS: [[u8; 16]; 4] = [
    hex!("00000000800000000000000000000000"),
    hex!("80000000000000000000000000000000"),
    hex!("80000000000000008000000080000000"),
    hex!("00000000800000008000000080000000"),
];

#[test]
fn xtea_known_answers() {
    let expected = [
        hex!("4F190CCFC8DEABFC"),
        hex!("057E8C0550151937"),
        hex!("31C4E2C6B347B2DE"),
        hex!("ED69B78566781EF3"),
    ];
    for (key, ct) in KEYS.iter().zip(expected.iter()) {
        assert_eq!(&encrypt(Xtea, key, [0; 8]), ct);
    }
    assert_eq!(
        encrypt(
            Xtea,
            &hex!("000102030405060708090a0b0c0d0e0f"),
            hex!("4142434445464748")
        ),
        hex!("497df3d072612cb5")
    );
}

#[test]
fn tea_known_answers() {
    // TEA has equivalent keys: these four encrypt alike.
    for key in KEYS.iter() {
        assert_eq!(encrypt(Tea, key, [0; 8]), hex!("9327C49731B08BBE"));
    }
    assert_eq!(encrypt(Tea, &[0; 16], [0; 8]), hex!("41ea3a0a94baa940"));
    assert_eq!(
        encrypt(Tea, &hex!("000102030405060708090a0b0c0d0e0f"), [0; 8]),
        hex!("f7536548d0013aed")
    );
}

#[test]
fn descriptors() {
    assert_eq!(Tea.name(), "TEA");
    assert_eq!(Xtea.name(), "XTEA");
    for (key_len, block_len) in [(Tea.key_len(), Tea.block_len()), (Xtea.key_len(), Xtea.block_len())] {
        assert_eq!(key_len, 16);
        assert_eq!(block_len, 8);
    }
}

#[test]
fn rejects_wrong_lengths() {
    assert_eq!(
        Xtea.new_cipherer(&[0; 8]).unwrap_err(),
        Error::InvalidKeyLength {
            expected: 16,
            actual: 8
        }
    );
    assert!(Tea.new_cipherer(&[0; 17]).is_err());

    let mut c = Xtea.new_cipherer(&[0; 16]).unwrap();
    assert_eq!(
        c.encrypt(&mut [0; 7]),
        Err(Error::InvalidBlockLength {
            block_len: 8,
            len: 7
        })
    );
}

#[test]
fn zeroize_disables_both() {
    let mut t = Tea.new_cipherer(&[1; 16]).unwrap();
    let mut x = Xtea.new_cipherer(&[1; 16]).unwrap();
    t.zeroize().unwrap();
    x.zeroize().unwrap();
    assert_eq!(t.decrypt(&mut [0; 8]), Err(Error::AlreadyZeroized));
    assert_eq!(x.decrypt(&mut [0; 8]), Err(Error::AlreadyZeroized));
    assert_eq!(t.zeroize(), Err(Error::AlreadyZeroized));
    assert_eq!(x.zeroize(), Err(Error::AlreadyZeroized));
}

proptest! {
    #[test]
    fn xtea_round_trip(key in any::<[u8; 16]>(), blocks in proptest::collection::vec(any::<[u8; 8]>(), 0..8)) {
        let data = blocks.concat();
        let mut c = Xtea.new_cipherer(&key).unwrap();
        let mut buf = data.clone();
        c.encrypt(&mut buf).unwrap();
        c.decrypt(&mut buf).unwrap();
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn tea_round_trip(key in any::<[u8; 16]>(), blocks in proptest::collection::vec(any::<[u8; 8]>(), 0..8)) {
        let data = blocks.concat();
        let mut c = Tea.new_cipherer(&key).unwrap();
        let mut buf = data.clone();
        c.decrypt(&mut buf).unwrap();
        c.encrypt(&mut buf).unwrap();
        prop_assert_eq!(buf, data);
    }
}
