use hex_literal::hex;
use proptest::prelude::*;
use rc4::{
    framework::{Error, Zeroizable},
    Cipher, Cipherer, Rc4,
};

fn check(key: &[u8], plaintext: &[u8], ciphertext: &[u8]) {
    let mut c = Rc4::new(key.len()).unwrap().new_cipherer(key).unwrap();
    let mut buf = plaintext.to_vec();
    c.encrypt(&mut buf).unwrap();
    assert_eq!(buf, ciphertext);
}

#[test]
fn known_answers() {
    check(b"Key", b"Plaintext", &hex!("BBF316E8D940AF0AD3"));
    check(b"Wiki", b"pedia", &hex!("1021BF0420"));
    check(
        b"Secret",
        b"Attack at dawn",
        &hex!("45A01F645FC35B383552544B9BF5"),
    );
    check(&hex!("EF012345"), &[0; 10], &hex!("D6A141A7EC3C38DFBD61"));
    check(
        &hex!("0123456789ABCDEF"),
        &hex!("0123456789ABCDEF"),
        &hex!("75B7878099E0C596"),
    );
    check(
        &hex!("0123456789ABCDEF"),
        &[0; 8],
        &hex!("7494C2E7104B0879"),
    );
    check(
        &hex!("0123456789ABCDEF"),
        &hex!("123456789ABCDEF0123456789ABCDEF0123456789ABCDEF012345678"),
        &hex!("66A0949F8AF7D6891F7F832BA833C00C892EBE30143CE28740011ECF"),
    );
    check(
        &hex!("FB029E3031323334"),
        &hex!(
            "AAAA0300000008004500004E661A00008011BE640A0001220AFFFFFF00890089"
            "003A000080A601100001000000000000204543454A4548454346434550464545"
            "494546464343414341434143414341414100002000011BD0B604"
        ),
        &hex!(
            "F69C5806BD6CE84626BCBEFB9474650AAD1F7909B0F64D5F58A503A258B7ED22"
            "EB0EA64930D3A056A55742FCCE141D485F8AA836DEA18DF42C5380805AD0C61A"
            "5D6F58F41040B24B7D1A693856ED0D4398E7AEE3BF0E2A2CA8F7"
        ),
    );
}

#[test]
fn descriptor() {
    let rc4 = Rc4::new(16).unwrap();
    assert_eq!(rc4.name(), "RC4 (128-bit key)");
    assert_eq!(rc4.key_len(), 16);
    assert_eq!(rc4.block_len(), 1);
    assert_eq!(rc4.new_cipherer(&[0; 16]).unwrap().block_len(), 1);
}

#[test]
fn rejects_bad_parameters() {
    assert!(matches!(Rc4::new(0), Err(Error::InvalidConfiguration(_))));
    assert!(matches!(Rc4::new(257), Err(Error::InvalidConfiguration(_))));
    assert!(Rc4::new(256).is_ok());
    assert_eq!(
        Rc4::new(5).unwrap().new_cipherer(b"Key").unwrap_err(),
        Error::InvalidKeyLength {
            expected: 5,
            actual: 3
        }
    );
}

#[test]
fn keystream_continues_across_calls() {
    let rc4 = Rc4::new(3).unwrap();
    let mut c = rc4.new_cipherer(b"Key").unwrap();
    let mut buf = *b"Plaintext";
    let (head, tail) = buf.split_at_mut(4);
    c.encrypt(head).unwrap();
    c.encrypt(tail).unwrap();
    assert_eq!(buf, hex!("BBF316E8D940AF0AD3"));
}

#[test]
fn range_operations() {
    let mut c = Rc4::new(3).unwrap().new_cipherer(b"Key").unwrap();
    let mut buf = *b"__Plaintext__";
    c.encrypt_range(&mut buf, 2, 9).unwrap();
    assert_eq!(buf[2..11], hex!("BBF316E8D940AF0AD3"));
    assert_eq!(&buf[..2], b"__");
    assert_eq!(&buf[11..], b"__");
    assert_eq!(
        c.encrypt_range(&mut buf, 12, 2),
        Err(Error::OutOfBounds {
            buf_len: 13,
            off: 12,
            len: 2
        })
    );
}

#[test]
fn zeroize_and_clone() {
    let rc4 = Rc4::new(3).unwrap();
    let mut a = rc4.new_cipherer(b"Key").unwrap();
    let mut b = a.clone();
    a.zeroize().unwrap();
    assert_eq!(a.encrypt(&mut [0; 3]), Err(Error::AlreadyZeroized));
    assert_eq!(a.zeroize(), Err(Error::AlreadyZeroized));

    let mut buf = *b"Plaintext";
    b.decrypt(&mut buf).unwrap();
    assert_eq!(buf, hex!("BBF316E8D940AF0AD3"));
}

proptest! {
    #[test]
    fn decrypt_undoes_encrypt(
        key in proptest::collection::vec(any::<u8>(), 1..=256),
        data in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let rc4 = Rc4::new(key.len()).unwrap();
        let mut enc = rc4.new_cipherer(&key).unwrap();
        let mut dec = rc4.new_cipherer(&key).unwrap();
        let mut buf = data.clone();
        enc.encrypt(&mut buf).unwrap();
        dec.decrypt(&mut buf).unwrap();
        prop_assert_eq!(buf, data);
    }
}
