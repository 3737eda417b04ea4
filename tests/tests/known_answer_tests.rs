//! Known-answer tests driven through cipher contexts

use blockflow_api::Direction;
use blockflow_symmetric::{decrypt, encrypt, Algorithm};
use blockflow_tests::vectors::{EcbVector, FIPS_197, SP800_38A_ECB};

fn run_unpadded(v: &EcbVector, direction: Direction, input: &[u8], chunk: usize) -> Vec<u8> {
    let mut ctx = v.algorithm.new_context().unwrap();
    ctx.set_padding(false).unwrap();
    match direction {
        Direction::Encrypt => ctx.encrypt_init(Some(&v.key()), None).unwrap(),
        Direction::Decrypt => ctx.decrypt_init(Some(&v.key()), None).unwrap(),
    }
    let mut out = Vec::new();
    for piece in input.chunks(chunk) {
        ctx.update(piece, &mut out).unwrap();
    }
    ctx.finalize(&mut out).unwrap();
    out
}

#[test]
fn fips_197_single_blocks() {
    for v in FIPS_197.iter() {
        assert_eq!(
            run_unpadded(v, Direction::Encrypt, &v.plaintext(), 16),
            v.ciphertext(),
            "{}",
            v.algorithm
        );
        assert_eq!(
            run_unpadded(v, Direction::Decrypt, &v.ciphertext(), 16),
            v.plaintext(),
            "{}",
            v.algorithm
        );
    }
}

#[test]
fn sp800_38a_ecb_in_odd_chunks() {
    for v in SP800_38A_ECB.iter() {
        for chunk in [1, 7, 16, 23, 64] {
            assert_eq!(
                run_unpadded(v, Direction::Encrypt, &v.plaintext(), chunk),
                v.ciphertext(),
                "{} chunk {}",
                v.algorithm,
                chunk
            );
            assert_eq!(
                run_unpadded(v, Direction::Decrypt, &v.ciphertext(), chunk),
                v.plaintext(),
                "{} chunk {}",
                v.algorithm,
                chunk
            );
        }
    }
}

#[test]
fn padded_stream_prefix_matches_unpadded_vector() {
    // With padding on, the whole-block prefix is the plain ECB output and
    // one extra block of padding follows
    for v in SP800_38A_ECB.iter() {
        let ct = encrypt(v.algorithm, &v.key(), &v.plaintext()).unwrap();
        assert_eq!(ct.len(), 80);
        assert_eq!(&ct[..64], &v.ciphertext()[..]);
        assert_eq!(decrypt(v.algorithm, &v.key(), &ct).unwrap(), v.plaintext());
    }
}

#[test]
fn pad_block_is_the_encryption_of_sixteen_sixteens() {
    let v = &FIPS_197[0];
    let ct = encrypt(Algorithm::Aes128Ecb, &v.key(), b"").unwrap();

    let pad_block = EcbVector {
        plaintext: "10101010101010101010101010101010",
        ..*v
    };
    assert_eq!(
        ct,
        run_unpadded(&pad_block, Direction::Encrypt, &pad_block.plaintext(), 16)
    );
}
