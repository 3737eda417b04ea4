//! AES block cipher implementations
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for 128-, 192- and 256-bit keys.
//!
//! ## Constant-Time Guarantees
//!
//! - The S-box is computed (GF(2^8) inversion followed by the affine map)
//!   instead of looked up, so no memory access depends on key or data
//! - GF(2^8) arithmetic is branchless
//! - Keys are validated before the schedule is expanded
//!
//! All three key sizes share one key schedule type; they differ only in the
//! number of rounds and the length of the expanded schedule.

use core::fmt;

use blockflow_common::SecretBuffer;
use blockflow_params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES192_KEY_SIZE, AES192_ROUNDS, AES256_KEY_SIZE,
    AES256_ROUNDS, AES_BLOCK_SIZE, AES_MAX_SCHEDULE_SIZE,
};
use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};

/// Round constants for key expansion (first byte of each word)
const RCON: [u8; 11] = [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Multiply by x in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1
#[inline(always)]
fn xtime(b: u8) -> u8 {
    (b << 1) ^ ((b >> 7).wrapping_neg() & 0x1b)
}

/// Branchless GF(2^8) multiplication
#[inline(always)]
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    for _ in 0..8 {
        p ^= a & (b & 1).wrapping_neg();
        a = xtime(a);
        b >>= 1;
    }
    p
}

/// x^254, which is x^-1 for non-zero x and 0 for x == 0
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    // 254 = 0b1111_1110: accumulate x^2, x^4, ..., x^128
    let mut acc = 1u8;
    let mut sq = x;
    for _ in 1..8 {
        sq = gf_mul(sq, sq);
        acc = gf_mul(acc, sq);
    }
    acc
}

#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    gf_inv(x.rotate_left(1) ^ x.rotate_left(3) ^ x.rotate_left(6) ^ 0x05)
}

#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([sbox(b[0]), sbox(b[1]), sbox(b[2]), sbox(b[3])])
}

// State bytes are column-major: byte `r + 4 * c` is row r, column c.

fn sub_bytes(state: &mut [u8; 16]) {
    for b in state.iter_mut() {
        *b = sbox(*b);
    }
}

fn inv_sub_bytes(state: &mut [u8; 16]) {
    for b in state.iter_mut() {
        *b = inv_sbox(*b);
    }
}

fn shift_rows(state: &mut [u8; 16]) {
    let s = *state;
    for r in 1..4 {
        for c in 0..4 {
            state[r + 4 * c] = s[r + 4 * ((c + r) % 4)];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; 16]) {
    let s = *state;
    for r in 1..4 {
        for c in 0..4 {
            state[r + 4 * ((c + r) % 4)] = s[r + 4 * c];
        }
    }
}

fn mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
        let t = a0 ^ a1 ^ a2 ^ a3;
        col[0] = a0 ^ t ^ xtime(a0 ^ a1);
        col[1] = a1 ^ t ^ xtime(a1 ^ a2);
        col[2] = a2 ^ t ^ xtime(a2 ^ a3);
        col[3] = a3 ^ t ^ xtime(a3 ^ a0);
    }
}

fn inv_mix_columns(state: &mut [u8; 16]) {
    // InvMixColumns = MixColumns after a cheap per-column preconditioning
    for col in state.chunks_exact_mut(4) {
        let u = xtime(xtime(col[0] ^ col[2]));
        let v = xtime(xtime(col[1] ^ col[3]));
        col[0] ^= u;
        col[1] ^= v;
        col[2] ^= u;
        col[3] ^= v;
    }
    mix_columns(state);
}

fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

/// Expanded round keys, sized for the largest variant
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct KeySchedule {
    round_keys: SecretBuffer<AES_MAX_SCHEDULE_SIZE>,
    rounds: usize,
}

impl KeySchedule {
    /// FIPS 197 §5.2 key expansion; `key` length has already been validated
    fn expand(key: &[u8], rounds: usize) -> Self {
        let nk = key.len() / 4;
        let total = 4 * (rounds + 1);

        let mut words = Zeroizing::new([0u32; AES_MAX_SCHEDULE_SIZE / 4]);
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            words[i] = BigEndian::read_u32(chunk);
        }
        for i in nk..total {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ ((RCON[i / nk] as u32) << 24);
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            words[i] = words[i - nk] ^ temp;
        }

        let mut round_keys = SecretBuffer::zeroed();
        for (i, word) in words[..total].iter().enumerate() {
            BigEndian::write_u32(&mut round_keys.as_mut_slice()[4 * i..4 * i + 4], *word);
        }

        Self { round_keys, rounds }
    }

    #[inline(always)]
    fn round_key(&self, round: usize) -> &[u8] {
        &self.round_keys.as_slice()[16 * round..16 * round + 16]
    }

    fn encrypt(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut state = Zeroizing::new([0u8; 16]);
        state.copy_from_slice(block);

        add_round_key(&mut state, self.round_key(0));
        for round in 1..self.rounds {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, self.round_key(round));
        }
        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, self.round_key(self.rounds));

        block.copy_from_slice(&state[..]);
        Ok(())
    }

    fn decrypt(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut state = Zeroizing::new([0u8; 16]);
        state.copy_from_slice(block);

        add_round_key(&mut state, self.round_key(self.rounds));
        for round in (1..self.rounds).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, self.round_key(round));
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, self.round_key(0));

        block.copy_from_slice(&state[..]);
        Ok(())
    }
}

macro_rules! aes_variant {
    ($(#[$doc:meta])* $name:ident, $key_size:expr, $rounds:expr, $label:literal) => {
        $(#[$doc])*
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name {
            schedule: KeySchedule,
        }

        impl CipherAlgorithm for $name {
            const KEY_SIZE: usize = $key_size;
            const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

            fn name() -> &'static str {
                $label
            }
        }

        impl BlockCipher for $name {
            fn new(key: &[u8]) -> Result<Self> {
                validate::length(concat!($label, " key"), key.len(), $key_size)?;
                Ok(Self {
                    schedule: KeySchedule::expand(key, $rounds),
                })
            }

            fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
                self.schedule.encrypt(block)
            }

            fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
                self.schedule.decrypt(block)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "([REDACTED])"))
            }
        }
    };
}

aes_variant!(
    /// AES-128 block cipher
    Aes128,
    AES128_KEY_SIZE,
    AES128_ROUNDS,
    "AES-128"
);

aes_variant!(
    /// AES-192 block cipher
    Aes192,
    AES192_KEY_SIZE,
    AES192_ROUNDS,
    "AES-192"
);

aes_variant!(
    /// AES-256 block cipher
    Aes256,
    AES256_KEY_SIZE,
    AES256_ROUNDS,
    "AES-256"
);
