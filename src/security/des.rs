//! DISCLAIMER: This is a toy DES (FIPS 46-3) block cipher in pure Rust. DES has a 56-bit
//! effective key and falls to exhaustive search. It is here so the fixture can construct a
//! DES context. Absolutely DO NOT use it for real cryptographic or security-sensitive
//! operations.
//!
//! The only mode offered is ECB, optionally with PKCS#5 padding.

use std::fmt::{Debug, Display, Formatter};

use crate::error::{Error, Result};

/// DES operates on 64-bit blocks (8 bytes).
pub const DES_BLOCK_SIZE: usize = 8;
/// DES keys are 64 bits including one parity bit per byte.
pub const DES_KEY_SIZE: usize = 8;

const ROUNDS: usize = 16;
const PARITY_MASK: u64 = 0xFEFE_FEFE_FEFE_FEFE;

/// The four keys whose round subkeys are all identical, with parity bits cleared.
const WEAK_KEYS: [u64; 4] = [
    0x0000_0000_0000_0000,
    0xFEFE_FEFE_FEFE_FEFE,
    0xE0E0_E0E0_F0F0_F0F0,
    0x1E1E_1E1E_0E0E_0E0E,
];

/// A DES key schedule: sixteen 48-bit round subkeys.
pub struct Des {
    subkeys: [u64; ROUNDS],
    weak: bool,
}

impl Des {
    /// Expands an 8-byte key into its round subkeys.
    ///
    /// Parity bits are ignored. Any key length other than 8 bytes is rejected.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key: [u8; DES_KEY_SIZE] = key
            .try_into()
            .map_err(|_| Error::invalid_key_length("DES", "8", key.len()))?;
        let key = u64::from_be_bytes(key);

        let weak = WEAK_KEYS.contains(&(key & PARITY_MASK));
        if weak {
            log::warn!("DES constructed with a weak key");
        }
        log::debug!("DES key schedule ready (mode=ECB)");

        Ok(Self {
            subkeys: key_schedule(key),
            weak,
        })
    }

    /// True when the key is one of the four DES weak keys.
    pub fn is_weak_key(&self) -> bool {
        self.weak
    }

    /// Encrypt a single 64-bit block in place.
    pub fn encrypt_block(&self, block: &mut [u8; DES_BLOCK_SIZE]) {
        let out = crypt_block(u64::from_be_bytes(*block), self.subkeys.iter());
        *block = out.to_be_bytes();
    }

    /// Decrypt a single 64-bit block in place.
    pub fn decrypt_block(&self, block: &mut [u8; DES_BLOCK_SIZE]) {
        let out = crypt_block(u64::from_be_bytes(*block), self.subkeys.iter().rev());
        *block = out.to_be_bytes();
    }

    /// ECB-encrypts `data`, whose length must be a multiple of 8.
    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.ecb(data, Self::encrypt_block)
    }

    /// ECB-decrypts `data`, whose length must be a multiple of 8.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.ecb(data, Self::decrypt_block)
    }

    /// ECB with PKCS#5 padding. Always appends between 1 and 8 bytes.
    pub fn encrypt_padded(&self, data: &[u8]) -> Result<Vec<u8>> {
        let pad = DES_BLOCK_SIZE - data.len() % DES_BLOCK_SIZE;
        let mut padded = Vec::with_capacity(data.len() + pad);
        padded.extend_from_slice(data);
        padded.resize(data.len() + pad, pad as u8);
        self.encrypt(&padded)
    }

    /// Reverses [`Des::encrypt_padded`], checking every padding byte.
    pub fn decrypt_padded(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut plain = self.decrypt(data)?;
        let pad = *plain.last().ok_or(Error::InvalidPadding)? as usize;
        if pad == 0 || pad > DES_BLOCK_SIZE || pad > plain.len() {
            return Err(Error::InvalidPadding);
        }
        if plain[plain.len() - pad..].iter().any(|&b| b as usize != pad) {
            return Err(Error::InvalidPadding);
        }
        plain.truncate(plain.len() - pad);
        Ok(plain)
    }

    fn ecb(&self, data: &[u8], op: fn(&Self, &mut [u8; DES_BLOCK_SIZE])) -> Result<Vec<u8>> {
        if data.len() % DES_BLOCK_SIZE != 0 {
            return Err(Error::InvalidDataLength {
                algorithm: "DES",
                len: data.len(),
                block_size: DES_BLOCK_SIZE,
            });
        }

        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(DES_BLOCK_SIZE) {
            let mut block = [0u8; DES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            op(self, &mut block);
            out.extend_from_slice(&block);
        }
        Ok(out)
    }
}

// Never print the subkeys.
impl Debug for Des {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Des")
            .field("mode", &"ECB")
            .field("weak", &self.weak)
            .finish_non_exhaustive()
    }
}

impl Display for Des {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<DES cipher mode=ECB key_len={}>", DES_KEY_SIZE)
    }
}

/// Selects bits of `input` (an `width`-bit value, bit 1 = most significant) in table order.
fn permute(input: u64, width: u32, table: &[u8]) -> u64 {
    table
        .iter()
        .fold(0u64, |acc, &pos| (acc << 1) | ((input >> (width - pos as u32)) & 1))
}

fn key_schedule(key: u64) -> [u64; ROUNDS] {
    let permuted = permute(key, 64, &PC1);
    let mut c = (permuted >> 28) & 0x0FFF_FFFF;
    let mut d = permuted & 0x0FFF_FFFF;

    let mut subkeys = [0u64; ROUNDS];
    for (subkey, &shift) in subkeys.iter_mut().zip(SHIFTS.iter()) {
        c = rotate_28(c, shift);
        d = rotate_28(d, shift);
        *subkey = permute((c << 28) | d, 56, &PC2);
    }
    subkeys
}

fn rotate_28(half: u64, shift: u32) -> u64 {
    ((half << shift) | (half >> (28 - shift))) & 0x0FFF_FFFF
}

/// Sixteen Feistel rounds between the initial and final permutations.
fn crypt_block<'a>(block: u64, subkeys: impl Iterator<Item = &'a u64>) -> u64 {
    let permuted = permute(block, 64, &IP);
    let mut left = permuted >> 32;
    let mut right = permuted & 0xFFFF_FFFF;

    for &subkey in subkeys {
        let next = left ^ feistel(right, subkey);
        left = right;
        right = next;
    }

    // halves are swapped before the final permutation
    permute((right << 32) | left, 64, &FP)
}

fn feistel(half: u64, subkey: u64) -> u64 {
    let expanded = permute(half, 32, &E) ^ subkey;

    let mut substituted = 0u64;
    for (i, sbox) in SBOXES.iter().enumerate() {
        let six = (expanded >> (42 - 6 * i)) & 0x3F;
        let row = ((six & 0x20) >> 4) | (six & 1);
        let col = (six >> 1) & 0x0F;
        substituted = (substituted << 4) | sbox[(row * 16 + col) as usize] as u64;
    }

    permute(substituted, 32, &P)
}

static IP: [u8; 64] = [
    58, 50, 42, 34, 26, 18, 10, 2, 60, 52, 44, 36, 28, 20, 12, 4, //
    62, 54, 46, 38, 30, 22, 14, 6, 64, 56, 48, 40, 32, 24, 16, 8, //
    57, 49, 41, 33, 25, 17, 9, 1, 59, 51, 43, 35, 27, 19, 11, 3, //
    61, 53, 45, 37, 29, 21, 13, 5, 63, 55, 47, 39, 31, 23, 15, 7,
];

static FP: [u8; 64] = [
    40, 8, 48, 16, 56, 24, 64, 32, 39, 7, 47, 15, 55, 23, 63, 31, //
    38, 6, 46, 14, 54, 22, 62, 30, 37, 5, 45, 13, 53, 21, 61, 29, //
    36, 4, 44, 12, 52, 20, 60, 28, 35, 3, 43, 11, 51, 19, 59, 27, //
    34, 2, 42, 10, 50, 18, 58, 26, 33, 1, 41, 9, 49, 17, 57, 25,
];

/// Expansion of a 32-bit half block to 48 bits.
static E: [u8; 48] = [
    32, 1, 2, 3, 4, 5, 4, 5, 6, 7, 8, 9, //
    8, 9, 10, 11, 12, 13, 12, 13, 14, 15, 16, 17, //
    16, 17, 18, 19, 20, 21, 20, 21, 22, 23, 24, 25, //
    24, 25, 26, 27, 28, 29, 28, 29, 30, 31, 32, 1,
];

static P: [u8; 32] = [
    16, 7, 20, 21, 29, 12, 28, 17, 1, 15, 23, 26, 5, 18, 31, 10, //
    2, 8, 24, 14, 32, 27, 3, 9, 19, 13, 30, 6, 22, 11, 4, 25,
];

/// Permuted choice 1: drops the parity bits, 64 -> 56.
static PC1: [u8; 56] = [
    57, 49, 41, 33, 25, 17, 9, 1, 58, 50, 42, 34, 26, 18, //
    10, 2, 59, 51, 43, 35, 27, 19, 11, 3, 60, 52, 44, 36, //
    63, 55, 47, 39, 31, 23, 15, 7, 62, 54, 46, 38, 30, 22, //
    14, 6, 61, 53, 45, 37, 29, 21, 13, 5, 28, 20, 12, 4,
];

/// Permuted choice 2: 56 -> 48.
static PC2: [u8; 48] = [
    14, 17, 11, 24, 1, 5, 3, 28, 15, 6, 21, 10, //
    23, 19, 12, 4, 26, 8, 16, 7, 27, 20, 13, 2, //
    41, 52, 31, 37, 47, 55, 30, 40, 51, 45, 33, 48, //
    44, 49, 39, 56, 34, 53, 46, 42, 50, 36, 29, 32,
];

static SHIFTS: [u32; ROUNDS] = [1, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];

static SBOXES: [[u8; 64]; 8] = [
    [
        14, 4, 13, 1, 2, 15, 11, 8, 3, 10, 6, 12, 5, 9, 0, 7, //
        0, 15, 7, 4, 14, 2, 13, 1, 10, 6, 12, 11, 9, 5, 3, 8, //
        4, 1, 14, 8, 13, 6, 2, 11, 15, 12, 9, 7, 3, 10, 5, 0, //
        15, 12, 8, 2, 4, 9, 1, 7, 5, 11, 3, 14, 10, 0, 6, 13,
    ],
    [
        15, 1, 8, 14, 6, 11, 3, 4, 9, 7, 2, 13, 12, 0, 5, 10, //
        3, 13, 4, 7, 15, 2, 8, 14, 12, 0, 1, 10, 6, 9, 11, 5, //
        0, 14, 7, 11, 10, 4, 13, 1, 5, 8, 12, 6, 9, 3, 2, 15, //
        13, 8, 10, 1, 3, 15, 4, 2, 11, 6, 7, 12, 0, 5, 14, 9,
    ],
    [
        10, 0, 9, 14, 6, 3, 15, 5, 1, 13, 12, 7, 11, 4, 2, 8, //
        13, 7, 0, 9, 3, 4, 6, 10, 2, 8, 5, 14, 12, 11, 15, 1, //
        13, 6, 4, 9, 8, 15, 3, 0, 11, 1, 2, 12, 5, 10, 14, 7, //
        1, 10, 13, 0, 6, 9, 8, 7, 4, 15, 14, 3, 11, 5, 2, 12,
    ],
    [
        7, 13, 14, 3, 0, 6, 9, 10, 1, 2, 8, 5, 11, 12, 4, 15, //
        13, 8, 11, 5, 6, 15, 0, 3, 4, 7, 2, 12, 1, 10, 14, 9, //
        10, 6, 9, 0, 12, 11, 7, 13, 15, 1, 3, 14, 5, 2, 8, 4, //
        3, 15, 0, 6, 10, 1, 13, 8, 9, 4, 5, 11, 12, 7, 2, 14,
    ],
    [
        2, 12, 4, 1, 7, 10, 11, 6, 8, 5, 3, 15, 13, 0, 14, 9, //
        14, 11, 2, 12, 4, 7, 13, 1, 5, 0, 15, 10, 3, 9, 8, 6, //
        4, 2, 1, 11, 10, 13, 7, 8, 15, 9, 12, 5, 6, 3, 0, 14, //
        11, 8, 12, 7, 1, 14, 2, 13, 6, 15, 0, 9, 10, 4, 5, 3,
    ],
    [
        12, 1, 10, 15, 9, 2, 6, 8, 0, 13, 3, 4, 14, 7, 5, 11, //
        10, 15, 4, 2, 7, 12, 9, 5, 6, 1, 13, 14, 0, 11, 3, 8, //
        9, 14, 15, 5, 2, 8, 12, 3, 7, 0, 4, 10, 1, 13, 11, 6, //
        4, 3, 2, 12, 9, 5, 15, 10, 11, 14, 1, 7, 6, 0, 8, 13,
    ],
    [
        4, 11, 2, 14, 15, 0, 8, 13, 3, 12, 9, 7, 5, 10, 6, 1, //
        13, 0, 11, 7, 4, 9, 1, 10, 14, 3, 5, 12, 2, 15, 8, 6, //
        1, 4, 11, 13, 12, 3, 7, 14, 10, 15, 6, 8, 0, 5, 9, 2, //
        6, 11, 13, 8, 1, 4, 10, 7, 9, 5, 0, 15, 14, 2, 3, 12,
    ],
    [
        13, 2, 8, 4, 6, 15, 11, 1, 10, 9, 3, 14, 5, 0, 12, 7, //
        1, 15, 13, 8, 10, 3, 7, 4, 12, 5, 6, 11, 0, 14, 9, 2, //
        7, 11, 4, 1, 9, 12, 14, 2, 0, 6, 10, 13, 15, 3, 5, 8, //
        2, 1, 14, 7, 4, 10, 8, 13, 15, 12, 9, 0, 3, 5, 6, 11,
    ],
];
