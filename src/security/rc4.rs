//! DISCLAIMER: This is a toy RC4 (ARC4) stream cipher in pure Rust. RC4's keystream is
//! measurably biased and it is prohibited in TLS (RFC 7465). Absolutely DO NOT use it for
//! real cryptographic or security-sensitive operations.

use std::fmt::{Debug, Display, Formatter};

use crate::error::{Error, Result};

/// RC4 keys are between 1 and 256 bytes.
pub const RC4_MAX_KEY_BYTES: usize = 256;

/// RC4 state: the permutation `s` and the two stream indices.
#[derive(Clone)]
pub struct Rc4 {
    s: [u8; 256],
    i: u8,
    j: u8,
    key_len: usize,
    dropped: usize,
}

impl Rc4 {
    /// Runs the key-scheduling algorithm over `key`.
    pub fn new(key: &[u8]) -> Result<Self> {
        Self::with_drop(key, 0)
    }

    /// RC4-drop[n]: schedules `key`, then discards the first `drop` keystream bytes.
    pub fn with_drop(key: &[u8], drop: usize) -> Result<Self> {
        if key.is_empty() || key.len() > RC4_MAX_KEY_BYTES {
            return Err(Error::invalid_key_length("ARC4", "1..=256", key.len()));
        }

        let mut s = [0u8; 256];
        for (slot, value) in s.iter_mut().zip(0u8..=255) {
            *slot = value;
        }

        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, j as usize);
        }

        let mut cipher = Self {
            s,
            i: 0,
            j: 0,
            key_len: key.len(),
            dropped: drop,
        };
        for _ in 0..drop {
            cipher.next_byte();
        }

        log::debug!("ARC4 keyed with {} bytes, dropped {}", key.len(), drop);
        Ok(cipher)
    }

    /// XORs the keystream into `buf`. Encryption and decryption are the same operation.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte ^= self.next_byte();
        }
    }

    /// Returns `data` XORed with the next `data.len()` keystream bytes.
    pub fn process(&mut self, data: &[u8]) -> Vec<u8> {
        let mut out = data.to_vec();
        self.apply_keystream(&mut out);
        out
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.s[self.i as usize]);
        self.s.swap(self.i as usize, self.j as usize);
        let idx = self.s[self.i as usize].wrapping_add(self.s[self.j as usize]);
        self.s[idx as usize]
    }
}

impl Debug for Rc4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rc4")
            .field("key_len", &self.key_len)
            .field("dropped", &self.dropped)
            .finish_non_exhaustive()
    }
}

impl Display for Rc4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<ARC4 cipher key_len={}", self.key_len)?;
        if self.dropped > 0 {
            write!(f, " drop={}", self.dropped)?;
        }
        f.write_str(">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_rc4_known_vectors() {
        let cases: [(&[u8], &[u8], &str); 3] = [
            (b"Key", b"Plaintext", "bbf316e8d940af0ad3"),
            (b"Wiki", b"pedia", "1021bf0420"),
            (b"Secret", b"Attack at dawn", "45a01f645fc35b383552544b9bf5"),
        ];
        for (key, plaintext, expected) in cases {
            let mut cipher = Rc4::new(key).unwrap();
            assert_eq!(hex::encode(cipher.process(plaintext)), expected);
        }
    }

    #[test]
    fn test_rc4_rfc6229_forty_bit_key() {
        let mut cipher = Rc4::new(&[0x01, 0x02, 0x03, 0x04, 0x05]).unwrap();
        let mut stream = [0u8; 16];
        cipher.apply_keystream(&mut stream);
        assert_eq!(hex::encode(stream), "b2396305f03dc027ccc3524a0a1118a8");
    }

    #[test]
    fn test_rc4_key_length_bounds() {
        assert!(Rc4::new(b"k").is_ok());
        assert!(Rc4::new(&[7u8; RC4_MAX_KEY_BYTES]).is_ok());
        assert_eq!(
            Rc4::new(b"").unwrap_err(),
            Error::invalid_key_length("ARC4", "1..=256", 0)
        );
        assert!(matches!(
            Rc4::new(&[7u8; RC4_MAX_KEY_BYTES + 1]),
            Err(Error::InvalidKeyLength { actual: 257, .. })
        ));
    }

    #[test]
    fn test_rc4_symmetric() {
        let mut rng = rand::thread_rng();
        let key: [u8; 16] = rng.gen();
        let message: Vec<u8> = (0..rng.gen_range(1..200)).map(|_| rng.gen()).collect();

        let ciphertext = Rc4::new(&key).unwrap().process(&message);
        assert_eq!(Rc4::new(&key).unwrap().process(&ciphertext), message);
    }

    #[test]
    fn test_rc4_drop_skips_keystream() {
        let mut plain = Rc4::new(b"secretkey").unwrap();
        let full = plain.process(&[0u8; 32]);

        let mut dropped = Rc4::with_drop(b"secretkey", 12).unwrap();
        assert_eq!(dropped.process(&[0u8; 20]), full[12..]);
    }

    #[test]
    fn test_rc4_display() {
        assert_eq!(
            Rc4::new(b"secretkey").unwrap().to_string(),
            "<ARC4 cipher key_len=9>"
        );
        assert_eq!(
            Rc4::with_drop(b"secretkey", 768).unwrap().to_string(),
            "<ARC4 cipher key_len=9 drop=768>"
        );
    }
}
