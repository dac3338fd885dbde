//! The fixture itself: a handful of deliberately weak cryptographic calls for a scanner to
//! find.
//!
//! [`run`] builds an MD5 digest, a SHA-1 digest picked by name, a DES context and an RC4
//! context from hard-coded inputs, and performs no encryption. [`run_zero_key`] is the
//! variant that drives the ciphers with all-zero keys.
//!
//! # Examples
//!
//! ```
//! let output = weak_crypto::run().unwrap();
//! assert_eq!(output.md5_hex, "8d777f385d3dfec8815d20f7496026dc");
//! ```

use std::fmt::{Display, Formatter};

use crate::error::Result;
use crate::security::des::{Des, DES_BLOCK_SIZE, DES_KEY_SIZE};
use crate::security::digest::hexdigest_by_name;
use crate::security::md5::{md5_digest, Md5, MD5_OUTPUT_SIZE};
use crate::security::rc4::Rc4;
use crate::security::sha1::{Sha1, SHA1_OUTPUT_SIZE};

/// Input to both hashes.
pub const DATA: &[u8] = b"data";
/// DES key; exactly 8 bytes.
pub const DES_KEY: &[u8] = b"12345678";
/// RC4 key.
pub const RC4_KEY: &[u8] = b"secretkey";
/// SHA-1 is looked up by this name rather than called directly.
pub const SHA1_NAME: &str = "sha1";

const ZERO_KEY_RC4_LEN: usize = 16;

/// The four values the fixture produces.
#[derive(Debug)]
pub struct FixtureOutput {
    pub md5_hex: String,
    pub sha1_hex: String,
    pub des: Des,
    pub rc4: Rc4,
}

/// Renders as a single tuple-like line, e.g.
/// `('8d77…', 'a17c…', <DES cipher mode=ECB key_len=8>, <ARC4 cipher key_len=9>)`.
impl Display for FixtureOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "('{}', '{}', {}, {})",
            self.md5_hex, self.sha1_hex, self.des, self.rc4
        )
    }
}

/// Builds the MD5 and SHA-1 digests of [`DATA`] plus DES and RC4 contexts from the fixed keys.
pub fn run() -> Result<FixtureOutput> {
    let md5_hex = hex::encode(md5_digest(DATA));
    let sha1_hex = hexdigest_by_name(SHA1_NAME, DATA)?;
    let des = Des::new(DES_KEY)?;
    let rc4 = Rc4::new(RC4_KEY)?;

    log::trace!("fixture produced md5={} sha1={}", md5_hex, sha1_hex);
    Ok(FixtureOutput {
        md5_hex,
        sha1_hex,
        des,
        rc4,
    })
}

/// Results of [`run_zero_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroKeyOutput {
    /// One zero block, DES-ECB encrypted under the zero key.
    pub des_block: [u8; DES_BLOCK_SIZE],
    /// Sixteen zero bytes, RC4 encrypted under a 16-byte zero key.
    pub rc4_stream: [u8; ZERO_KEY_RC4_LEN],
    pub md5_empty: [u8; MD5_OUTPUT_SIZE],
    pub sha1_empty: [u8; SHA1_OUTPUT_SIZE],
}

/// Drives each primitive once with zero keys and empty or zero input.
///
/// The zero DES key is one of the weak keys, so this logs a warning.
pub fn run_zero_key() -> Result<ZeroKeyOutput> {
    let des = Des::new(&[0u8; DES_KEY_SIZE])?;
    let mut des_block = [0u8; DES_BLOCK_SIZE];
    des.encrypt_block(&mut des_block);

    let mut rc4 = Rc4::new(&[0u8; ZERO_KEY_RC4_LEN])?;
    let mut rc4_stream = [0u8; ZERO_KEY_RC4_LEN];
    rc4.apply_keystream(&mut rc4_stream);

    Ok(ZeroKeyOutput {
        des_block,
        rc4_stream,
        md5_empty: Md5::new().finalize(),
        sha1_empty: Sha1::new().finalize(),
    })
}
