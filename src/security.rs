pub mod des;
pub mod digest;
pub mod md5;
pub mod rc4;
pub mod sha1;

// Re-export DES functionality
pub use des::{Des, DES_BLOCK_SIZE, DES_KEY_SIZE};

// Re-export name-based hash selection
pub use digest::{hexdigest_by_name, HashAlgorithm};

// Re-export MD5 functionality
pub use md5::{md5_digest, Md5, MD5_OUTPUT_SIZE};

// Re-export RC4 functionality
pub use rc4::{Rc4, RC4_MAX_KEY_BYTES};

// Re-export SHA-1 functionality
pub use sha1::{sha1_digest, Sha1, SHA1_OUTPUT_SIZE};
