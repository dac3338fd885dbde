//! Cross-checks the in-crate primitives against the RustCrypto implementations.

use des::cipher::generic_array::GenericArray;
use des::cipher::{BlockEncrypt, KeyInit};
use rand::Rng;
use sha1::{Digest, Sha1};
use weak_crypto::security::{md5_digest, sha1_digest, Des, HashAlgorithm};

fn random_message(rng: &mut impl Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

#[test]
fn test_md5_matches_md5_crate() {
    let mut rng = rand::thread_rng();
    for len in [0usize, 1, 55, 56, 63, 64, 65, 127, 128, 1000] {
        let message = random_message(&mut rng, len);
        assert_eq!(md5_digest(&message), md5::compute(&message).0, "len {len}");
    }
}

#[test]
fn test_sha1_matches_sha1_crate() {
    let mut rng = rand::thread_rng();
    for len in [0usize, 1, 55, 56, 63, 64, 65, 127, 128, 1000] {
        let message = random_message(&mut rng, len);
        let expected: [u8; 20] = Sha1::digest(&message).into();
        assert_eq!(sha1_digest(&message), expected, "len {len}");
        assert_eq!(HashAlgorithm::Sha1.digest(&message), expected.to_vec());
    }
}

#[test]
fn test_des_matches_des_crate() {
    let mut rng = rand::thread_rng();
    for _ in 0..32 {
        let key: [u8; 8] = rng.gen();
        let plaintext: [u8; 8] = rng.gen();

        let reference = des::Des::new_from_slice(&key).unwrap();
        let mut expected = GenericArray::clone_from_slice(&plaintext);
        reference.encrypt_block(&mut expected);

        let mut block = plaintext;
        Des::new(&key).unwrap().encrypt_block(&mut block);
        assert_eq!(block.as_slice(), expected.as_slice());
    }
}

#[test]
fn test_des_key_lengths_agree_with_des_crate() {
    for len in 0..=16usize {
        let key = vec![0x5au8; len];
        assert_eq!(
            Des::new(&key).is_ok(),
            des::Des::new_from_slice(&key).is_ok(),
            "len {len}"
        );
    }
}
