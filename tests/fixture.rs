use std::process::Command;

use weak_crypto::security::{Des, HashAlgorithm, Rc4};
use weak_crypto::Error;

#[test]
fn test_binary_prints_one_line() {
    let output = Command::new(env!("CARGO_BIN_EXE_weak_crypto"))
        .env_remove("WEAK_CRYPTO_LOG")
        .output()
        .expect("failed to run weak_crypto");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], weak_crypto::run().unwrap().to_string());
    assert!(lines[0].starts_with("('8d777f385d3dfec8815d20f7496026dc', "));
}

#[test]
fn test_binary_logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_weak_crypto"))
        .env("WEAK_CRYPTO_LOG", "trace")
        .output()
        .expect("failed to run weak_crypto");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 1);
}

#[test]
fn test_construction_errors_surface() {
    assert!(matches!(
        Des::new(b"1234567"),
        Err(Error::InvalidKeyLength { actual: 7, .. })
    ));
    assert!(Rc4::new(b"").is_err());
    assert!(matches!(
        "md4".parse::<HashAlgorithm>(),
        Err(Error::UnknownAlgorithm(name)) if name == "md4"
    ));
    assert!(matches!(
        "md-5".parse::<HashAlgorithm>(),
        Err(Error::UnknownAlgorithm(name)) if name == "md-5"
    ));
}

#[test]
fn test_error_messages() {
    let err = Des::new(b"123").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid DES key length: expected 8 bytes, got 3"
    );
    assert_eq!(
        Error::UnknownAlgorithm("md4".into()).to_string(),
        "unsupported hash type md4"
    );
}
