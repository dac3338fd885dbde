use weak_crypto::Error;

fn main() -> Result<(), Error> {
    // Logs go to stderr; stdout carries only the fixture line.
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_env("WEAK_CRYPTO_LOG")
        .init();

    let output = weak_crypto::run()?;
    println!("{}", output);
    Ok(())
}
