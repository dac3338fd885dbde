pub mod error;
pub mod fixture;
pub mod security;

pub use error::{Error, Result};
pub use fixture::{run, run_zero_key, FixtureOutput, ZeroKeyOutput};
