//! Additional known-answer vectors kept as JSON
//!
//! Each group becomes one [`FipsTest`](fips140_selftest::FipsTest) per case,
//! so the same runner and executors that drive the built-in table can run
//! them against any registry.

pub mod loader;
pub mod model;

pub use loader::{kat_dir, load_kat_file, KatError};
pub use model::{KatCase, KatFile, KatGroup, KatKind};
