//! Internal utilities shared by the fips140 crates

#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, xor_in_place};
