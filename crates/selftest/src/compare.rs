//! Known-answer comparison

use fips140_internal::ct_eq;

use crate::config::SelftestConfig;
use crate::error::{Operation, Result, SelftestError};

/// Compare `result` with `expected` over the expected length
///
/// When error injection is configured for `implementation`, the first byte
/// of `result` is flipped first, so the comparison fails.
pub fn check_result(
    result: &mut [u8],
    expected: &[u8],
    implementation: &str,
    operation: Operation,
    config: &SelftestConfig,
) -> Result<()> {
    if config.is_broken(implementation) {
        if let Some(first) = result.first_mut() {
            *first ^= 0xff;
        }
    }

    let matches = result
        .get(..expected.len())
        .map_or(false, |actual| ct_eq(actual, expected));
    if !matches {
        tracing::error!("wrong result from {implementation} {operation}");
        return Err(SelftestError::BadMessage {
            implementation: implementation.to_owned(),
            operation,
        });
    }
    Ok(())
}
