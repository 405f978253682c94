use super::{scratch, Outcome};
use crate::compare::check_result;
use crate::context::SelftestContext;
use crate::error::{Operation, Result, SelftestError};
use crate::resolve::{resolve, validate_alg};
use crate::vectors::DrbgTestVec;

/// Known-answer test of a DRBG from the registry
///
/// The generator is instantiated from the vector's entropy and
/// personalization string, then asked twice for output with the two
/// additional inputs. When the vector has prediction-resistance entropy it
/// is supplied to each request. Only the second output is compared.
pub fn test_drbg(vec: &DrbgTestVec, implementation: &str, ctx: &SelftestContext<'_>) -> Result<Outcome> {
    let Some(mut rng) = resolve(implementation, ctx.registry.alloc_rng(implementation))? else {
        return Ok(Outcome::Skipped);
    };
    validate_alg(rng.as_ref())?;

    let mut output = scratch(implementation, &[], vec.output.len())?;

    let failed = |operation: Operation, source: fips140_api::Error| SelftestError::Operation {
        implementation: implementation.to_owned(),
        operation,
        source,
    };

    rng.reset_test(vec.entropy, vec.pers).map_err(|source| {
        tracing::error!("failed to reset {implementation}: {source}");
        failed(Operation::Reset, source)
    })?;

    for (attempt, (addtl, entpr)) in [(vec.add_a, vec.entpr_a), (vec.add_b, vec.entpr_b)]
        .into_iter()
        .enumerate()
    {
        let generated = if entpr.is_empty() {
            rng.get_bytes_addtl(&mut output, addtl)
        } else {
            rng.get_bytes_addtl_test(&mut output, addtl, entpr)
        };
        generated.map_err(|source| {
            tracing::error!("failed to get bytes from {implementation} (try {}): {source}", attempt + 1);
            failed(Operation::GetBytes, source)
        })?;
    }

    check_result(&mut output, vec.output, implementation, Operation::GetBytes, ctx.config)?;
    Ok(Outcome::Passed)
}
