//! Turning registry answers into test decisions

use fips140_api::{Algorithm, Error};

use crate::error::{Result, SelftestError};

/// Interpret the registry's answer for `implementation`
///
/// `Ok(None)` means the implementation does not exist here, typically for
/// lack of CPU support, and its test is skipped.
pub fn resolve<T: ?Sized>(
    implementation: &str,
    allocated: std::result::Result<Box<T>, Error>,
) -> Result<Option<Box<T>>> {
    match allocated {
        Ok(tfm) => Ok(Some(tfm)),
        Err(err) if err.is_not_found() => {
            tracing::info!("{implementation} is unavailable (no CPU support?), skipping testing it");
            Ok(None)
        }
        Err(source) => {
            tracing::error!("failed to allocate {implementation} tfm: {source}");
            Err(SelftestError::Allocation {
                implementation: implementation.to_owned(),
                source,
            })
        }
    }
}

/// Reject asynchronous implementations
///
/// Only hardware drivers are asynchronous, and those are outside the module
/// being tested.
pub fn validate_alg<T: ?Sized + Algorithm>(tfm: &T) -> Result<()> {
    let info = tfm.info();
    if info.is_async() {
        tracing::error!(
            "unexpectedly got async implementation of {} ({})",
            info.name(),
            info.driver_name()
        );
        return Err(SelftestError::AsyncImplementation {
            name: info.name().to_owned(),
            driver: info.driver_name().to_owned(),
        });
    }
    Ok(())
}
