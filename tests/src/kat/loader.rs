//! Turns JSON vector files into self-test descriptors

use std::fs;
use std::path::{Path, PathBuf};

use fips140_selftest::vectors::{AeadTestVec, HashTestVec, SkcipherTestVec};
use fips140_selftest::{FipsTest, TestCase};
use thiserror::Error;

use super::model::{KatCase, KatFile, KatGroup, KatKind};

/// Why a vector file could not be loaded
#[derive(Debug, Error)]
pub enum KatError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{alg}: field {field} is not hex: {source}")]
    Hex {
        alg: String,
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("{alg}: {kind:?} case has no key")]
    MissingKey { alg: String, kind: KatKind },
}

/// Directory holding the JSON vector files
pub fn kat_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("vectors")
}

/// Load `name` from [`kat_dir`] as a table of descriptors
///
/// Descriptors borrow for `'static`, so the decoded vectors are leaked. The
/// files are small and loaded once per test.
pub fn load_kat_file(name: &str) -> Result<Vec<FipsTest>, KatError> {
    let path = kat_dir().join(name);
    let json = fs::read_to_string(&path).map_err(|source| KatError::Io {
        path: path.clone(),
        source,
    })?;
    let file: KatFile = serde_json::from_str(&json).map_err(|source| KatError::Json { path, source })?;

    let mut table = Vec::new();
    for group in &file.groups {
        let alg = leak_str(&group.alg);
        let impls: &'static [&'static str] =
            Box::leak(group.impls.iter().map(|i| leak_str(i)).collect::<Vec<_>>().into_boxed_slice());
        for case in &group.tests {
            table.push(FipsTest {
                alg,
                impls,
                case: test_case(group, case)?,
            });
        }
    }
    Ok(table)
}

fn test_case(group: &KatGroup, case: &KatCase) -> Result<TestCase, KatError> {
    let field = |field: &'static str, value: &str| -> Result<&'static [u8], KatError> {
        hex::decode(value)
            .map(|bytes| &*bytes.leak())
            .map_err(|source| KatError::Hex {
                alg: group.alg.clone(),
                field,
                source,
            })
    };
    let key = |required: bool| -> Result<Option<&'static [u8]>, KatError> {
        match &case.key {
            Some(key) => field("key", key).map(Some),
            None if required => Err(KatError::MissingKey {
                alg: group.alg.clone(),
                kind: group.kind,
            }),
            None => Ok(None),
        }
    };

    Ok(match group.kind {
        KatKind::Skcipher => TestCase::Skcipher(SkcipherTestVec {
            key: key(true)?.unwrap_or_default(),
            iv: field("iv", &case.iv)?,
            ptext: field("pt", &case.pt)?,
            ctext: field("ct", &case.ct)?,
        }),
        KatKind::Aead => TestCase::Aead(AeadTestVec {
            key: key(true)?.unwrap_or_default(),
            iv: field("iv", &case.iv)?,
            assoc: field("aad", &case.aad)?,
            ptext: field("pt", &case.pt)?,
            ctext: field("ct", &case.ct)?,
        }),
        KatKind::Hash => TestCase::Hash(HashTestVec {
            key: key(false)?,
            message: field("msg", &case.msg)?,
            digest: field("md", &case.md)?,
        }),
    })
}

fn leak_str(s: &str) -> &'static str {
    Box::leak(s.to_owned().into_boxed_str())
}
