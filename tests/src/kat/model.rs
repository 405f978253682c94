//! Data model of the JSON vector files

use serde::Deserialize;

/// One vector file
#[derive(Debug, Deserialize)]
pub struct KatFile {
    pub groups: Vec<KatGroup>,
}

/// Vectors for one algorithm, run against the listed implementations
#[derive(Debug, Deserialize)]
pub struct KatGroup {
    pub alg: String,
    #[serde(default)]
    pub impls: Vec<String>,
    pub kind: KatKind,
    pub tests: Vec<KatCase>,
}

/// Which executor a group runs through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KatKind {
    Skcipher,
    Aead,
    Hash,
}

/// Hex-encoded fields of one case; which ones matter depends on the kind
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KatCase {
    pub key: Option<String>,
    pub iv: String,
    pub aad: String,
    pub pt: String,
    pub ct: String,
    pub msg: String,
    pub md: String,
}
