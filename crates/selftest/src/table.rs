//! The self-test table
//!
//! Tests run in table order and the first failure ends the run. Each
//! algorithm is tested with a single vector and key size, against every
//! implementation that could be selected for it. Names that the running
//! system does not provide, such as CPU-specific drivers, are skipped.
//!
//! AES is covered through the library API, through the `cmac` template
//! (encryption direction) and through the `ecb` template (decryption
//! direction), each over every AES implementation. Other mode templates
//! reuse those implementations and need no test of their own; standalone
//! mode drivers do not, so each is listed. SHA-224 and SHA-384 are covered
//! by the SHA-256 and SHA-512 tests, and HMAC is tested once over SHA-256.

use crate::descriptor::{FipsTest, TestCase};
use crate::vectors::corpus::*;
use crate::vectors::{AeadTestVec, DrbgTestVec, HashTestVec, SkcipherTestVec};

/// Every self-test, in execution order
pub static FIPS140_SELFTESTS: &[FipsTest] = &[
    FipsTest {
        alg: "aes",
        impls: &["aes-lib"],
        case: TestCase::AesLibrary(SkcipherTestVec {
            key: &AES_KEY,
            iv: &[],
            ptext: &AES_BLOCK_MESSAGE,
            ctext: &AES_ECB_CIPHERTEXT,
        }),
    },
    FipsTest {
        alg: "cmac(aes)",
        impls: &[
            // cmac template over each aes implementation
            "cmac(aes-generic)",
            "cmac(aes-arm64)",
            "cmac(aes-ce)",
            // standalone
            "cmac-aes-neon",
            "cmac-aes-ce",
        ],
        case: TestCase::Hash(HashTestVec {
            key: Some(&AES_KEY),
            message: &AES_BLOCK_MESSAGE,
            digest: &AES_CMAC_DIGEST,
        }),
    },
    FipsTest {
        alg: "ecb(aes)",
        impls: &[
            "ecb(aes-generic)",
            "ecb(aes-arm64)",
            "ecb(aes-ce)",
            "ecb-aes-neon",
            "ecb-aes-neonbs",
            "ecb-aes-ce",
        ],
        case: TestCase::Skcipher(SkcipherTestVec {
            key: &AES_KEY,
            iv: &[],
            ptext: &AES_BLOCK_MESSAGE,
            ctext: &AES_ECB_CIPHERTEXT,
        }),
    },
    FipsTest {
        alg: "cbc(aes)",
        impls: &["cbc-aes-rustcrypto", "cbc-aes-neon", "cbc-aes-neonbs", "cbc-aes-ce"],
        case: TestCase::Skcipher(SkcipherTestVec {
            key: &AES_KEY,
            iv: &AES_IV,
            ptext: &AES_MESSAGE,
            ctext: &AES_CBC_CIPHERTEXT,
        }),
    },
    FipsTest {
        alg: "cts(cbc(aes))",
        impls: &["cts-cbc-aes-neon", "cts-cbc-aes-ce"],
        case: TestCase::Skcipher(SkcipherTestVec {
            key: &AES_CTS_KEY,
            iv: &AES_CTS_IV,
            ptext: &AES_CTS_PLAINTEXT,
            ctext: &AES_CTS_CIPHERTEXT,
        }),
    },
    FipsTest {
        alg: "ctr(aes)",
        impls: &["ctr-aes-rustcrypto", "ctr-aes-neon", "ctr-aes-neonbs", "ctr-aes-ce"],
        case: TestCase::Skcipher(SkcipherTestVec {
            key: &AES_KEY,
            iv: &AES_CTR_IV,
            ptext: &AES_MESSAGE,
            ctext: &AES_CTR_CIPHERTEXT,
        }),
    },
    FipsTest {
        alg: "xts(aes)",
        impls: &["xts-aes-neon", "xts-aes-neonbs", "xts-aes-ce"],
        case: TestCase::Skcipher(SkcipherTestVec {
            key: &AES_XTS_KEY,
            iv: &AES_XTS_IV,
            ptext: &AES_XTS_PLAINTEXT,
            ctext: &AES_XTS_CIPHERTEXT,
        }),
    },
    FipsTest {
        alg: "gcm(aes)",
        impls: &["gcm-aes-rustcrypto", "gcm-aes-ce"],
        case: TestCase::Aead(AeadTestVec {
            key: &AES_GCM_KEY,
            iv: &AES_GCM_IV,
            assoc: &AES_GCM_ASSOC,
            ptext: &AES_GCM_PLAINTEXT,
            ctext: &AES_GCM_CIPHERTEXT,
        }),
    },
    FipsTest {
        alg: "sha1",
        impls: &["sha1-generic", "sha1-ce"],
        case: TestCase::Hash(HashTestVec {
            key: None,
            message: &SHA_MESSAGE,
            digest: &SHA1_DIGEST,
        }),
    },
    FipsTest {
        alg: "sha256",
        impls: &["sha256-generic", "sha256-arm64", "sha256-ce"],
        case: TestCase::Hash(HashTestVec {
            key: None,
            message: &SHA_MESSAGE,
            digest: &SHA256_DIGEST,
        }),
    },
    // the library may carry its own SHA-256
    FipsTest {
        alg: "sha256",
        impls: &["sha256-lib"],
        case: TestCase::Sha256Library(HashTestVec {
            key: None,
            message: &SHA_MESSAGE,
            digest: &SHA256_DIGEST,
        }),
    },
    FipsTest {
        alg: "sha512",
        impls: &["sha512-generic", "sha512-arm64", "sha512-ce"],
        case: TestCase::Hash(HashTestVec {
            key: None,
            message: &SHA_MESSAGE,
            digest: &SHA512_DIGEST,
        }),
    },
    FipsTest {
        alg: "hmac(sha256)",
        impls: &[],
        case: TestCase::Hash(HashTestVec {
            key: Some(&HMAC_KEY),
            message: &HMAC_MESSAGE,
            digest: &HMAC_SHA256_DIGEST,
        }),
    },
    // One sequence covers instantiate, reseed and generate. Only the
    // prediction-resistant variant needs testing.
    FipsTest {
        alg: "drbg_pr_hmac_sha256",
        impls: &[],
        case: TestCase::Drbg(DrbgTestVec {
            entropy: &DRBG_ENTROPY,
            pers: &DRBG_PERS,
            entpr_a: &DRBG_ENTPR_A,
            entpr_b: &DRBG_ENTPR_B,
            add_a: &DRBG_ADD_A,
            add_b: &DRBG_ADD_B,
            output: &DRBG_OUTPUT,
        }),
    },
];
