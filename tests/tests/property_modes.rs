//! Property-based cross checks between standalone drivers and templates
//!
//! The standalone drivers and the in-crate templates share no code, so
//! agreement on arbitrary inputs is a meaningful check of both.

use fips140_algorithms::SoftwareRegistry;
use fips140_api::{Registry, Skcipher};
use proptest::prelude::*;

fn aes_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

/// Generate data that's a multiple of 16 bytes (AES block size)
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    (1usize..=16).prop_flat_map(|blocks| prop::collection::vec(any::<u8>(), blocks * 16))
}

fn encrypt(registry: &SoftwareRegistry, name: &str, key: &[u8], iv: &[u8; 16], data: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut tfm: Box<dyn Skcipher> = registry.alloc_skcipher(name).unwrap();
    tfm.set_key(key).unwrap();
    let mut out = data.to_vec();
    let mut iv = iv.to_vec();
    tfm.encrypt(&mut out, &mut iv).unwrap();
    (out, iv)
}

proptest! {
    #[test]
    fn cbc_driver_matches_template(
        key in aes_key(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        let registry = SoftwareRegistry::new();
        let (driver, driver_iv) = encrypt(&registry, "cbc-aes-rustcrypto", &key, &iv, &data);
        let (template, template_iv) = encrypt(&registry, "cbc(aes-generic)", &key, &iv, &data);

        prop_assert_eq!(&driver, &template);
        // both leave the last ciphertext block as the next IV
        prop_assert_eq!(&driver_iv, &template_iv);
        prop_assert_eq!(&driver_iv[..], &driver[driver.len() - 16..]);
    }

    #[test]
    fn ctr_driver_matches_template(
        key in aes_key(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 1..=300)
    ) {
        let registry = SoftwareRegistry::new();
        let (driver, driver_iv) = encrypt(&registry, "ctr-aes-rustcrypto", &key, &iv, &data);
        let (template, template_iv) = encrypt(&registry, "ctr(aes-generic)", &key, &iv, &data);

        prop_assert_eq!(driver, template);
        prop_assert_eq!(driver_iv, template_iv);
    }

    #[test]
    fn nopr_drbg_is_deterministic_after_reset(
        entropy in prop::collection::vec(any::<u8>(), 48),
        pers in prop::collection::vec(any::<u8>(), 0..=32),
        addtl in prop::collection::vec(any::<u8>(), 0..=32),
        len in 1usize..=256
    ) {
        let registry = SoftwareRegistry::new();
        let mut outputs = Vec::new();
        for _ in 0..2 {
            let mut rng = registry.alloc_rng("drbg_nopr_hmac_sha256").unwrap();
            rng.reset_test(&entropy, &pers).unwrap();
            let mut out = vec![0u8; len];
            rng.get_bytes_addtl(&mut out, &addtl).unwrap();
            outputs.push(out);
        }
        prop_assert_eq!(&outputs[0], &outputs[1]);
    }
}
