//! Known-answer byte strings
//!
//! Every value here comes from a published standard or RFC and was cross-checked
//! against an independent implementation. Only the vectors whose origin is not
//! obvious from the name carry a doc comment.

#![allow(missing_docs)]

/// AES-128 key shared by the ECB, CBC, CTR and CMAC vectors (SP 800-38A)
pub static AES_KEY: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88,
    0x09, 0xcf, 0x4f, 0x3c,
];

pub static AES_IV: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b,
    0x0c, 0x0d, 0x0e, 0x0f,
];

/// Initial counter block for AES-CTR (SP 800-38A F.5.1)
pub static AES_CTR_IV: [u8; 16] = [
    0xf0, 0xf1, 0xf2, 0xf3, 0xf4, 0xf5, 0xf6, 0xf7, 0xf8, 0xf9, 0xfa, 0xfb,
    0xfc, 0xfd, 0xfe, 0xff,
];

pub static AES_BLOCK_MESSAGE: [u8; 16] = [
    0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11,
    0x73, 0x93, 0x17, 0x2a,
];

pub static AES_ECB_CIPHERTEXT: [u8; 16] = [
    0x3a, 0xd7, 0x7b, 0xb4, 0x0d, 0x7a, 0x36, 0x60, 0xa8, 0x9e, 0xca, 0xf3,
    0x24, 0x66, 0xef, 0x97,
];

/// Four-block message from SP 800-38A appendix F
pub static AES_MESSAGE: [u8; 64] = [
    0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11,
    0x73, 0x93, 0x17, 0x2a, 0xae, 0x2d, 0x8a, 0x57, 0x1e, 0x03, 0xac, 0x9c,
    0x9e, 0xb7, 0x6f, 0xac, 0x45, 0xaf, 0x8e, 0x51, 0x30, 0xc8, 0x1c, 0x46,
    0xa3, 0x5c, 0xe4, 0x11, 0xe5, 0xfb, 0xc1, 0x19, 0x1a, 0x0a, 0x52, 0xef,
    0xf6, 0x9f, 0x24, 0x45, 0xdf, 0x4f, 0x9b, 0x17, 0xad, 0x2b, 0x41, 0x7b,
    0xe6, 0x6c, 0x37, 0x10,
];

pub static AES_CBC_CIPHERTEXT: [u8; 64] = [
    0x76, 0x49, 0xab, 0xac, 0x81, 0x19, 0xb2, 0x46, 0xce, 0xe9, 0x8e, 0x9b,
    0x12, 0xe9, 0x19, 0x7d, 0x50, 0x86, 0xcb, 0x9b, 0x50, 0x72, 0x19, 0xee,
    0x95, 0xdb, 0x11, 0x3a, 0x91, 0x76, 0x78, 0xb2, 0x73, 0xbe, 0xd6, 0xb8,
    0xe3, 0xc1, 0x74, 0x3b, 0x71, 0x16, 0xe6, 0x9e, 0x22, 0x22, 0x95, 0x16,
    0x3f, 0xf1, 0xca, 0xa1, 0x68, 0x1f, 0xac, 0x09, 0x12, 0x0e, 0xca, 0x30,
    0x75, 0x86, 0xe1, 0xa7,
];

pub static AES_CTR_CIPHERTEXT: [u8; 64] = [
    0x87, 0x4d, 0x61, 0x91, 0xb6, 0x20, 0xe3, 0x26, 0x1b, 0xef, 0x68, 0x64,
    0x99, 0x0d, 0xb6, 0xce, 0x98, 0x06, 0xf6, 0x6b, 0x79, 0x70, 0xfd, 0xff,
    0x86, 0x17, 0x18, 0x7b, 0xb9, 0xff, 0xfd, 0xff, 0x5a, 0xe4, 0xdf, 0x3e,
    0xdb, 0xd5, 0xd3, 0x5e, 0x5b, 0x4f, 0x09, 0x02, 0x0d, 0xb0, 0x3e, 0xab,
    0x1e, 0x03, 0x1d, 0xda, 0x2f, 0xbe, 0x03, 0xd1, 0x79, 0x21, 0x70, 0xa0,
    0xf3, 0x00, 0x9c, 0xee,
];

/// CMAC of [`AES_BLOCK_MESSAGE`] under [`AES_KEY`] (RFC 4493 example 2)
pub static AES_CMAC_DIGEST: [u8; 16] = [
    0x07, 0x0a, 0x16, 0xb4, 0x6b, 0x4d, 0x41, 0x44, 0xf7, 0x9b, 0xdd, 0x9d,
    0xd0, 0x4a, 0x28, 0x7c,
];

/// AES-CBC-CTS vector from RFC 3962 ("chicken teriyaki")
pub static AES_CTS_KEY: [u8; 16] = [
    0x63, 0x68, 0x69, 0x63, 0x6b, 0x65, 0x6e, 0x20, 0x74, 0x65, 0x72, 0x69,
    0x79, 0x61, 0x6b, 0x69,
];

pub static AES_CTS_IV: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

pub static AES_CTS_PLAINTEXT: [u8; 31] = [
    0x49, 0x20, 0x77, 0x6f, 0x75, 0x6c, 0x64, 0x20, 0x6c, 0x69, 0x6b, 0x65,
    0x20, 0x74, 0x68, 0x65, 0x20, 0x47, 0x65, 0x6e, 0x65, 0x72, 0x61, 0x6c,
    0x20, 0x47, 0x61, 0x75, 0x27, 0x73, 0x20,
];

pub static AES_CTS_CIPHERTEXT: [u8; 31] = [
    0xfc, 0x00, 0x78, 0x3e, 0x0e, 0xfd, 0xb2, 0xc1, 0xd4, 0x45, 0xd4, 0xc8,
    0xef, 0xf7, 0xed, 0x22, 0x97, 0x68, 0x72, 0x68, 0xd6, 0xec, 0xcc, 0xc0,
    0xc0, 0x7b, 0x25, 0xe2, 0x5e, 0xcf, 0xe5,
];

/// AES-XTS vector 2 from IEEE 1619-2007
pub static AES_XTS_KEY: [u8; 32] = [
    0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
    0x11, 0x11, 0x11, 0x11, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22,
    0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22,
];

pub static AES_XTS_IV: [u8; 16] = [
    0x33, 0x33, 0x33, 0x33, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

pub static AES_XTS_PLAINTEXT: [u8; 32] = [
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44,
];

pub static AES_XTS_CIPHERTEXT: [u8; 32] = [
    0xc4, 0x54, 0x18, 0x5e, 0x6a, 0x16, 0x93, 0x6e, 0x39, 0x33, 0x40, 0x38,
    0xac, 0xef, 0x83, 0x8b, 0xfb, 0x18, 0x6f, 0xff, 0x74, 0x80, 0xad, 0xc4,
    0x28, 0x93, 0x82, 0xec, 0xd6, 0xd3, 0x94, 0xf0,
];

/// AES-GCM test case 4 from the McGrew-Viega GCM paper
pub static AES_GCM_KEY: [u8; 16] = [
    0xfe, 0xff, 0xe9, 0x92, 0x86, 0x65, 0x73, 0x1c, 0x6d, 0x6a, 0x8f, 0x94,
    0x67, 0x30, 0x83, 0x08,
];

pub static AES_GCM_IV: [u8; 12] = [
    0xca, 0xfe, 0xba, 0xbe, 0xfa, 0xce, 0xdb, 0xad, 0xde, 0xca, 0xf8, 0x88,
];

pub static AES_GCM_ASSOC: [u8; 20] = [
    0xfe, 0xed, 0xfa, 0xce, 0xde, 0xad, 0xbe, 0xef, 0xfe, 0xed, 0xfa, 0xce,
    0xde, 0xad, 0xbe, 0xef, 0xab, 0xad, 0xda, 0xd2,
];

pub static AES_GCM_PLAINTEXT: [u8; 60] = [
    0xd9, 0x31, 0x32, 0x25, 0xf8, 0x84, 0x06, 0xe5, 0xa5, 0x59, 0x09, 0xc5,
    0xaf, 0xf5, 0x26, 0x9a, 0x86, 0xa7, 0xa9, 0x53, 0x15, 0x34, 0xf7, 0xda,
    0x2e, 0x4c, 0x30, 0x3d, 0x8a, 0x31, 0x8a, 0x72, 0x1c, 0x3c, 0x0c, 0x95,
    0x95, 0x68, 0x09, 0x53, 0x2f, 0xcf, 0x0e, 0x24, 0x49, 0xa6, 0xb5, 0x25,
    0xb1, 0x6a, 0xed, 0xf5, 0xaa, 0x0d, 0xe6, 0x57, 0xba, 0x63, 0x7b, 0x39,
];

/// Ciphertext followed by the 16-byte tag
pub static AES_GCM_CIPHERTEXT: [u8; 76] = [
    0x42, 0x83, 0x1e, 0xc2, 0x21, 0x77, 0x74, 0x24, 0x4b, 0x72, 0x21, 0xb7,
    0x84, 0xd0, 0xd4, 0x9c, 0xe3, 0xaa, 0x21, 0x2f, 0x2c, 0x02, 0xa4, 0xe0,
    0x35, 0xc1, 0x7e, 0x23, 0x29, 0xac, 0xa1, 0x2e, 0x21, 0xd5, 0x14, 0xb2,
    0x54, 0x66, 0x93, 0x1c, 0x7d, 0x8f, 0x6a, 0x5a, 0xac, 0x84, 0xaa, 0x05,
    0x1b, 0xa3, 0x0b, 0x39, 0x6a, 0x0a, 0xac, 0x97, 0x3d, 0x58, 0xe0, 0x91,
    0x5b, 0xc9, 0x4f, 0xbc, 0x32, 0x21, 0xa5, 0xdb, 0x94, 0xfa, 0xe9, 0x5a,
    0xe7, 0x12, 0x1a, 0x47,
];

/// Message for the SHA vectors (FIPS 180-4 "abc")
pub static SHA_MESSAGE: [u8; 3] = [
    0x61, 0x62, 0x63,
];

pub static SHA1_DIGEST: [u8; 20] = [
    0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e, 0x25, 0x71,
    0x78, 0x50, 0xc2, 0x6c, 0x9c, 0xd0, 0xd8, 0x9d,
];

pub static SHA256_DIGEST: [u8; 32] = [
    0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde,
    0x5d, 0xae, 0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c,
    0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
];

pub static SHA512_DIGEST: [u8; 64] = [
    0xdd, 0xaf, 0x35, 0xa1, 0x93, 0x61, 0x7a, 0xba, 0xcc, 0x41, 0x73, 0x49,
    0xae, 0x20, 0x41, 0x31, 0x12, 0xe6, 0xfa, 0x4e, 0x89, 0xa9, 0x7e, 0xa2,
    0x0a, 0x9e, 0xee, 0xe6, 0x4b, 0x55, 0xd3, 0x9a, 0x21, 0x92, 0x99, 0x2a,
    0x27, 0x4f, 0xc1, 0xa8, 0x36, 0xba, 0x3c, 0x23, 0xa3, 0xfe, 0xeb, 0xbd,
    0x45, 0x4d, 0x44, 0x23, 0x64, 0x3c, 0xe8, 0x0e, 0x2a, 0x9a, 0xc9, 0x4f,
    0xa5, 0x4c, 0xa4, 0x9f,
];

/// HMAC-SHA256 vector from RFC 4231 test case 2
pub static HMAC_KEY: [u8; 4] = [
    0x4a, 0x65, 0x66, 0x65,
];

pub static HMAC_MESSAGE: [u8; 28] = [
    0x77, 0x68, 0x61, 0x74, 0x20, 0x64, 0x6f, 0x20, 0x79, 0x61, 0x20, 0x77,
    0x61, 0x6e, 0x74, 0x20, 0x66, 0x6f, 0x72, 0x20, 0x6e, 0x6f, 0x74, 0x68,
    0x69, 0x6e, 0x67, 0x3f,
];

pub static HMAC_SHA256_DIGEST: [u8; 32] = [
    0x5b, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e, 0x6a, 0x04, 0x24, 0x26,
    0x08, 0x95, 0x75, 0xc7, 0x5a, 0x00, 0x3f, 0x08, 0x9d, 0x27, 0x39, 0x83,
    0x9d, 0xec, 0x58, 0xb9, 0x64, 0xec, 0x38, 0x43,
];

/// HMAC_DRBG (SHA-256, prediction resistance) vector from the NIST CAVP
/// `drbgtestvectors.zip`; entropy input followed by nonce
pub static DRBG_ENTROPY: [u8; 48] = [
    0xc7, 0xcc, 0xbc, 0x67, 0x7e, 0x21, 0x66, 0x1e, 0x27, 0x2b, 0x63, 0xdd,
    0x3a, 0x78, 0xdc, 0xdf, 0x66, 0x6d, 0x3f, 0x24, 0xae, 0xcf, 0x37, 0x01,
    0xa9, 0x0d, 0x89, 0x8a, 0xa7, 0xdc, 0x81, 0x58, 0xae, 0xb2, 0x10, 0x15,
    0x7e, 0x18, 0x44, 0x6d, 0x13, 0xea, 0xdf, 0x37, 0x85, 0xfe, 0x81, 0xfb,
];

pub static DRBG_PERS: [u8; 32] = [
    0xbc, 0x55, 0xab, 0x3c, 0xf6, 0x52, 0xb0, 0x11, 0x3d, 0x7b, 0x90, 0xb8,
    0x24, 0xc9, 0x26, 0x4e, 0x5a, 0x1e, 0x77, 0x0d, 0x3d, 0x58, 0x4a, 0xda,
    0xd1, 0x81, 0xe9, 0xf8, 0xeb, 0x30, 0x8f, 0x6f,
];

pub static DRBG_ENTPR_A: [u8; 32] = [
    0x7b, 0xa1, 0x91, 0x5b, 0x3c, 0x04, 0xc4, 0x1b, 0x1d, 0x19, 0x2f, 0x1a,
    0x18, 0x81, 0x60, 0x3c, 0x6c, 0x62, 0x91, 0xb7, 0xe9, 0xf5, 0xcb, 0x96,
    0xbb, 0x81, 0x6a, 0xcc, 0xb5, 0xae, 0x55, 0xb6,
];

pub static DRBG_ENTPR_B: [u8; 32] = [
    0x99, 0x2c, 0xc7, 0x78, 0x7e, 0x3b, 0x88, 0x12, 0xef, 0xbe, 0xd3, 0xd2,
    0x7d, 0x2a, 0xa5, 0x86, 0xda, 0x8d, 0x58, 0x73, 0x4a, 0x0a, 0xb2, 0x2e,
    0xbb, 0x4c, 0x7e, 0xe3, 0x9a, 0xb6, 0x81, 0xc1,
];

pub static DRBG_ADD_A: [u8; 32] = [
    0x18, 0xe8, 0x17, 0xff, 0xef, 0x39, 0xc7, 0x41, 0x5c, 0x73, 0x03, 0x03,
    0xf6, 0x3d, 0xe8, 0x5f, 0xc8, 0xab, 0xe4, 0xab, 0x0f, 0xad, 0xe8, 0xd6,
    0x86, 0x88, 0x55, 0x28, 0xc1, 0x69, 0xdd, 0x76,
];

pub static DRBG_ADD_B: [u8; 32] = [
    0xac, 0x07, 0xfc, 0xbe, 0x87, 0x0e, 0xd3, 0xea, 0x1f, 0x7e, 0xb8, 0xe7,
    0x9d, 0xec, 0xe8, 0xe7, 0xbc, 0xf3, 0x18, 0x25, 0x77, 0x35, 0x4a, 0xaa,
    0x00, 0x99, 0x2a, 0xdd, 0x0a, 0x00, 0x50, 0x82,
];

pub static DRBG_OUTPUT: [u8; 128] = [
    0x95, 0x6f, 0x95, 0xfc, 0x3b, 0xb7, 0xfe, 0x3e, 0xd0, 0x4e, 0x1a, 0x14,
    0x6c, 0x34, 0x7f, 0x7b, 0x1d, 0x0d, 0x63, 0x5e, 0x48, 0x9c, 0x69, 0xe6,
    0x46, 0x07, 0xd2, 0x87, 0xf3, 0x86, 0x52, 0x3d, 0x98, 0x27, 0x5e, 0xd7,
    0x54, 0xe7, 0x75, 0x50, 0x4f, 0xfb, 0x4d, 0xfd, 0xac, 0x2f, 0x4b, 0x77,
    0xcf, 0x9e, 0x8e, 0xcc, 0x16, 0xa2, 0x24, 0xcd, 0x53, 0xde, 0x3e, 0xc5,
    0x55, 0x5d, 0xd5, 0x26, 0x3f, 0x89, 0xdf, 0xca, 0x8b, 0x4e, 0x1e, 0xb6,
    0x88, 0x78, 0x63, 0x5c, 0xa2, 0x63, 0x98, 0x4e, 0x6f, 0x25, 0x59, 0xb1,
    0x5f, 0x2b, 0x23, 0xb0, 0x4b, 0xa5, 0x18, 0x5d, 0xc2, 0x15, 0x74, 0x40,
    0x59, 0x4c, 0xb4, 0x1e, 0xcf, 0x9a, 0x36, 0xfd, 0x43, 0xe2, 0x03, 0xb8,
    0x59, 0x91, 0x30, 0x89, 0x2a, 0xc8, 0x5a, 0x43, 0x23, 0x7c, 0x73, 0x72,
    0xda, 0x3f, 0xad, 0x2b, 0xba, 0x00, 0x6b, 0xd1,
];
