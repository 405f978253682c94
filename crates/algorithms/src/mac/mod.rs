//! Message authentication code templates
//!
//! [`Cmac`] is instantiated over a block cipher (`cmac(aes)`), [`Hmac`] over
//! a registered hash (`hmac(sha256)`). Both present as keyed
//! [`Shash`](fips140_api::Shash) transforms.

pub mod cmac;
pub mod hmac;

pub use cmac::Cmac;
pub use hmac::Hmac;
