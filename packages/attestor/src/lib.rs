//! Permit Attestor - off-chain signer for the permit bridge
//!
//! Produces the attestor signatures the bridge contract verifies:
//! - `signer` - secp256k1 signing of permit and fee quote digests
//! - `order` - JSON permit orders and their signed form
//! - `config` - environment-based configuration
//!
//! Observing source chains and deciding *what* to sign is the caller's job;
//! this crate only signs.

pub mod config;
pub mod order;
pub mod signer;

pub use config::AttestorConfig;
pub use order::{PermitOrder, SignedPermit};
pub use signer::PermitSigner;
