//! Execute handlers for the permit bridge contract.
//!
//! - `permit` - Lock, unlock, mint and burn authorized by attestor permits
//! - `config` - Chain registry and fee parameters
//! - `admin` - Admin and attestor reassignment, fee withdrawal

mod admin;
mod config;
mod permit;

pub use admin::*;
pub use config::*;
pub use permit::*;
