//! Wallet addresses and the airdrop records fetched for them.
//!
//! # Responsibilities
//! - Syntactic address validation (`0x` + 40 hex digits)
//! - Decode API payload elements into `AirdropRecord`
//! - Render a record as a result table row

pub mod address;
pub mod record;

pub use address::{validate, WalletAddress};
pub use record::AirdropRecord;
