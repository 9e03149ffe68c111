//! Address validation.

use std::fmt;

use crate::error::ValidationError;

const HEX_DIGITS: usize = 40;

/// Returns true iff `address` is `0x` followed by exactly 40 hex digits.
///
/// Case-insensitive for the digits; the prefix must be lowercase `0x`.
/// No trimming is applied.
pub fn validate(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(digits) => {
            digits.len() == HEX_DIGITS && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// A syntactically valid wallet address. Original casing is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if validate(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(ValidationError {
                input: input.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
