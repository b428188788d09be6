//! 20-byte account / contract addresses.

use {
    borsh::{BorshDeserialize, BorshSerialize},
    rand::RngCore,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
    thiserror::Error,
};

/// Number of raw bytes in an [`Address`].
pub const ADDRESS_BYTES: usize = 20;

/// Errors produced when parsing an address from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("address must be {ADDRESS_BYTES} bytes, got {0}")]
    WrongLength(usize),

    #[error("invalid hex in address: {0}")]
    InvalidHex(String),
}

/// A 20-byte account or contract address.
///
/// Displayed and parsed as `0x`-prefixed lowercase hex, the way the
/// forked chain's JSON-RPC surface spells addresses.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct Address([u8; ADDRESS_BYTES]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; ADDRESS_BYTES]);

    /// Construct from raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, AddressParseError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes =
            hex::decode(stripped).map_err(|e| AddressParseError::InvalidHex(e.to_string()))?;
        if bytes.len() != ADDRESS_BYTES {
            return Err(AddressParseError::WrongLength(bytes.len()));
        }
        let mut out = [0u8; ADDRESS_BYTES];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    /// Generate a pseudorandom address.  Test-fixture use only; the
    /// simulated chain never derives addresses from keys.
    pub fn new_unique() -> Self {
        let mut bytes = [0u8; ADDRESS_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Raw byte view.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
