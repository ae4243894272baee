use std::fmt;
use std::str::FromStr;

use primitive_types::U256;

use crate::util::{hex_to_vec, keccak256, strip_hex_prefix, vec_to_hex};

pub const SELECTOR_LEN: usize = 4;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("invalid hex in selector {0:?}")]
    InvalidHex(String),
    #[error("selector must be 4 bytes, got {0}")]
    InvalidLength(usize),
    #[error("calldata is {0} bytes, need at least 4 for a selector")]
    CalldataTooShort(usize),
    #[error("selector {selector} is shared by {first} and {second}")]
    Collision {
        selector: Selector,
        first: String,
        second: String,
    },
}

/// The first 4 bytes of the keccak256 hash of a canonical function signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector([u8; SELECTOR_LEN]);

impl Selector {
    pub const fn new(bytes: [u8; SELECTOR_LEN]) -> Self {
        Selector(bytes)
    }

    /// Hashes `signature` as-is. Nothing checks that it is a well-formed
    /// ABI signature, so `"mint(address, uint256)"` hashes the space too.
    pub fn compute(signature: &str) -> Self {
        let hash = keccak256(signature.as_bytes());
        let mut bytes = [0u8; SELECTOR_LEN];
        bytes.copy_from_slice(&hash[..SELECTOR_LEN]);
        Selector(bytes)
    }

    /// Reads the selector the way a dispatcher does with
    /// `shr(224, calldataload(0))`. Missing bytes of the first word read as zero.
    pub fn from_calldata(calldata: &[u8]) -> Result<Self, SelectorError> {
        if calldata.len() < SELECTOR_LEN {
            return Err(SelectorError::CalldataTooShort(calldata.len()));
        }
        let mut word = [0u8; 32];
        let len = calldata.len().min(32);
        word[..len].copy_from_slice(&calldata[..len]);

        let value = U256::from_big_endian(&word) >> U256::from(224);
        Ok(Selector(value.as_u32().to_be_bytes()))
    }

    pub fn as_bytes(&self) -> &[u8; SELECTOR_LEN] {
        &self.0
    }

    pub fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&vec_to_hex(&self.0))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({self})")
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_hex_prefix(s);
        if digits.len() != SELECTOR_LEN * 2 {
            return Err(SelectorError::InvalidLength(digits.len() / 2));
        }
        let bytes = hex_to_vec(digits).map_err(|_| SelectorError::InvalidHex(s.to_string()))?;
        let mut selector = [0u8; SELECTOR_LEN];
        selector.copy_from_slice(&bytes);
        Ok(Selector(selector))
    }
}

impl From<Selector> for u32 {
    fn from(selector: Selector) -> u32 {
        selector.to_u32()
    }
}

/// `0x`-prefixed lowercase hex selector for `signature`, always 10 characters.
pub fn function_selector(signature: &str) -> String {
    Selector::compute(signature).to_string()
}
