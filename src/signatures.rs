use log::debug;

use crate::selector::{Selector, SelectorError};

/// ERC-1155 entry points, in output order.
pub const ERC1155_SIGNATURES: [&str; 7] = [
    "mint(address,uint256,uint256)",
    "mintBatch(address,uint256[],uint256[])",
    "safeTransferFrom(address,address,uint256,uint256)",
    "burn(address,uint256,uint256)",
    "burnBatch(address,uint256[],uint256[])",
    "safeBatchTransferFrom(address,address,uint256[],uint256[])",
    "isApprovedForAll(address,address)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry<'a> {
    pub signature: &'a str,
    pub selector: Selector,
}

impl<'a> SelectorEntry<'a> {
    pub fn new(signature: &'a str) -> Self {
        SelectorEntry {
            signature,
            selector: Selector::compute(signature),
        }
    }
}

/// Signatures paired with their selectors, kept in input order.
#[derive(Debug, Clone)]
pub struct SelectorTable<'a> {
    entries: Vec<SelectorEntry<'a>>,
}

impl<'a> SelectorTable<'a> {
    /// Fails if two different signatures hash to the same selector.
    /// A signature listed twice is kept twice.
    pub fn new<I>(signatures: I) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries: Vec<SelectorEntry<'a>> = Vec::new();
        for signature in signatures {
            let entry = SelectorEntry::new(signature);
            if let Some(existing) = entries
                .iter()
                .find(|e| e.selector == entry.selector && e.signature != signature)
            {
                return Err(SelectorError::Collision {
                    selector: entry.selector,
                    first: existing.signature.to_string(),
                    second: signature.to_string(),
                });
            }
            entries.push(entry);
        }
        debug!("built selector table with {} entries", entries.len());
        Ok(SelectorTable { entries })
    }

    pub fn lookup(&self, selector: Selector) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|e| e.selector == selector)
            .map(|e| e.signature)
    }

    pub fn entries(&self) -> &[SelectorEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SelectorTable<'static> {
    pub fn erc1155() -> Result<Self, SelectorError> {
        SelectorTable::new(ERC1155_SIGNATURES)
    }
}
