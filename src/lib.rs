pub mod driver;
pub mod selector;
pub mod signatures;
pub mod util;

pub use selector::{function_selector, Selector, SelectorError};
pub use signatures::{SelectorEntry, SelectorTable, ERC1155_SIGNATURES};
