mod error;
mod stores;
mod tables;
mod utils;

pub use error::*;
#[cfg(test)]
pub(crate) use error::test_util;
pub use stores::*;
pub use tables::*;
pub use utils::*;
