mod follow_store;
mod publication_store;
mod user_store;

pub use follow_store::*;
pub use publication_store::*;
pub use user_store::*;
