pub mod app_user;
pub mod follow;
pub mod publication;

pub use app_user::*;
pub use follow::*;
pub use publication::*;
