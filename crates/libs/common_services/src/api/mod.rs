pub mod auth;
pub mod follow;
pub mod pagination;
pub mod publication;
pub mod user;
