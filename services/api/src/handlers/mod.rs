pub mod asset;
pub mod auth;
pub mod health;
pub mod package;
pub mod session;
