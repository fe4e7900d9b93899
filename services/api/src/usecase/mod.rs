pub mod asset;
pub mod otp;
pub mod package;
pub mod token;
