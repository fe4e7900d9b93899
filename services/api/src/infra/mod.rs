pub mod image_host;
pub mod mailer;
pub mod otp_store;
pub mod package_store;
