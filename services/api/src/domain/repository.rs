#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{AssetRef, OtpChallenge, Package};
use crate::error::ApiError;

/// Store for outstanding OTP challenges, keyed by email.
///
/// Synchronous by design: the store is an in-process map and every method is
/// a single guarded map operation, so nothing here ever awaits.
pub trait OtpStore: Send + Sync {
    /// Store a challenge, unconditionally replacing any existing one for the
    /// same email.
    fn put(&self, challenge: OtpChallenge);

    /// Pure lookup; does not consume the challenge.
    fn get(&self, email: &str) -> Option<OtpChallenge>;

    /// Delete the challenge if present; no-op otherwise.
    fn remove(&self, email: &str);
}

/// Out-of-band delivery channel for OTP codes.
pub trait Mailer: Send + Sync {
    /// Exactly one delivery attempt per call; never retried here.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError>;
}

/// Repository for package records (the document-store collaborator).
pub trait PackageRepository: Send + Sync {
    async fn create(&self, package: &Package) -> Result<(), ApiError>;

    async fn list(&self) -> Result<Vec<Package>, ApiError>;

    async fn find(&self, id: Uuid) -> Result<Option<Package>, ApiError>;

    /// Replace the stored record with the same id.
    async fn update(&self, package: &Package) -> Result<(), ApiError>;

    /// Delete a package. Returns `true` if deleted, `false` if not found.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Image-host collaborator: binary in, retrievable reference out.
pub trait AssetStore: Send + Sync {
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<AssetRef, ApiError>;

    async fn delete(&self, public_id: &str) -> Result<(), ApiError>;

    async fn list(&self) -> Result<Vec<AssetRef>, ApiError>;
}
