use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One outstanding OTP challenge for one email.
///
/// At most one live challenge exists per email: storing a new one replaces
/// the old. A challenge is consumed (removed) only by successful
/// verification; expired entries are rejected at lookup.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    pub email: String,
    /// 6-digit numeric code, leading zeros preserved.
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl OtpChallenge {
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

/// A CCTV package offer. Field values are opaque strings owned by the
/// storefront; the backend never interprets them.
#[derive(Debug, Clone, Serialize)]
pub struct Package {
    pub id: Uuid,
    pub image_url: String,
    pub name: String,
    pub camera_count: String,
    pub waterproof_box_count: String,
    pub wire_length: String,
    pub hard_drive: String,
    pub dvr_model: String,
    pub dc_pin_count: String,
    pub bnc_connector_count: String,
    pub price: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reference to an uploaded asset on the image host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRef {
    pub public_id: String,
    pub url: String,
}

/// OTP code length in digits.
pub const OTP_CODE_LEN: usize = 6;

/// OTP challenge time-to-live in seconds.
pub const OTP_TTL_SECS: i64 = 60;

/// Session token time-to-live in seconds (30 minutes).
pub const SESSION_TTL_SECS: u64 = 1800;
