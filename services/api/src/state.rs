use crate::infra::image_host::ImageHostClient;
use crate::infra::mailer::MailApiClient;
use crate::infra::otp_store::InMemoryOtpStore;
use crate::infra::package_store::InMemoryPackageRepository;

/// Shared application state passed to every handler via axum `State`.
/// Every field is a cheap clone handle; configuration values are immutable
/// after startup.
#[derive(Clone)]
pub struct AppState {
    pub otp_store: InMemoryOtpStore,
    pub packages: InMemoryPackageRepository,
    pub mailer: MailApiClient,
    pub image_host: ImageHostClient,
    pub jwt_secret: String,
    pub admin_email: String,
}
