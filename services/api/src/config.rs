/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// Single identity allowed to log in via the OTP flow.
    pub admin_email: String,
    /// HMAC secret for signing session tokens.
    pub jwt_secret: String,
    /// Mail API send endpoint (e.g. "https://api.sendgrid.com/v3/mail/send").
    pub mail_api_url: String,
    /// Mail API bearer key.
    pub mail_api_key: String,
    /// Sender address for OTP mails.
    pub mail_from: String,
    /// Image host API base URL (e.g. "https://img.example.com/api").
    pub image_host_url: String,
    /// Image host API bearer key.
    pub image_host_key: String,
    /// TCP port to listen on (default 4000). Env var: `API_PORT`.
    pub api_port: u16,
    /// Directory served under `/public` (default "public"). Env var: `PUBLIC_DIR`.
    pub public_dir: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            admin_email: std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            mail_api_url: std::env::var("MAIL_API_URL").expect("MAIL_API_URL"),
            mail_api_key: std::env::var("MAIL_API_KEY").expect("MAIL_API_KEY"),
            mail_from: std::env::var("MAIL_FROM").expect("MAIL_FROM"),
            image_host_url: std::env::var("IMAGE_HOST_URL").expect("IMAGE_HOST_URL"),
            image_host_key: std::env::var("IMAGE_HOST_KEY").expect("IMAGE_HOST_KEY"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4000),
            public_dir: std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_owned()),
        }
    }
}
