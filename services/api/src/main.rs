use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use camshop_api::config::ApiConfig;
use camshop_api::infra::image_host::ImageHostClient;
use camshop_api::infra::mailer::MailApiClient;
use camshop_api::infra::otp_store::InMemoryOtpStore;
use camshop_api::infra::package_store::InMemoryPackageRepository;
use camshop_api::router::build_router;
use camshop_api::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let config = ApiConfig::from_env();

    let http = reqwest::Client::new();
    let mailer = MailApiClient::new(
        http.clone(),
        config.mail_api_url,
        config.mail_api_key,
        config.mail_from,
    );
    let image_host = ImageHostClient::new(http, config.image_host_url, config.image_host_key);

    let state = AppState {
        otp_store: InMemoryOtpStore::new(),
        packages: InMemoryPackageRepository::new(),
        mailer,
        image_host,
        jwt_secret: config.jwt_secret,
        admin_email: config.admin_email,
    };

    let router = build_router(state, &config.public_dir);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
