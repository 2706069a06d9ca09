use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod handlers {
    pub mod contact_handlers;
}
pub mod utils {
    pub mod mailer;
}

use config::AppConfig;
use handlers::contact_handlers;
use utils::mailer::{LogMailer, Mailer, SmtpMailer};

pub type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

/// How often idle client keys are dropped from the contact limiter.
pub const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

pub struct AppState {
    pub config: AppConfig,
    /// One limiter for every client; keys are pruned once their quota refills.
    pub contact_limiter: KeyedLimiter,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(config: AppConfig, mailer: Arc<dyn Mailer>) -> Self {
        let quota = Quota::per_minute(config.contact_rate_per_minute);
        Self {
            config,
            contact_limiter: RateLimiter::keyed(quota),
            mailer,
        }
    }

    /// Forgets clients whose quota has fully replenished.
    pub fn prune_rate_limits(&self) {
        let before = self.contact_limiter.len();
        self.contact_limiter.retain_recent();
        self.contact_limiter.shrink_to_fit();
        let after = self.contact_limiter.len();
        if before != after {
            tracing::debug!("pruned contact limiter from {} to {} clients", before, after);
        }
    }

    /// SMTP delivery when fully configured, otherwise submissions are logged.
    pub fn from_config(config: AppConfig) -> Result<Self, utils::mailer::MailError> {
        let mailer: Arc<dyn Mailer> = match &config.smtp {
            Some(settings) => {
                tracing::info!("contact submissions go to {} via {}", settings.inbox, settings.host);
                Arc::new(SmtpMailer::new(settings)?)
            }
            None => {
                tracing::warn!("SMTP not configured, contact submissions will only be logged");
                Arc::new(LogMailer)
            }
        };
        Ok(Self::new(config, mailer))
    }
}

/// Prunes the contact limiter every `LIMITER_PRUNE_INTERVAL` for as long as
/// the runtime lives.
pub fn spawn_limiter_pruning(state: Arc<AppState>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            state.prune_rate_limits();
        }
    })
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let api_routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact));

    let mut app = Router::new()
        .merge(api_routes)
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    match HeaderValue::from_str(&state.config.frontend_url) {
        Ok(origin) => {
            app = app.layer(
                CorsLayer::new()
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_origin(AllowOrigin::exact(origin))
                    .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
            );
        }
        Err(e) => {
            tracing::warn!("FRONTEND_URL {:?} is not a valid origin, CORS disabled: {}", state.config.frontend_url, e);
        }
    }

    app.with_state(state)
}
