mod analyze;

use std::sync::Arc;

use axum::{routing::get, Router};
use hubclean_core::{AppConfig, Clock, SystemClock};
use hubclean_hubspot::HubspotClient;
use hubclean_slack::SlackClient;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub hubspot: Arc<HubspotClient>,
    pub slack: Arc<SlackClient>,
    /// Target channel without the leading `#`.
    pub channel: Arc<str>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Builds both API clients from configuration, reading time from the
    /// system clock.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            hubspot: Arc::new(HubspotClient::from_config(config)?),
            slack: Arc::new(SlackClient::from_config(config)?),
            channel: Arc::from(config.slack_channel.as_str()),
            clock: Arc::new(SystemClock),
        })
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/analyze", get(analyze::analyze))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
