use std::sync::Arc;

use crate::{config::Config, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn readyz() -> &'static str {
    "ok"
}

#[derive(serde::Deserialize)]
struct CalculationQuery {
    #[serde(rename = "cryptoAmount")]
    crypto_amount: f64,
}

/// Convert an amount of a cryptocurrency into euros.
///
/// The path parameter is passed verbatim to the FX service; the query
/// extractor rejects a missing or non-numeric `cryptoAmount` before the
/// service is reached.
async fn calculate_crypto_in_eur(
    Path(crypto_code): Path<String>,
    Query(q): Query<CalculationQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<String> {
    let result = state
        .fx_service
        .convert_to_eur(&crypto_code, q.crypto_amount)?;
    Ok(format!("{} EUR", result))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route(
            "/cryptoCurrencies/{cryptoCode}/calculations",
            get(calculate_crypto_in_eur),
        );

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
