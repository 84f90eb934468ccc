use std::collections::HashMap;
use std::sync::Arc;

use cryptocalc_core::fx::{ExchangeRateTable, FxService, FxServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub fx_service: Arc<dyn FxServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Rates used by the reference deployment. Fixed at process start; the
/// table is never mutated afterwards.
fn reference_rates_in_eur() -> HashMap<String, f64> {
    HashMap::from([
        ("HBAR".to_string(), 0.212),
        ("BTC".to_string(), 31200.12),
        ("ETH".to_string(), 2172.34),
    ])
}

pub fn build_state() -> Arc<AppState> {
    let rate_table = Arc::new(ExchangeRateTable::new(reference_rates_in_eur()));
    let fx_service = Arc::new(FxService::new(rate_table));
    Arc::new(AppState { fx_service })
}
