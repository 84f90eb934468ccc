//! FX module - exchange-rate table, provider trait, and conversion service.

mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;


pub use fx_errors::FxError;
pub use fx_model::ExchangeRateTable;
pub use fx_service::FxService;
pub use fx_traits::{ExchangeRateProviderTrait, FxServiceTrait};
