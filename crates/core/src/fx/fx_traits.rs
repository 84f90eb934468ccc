use crate::errors::Result;

/// Trait defining the contract for exchange-rate lookups.
///
/// The conversion service is agnostic to how rates are stored; anything
/// that can answer an exact-match lookup can back it.
pub trait ExchangeRateProviderTrait: Send + Sync {
    fn lookup(&self, code: &str) -> Option<f64>;
}

/// Trait defining the contract for FX service operations.
pub trait FxServiceTrait: Send + Sync {
    /// Converts `amount` units of the given cryptocurrency into euros.
    fn convert_to_eur(&self, code: &str, amount: f64) -> Result<f64>;
}
