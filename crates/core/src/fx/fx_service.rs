use std::sync::Arc;

use crate::errors::Result;

use super::fx_errors::FxError;
use super::fx_traits::{ExchangeRateProviderTrait, FxServiceTrait};

/// Stateless conversion service over an injected rate provider.
pub struct FxService {
    provider: Arc<dyn ExchangeRateProviderTrait>,
}

impl FxService {
    pub fn new(provider: Arc<dyn ExchangeRateProviderTrait>) -> Self {
        Self { provider }
    }
}

impl FxServiceTrait for FxService {
    /// Looks up the euro rate for `code` and multiplies it with `amount`.
    ///
    /// The multiplication is plain IEEE-754: negative, zero, or non-finite
    /// amounts are not rejected. The only failure mode is a code absent
    /// from the provider.
    fn convert_to_eur(&self, code: &str, amount: f64) -> Result<f64> {
        let rate_in_eur = match self.provider.lookup(code) {
            Some(rate) => rate,
            None => {
                log::warn!("conversion requested for unsupported crypto {}", code);
                return Err(FxError::UnsupportedCrypto(code.to_string()).into());
            }
        };

        Ok(amount * rate_in_eur)
    }
}
