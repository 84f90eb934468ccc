use std::collections::HashMap;

use super::fx_traits::ExchangeRateProviderTrait;

/// Immutable mapping from cryptocurrency code to its euro rate.
///
/// Keys are case-sensitive and matched exactly: no folding, no trimming,
/// no aliasing ("btc" and "BTC" are distinct). Rate values are stored
/// as-is without validation. The table is populated once at process start
/// and never mutated, so it is safe to share across request handlers.
#[derive(Debug, Clone)]
pub struct ExchangeRateTable {
    rates_in_eur: HashMap<String, f64>,
}

impl ExchangeRateTable {
    pub fn new(rates_in_eur: HashMap<String, f64>) -> Self {
        Self { rates_in_eur }
    }

    /// Returns the euro rate for `code`, or `None` if the code is not
    /// present as an exact-match key.
    pub fn lookup(&self, code: &str) -> Option<f64> {
        self.rates_in_eur.get(code).copied()
    }
}

impl ExchangeRateProviderTrait for ExchangeRateTable {
    fn lookup(&self, code: &str) -> Option<f64> {
        ExchangeRateTable::lookup(self, code)
    }
}
