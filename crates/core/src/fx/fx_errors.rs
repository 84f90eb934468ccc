use thiserror::Error;

/// Errors raised by the FX conversion service.
#[derive(Error, Debug)]
pub enum FxError {
    /// The requested code has no exact-match entry in the rate table.
    /// Carries the offending code verbatim.
    #[error("Unsupported crypto {0}")]
    UnsupportedCrypto(String),
}
