//! Fixed-point ledger amounts to display strings.
//!
//! Amounts travel over the wire as signed integers in the smallest ledger unit.
//! They are only ever shown divided by the coin unit, with four decimals.
//! The division goes through `f64`, so integers beyond 2^53 lose their low
//! digits. That is fine for coin balances and wrong for exact audits.

/// Smallest units per whole coin on the default network.
pub const DEFAULT_COIN_UNIT: i64 = 100_000_000;

/// Digits shown after the decimal point.
pub const DISPLAY_PRECISION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountCodec {
    unit: i64,
}

impl AmountCodec {
    /// `unit` must be positive; `CliConfig::validate` guarantees that for
    /// configured values.
    pub fn new(unit: i64) -> Self {
        Self { unit }
    }

    pub fn decode(&self, raw: i64) -> String {
        format!(
            "{:.prec$}",
            raw as f64 / self.unit as f64,
            prec = DISPLAY_PRECISION
        )
    }
}

impl Default for AmountCodec {
    fn default() -> Self {
        Self::new(DEFAULT_COIN_UNIT)
    }
}
