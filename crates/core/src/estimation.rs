//! Pay-range parsing and work-hour estimation.
//!
//! The platform never asks clients for an hour estimate directly; it is
//! derived from the declared pay range. The policy here is deliberately
//! simple and monotonic: a higher pay midpoint never yields fewer hours,
//! and the deadline does not enter the formula at all, so stretching a
//! deadline can never inflate the estimate.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Policy constants
// ---------------------------------------------------------------------------

/// Nominal blended hourly rate used to convert pay into hours.
pub const NOMINAL_HOURLY_RATE_USD: f64 = 25.0;

/// Floor for any estimate; even trivial roles book at least one hour.
pub const MIN_ESTIMATED_HOURS: f64 = 1.0;

/// Ceiling for any estimate; larger engagements are split by the client.
pub const MAX_ESTIMATED_HOURS: f64 = 80.0;

/// Fallback when a stored pay range can no longer be parsed. Creation
/// validates the format, so this only covers legacy rows.
pub const DEFAULT_ESTIMATED_HOURS: f64 = 8.0;

// ---------------------------------------------------------------------------
// Pay range
// ---------------------------------------------------------------------------

/// A bounded pay range in whole USD, parsed from the client-facing string
/// form (e.g. `"$500-$1000"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayRange {
    pub min_usd: f64,
    pub max_usd: f64,
}

impl PayRange {
    /// Midpoint of the range, the scope proxy for estimation.
    pub fn midpoint(self) -> f64 {
        (self.min_usd + self.max_usd) / 2.0
    }
}

/// Parse a pay-range string.
///
/// Accepted forms: `"$500-$1000"`, `"500 - 1000"`, `"$1,500-$2,000"`, and a
/// single amount (`"$750"`, treated as a degenerate range). Currency
/// symbols, commas, and whitespace are ignored.
pub fn parse_pay_range(raw: &str) -> Result<PayRange, CoreError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();

    if cleaned.is_empty() {
        return Err(CoreError::Validation(
            "Pay range must not be empty".to_string(),
        ));
    }

    let parts: Vec<&str> = cleaned.split('-').collect();
    let (min_usd, max_usd) = match parts.as_slice() {
        [single] => {
            let amount = parse_amount(single, raw)?;
            (amount, amount)
        }
        [low, high] => (parse_amount(low, raw)?, parse_amount(high, raw)?),
        _ => {
            return Err(CoreError::Validation(format!(
                "Pay range \"{raw}\" must be a single amount or \"min-max\""
            )))
        }
    };

    if min_usd <= 0.0 {
        return Err(CoreError::Validation(format!(
            "Pay range \"{raw}\" must be positive"
        )));
    }
    if min_usd > max_usd {
        return Err(CoreError::Validation(format!(
            "Pay range \"{raw}\" has min greater than max"
        )));
    }

    Ok(PayRange { min_usd, max_usd })
}

fn parse_amount(part: &str, raw: &str) -> Result<f64, CoreError> {
    part.parse::<f64>().map_err(|_| {
        CoreError::Validation(format!("Pay range \"{raw}\" contains a non-numeric amount"))
    })
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Estimate the work hours a role will consume from an operator's weekly
/// capacity.
///
/// Policy: pay midpoint divided by [`NOMINAL_HOURLY_RATE_USD`], clamped to
/// `[MIN_ESTIMATED_HOURS, MAX_ESTIMATED_HOURS]`. Monotone non-decreasing
/// in the pay midpoint.
pub fn estimated_hours(range: PayRange) -> f64 {
    (range.midpoint() / NOMINAL_HOURLY_RATE_USD).clamp(MIN_ESTIMATED_HOURS, MAX_ESTIMATED_HOURS)
}

/// Estimate hours from a stored pay-range string, falling back to
/// [`DEFAULT_ESTIMATED_HOURS`] when the string cannot be parsed.
pub fn estimated_hours_for(pay_range: &str) -> f64 {
    match parse_pay_range(pay_range) {
        Ok(range) => estimated_hours(range),
        Err(_) => DEFAULT_ESTIMATED_HOURS,
    }
}
