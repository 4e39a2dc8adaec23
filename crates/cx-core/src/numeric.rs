use crate::{CxError, CxResult};

/// Floating point type used for every concentration and axis bound.
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CxResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CxError::NonFinite { what, value: v })
    }
}

/// Parse user-typed text into a finite number.
///
/// Surrounding whitespace is ignored. Empty text is `Missing`, text that is
/// not a number is `InvalidNumber`, and `inf`/`NaN` spellings are
/// `NonFinite`. `"0"` is a perfectly good value.
pub fn parse_real(text: &str, what: &'static str) -> CxResult<Real> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CxError::Missing { what });
    }
    let value: Real = trimmed.parse().map_err(|_| CxError::InvalidNumber {
        what,
        text: trimmed.to_string(),
    })?;
    ensure_finite(value, what)
}
