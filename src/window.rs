use crate::*;
use std::ops::Range;

/// Percentile band `[top, bottom)` over a best-to-worst rank table.
/// `top = 0` is the best-ranked end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    top: Quantile,
    bottom: Quantile,
}

impl Window {
    /// Validated window. Requires `0 <= top < bottom <= 1`.
    pub fn new(top: Quantile, bottom: Quantile) -> Result<Self, Error> {
        let unit = 0. ..=1.;
        if unit.contains(&top) && unit.contains(&bottom) && top < bottom {
            Ok(Self { top, bottom })
        } else {
            Err(Error::InvalidWindow { top, bottom })
        }
    }
    /// The whole table. Filtering with it is a no-op.
    pub fn full() -> Self {
        Self { top: 0., bottom: 1. }
    }
    pub fn is_full(&self) -> bool {
        self.top == 0. && self.bottom == 1.
    }
    pub fn top(&self) -> Quantile {
        self.top
    }
    pub fn bottom(&self) -> Quantile {
        self.bottom
    }
    /// Index range `[floor(len * top), floor(len * bottom))`.
    pub fn slice(&self, len: usize) -> Range<usize> {
        let lo = (len as Quantile * self.top).floor() as usize;
        let hi = (len as Quantile * self.bottom).floor() as usize;
        lo.min(len)..hi.min(len)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::full()
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.top, self.bottom)
    }
}
