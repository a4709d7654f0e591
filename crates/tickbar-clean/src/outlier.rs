//! Rolling-median outlier filter.

use std::collections::VecDeque;

/// Rejects prices far below the median of recently accepted prices.
///
/// Only the low side is checked, and the history is never reset. Until
/// `window` prices have been accepted every price passes.
#[derive(Debug, Clone)]
pub struct OutlierFilter {
    window: usize,
    min_ratio: f64,
    history: VecDeque<f64>,
    scratch: Vec<f64>,
}

impl OutlierFilter {
    /// Creates a filter over the last `window` accepted prices.
    #[must_use]
    pub fn new(window: usize, min_ratio: f64) -> Self {
        Self {
            window,
            min_ratio,
            history: VecDeque::with_capacity(window),
            scratch: Vec::with_capacity(window),
        }
    }

    /// Checks a candidate price against the prices accepted before it.
    ///
    /// On acceptance the price joins the history. On rejection the history is
    /// left untouched and the median the price was compared against is
    /// returned.
    pub fn check(&mut self, price: f64) -> Result<(), f64> {
        if self.window == 0 {
            return Ok(());
        }

        if let Some(median) = self.median() {
            if price < self.min_ratio * median {
                return Err(median);
            }
        }

        if self.history.len() == self.window {
            self.history.pop_front();
        }
        self.history.push_back(price);
        Ok(())
    }

    /// Returns the median of the window, or `None` until it is full.
    #[must_use]
    pub fn median(&mut self) -> Option<f64> {
        if self.window == 0 || self.history.len() < self.window {
            return None;
        }

        self.scratch.clear();
        self.scratch.extend(self.history.iter().copied());
        self.scratch.sort_by(f64::total_cmp);

        let n = self.scratch.len();
        let mid = n / 2;
        if n.is_multiple_of(2) {
            Some((self.scratch[mid - 1] + self.scratch[mid]) / 2.0)
        } else {
            Some(self.scratch[mid])
        }
    }

    /// Returns the number of prices currently in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns true if no price has been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
