use std::collections::VecDeque;

use crate::error::{PageError, Result};

/// Fixed-size moving average over the last `N` samples.
///
/// The window starts out filled with zeros, so until `N` samples have been
/// fed the mean is pulled towards zero by the slots not yet overwritten.
#[derive(Debug, Clone)]
pub struct Averager {
    window: VecDeque<f64>,
}

impl Averager {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(PageError::EmptyWindow);
        }
        Ok(Self {
            window: std::iter::repeat(0.0).take(len).collect(),
        })
    }

    /// Evicts the oldest sample, appends `value` and returns the mean of the window.
    pub fn sample(&mut self, value: f64) -> f64 {
        self.window.pop_front();
        self.window.push_back(value);
        self.window.iter().sum::<f64>() / self.window.len() as f64
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Never true: a window always holds at least one slot.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Current window contents, oldest first.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.window.iter().copied()
    }
}
