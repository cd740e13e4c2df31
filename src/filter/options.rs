use serde::{Deserialize, Serialize};

/// How a gradient magnitude above 255 is narrowed into an 8-bit sample.
///
/// Both policies truncate the fractional part first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Saturation {
    /// Values above 255 become 255.
    #[default]
    Clamp,
    /// Values wrap modulo 256, matching a raw integer narrowing.
    Wrap,
}

impl Saturation {
    #[inline]
    pub fn narrow(self, magnitude: f64) -> u8 {
        match self {
            Saturation::Clamp => magnitude.clamp(0.0, 255.0) as u8,
            Saturation::Wrap  => (magnitude as u32 % 256) as u8,
        }
    }
}

/// Tuning knobs for [`filter_with`](crate::filter::filter_with).
///
/// # Fields
/// - `workers`    size of the worker pool; `0` means one per available CPU
/// - `run_length` interior pixels of one row bundled into a single work
///                item; `0` means the whole interior row
/// - `saturation` narrowing policy for magnitudes above 255
///
/// None of these change the output except `saturation`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterOptions {
    pub workers: usize,
    pub run_length: usize,
    pub saturation: Saturation,
}

impl FilterOptions {
    /// Effective pool size, never less than 1.
    pub fn worker_count(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.workers
        }
    }

    /// Effective run length for a grid of the given width, never less than 1.
    pub fn run_length_for(&self, width: usize) -> usize {
        if self.run_length == 0 {
            width.saturating_sub(2).max(1)
        } else {
            self.run_length
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_run_length(mut self, run_length: usize) -> Self {
        self.run_length = run_length;
        self
    }

    pub fn with_saturation(mut self, saturation: Saturation) -> Self {
        self.saturation = saturation;
        self
    }
}
