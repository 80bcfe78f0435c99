//! Heart-rate-variability history and the statistics derived from it.

/// Number of HRV samples kept by `HrvHistory`.
pub const HRV_HISTORY_LEN: usize = 16;

/// Consecutive differences larger than this (in HRV units) count as low frequency.
pub const LF_DIFF_THRESHOLD: f32 = 50.0;

/// Floor applied to the high-frequency sum before dividing.
pub const HF_FLOOR: f32 = 0.001;

/// Fixed-size circular history of the most recent HRV samples.
///
/// The buffer always holds exactly `HRV_HISTORY_LEN` samples: it starts zero filled and each
/// push overwrites the slot under the cursor, then advances the cursor modulo the length.
#[derive(Debug, Clone, PartialEq)]
pub struct HrvHistory {
    samples: [f32; HRV_HISTORY_LEN],
    cursor: usize,
}

impl HrvHistory {
    /// Creates a zero-filled history with its cursor at the first slot.
    pub fn new() -> Self {
        Self {
            samples: [0.; HRV_HISTORY_LEN],
            cursor: 0,
        }
    }

    /// Overwrites the oldest sample with `hrv` and advances the cursor.
    pub fn push(&mut self, hrv: f32) {
        self.samples[self.cursor] = hrv;
        self.cursor = (self.cursor + 1) % HRV_HISTORY_LEN;
    }

    /// Returns the samples in storage order.
    pub fn samples(&self) -> &[f32; HRV_HISTORY_LEN] {
        &self.samples
    }

    /// Returns the slot the next push will overwrite.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns a copy of the samples ordered from oldest to newest.
    pub fn chronological(&self) -> [f32; HRV_HISTORY_LEN] {
        let mut ordered = [0.; HRV_HISTORY_LEN];
        for (i, slot) in ordered.iter_mut().enumerate() {
            *slot = self.samples[(self.cursor + i) % HRV_HISTORY_LEN];
        }

        ordered
    }
}

impl Default for HrvHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard deviation of NN intervals over the history.
///
/// Population standard deviation: squared deviations are divided by the sample count, not by
/// the count minus one.
pub fn sdnn(history: &[f32; HRV_HISTORY_LEN]) -> f32 {
    let n = HRV_HISTORY_LEN as f32;
    let mean = history.iter().fold(0., |acc, &x| acc + x) / n;
    let variance = history
        .iter()
        .fold(0., |acc, &x| acc + (x - mean) * (x - mean))
        / n;

    variance.sqrt()
}

/// Rough LF/HF ratio of the history.
///
/// A true LF/HF ratio needs a spectral transform. This approximation buckets the absolute
/// differences of consecutive samples (in storage order): differences above
/// `LF_DIFF_THRESHOLD` add to the low frequency sum, the rest to the high frequency sum.
pub fn lf_hf_ratio(history: &[f32; HRV_HISTORY_LEN]) -> f32 {
    let (lf, hf) = history
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold((0., 0.), |(lf, hf), diff| {
            if diff > LF_DIFF_THRESHOLD {
                (lf + diff, hf)
            } else {
                (lf, hf + diff)
            }
        });

    let hf = if hf < HF_FLOOR { HF_FLOOR } else { hf };

    lf / hf
}
