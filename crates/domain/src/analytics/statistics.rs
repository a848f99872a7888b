use std::collections::{HashMap, hash_map::Entry};

use serde::Serialize;

/// Accepted numbers in file order plus their running sum.
#[derive(Debug, Clone, Default)]
pub struct NumberSample {
    values: Vec<f64>,
    sum: f64,
}

impl NumberSample {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Descriptive statistics over the sample; `None` when nothing was accepted.
    pub fn summarize(&self) -> Option<Statistics> {
        if self.is_empty() {
            return None;
        }
        let mean = self.sum / self.len() as f64;
        let variance = population_variance(&self.values, mean);
        Some(Statistics {
            count: self.len(),
            mean,
            median: median(&self.values)?,
            mode: mode(&self.values)?,
            variance,
            std_dev: std_dev(variance),
        })
    }
}

impl FromIterator<f64> for NumberSample {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut sample = Self::new();
        for value in iter {
            sample.push(value);
        }
        sample
    }
}

/// Population statistics (divisor N) over a non-empty sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub variance: f64,
    pub std_dev: f64,
}

/// Middle of the sorted values, or the average of the two central ones.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Most frequent value. On ties the value seen first in `values` wins.
pub fn mode(values: &[f64]) -> Option<f64> {
    let mut slots: HashMap<u64, usize> = HashMap::new();
    let mut frequencies: Vec<(f64, usize)> = Vec::new();

    for &value in values {
        match slots.entry(frequency_key(value)) {
            Entry::Occupied(slot) => frequencies[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(frequencies.len());
                frequencies.push((value, 1));
            }
        }
    }

    let mut best: Option<(f64, usize)> = None;
    for (value, count) in frequencies {
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

// -0.0 and 0.0 compare equal, so they share a slot.
fn frequency_key(value: f64) -> u64 {
    if value == 0.0 { 0.0_f64.to_bits() } else { value.to_bits() }
}

/// Mean of squared deviations from `mean`, divided by N.
pub fn population_variance(values: &[f64], mean: f64) -> f64 {
    let mut squares = 0.0;
    for value in values {
        squares += (value - mean).powi(2);
    }
    squares / values.len() as f64
}

pub fn std_dev(variance: f64) -> f64 {
    variance.sqrt()
}
