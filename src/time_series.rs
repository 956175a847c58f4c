use crate::metrics::SessionResult;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Label format for a history point, date plus minute
pub const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub label: String,
    pub value: f64,
}

impl Sample {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl From<(String, f64)> for Sample {
    fn from(v: (String, f64)) -> Self {
        Sample {
            label: v.0,
            value: v.1,
        }
    }
}

impl From<(&str, f64)> for Sample {
    fn from(v: (&str, f64)) -> Self {
        Sample::new(v.0, v.1)
    }
}

impl From<Sample> for (String, f64) {
    fn from(s: Sample) -> Self {
        (s.label, s.value)
    }
}

/// Historical values in time order, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// WPM of each result, ordered by start time
    pub fn from_results(results: &[SessionResult]) -> Self {
        results
            .iter()
            .sorted_by_key(|r| r.start_time)
            .map(|r| Sample::new(r.start_time.format(LABEL_FORMAT).to_string(), r.wpm))
            .collect()
    }

    pub fn push(&mut self, sample: impl Into<Sample>) {
        self.samples.push(sample.into());
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FromIterator<Sample> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SampleSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
