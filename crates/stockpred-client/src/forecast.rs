//! Reader for the DeepAR style output of the prediction service.
//!
//! ```json
//! {"predictions": [{"quantiles": {"0.1": [..], "0.5": [..], "0.9": [..]}}]}
//! ```

use crate::error::{FormError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Deserialize, Serialize, Debug)]
struct PredictionBody {
    predictions: Vec<Prediction>,
}

#[derive(Deserialize, Serialize, Debug)]
struct Prediction {
    quantiles: BTreeMap<String, Vec<f64>>,
}

/// Quantile series of the first prediction, keyed by quantile name (`"0.1"`, `"0.5"` ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    quantiles: BTreeMap<String, Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuantileSummary {
    pub name: String,
    pub first: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
}

impl Forecast {
    pub fn parse(raw: &str) -> Result<Self> {
        let body: PredictionBody = serde_json::from_str(raw)?;
        let first = body
            .predictions
            .into_iter()
            .next()
            .ok_or(FormError::EmptyForecast)?;
        Ok(Forecast {
            quantiles: first.quantiles,
        })
    }

    /// Number of predicted steps; the longest series wins if they disagree.
    pub fn horizon(&self) -> usize {
        self.quantiles.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn quantile(&self, name: &str) -> Option<&[f64]> {
        self.quantiles.get(name).map(Vec::as_slice)
    }

    pub fn median(&self) -> Option<&[f64]> {
        self.quantile("0.5")
    }

    /// One line per non-empty quantile, in ascending quantile order.
    pub fn summary(&self) -> Vec<QuantileSummary> {
        let mut rows: Vec<QuantileSummary> = self
            .quantiles
            .iter()
            .filter_map(|(name, series)| {
                let (first, last) = (*series.first()?, *series.last()?);
                let min = series.iter().copied().fold(f64::INFINITY, f64::min);
                let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                Some(QuantileSummary {
                    name: name.clone(),
                    first,
                    last,
                    min,
                    max,
                })
            })
            .collect();

        // keys are strings, so order them by value ("0.05" < "0.1")
        rows.sort_by(|a, b| {
            let a = a.name.parse::<f64>().unwrap_or(f64::MAX);
            let b = b.name.parse::<f64>().unwrap_or(f64::MAX);
            a.total_cmp(&b)
        });
        rows
    }
}
