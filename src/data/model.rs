use std::fmt;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::{PlotError, Result};

// ---------------------------------------------------------------------------
// Series – one tracked quantity over lattice sites
// ---------------------------------------------------------------------------

/// One ordered list of samples. Its position in the profile identifies the
/// species or replicate it belongs to.
pub type Series = Vec<f64>;

// ---------------------------------------------------------------------------
// DensityField – which profile of the results to read
// ---------------------------------------------------------------------------

/// The two alternative profiles stored under `results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DensityField {
    /// Site-wise occupation density, one entry per lattice site.
    Density,
    /// Distribution of per-species particle counts, one entry per count.
    SpeciesDensity,
}

impl DensityField {
    /// JSON key under `results`.
    pub fn key(self) -> &'static str {
        match self {
            DensityField::Density => "density",
            DensityField::SpeciesDensity => "speciesDensity",
        }
    }

    /// First x value. Site numbers start at 1, particle counts at 0.
    pub fn axis_origin(self) -> usize {
        match self {
            DensityField::Density => 1,
            DensityField::SpeciesDensity => 0,
        }
    }

    /// Integer x-axis with `len` points starting at [`Self::axis_origin`].
    pub fn x_axis(self, len: usize) -> Vec<f64> {
        let origin = self.axis_origin();
        (origin..origin + len).map(|x| x as f64).collect()
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            DensityField::Density => "Site",
            DensityField::SpeciesDensity => "Count",
        }
    }
}

impl fmt::Display for DensityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Run metadata – optional fields written next to the profiles
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct RunHeader {
    #[serde(default)]
    results: Option<ResultsHeader>,
    #[serde(default)]
    runtime: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct ResultsHeader {
    #[serde(rename = "tTotal", default)]
    t_total: Option<f64>,
}

/// Optional metadata about the simulation run that produced the results.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunInfo {
    /// Total simulated time the densities are averaged over.
    pub t_total: Option<f64>,
    /// Wall-clock runtime of the simulation in milliseconds.
    pub runtime_ms: Option<f64>,
}

// ---------------------------------------------------------------------------
// ResultsDocument – the parsed results file
// ---------------------------------------------------------------------------

/// A parsed results file. Only the shape needed for plotting is checked, and
/// only when a profile is requested.
#[derive(Debug, Clone)]
pub struct ResultsDocument {
    root: JsonValue,
    pub info: RunInfo,
}

impl ResultsDocument {
    pub fn from_value(root: JsonValue) -> Self {
        // Metadata is best effort; a malformed header never blocks plotting.
        let header = RunHeader::deserialize(&root).unwrap_or_default();
        let info = RunInfo {
            t_total: header.results.and_then(|r| r.t_total),
            runtime_ms: header.runtime,
        };
        Self { root, info }
    }

    /// Extract every series of `field`, in document order.
    pub fn series(&self, field: DensityField) -> Result<Vec<Series>> {
        let results = self
            .root
            .get("results")
            .ok_or(PlotError::MissingKey { key: "results" })?;

        let key = field.key();
        let value = results
            .get(key)
            .ok_or(PlotError::MissingKey { key })?;

        Vec::<Series>::deserialize(value).map_err(|source| PlotError::Malformed { key, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_density_series_in_order() {
        let doc = ResultsDocument::from_value(json!({
            "results": { "density": [[1, 2, 3], [4.5, 5, 6]] }
        }));
        let series = doc.series(DensityField::Density).unwrap();
        assert_eq!(series, vec![vec![1.0, 2.0, 3.0], vec![4.5, 5.0, 6.0]]);
    }

    #[test]
    fn missing_results_is_reported() {
        let doc = ResultsDocument::from_value(json!({ "options": {} }));
        let err = doc.series(DensityField::Density).unwrap_err();
        assert!(matches!(err, PlotError::MissingKey { key: "results" }));
    }

    #[test]
    fn missing_field_names_the_field() {
        let doc = ResultsDocument::from_value(json!({ "results": { "density": [[1]] } }));
        let err = doc.series(DensityField::SpeciesDensity).unwrap_err();
        assert!(matches!(err, PlotError::MissingKey { key: "speciesDensity" }));
    }

    #[test]
    fn non_numeric_samples_are_malformed() {
        let doc = ResultsDocument::from_value(json!({ "results": { "density": [["a"]] } }));
        let err = doc.series(DensityField::Density).unwrap_err();
        assert!(matches!(err, PlotError::Malformed { key: "density", .. }));
    }

    #[test]
    fn run_info_is_optional() {
        let doc = ResultsDocument::from_value(json!({
            "results": { "tTotal": 250.0, "density": [] },
            "runtime": 1234
        }));
        assert_eq!(doc.info.t_total, Some(250.0));
        assert_eq!(doc.info.runtime_ms, Some(1234.0));

        let bare = ResultsDocument::from_value(json!({ "results": { "density": [] } }));
        assert_eq!(bare.info, RunInfo::default());
    }

    #[test]
    fn axis_origin_differs_per_field() {
        assert_eq!(DensityField::Density.x_axis(3), vec![1.0, 2.0, 3.0]);
        assert_eq!(DensityField::SpeciesDensity.x_axis(2), vec![0.0, 1.0]);
    }
}
