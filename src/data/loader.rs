use std::path::Path;

use serde_json::Value as JsonValue;

use super::model::ResultsDocument;
use crate::error::{PlotError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a simulation results file.
///
/// The whole file is read and closed before parsing. Expected layout:
///
/// ```json
/// {
///   "options": { ... },
///   "results": {
///     "tTotal": 1000.0,
///     "density":        [[0.1, 0.2, ...], ...],
///     "speciesDensity": [[0.0, 0.3, ...], ...]
///   },
///   "runtime": 812
/// }
/// ```
///
/// Only JSON syntax is checked here. Missing keys surface when a profile is
/// extracted from the returned document.
pub fn load_file(path: &Path) -> Result<ResultsDocument> {
    let text = std::fs::read_to_string(path).map_err(|e| PlotError::file_read(path, e))?;
    let root: JsonValue = serde_json::from_str(&text).map_err(|e| PlotError::parse(path, e))?;

    log::info!("Loaded results file {}", path.display());
    Ok(ResultsDocument::from_value(root))
}

/// Window title for a results file: its base name.
pub fn display_title(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DensityField;
    use std::io::Write;

    #[test]
    fn loads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"results": {{"density": [[1, 2], [3, 4]]}}}}"#).unwrap();

        let doc = load_file(file.path()).unwrap();
        assert_eq!(doc.series(DensityField::Density).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PlotError::FileRead { .. }));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"results\": ").unwrap();

        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, PlotError::Parse { .. }));
    }

    #[test]
    fn title_is_base_name() {
        assert_eq!(
            display_title(Path::new("/tmp/runs/asep-results.json")),
            "asep-results.json"
        );
        assert_eq!(display_title(Path::new("plain.json")), "plain.json");
    }
}
