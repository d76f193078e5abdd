//! Command line surface shared by the plotting binaries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use eframe::egui;

use crate::app::LatticePlotApp;
use crate::data::model::DensityField;
use crate::data::select::SelectionFilter;
use crate::export;
use crate::state::AppState;

/// Options common to every entry point.
#[derive(Args, Debug)]
pub struct Common {
    /// Simulation results file (JSON)
    #[arg(value_name = "RESULTS_FILE")]
    pub file: PathBuf,

    /// Write the selected series to a CSV file instead of opening a window
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Print a summary of the selected series instead of opening a window
    #[arg(long, conflicts_with = "export")]
    pub list: bool,
}

/// Plot selected series of a results profile.
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
pub struct FilteredArgs {
    #[command(flatten)]
    pub common: Common,

    /// Series indices to show, in order (default: all). Negative indices
    /// count from the last series
    #[arg(value_name = "INDEX", allow_negative_numbers = true)]
    pub indices: Vec<i64>,
}

/// Plot every series of the density profile.
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
pub struct AllArgs {
    #[command(flatten)]
    pub common: Common,

    /// Accepted for compatibility and ignored. Flags after them still apply
    #[arg(hide = true, allow_negative_numbers = true)]
    pub ignored: Vec<String>,
}

impl FilteredArgs {
    pub fn run(self, field: DensityField) -> Result<()> {
        run(self.common, field, SelectionFilter::from(self.indices))
    }
}

impl AllArgs {
    pub fn run(self, field: DensityField) -> Result<()> {
        if !self.ignored.is_empty() {
            log::debug!("ignoring extra arguments {:?}", self.ignored);
        }
        run(self.common, field, SelectionFilter::All)
    }
}

/// Load, select, then either write headless output or open the viewer.
pub fn run(common: Common, field: DensityField, filter: SelectionFilter) -> Result<()> {
    let state = AppState::open(&common.file, field, &filter)
        .with_context(|| format!("cannot plot '{field}' from {}", common.file.display()))?;

    if let Some(path) = &common.export {
        return export::export_csv(&state.profile, path)
            .with_context(|| format!("writing {}", path.display()));
    }

    if common.list {
        let stdout = std::io::stdout();
        export::write_summary(&state.profile, stdout.lock())?;
        return Ok(());
    }

    show(state)
}

fn show(state: AppState) -> Result<()> {
    let title = state.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(LatticePlotApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn argument_definitions_are_consistent() {
        FilteredArgs::command().debug_assert();
        AllArgs::command().debug_assert();
    }

    #[test]
    fn indices_are_kept_in_order() {
        let args = FilteredArgs::try_parse_from(["plotdensity", "r.json", "3", "1", "3"]).unwrap();
        assert_eq!(args.indices, vec![3, 1, 3]);
        assert_eq!(args.common.file, PathBuf::from("r.json"));
    }

    #[test]
    fn negative_indices_are_accepted_before_flags() {
        let args =
            FilteredArgs::try_parse_from(["plotdensity", "r.json", "-1", "0", "--list"]).unwrap();
        assert_eq!(args.indices, vec![-1, 0]);
        assert!(args.common.list);
    }

    #[test]
    fn non_integer_index_is_rejected() {
        assert!(FilteredArgs::try_parse_from(["plotdensity", "r.json", "one"]).is_err());
    }

    #[test]
    fn unfiltered_variant_swallows_extra_arguments() {
        let args = AllArgs::try_parse_from(["plotalldensity", "r.json", "1", "x"]).unwrap();
        assert_eq!(args.ignored, vec!["1", "x"]);
        assert!(!args.common.list);
    }

    #[test]
    fn unfiltered_variant_parses_flags_after_extra_arguments() {
        let args =
            AllArgs::try_parse_from(["plotalldensity", "r.json", "1", "-2", "--list"]).unwrap();
        assert_eq!(args.ignored, vec!["1", "-2"]);
        assert!(args.common.list);
    }
}
