use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::data::loader::{display_title, load_file};
use crate::data::model::{DensityField, RunInfo};
use crate::data::select::{Profile, SelectionFilter, Trace};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Debug)]
pub struct AppState {
    /// Profile currently on screen.
    pub profile: Profile,

    /// Run metadata of the loaded file.
    pub info: RunInfo,

    /// Base name of the loaded file, used as window title.
    pub title: String,

    /// Trace positions (not series indices) hidden via the side panel.
    pub hidden: Vec<bool>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Set when the window title must be pushed to the viewport.
    pub title_dirty: bool,
}

impl AppState {
    pub fn new(profile: Profile, info: RunInfo, title: String) -> Self {
        Self {
            hidden: vec![false; profile.traces.len()],
            profile,
            info,
            title,
            status_message: None,
            title_dirty: false,
        }
    }

    /// Load `path`, build the profile for `field`, and wrap it in a fresh state.
    pub fn open(path: &Path, field: DensityField, filter: &SelectionFilter) -> Result<Self> {
        let doc = load_file(path)?;
        let profile = Profile::build(&doc, field, filter)?;
        log::info!(
            "Showing {} '{}' traces from {}",
            profile.traces.len(),
            field,
            path.display()
        );
        Ok(Self::new(profile, doc.info, display_title(path)))
    }

    /// Replace the displayed file with another one. All of its series are shown.
    ///
    /// On failure the current profile stays and the error is kept for display.
    pub fn reload(&mut self, path: PathBuf) {
        let field = self.profile.field;
        match Self::open(&path, field, &SelectionFilter::All) {
            Ok(fresh) => {
                *self = fresh;
                self.title_dirty = true;
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn is_visible(&self, position: usize) -> bool {
        !self.hidden.get(position).copied().unwrap_or(false)
    }

    pub fn toggle_trace(&mut self, position: usize) {
        if let Some(hidden) = self.hidden.get_mut(position) {
            *hidden = !*hidden;
        }
    }

    pub fn show_all(&mut self) {
        self.hidden.iter_mut().for_each(|h| *h = false);
    }

    pub fn hide_all(&mut self) {
        self.hidden.iter_mut().for_each(|h| *h = true);
    }

    /// Traces currently drawn, in selection order.
    pub fn visible_traces(&self) -> impl Iterator<Item = &Trace> {
        self.profile
            .traces
            .iter()
            .enumerate()
            .filter(|(pos, _)| self.is_visible(*pos))
            .map(|(_, t)| t)
    }

    /// Profile restricted to the visible traces, for export.
    pub fn visible_profile(&self) -> Profile {
        Profile {
            field: self.profile.field,
            x: self.profile.x.clone(),
            traces: self.visible_traces().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn state() -> AppState {
        let trace = |index: usize| Trace::new(index, vec![index as f64]);
        let profile = Profile {
            field: DensityField::Density,
            x: vec![1.0],
            traces: vec![trace(1), trace(0), trace(1)],
        };
        AppState::new(profile, RunInfo::default(), "run.json".into())
    }

    fn visible(state: &AppState) -> Vec<usize> {
        state.visible_traces().map(|t| t.index).collect()
    }

    #[test]
    fn hiding_keeps_remaining_order() {
        let mut state = state();
        state.toggle_trace(0);
        assert_eq!(visible(&state), vec![0, 1]);

        state.toggle_trace(0);
        assert_eq!(visible(&state), vec![1, 0, 1]);
    }

    #[test]
    fn show_and_hide_all() {
        let mut state = state();
        state.hide_all();
        assert!(visible(&state).is_empty());
        assert!(state.visible_profile().traces.is_empty());

        state.show_all();
        assert_eq!(state.visible_profile().traces.len(), 3);
    }

    #[test]
    fn failed_reload_keeps_profile() {
        let mut state = state();
        let dir = tempfile::tempdir().unwrap();
        state.reload(dir.path().join("missing.json"));

        assert_eq!(state.profile.traces.len(), 3);
        assert!(state.status_message.as_deref().unwrap().starts_with("Error"));
        assert!(!state.title_dirty);
    }

    #[test]
    fn reload_switches_file_and_title() {
        let mut state = state();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"results": {{"density": [[1, 2], [3, 4], [5, 6]]}}}}"#).unwrap();

        state.reload(path);

        assert_eq!(state.title, "other.json");
        assert!(state.title_dirty);
        assert_eq!(visible(&state), vec![0, 1, 2]);
        assert_eq!(state.profile.x, vec![1.0, 2.0]);
    }
}
