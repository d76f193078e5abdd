use super::model::{DensityField, ResultsDocument, Series};
use crate::error::{PlotError, Result};

// ---------------------------------------------------------------------------
// Selection filter
// ---------------------------------------------------------------------------

/// Which series of a profile to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionFilter {
    /// Every series, in ascending index order.
    #[default]
    All,
    /// Exactly these indices, in this order. Duplicates are kept and negative
    /// indices count from the end.
    Indices(Vec<i64>),
}

impl From<Vec<i64>> for SelectionFilter {
    /// An empty index list means no filter was given.
    fn from(indices: Vec<i64>) -> Self {
        if indices.is_empty() {
            SelectionFilter::All
        } else {
            SelectionFilter::Indices(indices)
        }
    }
}

/// One series picked by a filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick<'a> {
    /// Index as written in the filter, possibly negative.
    pub requested: i64,
    /// Position of the series in the document.
    pub index: usize,
    pub series: &'a Series,
}

/// Map a possibly negative index onto `0..len`.
pub fn resolve_index(requested: i64, len: usize) -> Result<usize> {
    let out_of_range = || PlotError::IndexOutOfRange {
        index: requested,
        len,
    };
    let len_i = i64::try_from(len).map_err(|_| out_of_range())?;
    let resolved = if requested < 0 {
        requested + len_i
    } else {
        requested
    };
    if (0..len_i).contains(&resolved) {
        Ok(resolved as usize)
    } else {
        Err(out_of_range())
    }
}

/// Pick the series named by `filter`.
///
/// Order follows the filter exactly; it is never sorted or deduplicated.
pub fn select<'a>(series: &'a [Series], filter: &SelectionFilter) -> Result<Vec<Pick<'a>>> {
    match filter {
        SelectionFilter::All => Ok(series
            .iter()
            .enumerate()
            .map(|(index, s)| Pick {
                requested: index as i64,
                index,
                series: s,
            })
            .collect()),
        SelectionFilter::Indices(indices) => indices
            .iter()
            .map(|&requested| {
                let index = resolve_index(requested, series.len())?;
                Ok(Pick {
                    requested,
                    index,
                    series: &series[index],
                })
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Profile – what actually gets drawn
// ---------------------------------------------------------------------------

/// One selected series with its position in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub index: usize,
    /// Index as the user wrote it; the legend shows this.
    pub requested: i64,
    /// How many earlier traces show the same series.
    pub repeat: usize,
    pub samples: Series,
}

impl Trace {
    pub fn new(index: usize, samples: Series) -> Self {
        Self {
            index,
            requested: index as i64,
            repeat: 0,
            samples,
        }
    }

    /// Legend label.
    pub fn label(&self) -> String {
        self.requested.to_string()
    }

    /// Plot item name. Repeated traces get a suffix so each keeps its own
    /// legend entry.
    pub fn legend_name(&self) -> String {
        if self.repeat == 0 {
            self.label()
        } else {
            format!("{} ({})", self.label(), self.repeat + 1)
        }
    }

    pub fn min(&self) -> f64 {
        self.samples.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return f64::NAN;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }
}

/// The x-axis and the selected traces of one density field.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub field: DensityField,
    pub x: Vec<f64>,
    pub traces: Vec<Trace>,
}

impl Profile {
    /// Extract `field` from `doc` and apply `filter`.
    ///
    /// The x-axis length comes from the first series in the document, whether
    /// or not that series is selected.
    pub fn build(
        doc: &ResultsDocument,
        field: DensityField,
        filter: &SelectionFilter,
    ) -> Result<Self> {
        let series = doc.series(field)?;
        let reference = series
            .first()
            .ok_or(PlotError::EmptySeries { key: field.key() })?;
        let x = field.x_axis(reference.len());

        let picks = select(&series, filter)?;
        let mut traces: Vec<Trace> = Vec::with_capacity(picks.len());
        for pick in picks {
            if pick.series.len() != x.len() {
                return Err(PlotError::LengthMismatch {
                    index: pick.index,
                    expected: x.len(),
                    found: pick.series.len(),
                });
            }
            let repeat = traces.iter().filter(|t| t.index == pick.index).count();
            traces.push(Trace {
                index: pick.index,
                requested: pick.requested,
                repeat,
                samples: pick.series.clone(),
            });
        }

        log::debug!(
            "selected {} of {} '{}' series ({} samples each)",
            traces.len(),
            series.len(),
            field,
            x.len()
        );

        Ok(Self { field, x, traces })
    }

    /// `[x, y]` pairs of one trace.
    pub fn points(&self, trace: &Trace) -> Vec<[f64; 2]> {
        self.x
            .iter()
            .zip(trace.samples.iter())
            .map(|(&xi, &yi)| [xi, yi])
            .collect()
    }
}
