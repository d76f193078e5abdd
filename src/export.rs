//! Headless output of a selected profile.

use std::io::Write;
use std::path::Path;

use crate::data::select::Profile;
use crate::error::Result;

/// Write the profile as CSV: an `x` column followed by one column per trace,
/// headed by the trace label, in selection order.
pub fn write_csv<W: Write>(profile: &Profile, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["x".to_string()];
    header.extend(profile.traces.iter().map(|t| t.label()));
    csv.write_record(&header)?;

    for (row, x) in profile.x.iter().enumerate() {
        let mut record = vec![x.to_string()];
        record.extend(profile.traces.iter().map(|t| t.samples[row].to_string()));
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}

pub fn export_csv(profile: &Profile, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(profile, file)?;
    log::info!(
        "Exported {} traces to {}",
        profile.traces.len(),
        path.display()
    );
    Ok(())
}

/// Human-readable listing of the selected traces.
pub fn write_summary<W: Write>(profile: &Profile, mut out: W) -> Result<()> {
    let first = profile.x.first().copied().unwrap_or_default();
    let last = profile.x.last().copied().unwrap_or_default();
    writeln!(
        out,
        "{}: {} traces, {} samples, x = {first}..={last}",
        profile.field,
        profile.traces.len(),
        profile.x.len()
    )?;

    for trace in &profile.traces {
        writeln!(
            out,
            "{:>4}  n={}  min={:.6}  max={:.6}  mean={:.6}",
            trace.label(),
            trace.samples.len(),
            trace.min(),
            trace.max(),
            trace.mean()
        )?;
    }
    Ok(())
}
