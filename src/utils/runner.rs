//! CSV export of benchmark results.

use crate::error::{BenchError, Result};
use crate::utils::timer::RunResult;
use std::io::Write;
use std::path::Path;

/// Write `results` as CSV, one row per algorithm
pub fn write_csv<W: Write>(mut out: W, size: usize, results: &[RunResult]) -> std::io::Result<()> {
    writeln!(out, "algorithm,size,elapsed_ns,outcome,output_len")?;

    for result in results {
        writeln!(
            out,
            "{},{},{},{},{}",
            result.name,
            size,
            result.elapsed.as_nanos(),
            result.outcome.label(),
            result.output_len
        )?;
    }

    out.flush()
}

/// Export results to a CSV file at `path`
pub fn export_csv(path: &Path, size: usize, results: &[RunResult]) -> Result<()> {
    let to_err = |source| BenchError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::create(path).map_err(to_err)?;
    write_csv(std::io::BufWriter::new(file), size, results).map_err(to_err)
}
