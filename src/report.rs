//! Result aggregation and export.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::runner::StatsRecord;

/// Accumulates measurement records and renders or exports them.
#[derive(Debug, Default)]
pub struct ReportSet {
    records: Vec<StatsRecord>,
}

impl ReportSet {
    /// Empty report set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one measurement record.
    pub fn push(&mut self, record: StatsRecord) {
        self.records.push(record);
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[StatsRecord] {
        &self.records
    }

    /// Drops all accumulated records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Prints the results table to stdout.
    pub fn print_summary(&self) {
        println!(
            "{:<16} {:<10} {:<14} {:<14} {:<14}",
            "Algorithm", "Size(n)", "Time (ms)", "Comparisons", "Swaps"
        );
        println!("{}", "-".repeat(70));
        for record in &self.records {
            let swaps = record
                .swaps
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<16} {:<10} {:<14.3} {:<14} {:<14}",
                record.algorithm, record.size, record.elapsed_ms, record.comparisons, swaps
            );
        }
    }

    /// Writes the records as CSV.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["algorithm", "size", "elapsed_ms", "comparisons", "swaps"])?;
        for record in &self.records {
            writer.write_record(&[
                record.algorithm.to_string(),
                record.size.to_string(),
                format!("{:.3}", record.elapsed_ms),
                record.comparisons.to_string(),
                record.swaps.map(|s| s.to_string()).unwrap_or_default(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes the records as pretty-printed JSON.
    pub fn export_json(&self, path: &Path) -> Result<()> {
        let body = serde_json::to_vec_pretty(&self.records)?;
        fs::write(path, body)?;
        Ok(())
    }
}
