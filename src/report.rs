use std::fmt::Write;

use crate::stat_record::StatRecord;

/// Renders the first `min(limit, len)` records as a table; `limit == 0`
/// renders everything. `id` prints in hex, `cost` in scientific notation,
/// `mode` as its three bits most-significant first.
pub fn render_preview(records: &[StatRecord], limit: usize) -> String {
    let rows = if limit == 0 || limit > records.len() {
        records.len()
    } else {
        limit
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<10} {:<15} {:<8} {:<5}",
        "ID", "Count", "Cost", "Primary", "Mode"
    );
    let _ = writeln!(out, "--------------------------------------------");

    for record in &records[..rows] {
        let mode = record.mode();
        let _ = writeln!(
            out,
            "{:<10x} {:<10} {:<15.3e} {:<8} {}{}{}",
            record.id,
            record.count,
            record.cost,
            if record.primary() { 'y' } else { 'n' },
            (mode >> 2) & 1,
            (mode >> 1) & 1,
            mode & 1,
        );
    }
    out
}
