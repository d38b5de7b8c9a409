use anyhow::Result;
use serde::Serialize;
use std::{fs, path::Path};

/// Writes `records` to `path` as CSV, one row per record, with a header row
/// taken from the serialized field names. Parent directories are created.
pub fn write_csv<T>(path: &Path, records: &[T]) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders rows as a right-aligned text table with a leading row index.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let index_width = rows.len().saturating_sub(1).to_string().len();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(String::len)
                .fold(header.len(), usize::max)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let mut line = " ".repeat(index_width);
    for (header, width) in headers.iter().zip(&widths) {
        line.push_str(&format!("  {:>width$}", header, width = width));
    }
    lines.push(line);

    for (index, row) in rows.iter().enumerate() {
        let mut line = format!("{:>width$}", index, width = index_width);
        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&format!("  {:>width$}", cell, width = width));
        }
        lines.push(line);
    }
    lines.join("\n")
}
