use crate::models::Dataset;
use crate::time_utils::format_timestamp;

/// Format a row count with thousands separators.
///
/// # Examples
///
/// ```
/// use tsviz_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(950), "950");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
pub fn format_count(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Insert `,` separators into a bare digit string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ── Dataset preview ────────────────────────────────────────────────────────────

/// Render the first `limit` rows of `dataset` as an aligned text table.
///
/// Mirrors a DataFrame head: canonical header, one line per shown row, and a
/// row-count trailer when rows were elided (or when there are none at all).
pub fn preview_table(dataset: &Dataset, limit: usize) -> String {
    let header = dataset.header();

    let shown: Vec<Vec<String>> = dataset
        .rows
        .iter()
        .take(limit)
        .map(|record| {
            let mut cells = vec![format_timestamp(record.time), record.value.to_string()];
            cells.extend(record.keys.iter().cloned());
            cells
        })
        .collect();

    // Column widths over the header and every shown cell.
    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for row in &shown {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let render_line = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&render_line(&header));
    out.push('\n');
    for row in &shown {
        out.push_str(&render_line(row));
        out.push('\n');
    }

    if dataset.rows.len() > shown.len() || dataset.rows.is_empty() {
        out.push_str(&format!("{} rows\n", format_count(dataset.rows.len())));
    }

    out
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use chrono::{TimeZone, Utc};

    fn sample_dataset(rows: usize) -> Dataset {
        let mut dataset = Dataset::new(vec!["sensor".to_string()]);
        for i in 0..rows {
            dataset.rows.push(Record {
                time: Utc.with_ymd_and_hms(2024, 1, 1, 0, i as u32, 0).unwrap(),
                value: i as f64 + 0.5,
                keys: vec![format!("s{i}")],
            });
        }
        dataset
    }

    #[test]
    fn test_format_count_small() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn test_format_count_groups() {
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345), "12,345");
        assert_eq!(format_count(123_456_789), "123,456,789");
    }

    #[test]
    fn test_preview_empty_dataset() {
        let dataset = Dataset::new(vec!["sensor".to_string()]);
        let out = preview_table(&dataset, 5);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("time"));
        assert!(lines[0].contains("value"));
        assert!(lines[0].contains("sensor"));
        assert_eq!(lines[1], "0 rows");
    }

    #[test]
    fn test_preview_shows_at_most_limit_rows() {
        let dataset = sample_dataset(8);
        let out = preview_table(&dataset, 5);
        let lines: Vec<&str> = out.lines().collect();
        // Header + 5 rows + trailer.
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[6], "8 rows");
    }

    #[test]
    fn test_preview_no_trailer_when_everything_shown() {
        let dataset = sample_dataset(3);
        let out = preview_table(&dataset, 5);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(!out.contains("rows"));
    }

    #[test]
    fn test_preview_cells_are_aligned() {
        let dataset = sample_dataset(2);
        let out = preview_table(&dataset, 5);
        let lines: Vec<&str> = out.lines().collect();
        // The value column starts at the same offset in every data line.
        let col = lines[1].find("0.5").expect("value cell");
        assert_eq!(lines[2].find("1.5"), Some(col));
    }
}
