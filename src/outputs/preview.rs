//! Console preview of the first findings.

use crate::models::Finding;
use crate::utils::truncate_for_log;

/// Number of findings shown after a run.
pub const PREVIEW_ROWS: usize = 5;

/// Longest URL shown in a preview cell before it is shortened.
const MAX_URL_CHARS: usize = 60;

/// Render up to `limit` findings as an aligned, row-numbered table.
pub fn render(findings: &[Finding], limit: usize) -> String {
    let rows: Vec<[String; 4]> = findings
        .iter()
        .take(limit)
        .map(|f| {
            let [url, disease, symptoms, prevention] = f.to_row();
            [
                truncate_for_log(url, MAX_URL_CHARS),
                disease.to_string(),
                symptoms.to_string(),
                prevention.to_string(),
            ]
        })
        .collect();
    if rows.is_empty() {
        return "(no findings)".to_string();
    }

    let mut widths = Finding::HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let index_width = (rows.len() - 1).to_string().len();

    let mut out = String::new();
    out.push_str(&format_line(&" ".repeat(index_width), Finding::HEADERS.iter(), &widths));
    for (i, row) in rows.iter().enumerate() {
        out.push('\n');
        out.push_str(&format_line(&format!("{i:>index_width$}"), row.iter(), &widths));
    }
    out
}

fn format_line<S: AsRef<str>>(
    index: &str,
    cells: impl Iterator<Item = S>,
    widths: &[usize; 4],
) -> String {
    let mut line = index.to_string();
    for (cell, width) in cells.zip(widths) {
        line.push_str("  ");
        line.push_str(&format!("{:<width$}", cell.as_ref(), width = *width));
    }
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(i: usize, disease: &str) -> Finding {
        Finding {
            source_link: format!("https://h.example/articles/{i}"),
            disease_name: disease.to_string(),
            symptoms_found: i % 2 == 0,
            prevention_found: false,
        }
    }

    #[test]
    fn test_render_aligned_table() {
        let findings = vec![finding(0, "Asthma"), finding(1, "Breast Cancer")];
        let table = render(&findings, PREVIEW_ROWS);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("   Article URL"));
        assert!(lines[0].ends_with("Preventive Measures Found"));
        assert!(lines[1].starts_with("0  https://h.example/articles/0"));
        assert!(lines[1].contains("  Asthma         Yes"));
        assert!(lines[2].contains("  Breast Cancer  No"));

        let disease_col = lines[0].find("Disease").unwrap();
        assert_eq!(lines[1].find("Asthma").unwrap(), disease_col);
        assert_eq!(lines[2].find("Breast Cancer").unwrap(), disease_col);
    }

    #[test]
    fn test_render_limits_rows() {
        let findings: Vec<Finding> = (0..8).map(|i| finding(i, "Cancer")).collect();
        let table = render(&findings, PREVIEW_ROWS);
        assert_eq!(table.lines().count(), PREVIEW_ROWS + 1);
    }

    #[test]
    fn test_render_shortens_long_urls() {
        let mut long = finding(0, "Cancer");
        long.source_link = format!("https://h.example/{}", "x".repeat(100));
        let table = render(&[long], PREVIEW_ROWS);
        assert!(table.contains("…(+"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], PREVIEW_ROWS), "(no findings)");
        assert_eq!(render(&[finding(0, "Cancer")], 0), "(no findings)");
    }
}
