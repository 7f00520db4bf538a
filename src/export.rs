use crate::report::Table;
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write CSV: {0}")]
    Io(#[from] std::io::Error),
}

/// `SERP_rewrites_<YYYY-MM-DD>.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("SERP_rewrites_{}.csv", date.format("%Y-%m-%d"))
}

/// Write the table as UTF-8 CSV: header row, then one row per analyzed URL
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the table into `dir` under today's export file name, returning the path
pub fn export_to_dir<P: AsRef<Path>>(table: &Table, dir: P) -> Result<PathBuf, ExportError> {
    let today = chrono::Local::now().date_naive();
    let path = dir.as_ref().join(export_filename(today));

    let file = std::fs::File::create(&path)?;
    write_csv(table, file)?;

    ::log::info!("Exported {} rows to {}", table.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{self, COLUMNS};
    use crate::results::{DeviceType, Report, ReportRow};

    fn table() -> Table {
        report::to_table(&Report {
            rows: vec![ReportRow {
                url: "https://a.example/".to_string(),
                status_code: 200,
                page_title: "Shoes, Boots & Más".to_string(),
                search_title: "Shoes".to_string(),
                title_match_score: 43,
                page_description: "Say \"hi\"".to_string(),
                search_description: "Error, URL may not be indexed in Google.".to_string(),
                description_match_score: 10,
                device_type: DeviceType::Desktop,
            }],
            warnings: Vec::new(),
        })
    }

    #[test]
    fn test_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_filename(date), "SERP_rewrites_2024-03-07.csv");
    }

    #[test]
    fn test_csv_layout() {
        let mut out = Vec::new();
        write_csv(&table(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), COLUMNS.join(","));
        assert_eq!(
            lines.next().unwrap(),
            "https://a.example/,200,\"Shoes, Boots & Más\",Shoes,43,\"Say \"\"hi\"\"\",\
             \"Error, URL may not be indexed in Google.\",10,desktop"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_table_has_header() {
        let mut out = Vec::new();
        write_csv(&report::to_table(&Report::new()), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", COLUMNS.join(",")));
    }

    #[test]
    fn test_export_to_dir() {
        let dir = tempfile::tempdir().unwrap();

        let path = export_to_dir(&table(), dir.path()).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("SERP_rewrites_"));
        assert!(name.ends_with(".csv"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
