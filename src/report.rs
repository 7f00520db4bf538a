use crate::results::{Report, ReportRow};
use crate::utils;
use std::fmt;

/// Column headers, in display and export order
pub const COLUMNS: [&str; 9] = [
    "URL",
    "Status Code",
    "Title",
    "SERP Title",
    "Title Match",
    "Meta Description",
    "SERP Description",
    "Description Match",
    "Device Type",
];

/// Indexes of the two score columns within [`COLUMNS`]
pub const SCORE_COLUMNS: [usize; 2] = [4, 7];

/// Visual band of a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Poor,
    Moderate,
    Good,
}

impl ScoreBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Poor => "poor",
            ScoreBand::Moderate => "moderate",
            ScoreBand::Good => "good",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Below 60 is poor, below 90 moderate, anything else good
pub fn classify(score: u8) -> ScoreBand {
    match score {
        0..60 => ScoreBand::Poor,
        60..90 => ScoreBand::Moderate,
        _ => ScoreBand::Good,
    }
}

/// Report flattened into string cells, ready for rendering or export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: [&'static str; 9],
    pub rows: Vec<[String; 9]>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Flatten the report rows, keeping their order
pub fn to_table(report: &Report) -> Table {
    Table {
        headers: COLUMNS,
        rows: report.rows.iter().map(row_cells).collect(),
    }
}

/// Plain-text rendering for a terminal: one block per row, scores tagged with their band
pub fn render_plain(table: &Table, max_cell_chars: usize) -> String {
    let label_width = table.headers.iter().map(|h| h.len()).max().unwrap_or(0);
    let mut out = String::new();

    for (index, row) in table.rows.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for (column, (header, cell)) in table.headers.iter().zip(row).enumerate() {
            let mut value = utils::truncate(&utils::single_line(cell), max_cell_chars);
            if SCORE_COLUMNS.contains(&column) {
                if let Ok(score) = cell.parse::<u8>() {
                    value = format!("{} ({})", value, classify(score));
                }
            }
            out.push_str(&format!("{:>width$}: {}\n", header, value, width = label_width));
        }
    }

    out
}

fn row_cells(row: &ReportRow) -> [String; 9] {
    [
        row.url.clone(),
        row.status_code.to_string(),
        row.page_title.clone(),
        row.search_title.clone(),
        row.title_match_score.to_string(),
        row.page_description.clone(),
        row.search_description.clone(),
        row.description_match_score.to_string(),
        row.device_type.to_string(),
    ]
}
