//! Printable invigilation chart.
//!
//! Lays a [`Timetable`] out as a flat table: one header row, one body row
//! per staff member, one column per catalog session. Purely a view of the
//! matrix; layout engines (PDF, spreadsheet) consume the rows as they are.
//! Each body cell keeps its halls as separate values, so a chart can always
//! be read back into the matrix it came from.

use serde::Serialize;

use crate::models::{SessionKey, Timetable};

/// Layout options for [`ReportTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Lines printed above the table (institution, examination, chart name).
    pub title_lines: Vec<String>,
    /// Prepend an "S.No" column.
    pub serial_numbers: bool,
    /// Text for cells with no duty; `None` uses the timetable's marker.
    pub empty_marker: Option<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title_lines: Vec::new(),
            serial_numbers: true,
            empty_marker: None,
        }
    }
}

impl ReportOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a title line.
    pub fn with_title(mut self, line: impl Into<String>) -> Self {
        self.title_lines.push(line.into());
        self
    }

    /// Enables or disables the serial-number column.
    pub fn with_serial_numbers(mut self, enabled: bool) -> Self {
        self.serial_numbers = enabled;
        self
    }

    /// Overrides the timetable's empty-cell marker.
    pub fn with_empty_marker(mut self, marker: impl Into<String>) -> Self {
        self.empty_marker = Some(marker.into());
        self
    }
}

/// One staff member's line in the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// 1-based serial number, when the chart numbers its rows.
    pub serial: Option<usize>,
    /// Staff display name.
    pub staff: String,
    /// Halls per session column; empty for no duty.
    pub duties: Vec<Vec<String>>,
}

impl ReportRow {
    /// Text cells for the row, empty duties written as `marker`.
    ///
    /// Several halls in one session are joined with `", "`.
    pub fn text_cells(&self, marker: &str) -> Vec<String> {
        let mut cells = Vec::with_capacity(self.duties.len() + 2);
        if let Some(serial) = self.serial {
            cells.push(serial.to_string());
        }
        cells.push(self.staff.clone());
        cells.extend(self.duties.iter().map(|halls| {
            if halls.is_empty() {
                marker.to_string()
            } else {
                halls.join(", ")
            }
        }));
        cells
    }
}

/// A timetable laid out as a chart.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_invigilate::models::{roster, SessionCatalog, Timetable};
/// use u_invigilate::report::{ReportOptions, ReportTable};
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let catalog = SessionCatalog::from_days([(d, true, false)]);
/// let timetable = Timetable::empty(&roster(["X"]), catalog.keys());
///
/// let table = ReportTable::from_timetable(&timetable, &ReportOptions::new());
/// assert_eq!(table.headers, vec!["S.No", "Name of Invigilators", "10-1-24 FN", "10-1-24 AN"]);
/// assert_eq!(table.text_rows()[0], vec!["1", "X", "-", "-"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    /// Title lines, unchanged from the options.
    pub title_lines: Vec<String>,
    /// Column headers.
    pub headers: Vec<String>,
    /// Session keys behind the duty columns, in catalog order.
    pub sessions: Vec<SessionKey>,
    /// Body rows, one per staff member in roster order.
    pub rows: Vec<ReportRow>,
    /// Text for cells with no duty.
    pub empty_marker: String,
}

impl ReportTable {
    /// Lays out a timetable.
    pub fn from_timetable(timetable: &Timetable, options: &ReportOptions) -> Self {
        let mut headers = Vec::with_capacity(timetable.sessions().len() + 2);
        if options.serial_numbers {
            headers.push("S.No".to_string());
        }
        headers.push("Name of Invigilators".to_string());
        headers.extend(timetable.sessions().iter().map(|k| column_label(*k)));

        let rows = timetable
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| ReportRow {
                serial: options.serial_numbers.then_some(i + 1),
                staff: row.staff.clone(),
                duties: row.cells.iter().map(|c| c.halls().to_vec()).collect(),
            })
            .collect();

        let empty_marker = options
            .empty_marker
            .clone()
            .unwrap_or_else(|| timetable.empty_marker().to_string());

        Self {
            title_lines: options.title_lines.clone(),
            headers,
            sessions: timetable.sessions().to_vec(),
            rows,
            empty_marker,
        }
    }

    /// Body rows as text cells.
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.text_cells(&self.empty_marker))
            .collect()
    }

    /// Renders title lines followed by tab-separated header and body rows.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for line in &self.title_lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&self.headers.join("\t"));
        out.push('\n');
        for row in self.text_rows() {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }
}

/// Column label for a session: day-month-short-year and slot, e.g. "10-1-24 FN".
pub fn column_label(key: SessionKey) -> String {
    format!("{} {}", key.date.format("%-d-%-m-%y"), key.slot)
}
