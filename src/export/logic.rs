// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{EventExport, ExportFormat};
use crate::models::event::Event;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `events` to `file`, asking before overwriting unless `force`.
    ///
    /// Returns the number of rows written. An empty list writes nothing.
    pub fn export(
        events: &[Event],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if events.is_empty() {
            warning("No events to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let rows: Vec<EventExport> = events.iter().map(EventExport::from).collect();
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventFields;

    fn sample() -> Vec<Event> {
        let mut done = Event::created(
            2,
            EventFields {
                church_name: "Grace".into(),
                name: "Drums".into(),
                ..Default::default()
            },
        );
        done.completed = true;
        vec![
            Event::created(
                1,
                EventFields {
                    church_name: "St. Mary".into(),
                    name: "Choir, Youth".into(),
                    ..Default::default()
                },
            ),
            done,
        ]
    }

    #[test]
    fn csv_has_header_and_quoted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acts.csv");
        let n = ExportLogic::export(&sample(), ExportFormat::Csv, path.to_str().unwrap(), true)
            .unwrap();
        assert_eq!(n, 2);

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,churchName,name,no,token,author,mobileNo,completed,status")
        );
        assert_eq!(
            lines.next(),
            Some("1,St. Mary,\"Choir, Youth\",,,,,false,Pending")
        );
        assert_eq!(lines.next(), Some("2,Grace,Drums,,,,,true,Completed"));
    }

    #[test]
    fn json_keeps_wire_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("acts.json");
        ExportLogic::export(&sample(), ExportFormat::Json, path.to_str().unwrap(), true).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["churchName"], "St. Mary");
        assert_eq!(value[1]["completed"], true);
        assert_eq!(value[1]["status"], "Completed");
    }

    #[test]
    fn empty_list_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acts.csv");
        let n = ExportLogic::export(&[], ExportFormat::Csv, path.to_str().unwrap(), true).unwrap();
        assert_eq!(n, 0);
        assert!(!path.exists());
    }
}
