// src/export/model.rs

use crate::models::event::Event;
use serde::Serialize;

/// Flat export row: the stored record plus a readable status column.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventExport {
    pub id: i64,
    pub church_name: String,
    pub name: String,
    pub no: String,
    pub token: String,
    pub author: String,
    pub mobile_no: String,
    pub completed: bool,
    pub status: &'static str,
}

impl From<&Event> for EventExport {
    fn from(ev: &Event) -> Self {
        Self {
            id: ev.id,
            church_name: ev.church_name.clone(),
            name: ev.name.clone(),
            no: ev.no.clone(),
            token: ev.token.clone(),
            author: ev.author.clone(),
            mobile_no: ev.mobile_no.clone(),
            completed: ev.completed,
            status: ev.status_str(),
        }
    }
}
