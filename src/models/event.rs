use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One performance act on the stage schedule.
///
/// Wire names are camelCase (`churchName`, `mobileNo`) so the JSON matches
/// what browser clients already send and expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,                // ⇔ events.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    #[serde(default, deserialize_with = "lenient_text")]
    pub church_name: String,    // ⇔ events.churchName
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,           // ⇔ events.name
    #[serde(default, deserialize_with = "lenient_text")]
    pub no: String,             // ⇔ events.no (act / dance number)
    #[serde(default, deserialize_with = "lenient_text")]
    pub token: String,          // ⇔ events.token
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: String,         // ⇔ events.author
    #[serde(default, deserialize_with = "lenient_text")]
    pub mobile_no: String,      // ⇔ events.mobileNo
    #[serde(default, deserialize_with = "bool_or_int")]
    pub completed: bool,        // ⇔ events.completed (0 | 1)
}

/// The six free-text attributes of a record, as submitted on create.
///
/// Absent keys and `null` deserialize to empty strings, numbers and booleans
/// to their JSON text: the store does not enforce required fields, only the
/// console form does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFields {
    #[serde(default, deserialize_with = "lenient_text")]
    pub church_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub no: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub token: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mobile_no: String,
}

/// Full replacement payload for an update: every text field plus `completed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[serde(flatten)]
    pub fields: EventFields,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub completed: bool,
}

impl Event {
    /// Build a freshly created record: `completed` always starts false.
    pub fn created(id: i64, fields: EventFields) -> Self {
        Self::from_update(
            id,
            EventUpdate {
                fields,
                completed: false,
            },
        )
    }

    pub fn from_update(id: i64, update: EventUpdate) -> Self {
        let EventUpdate { fields, completed } = update;
        Self {
            id,
            church_name: fields.church_name,
            name: fields.name,
            no: fields.no,
            token: fields.token,
            author: fields.author,
            mobile_no: fields.mobile_no,
            completed,
        }
    }

    pub fn fields(&self) -> EventFields {
        EventFields {
            church_name: self.church_name.clone(),
            name: self.name.clone(),
            no: self.no.clone(),
            token: self.token.clone(),
            author: self.author.clone(),
            mobile_no: self.mobile_no.clone(),
        }
    }

    /// Update payload that keeps every field and flips `completed`.
    pub fn toggled(&self) -> EventUpdate {
        EventUpdate {
            fields: self.fields(),
            completed: !self.completed,
        }
    }

    pub fn status_str(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }

    /// Short "name - church" label used by the order view and the viewer.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.church_name)
    }
}

/// Any JSON scalar as text; `null` reads as "".
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Accepts `true`/`false`, numbers, `"true"`/`"1"` strings and `null` for
/// boolean columns.
///
/// SQLite has no boolean type, so older clients echo the raw integer back.
fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
        }
        Some(Value::Null) | None => false,
        Some(Value::Array(_) | Value::Object(_)) => {
            return Err(serde::de::Error::custom("completed must be a boolean"));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn st_mary() -> EventFields {
        EventFields {
            church_name: "St. Mary".into(),
            name: "Choir".into(),
            no: "3".into(),
            token: "T3".into(),
            author: "Jane".into(),
            mobile_no: "555-0100".into(),
        }
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let ev = Event::created(1, st_mary());
        let v = serde_json::to_value(&ev).unwrap();
        assert_eq!(v["churchName"], "St. Mary");
        assert_eq!(v["mobileNo"], "555-0100");
        assert_eq!(v["completed"], false);
        assert_eq!(v["id"], 1);
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let f: EventFields = serde_json::from_value(json!({ "name": "Solo" })).unwrap();
        assert_eq!(f.name, "Solo");
        assert_eq!(f.church_name, "");
        assert_eq!(f.mobile_no, "");
    }

    #[test]
    fn completed_accepts_integers_and_booleans() {
        let a: EventUpdate = serde_json::from_value(json!({ "completed": 1 })).unwrap();
        let b: EventUpdate = serde_json::from_value(json!({ "completed": false })).unwrap();
        let c: EventUpdate = serde_json::from_value(json!({ "completed": null })).unwrap();
        let d: EventUpdate = serde_json::from_value(json!({})).unwrap();
        assert!(a.completed);
        assert!(!b.completed);
        assert!(!c.completed);
        assert!(!d.completed);
    }

    #[test]
    fn text_fields_accept_null_and_numbers() {
        let f: EventFields = serde_json::from_value(json!({
            "churchName": null,
            "name": "Solo",
            "no": 3,
            "token": true
        }))
        .unwrap();
        assert_eq!(f.church_name, "");
        assert_eq!(f.name, "Solo");
        assert_eq!(f.no, "3");
        assert_eq!(f.token, "true");
    }

    #[test]
    fn completed_accepts_strings_through_flatten() {
        let a: EventUpdate =
            serde_json::from_value(json!({ "name": null, "completed": "true" })).unwrap();
        let b: EventUpdate = serde_json::from_value(json!({ "completed": "false" })).unwrap();
        assert!(a.completed);
        assert_eq!(a.fields.name, "");
        assert!(!b.completed);
        assert!(serde_json::from_value::<EventUpdate>(json!({ "completed": [1] })).is_err());
    }

    #[test]
    fn toggled_flips_only_completed() {
        let ev = Event::created(7, st_mary());
        let once = Event::from_update(ev.id, ev.toggled());
        assert!(once.completed);
        assert_eq!(once.fields(), ev.fields());

        let twice = Event::from_update(once.id, once.toggled());
        assert_eq!(twice, ev);
    }
}
