//! Registration form: six required text inputs.

use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventFields};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ChurchName,
    Name,
    No,
    Token,
    Author,
    MobileNo,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::ChurchName,
        FormField::Name,
        FormField::No,
        FormField::Token,
        FormField::Author,
        FormField::MobileNo,
    ];

    /// Wire / column name.
    pub fn key(self) -> &'static str {
        match self {
            FormField::ChurchName => "churchName",
            FormField::Name => "name",
            FormField::No => "no",
            FormField::Token => "token",
            FormField::Author => "author",
            FormField::MobileNo => "mobileNo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::ChurchName => "Church Name",
            FormField::Name => "Name",
            FormField::No => "No",
            FormField::Token => "Token",
            FormField::Author => "Author",
            FormField::MobileNo => "Mobile No",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "churchname" | "church" => Ok(FormField::ChurchName),
            "name" => Ok(FormField::Name),
            "no" | "number" => Ok(FormField::No),
            "token" => Ok(FormField::Token),
            "author" => Ok(FormField::Author),
            "mobileno" | "mobile" => Ok(FormField::MobileNo),
            other => Err(AppError::Other(format!("Unknown form field '{other}'"))),
        }
    }
}

/// Fails on the first blank field, in form order.
pub fn validate(fields: &EventFields) -> AppResult<()> {
    for field in FormField::ALL {
        if field_ref(fields, field).trim().is_empty() {
            return Err(AppError::MissingField(field.key()));
        }
    }
    Ok(())
}

fn field_ref(fields: &EventFields, field: FormField) -> &String {
    match field {
        FormField::ChurchName => &fields.church_name,
        FormField::Name => &fields.name,
        FormField::No => &fields.no,
        FormField::Token => &fields.token,
        FormField::Author => &fields.author,
        FormField::MobileNo => &fields.mobile_no,
    }
}

fn field_mut(fields: &mut EventFields, field: FormField) -> &mut String {
    match field {
        FormField::ChurchName => &mut fields.church_name,
        FormField::Name => &mut fields.name,
        FormField::No => &mut fields.no,
        FormField::Token => &mut fields.token,
        FormField::Author => &mut fields.author,
        FormField::MobileNo => &mut fields.mobile_no,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    fields: EventFields,
}

impl EventForm {
    pub fn get(&self, field: FormField) -> &str {
        field_ref(&self.fields, field)
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *field_mut(&mut self.fields, field) = value.into();
    }

    /// Load an existing record's text fields into the form.
    pub fn load(&mut self, ev: &Event) {
        self.fields = ev.fields();
    }

    pub fn clear(&mut self) {
        self.fields = EventFields::default();
    }

    pub fn fields(&self) -> &EventFields {
        &self.fields
    }

    pub fn validate(&self) -> AppResult<&EventFields> {
        validate(&self.fields)?;
        Ok(&self.fields)
    }
}
