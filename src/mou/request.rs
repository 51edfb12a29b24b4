use crate::error::ValidationError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// Partnership types offered by the intake form. The field itself is free text.
pub const PARTNERSHIP_TYPES: [&str; 3] = ["All", "Internship", "Research"];

/// Request body for `POST /api/generate-draft/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouRequest {
    pub company_name: String,
    pub objective: String,
    pub scope: String,
    pub partnership_type: String,
    /// Serialized as an ISO date; omitted from the body when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mou_date: Option<NaiveDate>,
}

/// One editable field of a [`MouRequest`], named as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum MouField {
    CompanyName,
    Objective,
    Scope,
    PartnershipType,
    MouDate,
}

/// New value for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(Option<NaiveDate>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(Some(value))
    }
}

/// Holds the MoU request while the user fills it in.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    request: MouRequest,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &MouRequest {
        &self.request
    }

    pub fn into_request(self) -> MouRequest {
        self.request
    }

    /// Replace one field, leaving every other field as it was.
    ///
    /// A text value given for `mou_date` is parsed as `YYYY-MM-DD`; an empty
    /// string clears the date. Dates below [`date_floor`] are accepted as-is.
    pub fn set_field(
        &mut self,
        field: MouField,
        value: impl Into<FieldValue>,
    ) -> Result<(), ValidationError> {
        let value = value.into();
        match field {
            MouField::MouDate => {
                self.request.mou_date = match value {
                    FieldValue::Date(date) => date,
                    FieldValue::Text(text) => parse_mou_date(&text)?,
                };
            }
            MouField::CompanyName => self.request.company_name = value.into_text(),
            MouField::Objective => self.request.objective = value.into_text(),
            MouField::Scope => self.request.scope = value.into_text(),
            MouField::PartnershipType => self.request.partnership_type = value.into_text(),
        }
        Ok(())
    }

    /// Same as [`Self::set_field`], keyed by the wire name of the field.
    pub fn set_field_by_name(&mut self, name: &str, value: &str) -> Result<(), ValidationError> {
        let field = MouField::from_str(name).map_err(|_| ValidationError::UnknownField {
            name: name.to_string(),
        })?;
        self.set_field(field, value)
    }
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Date(date) => date.map(|d| d.to_string()).unwrap_or_default(),
        }
    }
}

/// Earliest date the intake form suggests: today, local time.
pub fn date_floor() -> NaiveDate {
    Local::now().date_naive()
}

/// Presentation hint only; the request keeps whatever date it was given.
pub fn is_below_floor(date: NaiveDate, floor: NaiveDate) -> bool {
    date < floor
}

pub fn parse_mou_date(value: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate {
            value: value.to_string(),
        })
}
