//! # Inventory Records
//!
//! The domain entity and its boundary variants. Validation happens here,
//! before any store call runs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ValidationError;

/// Oldest accepted model year.
pub const YEAR_MIN: i64 = 1950;

/// Newest accepted model year.
pub const YEAR_MAX: i64 = 2035;

/// Opaque row identifier assigned by the external store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Value);

/// A stored inventory row as returned by the external store.
///
/// Search reads do not select the id column, so `id` is only present on
/// rows returned from an insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub make: String,
    pub model: String,
    pub year: i64,
    pub colour: Option<String>,
    pub state: String,
    pub suburb: Option<String>,
    pub wrecker_name: String,
    pub contact: String,
}

/// A validated row ready to insert. Same shape as [`InventoryRecord`]
/// minus the id, with `year` already settled into range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInventoryRow {
    pub make: String,
    pub model: String,
    pub year: i64,
    pub colour: Option<String>,
    pub state: String,
    pub suburb: Option<String>,
    pub wrecker_name: String,
    pub contact: String,
}

/// Raw create payload as received over HTTP.
///
/// Every field is optional at this stage; `year` may arrive as a JSON
/// number or a numeric string. [`CreateRequest::validate`] settles the
/// payload into a [`NewInventoryRow`] or rejects it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRequest {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
    #[serde(default)]
    pub wrecker_name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

impl CreateRequest {
    /// Validate the payload into an insertable row.
    ///
    /// Required fields must be present and non-empty; `year` must parse as
    /// an integer in [`YEAR_MIN`]..=[`YEAR_MAX`]. Empty-string `colour` and
    /// `suburb` are normalised to absent so the store sees null, not "".
    pub fn validate(self) -> Result<NewInventoryRow, ValidationError> {
        let make = required(self.make)?;
        let model = required(self.model)?;
        let state = required(self.state)?;
        let wrecker_name = required(self.wrecker_name)?;
        let contact = required(self.contact)?;

        let year_raw = match self.year {
            Some(Value::Null) | None => return Err(ValidationError::MissingRequiredFields),
            Some(Value::String(s)) if s.is_empty() => {
                return Err(ValidationError::MissingRequiredFields)
            }
            Some(v) => v,
        };
        let year = parse_year(&year_raw).ok_or(ValidationError::InvalidYear)?;
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(ValidationError::InvalidYear);
        }

        Ok(NewInventoryRow {
            make,
            model,
            year,
            colour: optional(self.colour),
            state,
            suburb: optional(self.suburb),
            wrecker_name,
            contact,
        })
    }
}

fn required(field: Option<String>) -> Result<String, ValidationError> {
    match field {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ValidationError::MissingRequiredFields),
    }
}

fn optional(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Accept a JSON integer or a numeric string.
fn parse_year(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// The make/model/state triple narrowing a search. Ephemeral, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub make: String,
    pub model: String,
    pub state: String,
}

impl SearchFilter {
    /// Build a filter from raw query parameters.
    ///
    /// All three must be present and non-empty.
    pub fn from_params(
        make: Option<String>,
        model: Option<String>,
        state: Option<String>,
    ) -> Result<Self, ValidationError> {
        match (make, model, state) {
            (Some(make), Some(model), Some(state))
                if !make.is_empty() && !model.is_empty() && !state.is_empty() =>
            {
                Ok(Self { make, model, state })
            }
            _ => Err(ValidationError::MissingSearchParams),
        }
    }
}

/// Display shape returned by search: location and contact are flattened
/// into single strings, absent colour becomes "".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub make: String,
    pub model: String,
    pub year: i64,
    pub colour: String,
    pub location: String,
    pub contact: String,
}

impl From<InventoryRecord> for Listing {
    fn from(row: InventoryRecord) -> Self {
        let location = match row.suburb.as_deref() {
            Some(suburb) if !suburb.is_empty() => format!("{} - {}", row.state, suburb),
            _ => row.state.clone(),
        };
        Self {
            location,
            contact: format!("{} - {}", row.wrecker_name, row.contact),
            colour: row.colour.unwrap_or_default(),
            make: row.make,
            model: row.model,
            year: row.year,
        }
    }
}
