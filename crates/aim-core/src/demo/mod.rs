//! Demo request form
//!
//! The record a prospect fills in, the tagged field updates the form
//! controls emit, and the submission lifecycle around them.

mod backend;
mod form;
#[cfg(feature = "runtime")]
mod session;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

pub use backend::{SubmissionBackend, SUBMIT_DELAY};
pub use form::{DemoRequestForm, SubmissionStatus};
#[cfg(feature = "runtime")]
pub use backend::SimulatedBackend;
#[cfg(feature = "runtime")]
pub use session::FormSession;

/// Size bracket offered by the "Number of Production Lines" select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductionLines {
    #[serde(rename = "1-10")]
    UpTo10,
    #[serde(rename = "11-50")]
    UpTo50,
    #[serde(rename = "51-200")]
    UpTo200,
    #[serde(rename = "201-1000")]
    UpTo1000,
    #[serde(rename = "1000+")]
    Over1000,
}

impl ProductionLines {
    pub const ALL: [ProductionLines; 5] = [
        ProductionLines::UpTo10,
        ProductionLines::UpTo50,
        ProductionLines::UpTo200,
        ProductionLines::UpTo1000,
        ProductionLines::Over1000,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductionLines::UpTo10 => "1-10",
            ProductionLines::UpTo50 => "11-50",
            ProductionLines::UpTo200 => "51-200",
            ProductionLines::UpTo1000 => "201-1000",
            ProductionLines::Over1000 => "1000+",
        }
    }
}

impl fmt::Display for ProductionLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductionLines {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductionLines::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| CoreError::InvalidState(format!("unknown production line range: {}", s)))
    }
}

/// Field identifiers, matching the `name` attribute of each form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoField {
    Name,
    Email,
    Company,
    ProductionLines,
    Message,
}

impl DemoField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoField::Name => "name",
            DemoField::Email => "email",
            DemoField::Company => "company",
            DemoField::ProductionLines => "productionLines",
            DemoField::Message => "message",
        }
    }
}

impl FromStr for DemoField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(DemoField::Name),
            "email" => Ok(DemoField::Email),
            "company" => Ok(DemoField::Company),
            "productionLines" | "production_lines" => Ok(DemoField::ProductionLines),
            "message" => Ok(DemoField::Message),
            other => Err(CoreError::InvalidState(format!("unknown form field: {}", other))),
        }
    }
}

/// A single field edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Company(String),
    ProductionLines(Option<ProductionLines>),
    Message(String),
}

impl FieldUpdate {
    /// Build an update from a raw control value.
    ///
    /// The empty string on the production-lines select is the
    /// "Select range" placeholder and clears the field.
    pub fn from_input(field: DemoField, value: String) -> CoreResult<Self> {
        Ok(match field {
            DemoField::Name => FieldUpdate::Name(value),
            DemoField::Email => FieldUpdate::Email(value),
            DemoField::Company => FieldUpdate::Company(value),
            DemoField::ProductionLines if value.is_empty() => FieldUpdate::ProductionLines(None),
            DemoField::ProductionLines => FieldUpdate::ProductionLines(Some(value.parse()?)),
            DemoField::Message => FieldUpdate::Message(value),
        })
    }

    pub fn field(&self) -> DemoField {
        match self {
            FieldUpdate::Name(_) => DemoField::Name,
            FieldUpdate::Email(_) => DemoField::Email,
            FieldUpdate::Company(_) => DemoField::Company,
            FieldUpdate::ProductionLines(_) => DemoField::ProductionLines,
            FieldUpdate::Message(_) => DemoField::Message,
        }
    }
}

/// Demo request as entered by the prospect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub production_lines: Option<ProductionLines>,
    pub message: String,
}

impl DemoRequest {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(value) => self.name = value,
            FieldUpdate::Email(value) => self.email = value,
            FieldUpdate::Company(value) => self.company = value,
            FieldUpdate::ProductionLines(value) => self.production_lines = value,
            FieldUpdate::Message(value) => self.message = value,
        }
    }

    /// Raw value of a field as the form control displays it
    pub fn value_of(&self, field: DemoField) -> &str {
        match field {
            DemoField::Name => &self.name,
            DemoField::Email => &self.email,
            DemoField::Company => &self.company,
            DemoField::ProductionLines => self.production_lines.map(|r| r.as_str()).unwrap_or(""),
            DemoField::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == DemoRequest::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_parse() {
        for range in ProductionLines::ALL {
            assert_eq!(range.as_str().parse::<ProductionLines>().unwrap(), range);
        }
        assert!("12".parse::<ProductionLines>().is_err());
    }

    #[test]
    fn test_production_lines_serde_uses_labels() {
        let json = serde_json::to_string(&ProductionLines::Over1000).unwrap();
        assert_eq!(json, "\"1000+\"");
    }

    #[test]
    fn test_field_names() {
        assert_eq!("productionLines".parse::<DemoField>().unwrap(), DemoField::ProductionLines);
        assert_eq!("email".parse::<DemoField>().unwrap(), DemoField::Email);
        assert!("phone".parse::<DemoField>().is_err());
    }

    #[test]
    fn test_placeholder_clears_production_lines() {
        let mut request = DemoRequest::default();
        request.apply(FieldUpdate::from_input(DemoField::ProductionLines, "51-200".into()).unwrap());
        assert_eq!(request.production_lines, Some(ProductionLines::UpTo200));

        request.apply(FieldUpdate::from_input(DemoField::ProductionLines, String::new()).unwrap());
        assert_eq!(request.production_lines, None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut request = DemoRequest::default();
        request.apply(FieldUpdate::Name("Ada".into()));
        request.apply(FieldUpdate::Email("a@b.com".into()));
        request.apply(FieldUpdate::Email("c@d.com".into()));

        assert_eq!(request.email, "c@d.com");
        assert_eq!(request.name, "Ada");
        assert_eq!(request.company, "");
        assert_eq!(request.production_lines, None);
        assert_eq!(request.message, "");
    }

    #[test]
    fn test_value_of_matches_field() {
        let mut request = DemoRequest::default();
        request.apply(FieldUpdate::ProductionLines(Some(ProductionLines::UpTo10)));
        assert_eq!(request.value_of(DemoField::ProductionLines), "1-10");
        assert_eq!(request.value_of(DemoField::Company), "");
    }
}
