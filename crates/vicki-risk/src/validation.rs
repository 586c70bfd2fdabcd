use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The nine fields of the risk form, in the order the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Field {
    Age,
    Sex,
    TotalCholesterol,
    HdlCholesterol,
    SystolicBloodPressure,
    IsSmoker,
    HasDiabetes,
    OnHypertensionTreatment,
    Race,
}

impl Field {
    /// Wire name of the field, as the dashboard form names it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Sex => "sex",
            Field::TotalCholesterol => "totalCholesterol",
            Field::HdlCholesterol => "hdlCholesterol",
            Field::SystolicBloodPressure => "systolicBloodPressure",
            Field::IsSmoker => "isSmoker",
            Field::HasDiabetes => "hasDiabetes",
            Field::OnHypertensionTreatment => "onHypertensionTreatment",
            Field::Race => "race",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
#[ts(export)]
pub enum Problem {
    /// The field was absent or blank.
    Missing,
    /// The field was present but unusable. Carries a short reason.
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldIssue {
    pub field: Field,
    pub problem: Problem,
}

impl FieldIssue {
    pub fn missing(field: Field) -> Self {
        Self {
            field,
            problem: Problem::Missing,
        }
    }

    pub fn invalid(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            problem: Problem::Invalid(reason.into()),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            Problem::Missing => write!(f, "{} is required", self.field),
            Problem::Invalid(reason) => write!(f, "{} {}", self.field, reason),
        }
    }
}

/// Every problem found in one risk request. Validation only builds one
/// when at least one field is at fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Issues are kept in form order so messages read top to bottom.
    pub(crate) fn new(mut issues: Vec<FieldIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        issues.sort_by_key(|issue| issue.field);
        Self { issues }
    }

    pub fn fields(&self) -> Vec<Field> {
        self.issues.iter().map(|issue| issue.field).collect()
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        self.issues
            .iter()
            .filter(|issue| issue.problem == Problem::Missing)
            .map(|issue| issue.field)
            .collect()
    }

    pub fn mentions(&self, field: Field) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.issues.iter().map(ToString::to_string).collect();
        write!(f, "invalid risk factors: {}", parts.join("; "))
    }
}
