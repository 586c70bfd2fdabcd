use std::ops::RangeInclusive;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::{Field, FieldIssue, ValidationError};

/// Ages the equations are defined for.
pub const AGE_RANGE: RangeInclusive<u32> = 40..=75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Sex {
    #[serde(alias = "Male")]
    Male,
    #[serde(alias = "Female")]
    Female,
}

impl Sex {
    /// Parse a form label ("Male", "female", ...). Case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Race {
    #[serde(alias = "White")]
    White,
    #[serde(alias = "African American", alias = "african_american")]
    AfricanAmerican,
    #[serde(alias = "Other")]
    Other,
}

impl Race {
    /// Parse a form label. Ignores case, spaces, hyphens and underscores,
    /// so "African American" and "africanAmerican" both match.
    pub fn from_label(label: &str) -> Option<Self> {
        let key: String = label
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "white" => Some(Race::White),
            "africanamerican" => Some(Race::AfricanAmerican),
            "other" => Some(Race::Other),
            _ => None,
        }
    }
}

/// Risk factors as they arrive from a caller. Required fields may be absent;
/// [`RiskInput::validate`] decides whether a computation can proceed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskInput {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sex: Option<Sex>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub total_cholesterol: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub hdl_cholesterol: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub systolic_blood_pressure: Option<f64>,
    #[serde(default)]
    pub is_smoker: bool,
    #[serde(default)]
    pub has_diabetes: bool,
    #[serde(default)]
    pub on_hypertension_treatment: bool,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub race: Option<Race>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrBlank<T> {
    Value(T),
    Text(String),
}

/// An untouched form input arrives as `""`. Treat it, and whitespace-only
/// text, as absent so validation reports the field as missing.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<OrBlank<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(OrBlank::Value(value)) => Ok(Some(value)),
        Some(OrBlank::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(OrBlank::Text(text)) => Err(de::Error::custom(format!("unexpected value \"{text}\""))),
    }
}

impl RiskInput {
    /// Check every field and collect all problems at once, so the form can
    /// highlight each offending input in a single round trip.
    pub fn validate(&self) -> Result<RiskFactors, ValidationError> {
        let mut issues = Vec::new();

        let age = match self.age {
            None => {
                issues.push(FieldIssue::missing(Field::Age));
                None
            }
            Some(age) if !AGE_RANGE.contains(&age) => {
                issues.push(FieldIssue::invalid(
                    Field::Age,
                    format!(
                        "must be between {} and {} (got {age})",
                        AGE_RANGE.start(),
                        AGE_RANGE.end()
                    ),
                ));
                None
            }
            Some(age) => Some(age),
        };

        let sex = required(&mut issues, Field::Sex, self.sex);
        let total_cholesterol =
            positive(&mut issues, Field::TotalCholesterol, self.total_cholesterol);
        let hdl_cholesterol = positive(&mut issues, Field::HdlCholesterol, self.hdl_cholesterol);
        let systolic_blood_pressure = positive(
            &mut issues,
            Field::SystolicBloodPressure,
            self.systolic_blood_pressure,
        );
        let race = required(&mut issues, Field::Race, self.race);

        match (
            age,
            sex,
            total_cholesterol,
            hdl_cholesterol,
            systolic_blood_pressure,
            race,
        ) {
            (Some(age), Some(sex), Some(tc), Some(hdl), Some(sbp), Some(race))
                if issues.is_empty() =>
            {
                Ok(RiskFactors {
                    age,
                    sex,
                    total_cholesterol: tc,
                    hdl_cholesterol: hdl,
                    systolic_blood_pressure: sbp,
                    is_smoker: self.is_smoker,
                    has_diabetes: self.has_diabetes,
                    on_hypertension_treatment: self.on_hypertension_treatment,
                    race,
                })
            }
            _ => Err(ValidationError::new(issues)),
        }
    }
}

fn required<T>(issues: &mut Vec<FieldIssue>, field: Field, value: Option<T>) -> Option<T> {
    if value.is_none() {
        issues.push(FieldIssue::missing(field));
    }
    value
}

fn positive(issues: &mut Vec<FieldIssue>, field: Field, value: Option<f64>) -> Option<f64> {
    match value {
        None => {
            issues.push(FieldIssue::missing(field));
            None
        }
        Some(v) if !v.is_finite() || v <= 0.0 => {
            issues.push(FieldIssue::invalid(field, format!("must be greater than zero (got {v})")));
            None
        }
        Some(v) => Some(v),
    }
}

/// A complete, validated set of risk factors. Only obtainable through
/// [`RiskInput::validate`], so every value is in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskFactors {
    pub(crate) age: u32,
    pub(crate) sex: Sex,
    pub(crate) total_cholesterol: f64,
    pub(crate) hdl_cholesterol: f64,
    pub(crate) systolic_blood_pressure: f64,
    pub(crate) is_smoker: bool,
    pub(crate) has_diabetes: bool,
    pub(crate) on_hypertension_treatment: bool,
    pub(crate) race: Race,
}

impl RiskFactors {
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn race(&self) -> Race {
        self.race
    }
}
