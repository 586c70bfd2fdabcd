use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::input::{Race, RiskInput, Sex};
use crate::scoring::RiskResult;
use crate::validation::{Field, FieldIssue, ValidationError};

/// The calculator form as the dashboard holds it: every field is a string,
/// yes/no questions default to "No" and the rest start blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct RiskForm {
    pub age: String,
    pub diabetes: String,
    pub sex: String,
    pub smoker: String,
    pub total_cholesterol: String,
    pub hdl_cholesterol: String,
    pub systolic_blood_pressure: String,
    pub treatment_for_hypertension: String,
    pub race: String,
}

impl Default for RiskForm {
    fn default() -> Self {
        Self {
            age: String::new(),
            diabetes: "No".to_string(),
            sex: String::new(),
            smoker: "No".to_string(),
            total_cholesterol: String::new(),
            hdl_cholesterol: String::new(),
            systolic_blood_pressure: String::new(),
            treatment_for_hypertension: "No".to_string(),
            race: String::new(),
        }
    }
}

impl RiskForm {
    /// Convert to a [`RiskInput`]. Blank fields become absent; only values
    /// that cannot be read at all are reported here.
    pub fn to_input(&self) -> Result<RiskInput, ValidationError> {
        let (input, issues) = self.parse();
        if issues.is_empty() {
            Ok(input)
        } else {
            Err(ValidationError::new(issues))
        }
    }

    /// Parse, validate and compute in one step, reporting unreadable and
    /// missing fields together.
    pub fn compute(&self) -> Result<RiskResult, ValidationError> {
        let (input, mut issues) = self.parse();
        match input.validate() {
            Ok(factors) if issues.is_empty() => Ok(factors.compute()),
            Ok(_) => Err(ValidationError::new(issues)),
            Err(err) => {
                for issue in err.issues {
                    // An unreadable field also shows up as missing; keep the
                    // more specific complaint.
                    if !issues.iter().any(|seen| seen.field == issue.field) {
                        issues.push(issue);
                    }
                }
                Err(ValidationError::new(issues))
            }
        }
    }

    fn parse(&self) -> (RiskInput, Vec<FieldIssue>) {
        let mut issues = Vec::new();

        let age = blank_or(&self.age).and_then(|raw| match raw.parse::<u32>() {
            Ok(age) => Some(age),
            Err(_) => {
                issues.push(FieldIssue::invalid(Field::Age, "is not a whole number"));
                None
            }
        });

        let sex = blank_or(&self.sex).and_then(|raw| {
            let sex = Sex::from_label(raw);
            if sex.is_none() {
                issues.push(FieldIssue::invalid(Field::Sex, format!("has unknown value '{raw}'")));
            }
            sex
        });

        let total_cholesterol = number(&mut issues, Field::TotalCholesterol, &self.total_cholesterol);
        let hdl_cholesterol = number(&mut issues, Field::HdlCholesterol, &self.hdl_cholesterol);
        let systolic_blood_pressure = number(
            &mut issues,
            Field::SystolicBloodPressure,
            &self.systolic_blood_pressure,
        );

        let is_smoker = yes_no(&mut issues, Field::IsSmoker, &self.smoker);
        let has_diabetes = yes_no(&mut issues, Field::HasDiabetes, &self.diabetes);
        let on_hypertension_treatment = yes_no(
            &mut issues,
            Field::OnHypertensionTreatment,
            &self.treatment_for_hypertension,
        );

        let race = blank_or(&self.race).and_then(|raw| {
            let race = Race::from_label(raw);
            if race.is_none() {
                issues.push(FieldIssue::invalid(Field::Race, format!("has unknown value '{raw}'")));
            }
            race
        });

        let input = RiskInput {
            age,
            sex,
            total_cholesterol,
            hdl_cholesterol,
            systolic_blood_pressure,
            is_smoker,
            has_diabetes,
            on_hypertension_treatment,
            race,
        };
        (input, issues)
    }
}

fn blank_or(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn number(issues: &mut Vec<FieldIssue>, field: Field, raw: &str) -> Option<f64> {
    let raw = blank_or(raw)?;
    match raw.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            issues.push(FieldIssue::invalid(field, "is not a number"));
            None
        }
    }
}

fn yes_no(issues: &mut Vec<FieldIssue>, field: Field, raw: &str) -> bool {
    let Some(raw) = blank_or(raw) else {
        return false;
    };
    match raw.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => true,
        "no" | "n" | "false" => false,
        _ => {
            issues.push(FieldIssue::invalid(field, "must be Yes or No"));
            false
        }
    }
}
