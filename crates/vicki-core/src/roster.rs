use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::patient::Patient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortField {
    Name,
    Age,
    RiskScore,
    LastVisit,
    AppointmentTime,
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "age" => Ok(SortField::Age),
            "risk_score" => Ok(SortField::RiskScore),
            "last_visit" => Ok(SortField::LastVisit),
            "appointment_time" => Ok(SortField::AppointmentTime),
            other => Err(CoreError::InvalidSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(CoreError::InvalidSortOrder(other.to_string())),
        }
    }
}

/// Which column the patient list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Sort-button click: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.order.flipped())
        } else {
            Self::new(field, SortOrder::Asc)
        }
    }

    fn compare(&self, a: &Patient, b: &Patient) -> Ordering {
        let ordering = match self.field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Age => a.age.cmp(&b.age),
            SortField::RiskScore => a.risk.value.total_cmp(&b.risk.value),
            SortField::LastVisit => a.last_visit.cmp(&b.last_visit),
            SortField::AppointmentTime => a.appointment_time.cmp(&b.appointment_time),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RosterQuery {
    pub search: Option<String>,
    pub sort: Option<SortState>,
}

/// The patients a doctor sees in one session, in the order they were loaded.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    patients: Vec<Patient>,
}

impl Roster {
    /// Ids must be unique and risk scores within 0–100. Recorded risk
    /// levels are kept as given.
    pub fn from_patients(patients: Vec<Patient>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for patient in &patients {
            if !seen.insert(patient.id.clone()) {
                return Err(CoreError::DuplicatePatient(patient.id.clone()));
            }
            let value = patient.risk.value;
            if !(0.0..=100.0).contains(&value) {
                return Err(CoreError::InvalidRiskScore {
                    id: patient.id.clone(),
                    value,
                });
            }
        }
        Ok(Self { patients })
    }

    /// Parse a JSON array of patients.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let patients: Vec<Patient> = serde_json::from_str(json)?;
        Self::from_patients(patients)
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Patients whose name or condition contains `term`, ignoring case.
    /// A blank term matches everyone.
    pub fn filter(&self, term: &str) -> Vec<&Patient> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.patients.iter().collect();
        }
        self.patients
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term) || p.condition.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Filter, then sort. The sort is stable, so ties keep roster order.
    pub fn query(&self, query: &RosterQuery) -> Vec<&Patient> {
        let mut matches = self.filter(query.search.as_deref().unwrap_or(""));
        if let Some(sort) = query.sort {
            matches.sort_by(|a, b| sort.compare(a, b));
        }
        matches
    }
}
