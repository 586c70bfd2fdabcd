use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::input::{Race, RiskFactors, Sex};

/// Flat multiplier applied to the linear score for African American
/// patients. No other race adjustment exists.
pub const RACE_MULTIPLIER: f64 = 1.2;

/// Coefficients of one sex-specific log-linear equation.
///
/// `ln_hdl_cholesterol` is stored with its sign, so every term is added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Coefficients {
    pub ln_age: f64,
    pub ln_total_cholesterol: f64,
    pub ln_hdl_cholesterol: f64,
    pub smoker: f64,
    pub diabetes: f64,
    /// Multiplies ln(systolic BP) when the patient is on treatment.
    pub ln_treated_sbp: f64,
    /// Multiplies ln(systolic BP) when the patient is untreated.
    pub ln_untreated_sbp: f64,
}

pub const MALE: Coefficients = Coefficients {
    ln_age: 12.344,
    ln_total_cholesterol: 11.853,
    ln_hdl_cholesterol: -7.99,
    smoker: 1.764,
    diabetes: 0.661,
    ln_treated_sbp: 2.019,
    ln_untreated_sbp: 1.809,
};

pub const FEMALE: Coefficients = Coefficients {
    ln_age: 17.114,
    ln_total_cholesterol: 0.94,
    ln_hdl_cholesterol: -18.92,
    smoker: 2.721,
    diabetes: 0.879,
    ln_treated_sbp: 1.797,
    ln_untreated_sbp: 1.764,
};

impl Coefficients {
    pub fn for_sex(sex: Sex) -> &'static Coefficients {
        match sex {
            Sex::Male => &MALE,
            Sex::Female => &FEMALE,
        }
    }

    /// The sex-specific score, before any race adjustment.
    pub fn score(&self, factors: &RiskFactors) -> f64 {
        let smoker = if factors.is_smoker { self.smoker } else { 0.0 };
        let diabetes = if factors.has_diabetes { self.diabetes } else { 0.0 };
        let sbp = if factors.on_hypertension_treatment {
            self.ln_treated_sbp
        } else {
            self.ln_untreated_sbp
        };

        self.ln_age * f64::from(factors.age).ln()
            + self.ln_total_cholesterol * factors.total_cholesterol.ln()
            + self.ln_hdl_cholesterol * factors.hdl_cholesterol.ln()
            + smoker
            + diabetes
            + sbp * factors.systolic_blood_pressure.ln()
    }
}

/// Both coefficient sets and the race multiplier, for clients that want to
/// show how a score was derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CoefficientTable {
    pub male: Coefficients,
    pub female: Coefficients,
    pub race_multiplier: f64,
}

pub fn coefficient_table() -> CoefficientTable {
    CoefficientTable {
        male: MALE,
        female: FEMALE,
        race_multiplier: RACE_MULTIPLIER,
    }
}

/// Logistic transform of a linear score into a probability in [0, 1].
///
/// Equal to `exp(s) / (1 + exp(s))` but evaluated so that `exp` never
/// overflows, keeping large scores at 1.0 instead of NaN.
pub fn logistic(score: f64) -> f64 {
    if score >= 0.0 {
        1.0 / (1.0 + (-score).exp())
    } else {
        let e = score.exp();
        e / (1.0 + e)
    }
}

/// Score to display percentage: logistic, scaled to 0–100, rounded to two
/// decimals.
pub fn to_percentage(score: f64) -> f64 {
    let percentage = (100.0 * logistic(score)).clamp(0.0, 100.0);
    (percentage * 100.0).round() / 100.0
}

/// ACC/AHA 10-year ASCVD bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    /// Below 5%.
    Low,
    /// 5% to below 7.5%.
    Borderline,
    /// 7.5% to below 20%.
    Intermediate,
    /// 20% and above.
    High,
}

impl RiskCategory {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 5.0 {
            RiskCategory::Low
        } else if percentage < 7.5 {
            RiskCategory::Borderline
        } else if percentage < 20.0 {
            RiskCategory::Intermediate
        } else {
            RiskCategory::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Borderline => "borderline",
            RiskCategory::Intermediate => "intermediate",
            RiskCategory::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskResult {
    /// Linear score after the race adjustment, before the logistic transform.
    pub score: f64,
    /// Estimated 10-year event probability, 0–100, two decimals.
    pub percentage: f64,
    pub category: RiskCategory,
}

impl RiskResult {
    pub fn headline(&self) -> String {
        format!("Your 10-year risk is approximately {:.2}%", self.percentage)
    }
}

impl RiskFactors {
    /// The linear score with the race adjustment applied.
    pub fn linear_score(&self) -> f64 {
        let score = Coefficients::for_sex(self.sex).score(self);
        match self.race {
            Race::AfricanAmerican => score * RACE_MULTIPLIER,
            Race::White | Race::Other => score,
        }
    }

    pub fn compute(&self) -> RiskResult {
        let score = self.linear_score();
        let percentage = to_percentage(score);
        RiskResult {
            score,
            percentage,
            category: RiskCategory::from_percentage(percentage),
        }
    }
}
