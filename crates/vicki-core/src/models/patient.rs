use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A patient on the doctor's roster for the day, in the dashboard's record
/// shape (`appointmentTime: "9:00 AM"`, `riskScore: {..}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub condition: String,
    #[serde(with = "appointment_time")]
    #[ts(type = "string")]
    pub appointment_time: Time,
    #[serde(default)]
    pub image: Option<String>,
    pub last_visit: Date,
    #[serde(rename = "riskScore")]
    pub risk: RiskSnapshot,
}

/// Appointment times on the wire read `9:00 AM`. `HH:MM[:SS]` is also
/// accepted when loading. Written to the minute.
mod appointment_time {
    use jiff::civil::Time;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        let hour = match time.hour() % 12 {
            0 => 12,
            h => h,
        };
        let meridiem = if time.hour() < 12 { "AM" } else { "PM" };
        serializer.collect_str(&format_args!("{hour}:{:02} {meridiem}", time.minute()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid appointment time \"{text}\"")))
    }

    fn parse(text: &str) -> Option<Time> {
        let text = text.trim().to_ascii_uppercase();
        let (clock, pm) = if let Some(clock) = text.strip_suffix("AM") {
            (clock.trim_end(), false)
        } else if let Some(clock) = text.strip_suffix("PM") {
            (clock.trim_end(), true)
        } else {
            return text.parse().ok();
        };

        let (hour, minute) = clock.split_once(':')?;
        let hour: i8 = hour.parse().ok()?;
        let minute: i8 = minute.parse().ok()?;
        if !(1..=12).contains(&hour) {
            return None;
        }
        let hour = hour % 12 + if pm { 12 } else { 0 };
        Time::new(hour, minute, 0, 0).ok()
    }
}

/// The overall risk indicator shown on a patient card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskSnapshot {
    /// 0–100.
    pub value: f64,
    pub level: RiskLevel,
    pub trend: RiskTrend,
}

impl RiskSnapshot {
    /// Snapshot whose level is derived from `value`. Snapshots loaded from a
    /// roster keep the level they were recorded with.
    pub fn new(value: f64, trend: RiskTrend) -> Self {
        let value = value.clamp(0.0, 100.0);
        Self {
            value,
            level: RiskLevel::from_value(value),
            trend,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_value(value: f64) -> Self {
        if value < 40.0 {
            RiskLevel::Low
        } else if value < 70.0 {
            RiskLevel::Medium
        } else if value < 90.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTrend {
    Improving,
    Stable,
    Worsening,
}
