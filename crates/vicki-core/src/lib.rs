//! vicki-core
//!
//! Pure domain types shared by the Vicki services: patients, their risk
//! snapshots, and the in-memory roster the dashboard searches and sorts.

pub mod error;
pub mod models;
pub mod roster;
