//! proscore-core
//!
//! Pure domain types for patient-reported-outcome scoring. No scoring logic
//! lives here: this is the shared vocabulary between the scoring engine and
//! whatever stores submissions and serves results.

pub mod models;
