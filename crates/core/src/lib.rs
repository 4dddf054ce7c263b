//! Holiday resolution and business-day calculation.
//!
//! This crate is the functional core of feiertag: it loads per-country
//! holiday datasets, narrows them to a region and answers calendar queries.
//! It performs no network I/O and needs no async runtime.

pub mod calendar;
pub mod serde;
pub mod store;
