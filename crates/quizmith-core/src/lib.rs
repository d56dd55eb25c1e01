//! quizmith-core — Domain model, scoring engine, and validation.
//!
//! This crate defines the fundamental data model, the canonical scoring
//! policy, and the import/export bundle handling that the rest of the
//! quizmith workspace builds on.

pub mod error;
pub mod exchange;
pub mod model;
pub mod scoring;
pub mod statistics;
pub mod validate;
