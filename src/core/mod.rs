//! Core lookup logic.
//!
//! [`lookup`] drives the forward and reverse resolutions; [`format`] renders
//! the resulting endpoints as output lines.

pub mod format;
pub mod lookup;
