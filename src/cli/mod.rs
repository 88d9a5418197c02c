//! Command-line interface module.
//!
//! Provides argument parsing and turns the arguments into a [`Query`].
//!
//! [`Query`]: crate::state::Query

pub mod args;
