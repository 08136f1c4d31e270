//! Common types for the Quarks Casino dice table.
//!
//! Everything a round needs to carry between the input form, the evaluator and the display
//! lives here: validated dice, wagers and player identities, plus the result payload handed to
//! renderers.

pub mod casino;

pub use casino::*;
