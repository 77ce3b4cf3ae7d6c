//! Utilities module
//! This module contains the formatting helpers of the console reports.

mod formatting;

pub use formatting::*;
