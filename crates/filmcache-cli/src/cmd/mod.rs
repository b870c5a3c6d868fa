//! Command implementations

pub mod check;
pub mod clear;
pub mod completions;
pub mod menu;
