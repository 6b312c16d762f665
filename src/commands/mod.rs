//! Command implementations for the Survivor stats CLI

pub mod stats;
