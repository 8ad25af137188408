//! Effluent Logic - Wastewater treatment sizing and costing engine
//!
//! This crate sizes dissolved air flotation (DAF) units and gravity
//! clarifiers for industrial effluent, estimates chemical, compliance and
//! biological-load figures, and stores each calculation as a report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
