//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReportRepository` - Persistence of calculation reports

mod report_repository;

pub use report_repository::ReportRepository;
