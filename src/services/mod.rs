pub mod filter;
pub mod aggregate;
pub mod repository;
pub mod energy_repository;
pub mod transmission_repository;
pub mod plant_repository;
pub mod report_repository;
pub mod exporter;
