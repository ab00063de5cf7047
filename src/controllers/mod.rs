pub mod energy_controller;
pub mod transmission_controller;
pub mod plant_controller;
pub mod report_controller;
pub mod export_controller;
pub mod system_controller;
