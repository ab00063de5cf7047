pub mod record;
pub mod status;
pub mod energy;
pub mod transmission;
pub mod plants;
pub mod reports;
pub mod export;
