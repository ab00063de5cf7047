use utoipa::OpenApi;
use crate::controllers::{
    energy_controller, export_controller, plant_controller, report_controller, system_controller,
    transmission_controller,
};
use crate::models::{energy, export, plants, reports, status, transmission};
use crate::config;

#[derive(OpenApi)]
#[openapi(
    paths(
        energy_controller::get_energy,
        transmission_controller::list_transmission,
        transmission_controller::get_transmission_line,
        plant_controller::list_plants,
        plant_controller::get_plant,
        report_controller::list_reports,
        report_controller::get_report,
        report_controller::post_report_action,
        export_controller::export_dataset,
        system_controller::get_system_info
    ),
    components(
        schemas(
            status::OperatingStatus,
            energy::GenerationReading,
            energy::EnergySource,
            energy::WeeklyDemand,
            energy::RegionalConsumption,
            energy::EnergySummary,
            transmission::TransmissionLine,
            transmission::Interchange,
            transmission::TransmissionSummary,
            plants::SolarPlant,
            plants::SolarHourly,
            plants::SolarSummary,
            plants::WindFarm,
            plants::WindHourly,
            plants::WindSummary,
            reports::Report,
            reports::ReportType,
            reports::Kpi,
            reports::Annotation,
            reports::ReportsSummary,
            report_controller::ReportActionRequest,
            export::Dataset,
            config::ServerConfig,
            system_controller::SystemInfo
        )
    ),
    tags(
        (name = "ons-dashboard-api", description = "ONS energy dashboard data API")
    )
)]
pub struct ApiDoc;
