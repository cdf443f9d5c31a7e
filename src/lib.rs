pub mod analytics;
pub mod configuration;
pub mod domain;
pub mod lead_form;
pub mod relay_client;
pub mod routes;
pub mod startup;
pub mod submission_status;
pub mod telemetry;
pub mod utils;
