pub mod api_client;
pub mod configuration;
pub mod domain;
pub mod form;
pub mod navigation;
pub mod notification;
pub mod routes;
pub mod startup;
pub mod telemetry;
