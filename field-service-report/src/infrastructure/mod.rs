mod config;
mod database;
mod repository;
mod service_provider;
mod telemetry;

pub use config::build_config;
pub use service_provider::ServiceProvider;
pub use telemetry::initialize_telemetry;
