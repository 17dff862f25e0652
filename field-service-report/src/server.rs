use std::sync::Arc;

use actix_easy_multipart::MultipartFormConfig;
use actix_web::web;
use tracing::{error, info};

use crate::api;
use crate::infrastructure::{build_config, initialize_telemetry, ServiceProvider};

pub fn run() {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(x) => x,
        Err(e) => return eprintln!("Cannot build runtime: {e}"),
    };
    runtime.block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => return eprintln!("Cannot build config: {e}"),
    };
    if let Err(e) = initialize_telemetry(&config.telemetry) {
        return eprintln!("Cannot build logger: {e}");
    }
    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => return eprintln!("Cannot build Service Provider: {e}"),
    };

    tokio::select! {
        _ = initialize_web_host(service_provider) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping Services (ctrl-c handling).");
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().host.clone();
    let upload_limit = sp.config().upload.max_size;
    let upload_root = sp.upload_root().clone();
    let server = actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .app_data(MultipartFormConfig::default().total_limit(upload_limit))
            .app_data(api::json_config(upload_limit))
            .app_data(api::path_config())
            .app_data(api::query_config())
            .app_data(web::Data::from(sp.clone()))
            .service(api::report::healthz)
            .service(
                web::scope("/api/v1")
                    .service(api::report::create)
                    .service(api::report::list)
                    .service(api::report::assign)
                    .service(api::report::list_assigned)
                    .service(api::report::detail)
                    .service(api::report::status_logs)
                    .service(api::report::save_form)
                    .service(api::report::update_progress)
                    .service(api::attachment::upload)
                    .service(api::attachment::download)
                    .service(api::attachment::remove),
            )
            .service(api::uploads::uploads_service(&upload_root))
    })
    .bind((host.bind_address.to_owned(), host.bind_port));

    let server = match server {
        Ok(x) => x,
        Err(e) => return error!("Cannot bind {}:{}: {e}", host.bind_address, host.bind_port),
    };
    info!("Listening on {}:{}.", host.bind_address, host.bind_port);
    match server.disable_signals().run().await {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into error: {e}"),
    }
}
