use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use mingyuan::api::middleware::AdminGate;
use mingyuan::api::routes;
use mingyuan::cli::{
    commands::{Cli, Commands},
    run_cli,
};
use mingyuan::config::AppConfig;
use mingyuan::pages;
use mingyuan::provider::ProviderFactory;
use tracing::{error, info};

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"status": "healthy"}))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Serve) {
        run_cli(cli.command, cli.config).await;
        return Ok(());
    }

    info!("Starting Mingyuan website server...");

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let provider = ProviderFactory::create_default(&config);

    let host = config.server.host.clone();
    let port = config.server.port;

    info!("Server listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(provider.clone()))
            .route("/health", web::get().to(health))
            .wrap(AdminGate)
            .configure(pages::configure)
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
