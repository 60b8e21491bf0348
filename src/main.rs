use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use flashcards::config::ServerConfig;
use flashcards::db::{establish_connection_pool, run_migrations};
use flashcards::repository::DieselRepository;
use flashcards::routes::{configure, json_config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to prepare database schema: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    log::info!(
        "Serving flashcards API on {}:{}",
        config.address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(json_config())
            .app_data(web::Data::new(repo.clone()))
            .service(web::scope("/api").configure(configure))
    })
    .bind((config.address.clone(), config.port))?
    .run()
    .await
}
