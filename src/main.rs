use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{error, info};

use social_posts::{AppState, config, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let pg_pool = match config::get_pg_pool() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to create PG pool: {}", e);
            std::process::exit(1);
        }
    };

    let state = web::Data::new(AppState { pg_pool });

    let bind_address = config::bind_address();
    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
