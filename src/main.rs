use actix_files::Files;
use actix_web::{web, App, HttpServer};
use courtside_ui::{api, common::site_config};
use env_logger::{Builder, Env, Target};
use log::{debug, info};
use std::io::Write;

#[actix_web::main]
async fn main() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!("site version: {}", env!("CARGO_PKG_VERSION"));

    let config = site_config();
    let port = config.port;

    HttpServer::new(move || {
        App::new()
            .route("/", web::get().to(api::index))
            .route("/api/menu.json", web::get().to(api::menu))
            .service(Files::new("/static", config.static_dir.clone()))
    })
    .bind(("0.0.0.0", port))
    .expect("bind server")
    .run()
    .await
    .expect("run server");

    debug!("good bye");
}
