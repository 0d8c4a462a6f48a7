use actix_web::{web, App, HttpServer};
use clap::Parser;
use dotenv::dotenv;

use songbook_srv::{configure, request_logger, Opt};

#[actix_web::main]
async fn main() -> eyre::Result<()> {
    dotenv().ok();
    let opt = Opt::parse();
    env_logger::init();

    let store = web::Data::new(opt.build_store());
    let max_body_size = opt.max_body_size;

    let app = move || {
        App::new()
            .wrap(request_logger())
            .app_data(web::Data::clone(&store))
            .configure(configure(max_body_size))
    };

    log::info!("listening on {}:{}", opt.address, opt.port);

    let mut server = HttpServer::new(app).bind((opt.address.as_str(), opt.port))?;
    if let Some(workers) = opt.workers {
        server = server.workers(workers);
    }

    server.run().await?;

    Ok(())
}
