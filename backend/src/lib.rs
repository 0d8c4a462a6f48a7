pub mod catalog;
pub mod error;
pub mod id;
pub mod route;
pub mod serialize;
pub mod store;

use actix_web::{
    middleware::Logger,
    web::{self, JsonConfig, QueryConfig},
    HttpResponse,
};
use clap::Parser;
use songbook_lib::{ErrorBody, NewSong};

use crate::catalog::{Catalog, Defaults};
use crate::error::CatalogError;
use crate::id::IdGenerator;
use crate::store::CatalogStore;

#[derive(Parser)]
pub struct Opt {
    /// Address to bind to.
    #[clap(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// Port to bind to.
    #[clap(short, long, env = "BIND_PORT", default_value = "8080")]
    pub port: u16,

    /// Number of HTTP worker threads. Defaults to one per CPU core.
    #[clap(short, long, env = "WORKERS")]
    pub workers: Option<usize>,

    /// Largest accepted JSON body, in bytes.
    #[clap(long, env = "MAX_BODY_SIZE", default_value = "65536")]
    pub max_body_size: usize,

    /// Seed for the identifier generator. Seeded from the clock if unset.
    #[clap(long, env = "ID_SEED")]
    pub id_seed: Option<u64>,

    /// Name of the playlist every new user starts with.
    #[clap(long, env = "DEFAULT_PLAYLIST_NAME", default_value = "Default")]
    pub default_playlist_name: String,

    /// Name of the song every new playlist starts with.
    #[clap(long, env = "DEFAULT_SONG_NAME", default_value = "Default Song")]
    pub default_song_name: String,

    /// Composer of the song every new playlist starts with.
    #[clap(long, env = "DEFAULT_SONG_COMPOSER", default_value = "Default Composer")]
    pub default_song_composer: String,

    /// URL of the song every new playlist starts with.
    #[clap(long, env = "DEFAULT_SONG_URL", default_value = "http://default.url")]
    pub default_song_url: String,
}

impl Opt {
    pub fn defaults(&self) -> Defaults {
        Defaults {
            playlist_name: self.default_playlist_name.clone(),
            song: NewSong {
                name: self.default_song_name.clone(),
                composer: self.default_song_composer.clone(),
                url: self.default_song_url.clone(),
            },
        }
    }

    /// Build the store the server runs on. Called once at startup.
    pub fn build_store(&self) -> CatalogStore {
        let ids = match self.id_seed {
            Some(seed) => {
                log::info!("seeding identifier generator with {seed}");
                IdGenerator::from_seed(seed)
            }
            None => IdGenerator::from_time(),
        };

        CatalogStore::new(Catalog::new(ids, self.defaults()))
    }
}

/// Register every route plus the extractor configuration that turns malformed
/// input into [CatalogError::BadRequest].
pub fn configure(max_body_size: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let query_config = QueryConfig::default().error_handler(|err, _req| {
            log::debug!("invalid query: {err}");
            CatalogError::bad_request().into()
        });

        let json_config = JsonConfig::default()
            .limit(max_body_size)
            .content_type_required(false)
            .error_handler(|err, _req| {
                log::debug!("invalid json body: {err}");
                CatalogError::bad_body().into()
            });

        cfg.app_data(query_config)
            .app_data(json_config)
            .service(route::account::register)
            .service(route::account::login)
            .service(route::account::view_profile)
            .service(route::playlist::list_playlists)
            .service(route::playlist::create_playlist)
            .service(route::playlist::delete_playlist)
            .service(route::song::list_songs)
            .service(route::song::add_song)
            .service(route::song::delete_song)
            .service(route::song::song_detail)
            .default_service(web::to(unknown_endpoint));
    }
}

/// Access log middleware. Only the path is logged, never the query string,
/// since that carries the secret code.
pub fn request_logger() -> Logger {
    Logger::new(r#"%a "%{method}xi %U" %s %b "%{User-Agent}i" %T"#)
        .custom_request_replace("method", |req| req.method().to_string())
}

async fn unknown_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("Unknown endpoint"))
}
