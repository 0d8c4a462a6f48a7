use actix_web::{
    get, route,
    web::{self, Json},
};
use songbook_lib::{Playlist, User};

use super::{Credentials, NewPlaylistParams, PlaylistParams};
use crate::{error::Result, store::CatalogStore};

/// Get all playlists of the user
#[get("/listPlaylists")]
pub async fn list_playlists(
    store: web::Data<CatalogStore>,
    credentials: web::Query<Credentials>,
) -> Result<Json<Vec<Playlist>>> {
    Ok(Json(store.list_playlists(&credentials.secret_code)?))
}

/// Create a playlist holding one default song
#[route("/createPlaylist", method = "GET", method = "POST")]
pub async fn create_playlist(
    store: web::Data<CatalogStore>,
    params: web::Query<NewPlaylistParams>,
) -> Result<Json<Playlist>> {
    let NewPlaylistParams {
        secret_code,
        playlist_name,
    } = params.into_inner();

    let playlist = store.create_playlist(&secret_code, playlist_name)?;
    log::info!("created playlist {}", playlist.id);
    Ok(Json(playlist))
}

/// Delete a playlist and every song in it
#[route("/deletePlaylist", method = "POST", method = "DELETE")]
pub async fn delete_playlist(
    store: web::Data<CatalogStore>,
    params: web::Query<PlaylistParams>,
) -> Result<Json<User>> {
    let user = store.remove_playlist(&params.secret_code, &params.playlist_id)?;
    log::info!("user {} deleted playlist {}", user.id, params.playlist_id);
    Ok(Json(user))
}
