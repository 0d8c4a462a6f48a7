use actix_web::{
    get, post, route,
    web::{self, Json},
};
use songbook_lib::{NewSong, Playlist, Song};

use super::{PlaylistParams, PlaylistSongParams, SongParams};
use crate::{
    error::{CatalogError, Result},
    serialize::Ser,
    store::CatalogStore,
};

/// Get the songs of a playlist, as json or csv
#[get("/listSongs")]
pub async fn list_songs(
    store: web::Data<CatalogStore>,
    params: web::Query<PlaylistParams>,
) -> Result<Ser<Song>> {
    let songs = store.list_songs(&params.secret_code, &params.playlist_id)?;
    Ok(Ser(songs))
}

/// Append a song to a playlist
#[post("/addSongToPlaylist")]
pub async fn add_song(
    store: web::Data<CatalogStore>,
    params: web::Query<PlaylistParams>,
    new_song: Json<NewSong>,
) -> Result<Json<Song>> {
    let song = store.add_song(
        &params.secret_code,
        &params.playlist_id,
        new_song.into_inner(),
    )?;

    log::info!("added song {} to playlist {}", song.id, params.playlist_id);
    Ok(Json(song))
}

/// Delete a song from a playlist, unless it is the last one
#[route("/deleteSongFromPlaylist", method = "POST", method = "DELETE")]
pub async fn delete_song(
    store: web::Data<CatalogStore>,
    params: web::Query<PlaylistSongParams>,
) -> Result<Json<Playlist>> {
    let PlaylistSongParams {
        secret_code,
        playlist_id,
        song_id,
    } = params.into_inner();

    match store.remove_song(&secret_code, &playlist_id, &song_id) {
        Ok(playlist) => {
            log::info!("removed song {song_id} from playlist {playlist_id}");
            Ok(Json(playlist))
        }
        Err(e @ CatalogError::InvariantViolation) => {
            log::warn!("refused to remove the last song of playlist {playlist_id}");
            Err(e)
        }
        Err(e) => Err(e),
    }
}

#[route("/getSongDetail", method = "GET", method = "POST")]
pub async fn song_detail(
    store: web::Data<CatalogStore>,
    params: web::Query<SongParams>,
) -> Result<Json<Song>> {
    Ok(Json(store.song_detail(&params.secret_code, &params.song_id)?))
}
