//! HTTP handlers. Each one pulls its parameters out of the request, makes
//! exactly one [crate::store::CatalogStore] call, and encodes the result.

pub mod account;
pub mod playlist;
pub mod song;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(rename = "secretCode")]
    pub secret_code: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPlaylistParams {
    #[serde(rename = "secretCode")]
    pub secret_code: String,

    #[serde(rename = "playlistName")]
    pub playlist_name: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistParams {
    #[serde(rename = "secretCode")]
    pub secret_code: String,

    #[serde(rename = "playlistID")]
    pub playlist_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SongParams {
    #[serde(rename = "secretCode")]
    pub secret_code: String,

    #[serde(rename = "songID")]
    pub song_id: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistSongParams {
    #[serde(rename = "secretCode")]
    pub secret_code: String,

    #[serde(rename = "playlistID")]
    pub playlist_id: String,

    #[serde(rename = "songID")]
    pub song_id: String,
}
