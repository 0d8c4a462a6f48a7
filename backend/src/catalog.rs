//! The catalog state and the operations on it.
//!
//! Nothing in here locks. [crate::store::CatalogStore] owns a [Catalog] behind
//! a mutex and is what the rest of the server talks to.

use std::collections::HashMap;

use songbook_lib::{NewSong, NewUser, Playlist, Song, User};

use crate::error::{CatalogError, Entity, Result};
use crate::id::IdGenerator;

/// What every freshly created playlist is filled with.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub playlist_name: String,
    pub song: NewSong,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            playlist_name: "Default".into(),
            song: NewSong {
                name: "Default Song".into(),
                composer: "Default Composer".into(),
                url: "http://default.url".into(),
            },
        }
    }
}

pub struct Catalog {
    /// Users keyed by secret code. The only index; playlists and songs are
    /// always reached through their owner.
    users: HashMap<String, User>,
    ids: IdGenerator,
    defaults: Defaults,
}

impl Catalog {
    pub fn new(ids: IdGenerator, defaults: Defaults) -> Self {
        Catalog {
            users: HashMap::new(),
            ids,
            defaults,
        }
    }

    /// Create a user with fresh identifiers and one default playlist.
    pub fn register(&mut self, new_user: NewUser) -> User {
        let playlist_name = self.defaults.playlist_name.clone();
        let user = User {
            id: self.ids.next(),
            secret_code: self.ids.next(),
            name: new_user.name,
            email: new_user.email,
            playlists: vec![seeded_playlist(&mut self.ids, &self.defaults, playlist_name)],
        };

        self.users.insert(user.secret_code.clone(), user.clone());
        user
    }

    pub fn authenticate(&self, secret_code: &str) -> Result<&User> {
        self.users
            .get(secret_code)
            .ok_or(CatalogError::NotAuthorized)
    }

    pub fn view_profile(&self, secret_code: &str) -> Result<&User> {
        self.authenticate(secret_code)
    }

    pub fn list_playlists(&self, secret_code: &str) -> Result<&[Playlist]> {
        Ok(&self.authenticate(secret_code)?.playlists)
    }

    pub fn list_songs(&self, secret_code: &str, playlist_id: &str) -> Result<&[Song]> {
        let user = self.authenticate(secret_code)?;
        let playlist = find_playlist(&user.playlists, playlist_id)
            .ok_or(CatalogError::NotFound(Entity::Playlist))?;
        Ok(&playlist.songs)
    }

    pub fn create_playlist(&mut self, secret_code: &str, name: String) -> Result<Playlist> {
        let user = self
            .users
            .get_mut(secret_code)
            .ok_or(CatalogError::NotAuthorized)?;

        let playlist = seeded_playlist(&mut self.ids, &self.defaults, name);
        user.playlists.push(playlist.clone());
        Ok(playlist)
    }

    /// Append a song to one of the user's playlists. The song always gets a
    /// new identifier.
    pub fn add_song(
        &mut self,
        secret_code: &str,
        playlist_id: &str,
        new_song: NewSong,
    ) -> Result<Song> {
        let user = self
            .users
            .get_mut(secret_code)
            .ok_or(CatalogError::NotAuthorized)?;
        let playlist = user
            .playlists
            .iter_mut()
            .find(|playlist| playlist.id == playlist_id)
            .ok_or(CatalogError::NotFound(Entity::Playlist))?;

        let song = build_song(&mut self.ids, new_song);
        playlist.songs.push(song.clone());
        Ok(song)
    }

    /// Remove a song, returning the playlist as it looks afterwards.
    ///
    /// Any unresolved secret code, playlist or song gives the same
    /// [CatalogError::BadRequest]. A one-song playlist is refused before the
    /// song is even looked up.
    pub fn remove_song(
        &mut self,
        secret_code: &str,
        playlist_id: &str,
        song_id: &str,
    ) -> Result<Playlist> {
        let playlist = self
            .users
            .get_mut(secret_code)
            .and_then(|user| {
                user.playlists
                    .iter_mut()
                    .find(|playlist| playlist.id == playlist_id)
            })
            .ok_or_else(CatalogError::bad_request)?;

        if playlist.songs.len() <= 1 {
            return Err(CatalogError::InvariantViolation);
        }

        let index = playlist
            .songs
            .iter()
            .position(|song| song.id == song_id)
            .ok_or_else(CatalogError::bad_request)?;

        playlist.songs.remove(index);
        Ok(playlist.clone())
    }

    /// Remove a whole playlist. A user may end up with none.
    pub fn remove_playlist(&mut self, secret_code: &str, playlist_id: &str) -> Result<User> {
        let user = self
            .users
            .get_mut(secret_code)
            .ok_or(CatalogError::NotAuthorized)?;
        let index = user
            .playlists
            .iter()
            .position(|playlist| playlist.id == playlist_id)
            .ok_or(CatalogError::NotFound(Entity::Playlist))?;

        user.playlists.remove(index);
        Ok(user.clone())
    }

    /// Find a song in any of the user's playlists, first match wins.
    pub fn song_detail(&self, secret_code: &str, song_id: &str) -> Result<&Song> {
        self.authenticate(secret_code)?
            .playlists
            .iter()
            .flat_map(|playlist| &playlist.songs)
            .find(|song| song.id == song_id)
            .ok_or(CatalogError::NotFound(Entity::Song))
    }
}

fn find_playlist<'a>(playlists: &'a [Playlist], playlist_id: &str) -> Option<&'a Playlist> {
    playlists.iter().find(|playlist| playlist.id == playlist_id)
}

fn build_song(ids: &mut IdGenerator, fields: NewSong) -> Song {
    Song {
        id: ids.next(),
        name: fields.name,
        composer: fields.composer,
        url: fields.url,
    }
}

fn seeded_playlist(ids: &mut IdGenerator, defaults: &Defaults, name: String) -> Playlist {
    Playlist {
        id: ids.next(),
        name,
        songs: vec![build_song(ids, defaults.song.clone())],
    }
}
