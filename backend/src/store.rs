use std::sync::{Mutex, PoisonError};

use songbook_lib::{NewSong, NewUser, Playlist, Song, User};

use crate::catalog::Catalog;
use crate::error::Result;

/// The catalog behind a single process-wide lock.
///
/// Every operation, reads included, holds the lock from start to finish, so
/// concurrent calls behave as if they ran one after another. Results are
/// returned as owned snapshots taken while the lock was held.
pub struct CatalogStore {
    catalog: Mutex<Catalog>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        CatalogStore {
            catalog: Mutex::new(catalog),
        }
    }

    fn locked<R>(&self, op: impl FnOnce(&mut Catalog) -> R) -> R {
        let mut catalog = self.catalog.lock().unwrap_or_else(|poisoned| {
            // catalog operations never panic halfway through a mutation
            log::warn!("catalog lock was poisoned, continuing");
            PoisonError::into_inner(poisoned)
        });

        op(&mut *catalog)
    }

    pub fn register(&self, new_user: NewUser) -> User {
        self.locked(|catalog| catalog.register(new_user))
    }

    pub fn authenticate(&self, secret_code: &str) -> Result<User> {
        self.locked(|catalog| catalog.authenticate(secret_code).cloned())
    }

    pub fn view_profile(&self, secret_code: &str) -> Result<User> {
        self.locked(|catalog| catalog.view_profile(secret_code).cloned())
    }

    pub fn list_playlists(&self, secret_code: &str) -> Result<Vec<Playlist>> {
        self.locked(|catalog| catalog.list_playlists(secret_code).map(<[_]>::to_vec))
    }

    pub fn list_songs(&self, secret_code: &str, playlist_id: &str) -> Result<Vec<Song>> {
        self.locked(|catalog| {
            catalog
                .list_songs(secret_code, playlist_id)
                .map(<[_]>::to_vec)
        })
    }

    pub fn create_playlist(&self, secret_code: &str, name: String) -> Result<Playlist> {
        self.locked(|catalog| catalog.create_playlist(secret_code, name))
    }

    pub fn add_song(&self, secret_code: &str, playlist_id: &str, song: NewSong) -> Result<Song> {
        self.locked(|catalog| catalog.add_song(secret_code, playlist_id, song))
    }

    pub fn remove_song(
        &self,
        secret_code: &str,
        playlist_id: &str,
        song_id: &str,
    ) -> Result<Playlist> {
        self.locked(|catalog| catalog.remove_song(secret_code, playlist_id, song_id))
    }

    pub fn remove_playlist(&self, secret_code: &str, playlist_id: &str) -> Result<User> {
        self.locked(|catalog| catalog.remove_playlist(secret_code, playlist_id))
    }

    pub fn song_detail(&self, secret_code: &str, song_id: &str) -> Result<Song> {
        self.locked(|catalog| catalog.song_detail(secret_code, song_id).cloned())
    }
}
