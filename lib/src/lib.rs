use serde::{Deserialize, Serialize};

/// A registered user and everything they own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(rename = "ID")]
    pub id: String,

    /// Bearer credential, the only thing needed to act as this user.
    pub secret_code: String,
    pub name: String,
    pub email: String,
    pub playlists: Vec<Playlist>,
}

/// An ordered, never empty, list of songs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Playlist {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub songs: Vec<Song>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Song {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub composer: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Fields a client may supply when registering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NewUser {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "email")]
    pub email: String,
}

/// Fields a client may supply when adding a song. Any `ID` sent along is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NewSong {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "composer")]
    pub composer: String,
    #[serde(rename = "URL", alias = "url")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
        }
    }
}
