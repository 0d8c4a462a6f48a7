use std::fmt::{self, Display};

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use songbook_lib::ErrorBody;

pub type Result<R> = core::result::Result<R, CatalogError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Playlist,
    Song,
}

impl Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Playlist => f.write_str("playlist"),
            Entity::Song => f.write_str("song"),
        }
    }
}

/// Why a catalog operation was refused. The display string is the message sent
/// back to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The secret code does not belong to any user.
    #[error("Invalid secret code")]
    NotAuthorized,

    /// A playlist or song identifier does not exist under the resolved user.
    #[error("Invalid {0} ID")]
    NotFound(Entity),

    /// The mutation would leave a playlist without songs.
    #[error("Playlist cannot be empty")]
    InvariantViolation,

    /// Malformed input, or several identifiers where we don't say which one failed.
    #[error("{0}")]
    BadRequest(String),
}

impl CatalogError {
    pub fn bad_request() -> Self {
        CatalogError::BadRequest("Invalid request".into())
    }

    pub fn bad_body() -> Self {
        CatalogError::BadRequest("Invalid request body".into())
    }
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotAuthorized => StatusCode::UNAUTHORIZED,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::InvariantViolation | CatalogError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::debug!("rejecting request: {self}");
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}
