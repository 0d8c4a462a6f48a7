use actix_web::{
    post, route,
    web::{self, Json},
};
use songbook_lib::{NewUser, User};

use super::Credentials;
use crate::{error::Result, store::CatalogStore};

/// Create a user. Identifiers and the secret code are always generated here,
/// whatever the body contains.
#[post("/register")]
pub async fn register(store: web::Data<CatalogStore>, new_user: Json<NewUser>) -> Json<User> {
    let user = store.register(new_user.into_inner());
    log::info!("registered user {}", user.id);
    Json(user)
}

#[route("/login", method = "GET", method = "POST")]
pub async fn login(
    store: web::Data<CatalogStore>,
    credentials: web::Query<Credentials>,
) -> Result<Json<User>> {
    let user = store.authenticate(&credentials.secret_code).map_err(|e| {
        log::warn!("login attempt with an unknown secret code");
        e
    })?;

    log::info!("user {} logged in", user.id);
    Ok(Json(user))
}

#[route("/viewProfile", method = "GET", method = "POST")]
pub async fn view_profile(
    store: web::Data<CatalogStore>,
    credentials: web::Query<Credentials>,
) -> Result<Json<User>> {
    let user = store.view_profile(&credentials.secret_code)?;
    Ok(Json(user))
}
