//! # Installation Service Module
//!
//! Endpoints that record installed parts and read them back.
//!
//! ## Registered Routes:
//!
//! *   **`POST /installations`**: multipart installation form plus an optional `photo` file.
//!     Allocates the UID and answers `{ message, record }`.
//! *   **`GET /installations`**: every installation, most recent first.
//! *   **`GET /parts/{uid}`**: the part detail projection of one installation.

mod create;
mod list;
mod part;

use actix_web::web::{self, get, post};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/installations", post().to(create::process))
        .route("/installations", get().to(list::process))
        .route("/parts/{uid}", get().to(part::process));
}
