//! # Submission Service
//!
//! Receives filled-in forms and keeps them in SQLite.
//!
//! *   **`POST /submit?formName={form_name}`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Expects a JSON object mapping field names to a string, a boolean
//!       or an array of strings. The record is stored with a fresh UUID and a timestamp.
//!
//! *   **`GET /submissions/{form_name}`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Returns every stored submission of one form, oldest first.

mod list;
mod save;
pub mod store;

use actix_web::web::{self, get, post};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/submit", post().to(save::process))
        .route("/submissions/{form_name}", get().to(list::process));
}
