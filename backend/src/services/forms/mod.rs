//! # Form Schema Service
//!
//! Serves the schema of a form to the browser client.
//!
//! *   **`GET /form/{form_name}`**:
//!     - **Handler**: `get::process`
//!     - **Description**: Reads `<forms_dir>/<form_name>.json`, checks that it is a valid
//!       form schema and returns it double-encoded: the JSON array serialized to a string,
//!       and that string sent as a JSON string literal.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for schema requests.
const API_PATH: &str = "/form";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{form_name}", get().to(get::process))
}
