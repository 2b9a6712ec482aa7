//! # Embedded Frontend
//!
//! The compiled frontend is embedded into the binary from `static/dist` at build time
//! and answers every request no other service claims.
//!
//! *   A path naming a bundled file gets that file, typed by its extension.
//! *   Any other path gets `index.html`. The form name travels in the query string,
//!     so the page has to load whatever the path is.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use log::error;
use mime_guess::from_path;

static BUNDLE: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const ENTRY_PAGE: &str = "index.html";

pub async fn process(req: HttpRequest) -> HttpResponse {
    match bundled_file(req.path()) {
        Some(file) => {
            let mime = from_path(file.path()).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents())
        }
        None => {
            error!("Frontend bundle has no {}", ENTRY_PAGE);
            HttpResponse::NotFound().finish()
        }
    }
}

/// The bundled file for a request path, or the entry page when there is none.
fn bundled_file(request_path: &str) -> Option<&'static File<'static>> {
    let relative = request_path.trim_start_matches('/');
    let exact = match relative {
        "" => None,
        relative => BUNDLE.get_file(relative),
    };
    exact.or_else(|| BUNDLE.get_file(ENTRY_PAGE))
}
