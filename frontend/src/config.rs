//! Build-time settings of the browser client.

/// Origin of the form server, e.g. `http://localhost:8080`.
///
/// Taken from `SCHEMA_FORM_API_BASE` when the frontend is compiled; empty means the
/// page is served by the form server itself and requests stay same-origin. Another
/// origin has to be admitted by the server's `--cors-origin` setting.
pub const API_BASE: &str = match option_env!("SCHEMA_FORM_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Prefixes an endpoint path with [`API_BASE`].
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), path)
}
