pub mod assets;
pub mod forms;
pub mod submissions;

use regex::Regex;
use std::sync::LazyLock;

static FORM_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("form name pattern"));

/// Form names double as schema file names, so only a conservative character set is accepted.
pub fn is_valid_form_name(form_name: &str) -> bool {
    FORM_NAME_RE.is_match(form_name)
}
