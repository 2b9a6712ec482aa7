//! Server settings, read from the command line or `SCHEMA_FORM_*` environment variables.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "schema-form-backend", about = "Serves form schemas and stores submissions")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "SCHEMA_FORM_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "SCHEMA_FORM_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory holding one `<form name>.json` schema file per form.
    #[arg(long, env = "SCHEMA_FORM_FORMS_DIR", default_value = "forms")]
    pub forms_dir: PathBuf,

    /// SQLite file receiving submissions. Created on first use.
    #[arg(long = "database", env = "SCHEMA_FORM_DATABASE", default_value = "submissions.sqlite")]
    pub database_path: PathBuf,

    /// Open the served page in the default browser once the server is up.
    #[arg(long, env = "SCHEMA_FORM_OPEN_BROWSER", default_value_t = false)]
    pub open_browser: bool,

    /// Origins allowed to call the API from another site, comma separated. `*` allows
    /// any origin. Empty means same-origin only.
    #[arg(long = "cors-origin", env = "SCHEMA_FORM_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Path of the schema file for an already validated form name.
    pub fn schema_file(&self, form_name: &str) -> PathBuf {
        self.forms_dir.join(format!("{}.json", form_name))
    }
}
