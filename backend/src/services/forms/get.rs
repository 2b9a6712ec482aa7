//! # Form Schema Retrieval
//!
//! Backend logic for `GET /form/{form_name}`.
//!
//! 1.  The form name is checked against the allowed character set (`400` otherwise).
//! 2.  `load_schema` reads the schema file and parses it as a `FormSchema`, so a broken
//!     file is reported here instead of in the browser.
//! 3.  The schema is written back out with `FormSchema::to_wire` (double-encoded) and
//!     returned as `application/json`.
//!
//! A missing file yields `404`; an unreadable or invalid one `500`.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use common::model::FormSchema;
use log::{error, info, warn};
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::ServerConfig;
use crate::services::is_valid_form_name;

/// Reasons a schema file could not be served.
#[derive(Debug)]
pub enum SchemaFileError {
    NotFound,
    Unreadable(String),
    Invalid(String),
}

impl fmt::Display for SchemaFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaFileError::NotFound => write!(f, "schema file not found"),
            SchemaFileError::Unreadable(e) => write!(f, "cannot read schema file: {}", e),
            SchemaFileError::Invalid(e) => write!(f, "invalid schema file: {}", e),
        }
    }
}

pub async fn process(form_name: web::Path<String>, config: web::Data<ServerConfig>) -> HttpResponse {
    let form_name = form_name.into_inner();
    if !is_valid_form_name(&form_name) {
        warn!("Rejected schema request for invalid form name {:?}", form_name);
        return HttpResponse::BadRequest().body("Invalid form name");
    }

    let path = config.schema_file(&form_name);
    let schema = match load_schema(&path).await {
        Ok(schema) => schema,
        Err(SchemaFileError::NotFound) => {
            warn!("No schema for form '{}' at {}", form_name, path.display());
            return HttpResponse::NotFound().body(format!("Form '{}' not found", form_name));
        }
        Err(e) => {
            error!("Error loading schema for form '{}': {}", form_name, e);
            return HttpResponse::InternalServerError().body("Error loading form schema");
        }
    };

    match schema.to_wire() {
        Ok(body) => {
            info!("Served schema '{}' ({} fields)", form_name, schema.len());
            HttpResponse::Ok().content_type(ContentType::json()).body(body)
        }
        Err(e) => {
            error!("Error encoding schema for form '{}': {}", form_name, e);
            HttpResponse::InternalServerError().body("Error encoding form schema")
        }
    }
}

/// Reads and parses a schema file holding a plain JSON array of field descriptors.
pub async fn load_schema(path: &Path) -> Result<FormSchema, SchemaFileError> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => SchemaFileError::NotFound,
        _ => SchemaFileError::Unreadable(e.to_string()),
    })?;
    serde_json::from_str(&contents).map_err(|e| SchemaFileError::Invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::forms::configure_routes;
    use crate::test_support::config_in;
    use actix_web::{test, App};
    use common::model::FieldKind;
    use std::fs;
    use tempfile::TempDir;

    const CONTACT: &str = r#"[
        {"name":"email","label":"Email","type":"email","required":true},
        {"name":"plan","label":"Plan","type":"select",
         "options":[{"value":"a","label":"Basic"},{"value":"b","label":"Pro"}]}
    ]"#;

    #[actix_web::test]
    async fn serves_double_encoded_schema() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("contact.json"), CONTACT).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .service(configure_routes()),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/form/contact").to_request()).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        let inner: String = serde_json::from_str(body).unwrap();
        assert!(inner.starts_with('['));

        let schema = FormSchema::from_wire(body).unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields[0].kind, FieldKind::Input("email".into()));
        assert_eq!(schema.fields[1].options.as_ref().map(Vec::len), Some(2));
    }

    #[actix_web::test]
    async fn unknown_form_is_not_found() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .service(configure_routes()),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/form/missing").to_request()).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn invalid_form_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .service(configure_routes()),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/form/..%2Fsecret").to_request()).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn broken_schema_file_is_a_server_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.json"), r#"{"not": "an array"}"#).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .service(configure_routes()),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/form/broken").to_request()).await;
        assert_eq!(resp.status(), 500);
    }

    #[actix_web::test]
    async fn load_schema_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_schema(&dir.path().join("nope.json")).await;
        assert!(matches!(result, Err(SchemaFileError::NotFound)));
    }

    #[actix_web::test]
    async fn bundled_sample_forms_are_valid() {
        let forms_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../forms");
        for name in ["contact", "feedback"] {
            let schema = load_schema(&forms_dir.join(format!("{}.json", name))).await;
            assert!(schema.is_ok(), "{}: {:?}", name, schema.err());
        }
    }
}
