//! Cross-origin access for a frontend served from another origin.
//!
//! Off unless at least one origin is configured; same-origin deployments need nothing.
//! `*` admits every origin.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Condition;

const PREFLIGHT_MAX_AGE: usize = 3600;

/// CORS middleware admitting `origins` to the schema and submit endpoints.
pub fn middleware(origins: &[String]) -> Condition<Cors> {
    Condition::new(!origins.is_empty(), policy(origins))
}

fn policy(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(["GET", "POST"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(PREFLIGHT_MAX_AGE);

    origins.iter().fold(cors, |cors, origin| match origin.as_str() {
        "*" => cors.allow_any_origin(),
        origin => cors.allowed_origin(origin),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{forms, submissions};
    use crate::test_support::config_in;
    use actix_web::http::Method;
    use actix_web::{test, web, App};
    use std::fs;
    use tempfile::TempDir;

    const ORIGIN: &str = "http://localhost:3000";

    #[actix_web::test]
    async fn preflight_for_submit_is_answered() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .wrap(middleware(&[ORIGIN.to_string()]))
                .configure(submissions::configure_routes),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/submit?formName=contact")
            .insert_header((header::ORIGIN, ORIGIN))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success(), "{}", resp.status());
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            ORIGIN
        );
    }

    #[actix_web::test]
    async fn schema_response_names_the_allowed_origin() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("contact.json"), r#"[{"name":"email"}]"#).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .wrap(middleware(&["*".to_string()]))
                .service(forms::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/form/contact")
            .insert_header((header::ORIGIN, ORIGIN))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn no_origins_means_no_cors_headers() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("contact.json"), r#"[{"name":"email"}]"#).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .wrap(middleware(&[]))
                .service(forms::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/form/contact")
            .insert_header((header::ORIGIN, ORIGIN))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert!(!resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
