//! Handler for `POST /submit?formName={form_name}`.
//!
//! A missing `formName` query or a body that is not a valid submission record is turned
//! into `400` by the extractors before `process` runs.

use actix_web::{web, HttpResponse, Responder};
use common::model::SubmissionRecord;
use common::requests::SubmitQuery;
use log::{error, info, warn};

use super::store::insert_submission;
use crate::config::ServerConfig;
use crate::services::is_valid_form_name;

pub async fn process(
    query: web::Query<SubmitQuery>,
    payload: web::Json<SubmissionRecord>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let form_name = query.into_inner().form_name;
    if !is_valid_form_name(&form_name) {
        warn!("Rejected submission for invalid form name {:?}", form_name);
        return HttpResponse::BadRequest().body("Invalid form name");
    }

    let record = payload.into_inner();
    let database_path = config.database_path.clone();
    let name = form_name.clone();
    let result = web::block(move || insert_submission(&database_path, &name, &record)).await;

    match result {
        Ok(Ok(id)) => {
            info!("Stored submission {} for form '{}'", id, form_name);
            HttpResponse::Ok().body("Submission stored")
        }
        Ok(Err(e)) => {
            error!("Error storing submission for form '{}': {}", form_name, e);
            HttpResponse::ServiceUnavailable().body(format!("Error storing submission: {}", e))
        }
        Err(e) => {
            error!("Submission worker failed for form '{}': {}", form_name, e);
            HttpResponse::InternalServerError().body("Error storing submission")
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::submissions::configure_routes;
    use crate::services::submissions::store::list_submissions;
    use crate::test_support::config_in;
    use actix_web::{test, web, App};
    use common::model::ControlValue;
    use serde_json::json;
    use tempfile::TempDir;

    #[actix_web::test]
    async fn stores_posted_record() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/submit?formName=contact")
            .set_json(json!({ "email": "a@b.c", "agree": false, "tags": ["x", "y"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let stored = list_submissions(&config.database_path, "contact").unwrap();
        assert_eq!(stored.len(), 1);
        let payload = &stored[0].payload;
        assert_eq!(payload.get("email"), Some(&ControlValue::Text("a@b.c".into())));
        assert_eq!(payload.get("agree"), Some(&ControlValue::Checked(false)));
        assert_eq!(
            payload.get("tags"),
            Some(&ControlValue::Selected(vec!["x".into(), "y".into()]))
        );
    }

    #[actix_web::test]
    async fn missing_form_name_is_bad_request() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/submit")
            .set_json(json!({ "email": "a@b.c" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn malformed_record_is_bad_request() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/submit?formName=contact")
            .set_json(json!({ "age": 42 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn unwritable_database_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.database_path = dir.path().join("missing-dir").join("s.sqlite");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/submit?formName=contact")
            .set_json(json!({ "email": "a@b.c" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);
    }
}
