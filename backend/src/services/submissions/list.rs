//! Handler for `GET /submissions/{form_name}`.

use actix_web::{web, HttpResponse, Responder};
use log::error;

use super::store::list_submissions;
use crate::config::ServerConfig;
use crate::services::is_valid_form_name;

pub async fn process(form_name: web::Path<String>, config: web::Data<ServerConfig>) -> impl Responder {
    let form_name = form_name.into_inner();
    if !is_valid_form_name(&form_name) {
        return HttpResponse::BadRequest().body("Invalid form name");
    }

    let database_path = config.database_path.clone();
    let name = form_name.clone();
    match web::block(move || list_submissions(&database_path, &name)).await {
        Ok(Ok(submissions)) => HttpResponse::Ok().json(submissions),
        Ok(Err(e)) => {
            error!("Error listing submissions for form '{}': {}", form_name, e);
            HttpResponse::ServiceUnavailable().body(format!("Error listing submissions: {}", e))
        }
        Err(e) => {
            error!("Listing worker failed for form '{}': {}", form_name, e);
            HttpResponse::InternalServerError().body("Error listing submissions")
        }
    }
}
