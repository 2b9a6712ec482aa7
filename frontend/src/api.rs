//! Client for the form server's two endpoints.

use common::error::FormError;
use common::model::{FormSchema, SubmissionRecord};
use common::requests::{schema_path, submit_path};
use gloo_net::http::Request;

use crate::config::api_url;

/// Fetches and decodes the schema of `form_name`.
pub async fn fetch_schema(form_name: &str) -> Result<FormSchema, FormError> {
    let response = Request::get(&api_url(&schema_path(form_name)))
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(FormError::FormNotFound {
            status: response.status(),
        });
    }

    let body = response.text().await.map_err(network_error)?;
    FormSchema::from_wire(&body)
}

/// Posts `record` as JSON to the submit endpoint of `form_name`.
pub async fn submit_record(form_name: &str, record: &SubmissionRecord) -> Result<(), FormError> {
    let response = Request::post(&api_url(&submit_path(form_name)))
        .json(record)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(FormError::Submission {
            status: response.status(),
        });
    }
    Ok(())
}

fn network_error(err: gloo_net::Error) -> FormError {
    FormError::Network(err.to_string())
}
