use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest, web};

use crate::utils::error::CustomError;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    CustomError::ValidationError(format!("Invalid JSON body: {}", err)).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    CustomError::ValidationError(format!("Invalid query string: {}", err)).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> Error {
    CustomError::ValidationError(format!("Invalid path: {}", err)).into()
}

/// Extractor configs that turn malformed input into the JSON error body.
pub fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error));
}
