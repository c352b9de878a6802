// src/shared/api/path_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::PathConfig;

/// Turns path segments that fail to parse into a 400 instead of actix's 404.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
