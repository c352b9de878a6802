use actix_web::HttpResponse;
use tracing::debug;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioError, EditPortfolioOutput,
};
use crate::shared::api::ApiResponse;

/// Shared mapping for every handler that funnels into the edit use case.
///
/// A failed write is still a 200: the in-memory snapshot moved on and the
/// body carries the `persistence` status for the client to surface.
pub(super) fn edit_response(result: Result<EditPortfolioOutput, EditPortfolioError>) -> HttpResponse {
    match result {
        Ok(output) => ApiResponse::success(output),
        Err(EditPortfolioError::EditModeInactive) => {
            debug!("Rejected edit outside edit mode");
            ApiResponse::conflict(
                "EDIT_MODE_INACTIVE",
                "Turn on edit mode before changing the portfolio",
            )
        }
    }
}
