use actix_web::{post, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::domain::view::PortfolioView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Toggle edit mode
///
/// Flips between viewing and editing and returns the page as it now renders.
/// The document itself is not touched.
#[utoipa::path(
    post,
    path = "/api/portfolio/edit-mode/toggle",
    tag = "portfolio",
    responses(
        (status = 200, description = "Page in the new mode", body = inline(SuccessResponse<PortfolioView>))
    )
)]
#[post("/api/portfolio/edit-mode/toggle")]
pub async fn toggle_edit_mode_handler(data: web::Data<AppState>) -> impl Responder {
    let view = data.portfolio.toggle_edit_mode.execute().await;
    ApiResponse::success(view)
}
