use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::domain::view::PortfolioView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the rendered portfolio page
///
/// Returns the page as it renders for the current document, edit mode and theme.
/// Sections without content are omitted.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Rendered page",
            body = inline(SuccessResponse<PortfolioView>)
        )
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let view = data.portfolio.get_view.execute().await;
    ApiResponse::success(view)
}

/// Get the raw portfolio document
///
/// Returns the current snapshot in the same shape it is persisted in.
#[utoipa::path(
    get,
    path = "/api/portfolio/document",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Current document",
            body = inline(SuccessResponse<PortfolioDocument>)
        )
    )
)]
#[get("/api/portfolio/document")]
pub async fn get_portfolio_document_handler(data: web::Data<AppState>) -> impl Responder {
    let document = data.portfolio.get_document.execute().await;
    ApiResponse::success(document)
}
