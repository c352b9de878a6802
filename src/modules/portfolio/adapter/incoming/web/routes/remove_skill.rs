use actix_web::{delete, web, Responder};

use super::edit_response::edit_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::incoming::use_cases::EditPortfolioOutput;
use crate::modules::portfolio::domain::mutations::PortfolioEdit;
use crate::AppState;

/// Remove the skill at a position
///
/// A position past the end of the list is ignored and reported as `changed: false`.
#[utoipa::path(
    delete,
    path = "/api/portfolio/skills/{index}",
    tag = "portfolio",
    params(
        ("index" = usize, Path, description = "Zero-based position in the skill list")
    ),
    responses(
        (status = 200, description = "Skill list after the edit", body = inline(SuccessResponse<EditPortfolioOutput>)),
        (status = 400, description = "Index is not a non-negative integer", body = ErrorResponse),
        (status = 409, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[delete("/api/portfolio/skills/{index}")]
pub async fn remove_skill_handler(
    data: web::Data<AppState>,
    path: web::Path<usize>,
) -> impl Responder {
    let index = path.into_inner();
    let result = data
        .portfolio
        .edit
        .execute(PortfolioEdit::RemoveSkillAt { index })
        .await;
    edit_response(result)
}
