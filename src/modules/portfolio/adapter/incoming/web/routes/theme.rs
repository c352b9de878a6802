use actix_web::{get, post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::ThemeOutput;
use crate::modules::portfolio::domain::theme::ThemePreference;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ThemeResponse {
    #[schema(example = "dark")]
    pub theme: ThemePreference,
}

/// Get the current theme
#[utoipa::path(
    get,
    path = "/api/theme",
    tag = "theme",
    responses(
        (status = 200, description = "Current theme", body = inline(SuccessResponse<ThemeResponse>))
    )
)]
#[get("/api/theme")]
pub async fn get_theme_handler(data: web::Data<AppState>) -> impl Responder {
    let theme = data.portfolio.get_theme.execute().await;
    ApiResponse::success(ThemeResponse { theme })
}

/// Toggle between light and dark
///
/// Allowed in either edit mode. The new preference is persisted on its own key.
#[utoipa::path(
    post,
    path = "/api/theme/toggle",
    tag = "theme",
    responses(
        (status = 200, description = "Theme after the toggle", body = inline(SuccessResponse<ThemeOutput>))
    )
)]
#[post("/api/theme/toggle")]
pub async fn toggle_theme_handler(data: web::Data<AppState>) -> impl Responder {
    let output = data.portfolio.toggle_theme.execute().await;
    ApiResponse::success(output)
}
