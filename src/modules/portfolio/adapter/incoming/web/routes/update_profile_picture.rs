use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::edit_response::edit_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::incoming::use_cases::EditPortfolioOutput;
use crate::modules::portfolio::domain::mutations::PortfolioEdit;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfilePictureRequest {
    /// Self-contained image reference, usually a `data:` URL.
    #[schema(example = "data:image/png;base64,iVBORw0KGgo=")]
    pub image: String,
}

/// Replace the profile picture
#[utoipa::path(
    put,
    path = "/api/portfolio/profile-picture",
    tag = "portfolio",
    request_body = UpdateProfilePictureRequest,
    responses(
        (status = 200, description = "Picture replaced", body = inline(SuccessResponse<EditPortfolioOutput>)),
        (status = 409, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[put("/api/portfolio/profile-picture")]
pub async fn update_profile_picture_handler(
    data: web::Data<AppState>,
    payload: web::Json<UpdateProfilePictureRequest>,
) -> impl Responder {
    let image = payload.into_inner().image;
    let result = data
        .portfolio
        .edit
        .execute(PortfolioEdit::SetProfilePicture { image })
        .await;
    edit_response(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde_json::json;

    use crate::modules::portfolio::application::ports::incoming::use_cases::EditPortfolioError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::RecordingEditPortfolioUseCase;

    fn png_data_url() -> String {
        let bytes = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        format!("data:image/png;base64,{}", STANDARD.encode(bytes))
    }

    #[actix_web::test]
    async fn forwards_data_url_unchanged() {
        let edit = RecordingEditPortfolioUseCase::success();
        let app_state = TestAppStateBuilder::default().with_edit(edit.clone()).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_profile_picture_handler),
        )
        .await;

        let image = png_data_url();
        let req = test::TestRequest::put()
            .uri("/api/portfolio/profile-picture")
            .set_json(json!({ "image": image }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            edit.received(),
            vec![PortfolioEdit::SetProfilePicture { image }]
        );
    }

    #[actix_web::test]
    async fn replacing_picture_outside_edit_mode_is_a_conflict() {
        let app_state = TestAppStateBuilder::default()
            .with_edit(RecordingEditPortfolioUseCase::error(
                EditPortfolioError::EditModeInactive,
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_profile_picture_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/portfolio/profile-picture")
            .set_json(json!({ "image": png_data_url() }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
