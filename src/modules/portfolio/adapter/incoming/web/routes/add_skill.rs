use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::edit_response::edit_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::incoming::use_cases::EditPortfolioOutput;
use crate::modules::portfolio::domain::mutations::PortfolioEdit;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddSkillRequest {
    #[schema(example = "Rust")]
    pub skill: String,
}

/// Append a skill
///
/// Input is trimmed. Blank or already listed skills leave the document
/// unchanged and come back with `changed: false`.
#[utoipa::path(
    post,
    path = "/api/portfolio/skills",
    tag = "portfolio",
    request_body = AddSkillRequest,
    responses(
        (status = 200, description = "Skill list after the edit", body = inline(SuccessResponse<EditPortfolioOutput>)),
        (status = 409, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[post("/api/portfolio/skills")]
pub async fn add_skill_handler(
    data: web::Data<AppState>,
    payload: web::Json<AddSkillRequest>,
) -> impl Responder {
    let skill = payload.into_inner().skill;
    let result = data
        .portfolio
        .edit
        .execute(PortfolioEdit::AddSkill { skill })
        .await;
    edit_response(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::portfolio::application::services::session::SaveStatus;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::portfolio_test_fixtures::edit_output;
    use crate::tests::support::stubs::RecordingEditPortfolioUseCase;

    #[actix_web::test]
    async fn forwards_raw_skill_text() {
        let edit = RecordingEditPortfolioUseCase::success();
        let app_state = TestAppStateBuilder::default().with_edit(edit.clone()).build();

        let app = test::init_service(App::new().app_data(app_state).service(add_skill_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/portfolio/skills")
            .set_json(json!({ "skill": "  Rust  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            edit.received(),
            vec![PortfolioEdit::AddSkill {
                skill: "  Rust  ".to_string(),
            }]
        );
    }

    #[actix_web::test]
    async fn duplicate_skill_reports_unchanged() {
        let edit = RecordingEditPortfolioUseCase::with_result(Ok(edit_output(
            false,
            SaveStatus::Unchanged,
        )));
        let app_state = TestAppStateBuilder::default().with_edit(edit).build();

        let app = test::init_service(App::new().app_data(app_state).service(add_skill_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/portfolio/skills")
            .set_json(json!({ "skill": "JavaScript" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["changed"], false);
        assert_eq!(body["data"]["persistence"]["status"], "unchanged");
    }

    #[actix_web::test]
    async fn missing_skill_property_is_rejected() {
        let edit = RecordingEditPortfolioUseCase::success();
        let app_state = TestAppStateBuilder::default().with_edit(edit.clone()).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(add_skill_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/portfolio/skills")
            .set_json(json!({ "name": "Rust" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(edit.received().is_empty());
    }
}
