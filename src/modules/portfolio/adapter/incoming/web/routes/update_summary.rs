use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::edit_response::edit_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::incoming::use_cases::EditPortfolioOutput;
use crate::modules::portfolio::domain::mutations::PortfolioEdit;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSummaryRequest {
    #[schema(example = "I build reliable backend systems.")]
    pub summary: String,
}

/// Replace the summary text
///
/// An empty summary hides the section.
#[utoipa::path(
    put,
    path = "/api/portfolio/summary",
    tag = "portfolio",
    request_body = UpdateSummaryRequest,
    responses(
        (status = 200, description = "Summary replaced", body = inline(SuccessResponse<EditPortfolioOutput>)),
        (status = 409, description = "Edit mode is off", body = ErrorResponse)
    )
)]
#[put("/api/portfolio/summary")]
pub async fn update_summary_handler(
    data: web::Data<AppState>,
    payload: web::Json<UpdateSummaryRequest>,
) -> impl Responder {
    let summary = payload.into_inner().summary;
    let result = data
        .portfolio
        .edit
        .execute(PortfolioEdit::SetSummary { summary })
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
    async fn forwards_multiline_summary_verbatim() {
        let edit = RecordingEditPortfolioUseCase::success();
        let app_state = TestAppStateBuilder::default().with_edit(edit.clone()).build();

        let app =
            test::init_service(App::new().app_data(app_state).service(update_summary_handler))
                .await;

        let req = test::TestRequest::put()
            .uri("/api/portfolio/summary")
            .set_json(json!({ "summary": "Line one.\nLine two." }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            edit.received(),
            vec![PortfolioEdit::SetSummary {
                summary: "Line one.\nLine two.".to_string(),
            }]
        );
    }

    #[actix_web::test]
    async fn failed_write_is_reported_alongside_the_new_view() {
        let edit = RecordingEditPortfolioUseCase::with_result(Ok(edit_output(
            true,
            SaveStatus::Failed {
                reason: "disk full".to_string(),
            },
        )));
        let app_state = TestAppStateBuilder::default().with_edit(edit).build();

        let app =
            test::init_service(App::new().app_data(app_state).service(update_summary_handler))
                .await;

        let req = test::TestRequest::put()
            .uri("/api/portfolio/summary")
            .set_json(json!({ "summary": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["persistence"]["status"], "failed");
        assert_eq!(body["data"]["persistence"]["reason"], "disk full");
        assert_eq!(body["data"]["view"]["mode"], "editing");
    }
}
