use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::modules::portfolio::adapter::incoming::web::routes::{
    AddSkillRequest, ThemeResponse, UpdatePersonalInfoRequest, UpdateProfilePictureRequest,
    UpdateSocialLinkRequest, UpdateSummaryRequest,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioOutput, ThemeOutput,
};
use crate::modules::portfolio::application::services::session::SaveStatus;
use crate::modules::portfolio::domain::entities::{
    Certification, Experience, PersonalField, PersonalInfo, PortfolioDocument, Project,
    SocialLinks, SocialPlatform,
};
use crate::modules::portfolio::domain::view::PortfolioView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Studio API",
        version = "1.0.0",
        description = "Local editing surface for a single-page portfolio"
    ),
    paths(
        // Portfolio endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_document_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::toggle_edit_mode_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::update_personal_info_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::update_social_link_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::update_summary_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::update_profile_picture_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::add_skill_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::remove_skill_handler,

        // Theme endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_theme_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::toggle_theme_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioView>,
            SuccessResponse<EditPortfolioOutput>,
            ErrorResponse,
            ErrorDetail,

            // Document
            PortfolioDocument,
            PersonalInfo,
            SocialLinks,
            Experience,
            Project,
            Certification,
            PersonalField,
            SocialPlatform,

            // Request DTOs
            UpdatePersonalInfoRequest,
            UpdateSocialLinkRequest,
            UpdateSummaryRequest,
            UpdateProfilePictureRequest,
            AddSkillRequest,

            // Outputs
            EditPortfolioOutput,
            ThemeOutput,
            ThemeResponse,
            SaveStatus
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio document and edit mode"),
        (name = "theme", description = "Light/dark preference"),
    )
)]
pub struct ApiDoc;
