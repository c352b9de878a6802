use crate::modules::portfolio::application::ports::incoming::use_cases::EditPortfolioOutput;
use crate::modules::portfolio::application::services::session::SaveStatus;
use crate::modules::portfolio::domain::edit_mode::EditMode;
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::domain::theme::ThemePreference;
use crate::modules::portfolio::domain::view::{PortfolioView, RenderContext};
use crate::modules::portfolio::domain::visibility::VisibilityPolicy;

pub fn sample_view(mode: EditMode) -> PortfolioView {
    PortfolioView::render(
        &PortfolioDocument::default(),
        RenderContext {
            mode,
            theme: ThemePreference::Light,
            policy: VisibilityPolicy::ContentOnly,
            year: 2026,
        },
    )
}

pub fn edit_output(changed: bool, persistence: SaveStatus) -> EditPortfolioOutput {
    EditPortfolioOutput {
        view: sample_view(EditMode::Editing),
        changed,
        persistence,
    }
}
