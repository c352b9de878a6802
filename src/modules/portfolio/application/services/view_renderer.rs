use chrono::{Datelike, Utc};

use crate::modules::portfolio::application::services::session::SessionSnapshot;
use crate::modules::portfolio::domain::view::{PortfolioView, RenderContext};
use crate::modules::portfolio::domain::visibility::VisibilityPolicy;

/// Turns session snapshots into views using the configured visibility policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewRenderer {
    policy: VisibilityPolicy,
}

impl ViewRenderer {
    pub fn new(policy: VisibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn render(&self, snapshot: &SessionSnapshot) -> PortfolioView {
        self.render_for_year(snapshot, Utc::now().year())
    }

    pub fn render_for_year(&self, snapshot: &SessionSnapshot, year: i32) -> PortfolioView {
        PortfolioView::render(
            &snapshot.document,
            RenderContext {
                mode: snapshot.mode,
                theme: snapshot.theme,
                policy: self.policy,
                year,
            },
        )
    }
}
