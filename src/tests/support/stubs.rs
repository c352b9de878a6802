use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditPortfolioError, EditPortfolioOutput, EditPortfolioUseCase, GetPortfolioDocumentUseCase,
    GetPortfolioViewUseCase, GetThemeUseCase, ThemeOutput, ToggleEditModeUseCase,
    ToggleThemeUseCase,
};
use crate::modules::portfolio::application::services::session::SaveStatus;
use crate::modules::portfolio::domain::edit_mode::EditMode;
use crate::modules::portfolio::domain::entities::PortfolioDocument;
use crate::modules::portfolio::domain::mutations::PortfolioEdit;
use crate::modules::portfolio::domain::theme::ThemePreference;
use crate::modules::portfolio::domain::view::PortfolioView;
use crate::tests::support::portfolio_test_fixtures::{edit_output, sample_view};

#[derive(Clone)]
pub struct StubGetPortfolioViewUseCase {
    view: PortfolioView,
}

impl StubGetPortfolioViewUseCase {
    pub fn returning(view: PortfolioView) -> Self {
        Self { view }
    }
}

impl Default for StubGetPortfolioViewUseCase {
    fn default() -> Self {
        Self::returning(sample_view(EditMode::Viewing))
    }
}

#[async_trait]
impl GetPortfolioViewUseCase for StubGetPortfolioViewUseCase {
    async fn execute(&self) -> PortfolioView {
        self.view.clone()
    }
}

#[derive(Clone, Default)]
pub struct StubGetPortfolioDocumentUseCase {
    document: PortfolioDocument,
}

impl StubGetPortfolioDocumentUseCase {
    pub fn returning(document: PortfolioDocument) -> Self {
        Self { document }
    }
}

#[async_trait]
impl GetPortfolioDocumentUseCase for StubGetPortfolioDocumentUseCase {
    async fn execute(&self) -> PortfolioDocument {
        self.document.clone()
    }
}

/// Returns a fixed result and remembers every edit it was asked to apply.
#[derive(Clone)]
pub struct RecordingEditPortfolioUseCase {
    result: Result<EditPortfolioOutput, EditPortfolioError>,
    received: Arc<Mutex<Vec<PortfolioEdit>>>,
}

impl RecordingEditPortfolioUseCase {
    pub fn success() -> Self {
        Self::with_result(Ok(edit_output(true, SaveStatus::Saved)))
    }

    pub fn error(err: EditPortfolioError) -> Self {
        Self::with_result(Err(err))
    }

    pub fn with_result(result: Result<EditPortfolioOutput, EditPortfolioError>) -> Self {
        Self {
            result,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received(&self) -> Vec<PortfolioEdit> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl EditPortfolioUseCase for RecordingEditPortfolioUseCase {
    async fn execute(
        &self,
        edit: PortfolioEdit,
    ) -> Result<EditPortfolioOutput, EditPortfolioError> {
        self.received.lock().unwrap().push(edit);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubToggleEditModeUseCase {
    view: PortfolioView,
}

impl StubToggleEditModeUseCase {
    pub fn returning(view: PortfolioView) -> Self {
        Self { view }
    }
}

impl Default for StubToggleEditModeUseCase {
    fn default() -> Self {
        Self::returning(sample_view(EditMode::Editing))
    }
}

#[async_trait]
impl ToggleEditModeUseCase for StubToggleEditModeUseCase {
    async fn execute(&self) -> PortfolioView {
        self.view.clone()
    }
}

#[derive(Clone, Default)]
pub struct StubGetThemeUseCase(pub ThemePreference);

#[async_trait]
impl GetThemeUseCase for StubGetThemeUseCase {
    async fn execute(&self) -> ThemePreference {
        self.0
    }
}

#[derive(Clone)]
pub struct StubToggleThemeUseCase {
    output: ThemeOutput,
}

impl StubToggleThemeUseCase {
    pub fn returning(theme: ThemePreference, persistence: SaveStatus) -> Self {
        Self {
            output: ThemeOutput { theme, persistence },
        }
    }
}

impl Default for StubToggleThemeUseCase {
    fn default() -> Self {
        Self::returning(ThemePreference::Dark, SaveStatus::Saved)
    }
}

#[async_trait]
impl ToggleThemeUseCase for StubToggleThemeUseCase {
    async fn execute(&self) -> ThemeOutput {
        self.output.clone()
    }
}
