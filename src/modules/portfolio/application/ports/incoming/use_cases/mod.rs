mod edit_portfolio;
mod get_portfolio;
mod theme;
mod toggle_edit_mode;

pub use edit_portfolio::{EditPortfolioError, EditPortfolioOutput, EditPortfolioUseCase};
pub use get_portfolio::{GetPortfolioDocumentUseCase, GetPortfolioViewUseCase};
pub use theme::{GetThemeUseCase, ThemeOutput, ToggleThemeUseCase};
pub use toggle_edit_mode::ToggleEditModeUseCase;
