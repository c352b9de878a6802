pub mod edit_portfolio_service;
pub mod get_portfolio_service;
pub mod persistence;
pub mod session;
pub mod theme_service;
pub mod toggle_edit_mode_service;
pub mod view_renderer;
