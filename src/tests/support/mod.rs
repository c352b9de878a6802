pub mod app_state_builder;
pub mod portfolio_test_fixtures;
pub mod stubs;
