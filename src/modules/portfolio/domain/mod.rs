pub mod defaults;
pub mod edit_mode;
pub mod entities;
pub mod mutations;
pub mod theme;
pub mod view;
pub mod visibility;
