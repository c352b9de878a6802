mod add_skill;
mod edit_response;
mod get_portfolio;
mod remove_skill;
mod theme;
mod toggle_edit_mode;
mod update_personal_info;
mod update_profile_picture;
mod update_social_link;
mod update_summary;

pub use add_skill::*;
pub use get_portfolio::*;
pub use remove_skill::*;
pub use theme::*;
pub use toggle_edit_mode::*;
pub use update_personal_info::*;
pub use update_profile_picture::*;
pub use update_social_link::*;
pub use update_summary::*;
