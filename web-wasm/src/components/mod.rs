//! UIコンポーネント

pub mod analysis_page;
pub mod confidence_meter;
pub mod header;
pub mod hero;
pub mod home_page;
pub mod recommendations;
pub mod results_panel;
pub mod team_page;
pub mod upload_area;
