//! Coffee Leaf Nutrition CLI
//!
//! 予測APIに葉の画像を送り、診断と推奨事項を端末に表示する

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod upload;
