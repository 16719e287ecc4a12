//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leaf_nutrition_common::{ClientConfig, View};
use crate::components::{
    analysis_page::AnalysisPage,
    header::{Footer, Header},
    home_page::HomePage,
    team_page::TeamPage,
};
use crate::router::BrowserRouter;

/// 予測APIの設定（ビルド時に `LEAF_NUTRITION_ENDPOINT` で上書き可能）
pub fn client_config() -> ClientConfig {
    let config = match option_env!("LEAF_NUTRITION_ENDPOINT") {
        Some(endpoint) => ClientConfig::with_endpoint(endpoint),
        None => ClientConfig::default(),
    };

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("{}; using default endpoint", e);
            ClientConfig::default()
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let router = BrowserRouter::install();
    let config = client_config();

    view! {
        <Header router=router />

        // ルート変更ごとにこの領域だけを差し替える
        <main id="app-content" class="app-content">
            {move || match router.view() {
                View::Home => view! { <HomePage router=router /> }.into_any(),
                View::Analysis => view! { <AnalysisPage config=config.clone() /> }.into_any(),
                View::Team => view! { <TeamPage /> }.into_any(),
            }}
        </main>

        <Footer />
    }
}
