//! ブラウザ履歴と連動するルーター
//!
//! 状態は `Navigator` に任せ、ここでは pushState と popstate だけを扱う。

use gloo::events::EventListener;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;
use leaf_nutrition_common::{Navigator, View};
use crate::reactive::update_on_success;

#[derive(Clone, Copy)]
pub struct BrowserRouter {
    navigator: RwSignal<Navigator>,
}

fn location_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

impl BrowserRouter {
    /// 初期ロケーションを解決し、戻る/進むを購読する
    pub fn install() -> Self {
        let router = Self {
            navigator: RwSignal::new(Navigator::new(&location_path())),
        };

        if let Some(window) = web_sys::window() {
            // アプリの寿命と同じなので解除しない
            EventListener::new(&window, "popstate", move |_| router.handle_route()).forget();
        }

        router
    }

    pub fn handle_route(&self) {
        let location = location_path();
        self.navigator.update(|n| {
            n.handle_route(&location);
        });
    }

    /// 既知のパスなら履歴に積んで再描画、未知なら何もしない
    pub fn navigate(&self, path: &str) {
        let Some(Ok(route)) = update_on_success(&self.navigator, |n| n.navigate(path).ok_or(())) else {
            log::debug!("ignoring unknown route {}", path);
            return;
        };

        let pushed = web_sys::window()
            .ok_or_else(|| JsValue::from_str("window is unavailable"))
            .and_then(|w| w.history())
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(route.path)));
        if let Err(e) = pushed {
            log::warn!("pushState failed: {:?}", e);
        }
    }

    /// リンクのクリックを横取りしてクライアント側で遷移する
    pub fn on_link_click(self, path: &'static str) -> impl Fn(MouseEvent) + Copy + Send + Sync + 'static {
        move |ev: MouseEvent| {
            ev.prevent_default();
            self.navigate(path);
        }
    }

    pub fn view(&self) -> View {
        self.navigator.with(|n| n.view())
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.navigator.with(|n| n.is_active(path))
    }
}
