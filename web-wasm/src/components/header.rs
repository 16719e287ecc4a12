//! ヘッダー・フッター・画面内リンク

use leptos::prelude::*;
use leaf_nutrition_common::NAV_LINKS;
use crate::router::BrowserRouter;

/// クリックをクライアント側の遷移に置き換えるリンク
///
/// `nav` が true のときは現在のパスと一致すると `active` が付く
#[component]
pub fn RouteLink(
    router: BrowserRouter,
    path: &'static str,
    #[prop(into)] class: String,
    #[prop(optional)] nav: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=path
            data-route=path
            class=class
            class:active=move || nav && router.is_active(path)
            on:click=router.on_link_click(path)
        >
            {children()}
        </a>
    }
}

#[component]
pub fn Header(router: BrowserRouter) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">"☕ Coffee Leaf Nutrition"</h1>
                <nav class="nav">
                    {NAV_LINKS
                        .iter()
                        .copied()
                        .map(|link| view! {
                            <RouteLink router=router path=link.path class="nav-link" nav=true>
                                {link.label}
                            </RouteLink>
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Coffee Leaf Nutrition Prediction System"</p>
        </footer>
    }
}
