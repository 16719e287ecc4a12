//! 信頼度メーター

use leptos::prelude::*;

/// `percent` は表示値、`fill_width` はアニメーション中のバー幅
#[component]
pub fn ConfidenceMeter(percent: Signal<u8>, fill_width: ReadSignal<u8>) -> impl IntoView {
    view! {
        <div class="confidence-meter">
            <div class="confidence-label">
                <span>"Confidence Level"</span>
                <span id="confidenceValue">{move || format!("{}%", percent.get())}</span>
            </div>
            <div class="confidence-bar">
                <div
                    class="confidence-fill"
                    id="confidenceFill"
                    style=move || format!("width: {}%", fill_width.get())
                />
            </div>
        </div>
    }
}
