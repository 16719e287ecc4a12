//! 解析結果（診断・信頼度）

use leptos::html;
use leptos::prelude::*;
use leaf_nutrition_common::Diagnosis;
use crate::components::confidence_meter::ConfidenceMeter;

#[component]
pub fn ResultsPanel(
    diagnosis: Signal<Option<Diagnosis>>,
    fill_width: ReadSignal<u8>,
    section_ref: NodeRef<html::Section>,
) -> impl IntoView {
    let record = move || diagnosis.with(|d| d.as_ref().map(|d| d.record));
    let percent = Signal::derive(move || {
        diagnosis.with(|d| d.as_ref().map(|d| d.confidence_percent()).unwrap_or(0))
    });

    view! {
        <section
            class="results-section card"
            id="resultsSection"
            node_ref=section_ref
            style:display=move || if record().is_some() { "block" } else { "none" }
        >
            <div class="card-header">
                <h3>"Analysis Results"</h3>
            </div>
            <div class="result-content">
                <div class="status-badge" id="statusBadge">
                    <div
                        class=move || format!("status-icon {}", record().map(|r| r.status_class()).unwrap_or_default())
                        id="statusIcon"
                    >
                        {move || record().map(|r| r.icon).unwrap_or_default()}
                    </div>
                    <div class="status-text">
                        <span class="status-label">"Diagnosis"</span>
                        <span class="status-value" id="diagnosisText">
                            {move || record().map(|r| r.diagnosis).unwrap_or("-")}
                        </span>
                    </div>
                </div>
                <ConfidenceMeter percent=percent fill_width=fill_width />
            </div>
        </section>
    }
}
