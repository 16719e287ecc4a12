//! 栄養素の推奨事項と対処法

use leptos::prelude::*;
use leaf_nutrition_common::{Diagnosis, NutrientAdvice};

#[component]
pub fn RecommendationsPanel(diagnosis: Signal<Option<Diagnosis>>) -> impl IntoView {
    let record = move || diagnosis.with(|d| d.as_ref().map(|d| d.record));

    view! {
        <section
            class="recommendations-section card"
            id="recommendationsSection"
            style:display=move || if record().is_some() { "block" } else { "none" }
        >
            <div class="card-header">
                <h3>"Nutrient Recommendations"</h3>
                <p>"Based on the detected deficiency"</p>
            </div>
            <div class="recommendations-grid" id="recommendationsGrid">
                {move || record().map(|r| {
                    r.nutrients
                        .iter()
                        .map(|advice| view! { <NutrientCard advice=*advice /> })
                        .collect_view()
                })}
            </div>
            <div class="treatment-info" id="treatmentInfo">
                {move || record().map(|r| view! {
                    <h4>"Recommended Actions"</h4>
                    <ul>
                        {r.treatment.iter().map(|action| view! { <li>{*action}</li> }).collect_view()}
                    </ul>
                })}
            </div>
        </section>
    }
}

#[component]
fn NutrientCard(advice: NutrientAdvice) -> impl IntoView {
    view! {
        <div class="nutrient-card">
            <div class="nutrient-header">
                <div class=format!("nutrient-icon {}", advice.nutrient.key())>
                    {advice.nutrient.symbol()}
                </div>
                <div class="nutrient-name">{advice.nutrient.name()}</div>
            </div>
            <div class=format!("nutrient-status {}", advice.status.as_str())>
                {advice.status.badge()}
            </div>
            <div class="nutrient-description">{advice.description}</div>
        </div>
    }
}
