//! 画面見出し

use leptos::prelude::*;
use leaf_nutrition_common::content::PageHero;

#[component]
pub fn Hero(hero: PageHero) -> impl IntoView {
    view! {
        <section class="hero-section">
            <h2 class="hero-title">{hero.title}</h2>
            <p class="hero-description">{hero.description}</p>
        </section>
    }
}
