//! ホーム画面（栄養素の解説）

use leptos::prelude::*;
use leaf_nutrition_common::content::{Block, CardImage, InfoCard, HOME_HERO, INFO_CARDS};
use crate::components::{header::RouteLink, hero::Hero};
use crate::router::BrowserRouter;

#[component]
pub fn HomePage(router: BrowserRouter) -> impl IntoView {
    view! {
        <div class="container">
            <Hero hero=HOME_HERO />

            <div class="info-grid">
                {INFO_CARDS
                    .iter()
                    .map(|card| view! { <InfoCardView card=*card router=router /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn InfoCardView(card: InfoCard, router: BrowserRouter) -> impl IntoView {
    view! {
        <section class="info-card card">
            <div class="card-header">
                <h3>{card.heading}</h3>
            </div>
            <div class="card-content">
                {card.image.map(|image| view! { <CardImageView image=image /> })}
                {card.body.iter().map(|block| render_block(*block, router)).collect_view()}
            </div>
        </section>
    }
}

/// 読み込みに失敗したら一度だけ代替画像に切り替える
#[component]
fn CardImageView(image: CardImage) -> impl IntoView {
    let (src, set_src) = signal(image.src);

    let on_error = move |_| {
        if let Some(fallback) = image.fallback {
            if src.get_untracked() != fallback {
                set_src.set(fallback);
            }
        }
    };

    view! {
        <div class="info-image-container">
            <img src=move || src.get() alt=image.alt class="info-image" on:error=on_error />
        </div>
    }
}

fn render_block(block: Block, router: BrowserRouter) -> AnyView {
    match block {
        Block::Text(text) => view! { <p>{text}</p> }.into_any(),
        Block::Heading(text) => view! { <h4>{text}</h4> }.into_any(),
        Block::Labeled { label, text } => view! {
            <p><strong>{label}</strong>" "{text}</p>
        }
        .into_any(),
        Block::Bullets(items) => view! {
            <ul>
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        Block::Steps(steps) => view! {
            <ol>
                {steps
                    .iter()
                    .map(|(label, text)| view! { <li><strong>{*label}</strong>" "{*text}</li> })
                    .collect_view()}
            </ol>
        }
        .into_any(),
        Block::Highlights(items) => view! {
            <ul>
                {items
                    .iter()
                    .map(|(label, text)| view! { <li><strong>{*label}</strong>" "{*text}</li> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        Block::Cta { label, path } => view! {
            <div style="margin-top: 1.5rem;">
                <RouteLink router=router path=path class="btn btn-primary">
                    {label}
                </RouteLink>
            </div>
        }
        .into_any(),
    }
}
