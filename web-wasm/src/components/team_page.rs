//! チーム紹介画面

use leptos::prelude::*;
use leaf_nutrition_common::content::{TeamMember, TEAM, TEAM_HERO};
use crate::components::hero::Hero;

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <div class="container">
            <Hero hero=TEAM_HERO />

            <div class="team-grid">
                {TEAM.iter().map(|member| view! { <TeamCard member=*member /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TeamCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="team-card card">
            <div class="member-image-container">
                <img src=member.image alt=member.name class="member-image" />
            </div>
            <div class="member-info">
                <h4>{member.name}</h4>
                <p class="member-dept">{member.role}</p>
            </div>
            <div class="member-social">
                <a href=member.linkedin class="social-link" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
                        <rect x="2" y="9" width="4" height="12"></rect>
                        <circle cx="4" cy="4" r="2"></circle>
                    </svg>
                </a>
                <a href=member.github class="social-link" target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"></path>
                    </svg>
                </a>
            </div>
        </div>
    }
}
