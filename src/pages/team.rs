use evox_data::{endpoints, TeamMember, TeamRoster};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::Github;
use crate::components::loading::Loading;
use crate::fetch::fetch_json;

/// Core team page: founders first, then the rest of the roster.
#[component]
pub fn Team() -> impl IntoView {
    let (roster, set_roster) = signal(None::<TeamRoster>);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match fetch_json::<TeamRoster>(&endpoints::team_url()).await {
                Ok(data) => set_roster.set(Some(data)),
                Err(err) => {
                    log::error!("failed to load team roster: {err}");
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    });

    view! {
        <Title text="Team | Evolution X" />
        <div class="pt-24 pb-24 px-6 max-w-6xl mx-auto">
            <div class="text-center mb-16">
                <h1 class="text-4xl font-bold text-white mb-4">"The Team"</h1>
                <p class="text-slate-400">"The people behind Evolution X."</p>
            </div>

            {move || {
                if let Some(err) = error.get() {
                    return view! {
                        <p class="text-center text-red-400">"Failed to load team: " {err}</p>
                    }
                    .into_any();
                }
                let Some(roster) = roster.get() else {
                    return view! { <Loading /> }.into_any();
                };
                view! {
                    <section class="mb-16">
                        <h2 class="text-2xl font-bold text-white text-center mb-8">"Founders"</h2>
                        <div class="grid sm:grid-cols-2 gap-8 max-w-2xl mx-auto">
                            {roster.founders.iter().cloned().map(member_card).collect_view()}
                        </div>
                    </section>
                    <section>
                        <h2 class="text-2xl font-bold text-white text-center mb-8">"Team Members"</h2>
                        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                            {roster.team_members.iter().cloned().map(member_card).collect_view()}
                        </div>
                    </section>
                }
                .into_any()
            }}
        </div>
    }
}

fn member_card(member: TeamMember) -> impl IntoView {
    view! {
        <div class="bg-slate-900/50 border border-slate-800 rounded-2xl p-8 text-center hover:border-slate-700 transition-colors">
            <img
                src=endpoints::team_image_url(&member.imgsrc)
                alt=member.name.clone()
                class="w-24 h-24 rounded-full mx-auto mb-4 border border-slate-700 object-cover"
            />
            <h3 class="text-lg font-bold text-white">{member.name.clone()}</h3>
            {member.role.clone().map(|role| view! {
                <p class="text-sm text-slate-400 mb-2">{role}</p>
            })}
            {member.github.clone().map(|github| view! {
                <a
                    href=endpoints::github_profile_url(&github)
                    target="_blank"
                    rel="noreferrer"
                    class="inline-block text-slate-400 hover:text-white transition-colors mt-2"
                >
                    <Github class="w-5 h-5" />
                </a>
            })}
        </div>
    }
}
