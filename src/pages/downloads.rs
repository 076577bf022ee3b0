use evox_data::{filter_summaries, visible_oems};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::icons::Search;
use crate::components::loading::Loading;
use crate::hooks::fleet::use_fleet_summaries;

/// Fleet listing with search, maintenance, and OEM filters.
#[component]
pub fn Downloads() -> impl IntoView {
    let fleet = use_fleet_summaries();

    let (search, set_search) = signal(String::new());
    let (maintained, set_maintained) = signal(true);
    let (oem_filter, set_oem_filter) = signal(None::<String>);

    // Flipping the maintenance toggle can strand the OEM filter on an OEM
    // with no visible devices, so it resets.
    let toggle_maintained = move |value: bool| {
        set_maintained.set(value);
        set_oem_filter.set(None);
    };

    let oems = move || visible_oems(&fleet.summaries.get(), Some(maintained.get()));

    view! {
        <Title text="Downloads | Evolution X" />
        <div class="pt-24 pb-24 px-6 max-w-7xl mx-auto">
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold text-white mb-4">"Download Evolution X"</h1>
                <p class="text-slate-400">"Find your device and start evolving."</p>
            </div>

            // Search box
            <div class="relative max-w-xl mx-auto mb-8">
                <Search class="w-5 h-5 absolute left-4 top-1/2 -translate-y-1/2 text-slate-500" />
                <input
                    type="text"
                    placeholder="Search device, codename, or OEM..."
                    class="w-full bg-slate-900 border border-slate-800 rounded-full pl-12 pr-6 py-3 text-white placeholder-slate-500 focus:outline-none focus:border-blue-500"
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    prop:value=search
                />
            </div>

            // Maintenance toggle
            <div class="flex justify-center gap-2 mb-6">
                <button
                    on:click=move |_| toggle_maintained(true)
                    class=move || {
                        if maintained.get() {
                            "px-5 py-2 rounded-full text-sm font-medium bg-blue-600 text-white"
                        } else {
                            "px-5 py-2 rounded-full text-sm font-medium bg-slate-900 border border-slate-800 text-slate-400 hover:text-white"
                        }
                    }
                >
                    "Maintained"
                </button>
                <button
                    on:click=move |_| toggle_maintained(false)
                    class=move || {
                        if !maintained.get() {
                            "px-5 py-2 rounded-full text-sm font-medium bg-blue-600 text-white"
                        } else {
                            "px-5 py-2 rounded-full text-sm font-medium bg-slate-900 border border-slate-800 text-slate-400 hover:text-white"
                        }
                    }
                >
                    "Unmaintained"
                </button>
            </div>

            // OEM chips narrow with the maintenance toggle
            <div class="flex flex-wrap justify-center gap-2 mb-12">
                <button
                    on:click=move |_| set_oem_filter.set(None)
                    class=move || {
                        if oem_filter.get().is_none() {
                            "px-4 py-1.5 rounded-full text-xs font-medium bg-slate-700 text-white"
                        } else {
                            "px-4 py-1.5 rounded-full text-xs font-medium bg-slate-900 border border-slate-800 text-slate-400 hover:text-white"
                        }
                    }
                >
                    "All OEMs"
                </button>
                {move || oems().into_iter().map(|oem| {
                    let selected = {
                        let oem = oem.clone();
                        move || oem_filter.get().as_deref() == Some(oem.as_str())
                    };
                    let select = {
                        let oem = oem.clone();
                        move |_| set_oem_filter.set(Some(oem.clone()))
                    };
                    view! {
                        <button
                            on:click=select
                            class=move || {
                                if selected() {
                                    "px-4 py-1.5 rounded-full text-xs font-medium bg-slate-700 text-white"
                                } else {
                                    "px-4 py-1.5 rounded-full text-xs font-medium bg-slate-900 border border-slate-800 text-slate-400 hover:text-white"
                                }
                            }
                        >
                            {oem}
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || {
                if fleet.loading.get() {
                    return view! { <Loading /> }.into_any();
                }
                if let Some(err) = fleet.error.get() {
                    return view! {
                        <p class="text-center text-red-400">"Failed to load devices: " {err}</p>
                    }
                    .into_any();
                }
                let summaries = fleet.summaries.get();
                let oem = oem_filter.get();
                let visible = filter_summaries(
                    &summaries,
                    &search.get(),
                    Some(maintained.get()),
                    oem.as_deref(),
                );
                if visible.is_empty() {
                    return view! {
                        <p class="text-center text-slate-400">"No devices match your filters."</p>
                    }
                    .into_any();
                }
                let cards = visible
                    .into_iter()
                    .cloned()
                    .map(|summary| {
                        let href = format!("/downloads/{}", summary.codename);
                        view! {
                            <A href=href attr:class="block">
                                <div class="bg-slate-900/50 border border-slate-800 rounded-2xl p-6 hover:border-slate-700 transition-colors h-full">
                                    <img
                                        src=summary.image_url.clone()
                                        alt=summary.device.clone()
                                        class="h-40 mx-auto mb-4 object-contain"
                                    />
                                    <div class="flex items-center gap-2 mb-1">
                                        <h3 class="text-lg font-bold text-white">{summary.device.clone()}</h3>
                                        {summary.supports_latest.then(|| view! {
                                            <img
                                                src=evox_data::endpoints::latest_version_badge_url()
                                                alt="Supports latest"
                                                class="h-4"
                                            />
                                        })}
                                    </div>
                                    <p class="text-sm text-slate-400">
                                        {summary.oem.clone()} " \u{2022} " {summary.codename.clone()}
                                    </p>
                                </div>
                            </A>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                        {cards}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
