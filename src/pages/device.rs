use evox_data::{
    build_date, build_identifier, default_branch, download_count_display, endpoints, size_gb,
    version_label_display, BranchBuilds,
};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::changelog_panel::ChangelogPanel;
use crate::components::device_not_found::DeviceNotFound;
use crate::components::first_visit_warning::FirstVisitWarning;
use crate::components::icons::{BookOpen, Download, FileText, Github, Heart, MessageSquare};
use crate::components::instructions_panel::InstructionsPanel;
use crate::components::loading::Loading;
use crate::components::unmaintained_warning::UnmaintainedWarning;
use crate::hooks::device::use_device_data;
use crate::storage;

/// Download waiting on an unmaintained-build acknowledgement.
#[derive(Clone)]
struct PendingDownload {
    identifier: String,
    url: String,
}

fn open_download(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            log::warn!("failed to open download for {url}");
        }
    }
}

/// Per-device download page: branch tabs, build cards, changelog and
/// flashing-instruction overlays, and the download gates.
#[component]
pub fn Device() -> impl IntoView {
    let params = use_params_map();
    let codename = Signal::derive(move || params.read().get("codename").unwrap_or_default());

    let state = use_device_data(codename);

    let (selected_branch, set_selected_branch) = signal(None::<String>);
    Effect::new(move || {
        let default = state
            .device_data
            .with(|data| data.as_ref().and_then(|d| default_branch(&d.branches_data)));
        set_selected_branch.set(default);
    });

    let (show_first_visit, set_show_first_visit) =
        signal(!storage::has_seen_first_visit_warning());
    let (ack_store, set_ack_store) = signal(storage::load_acknowledged());
    let (pending, set_pending) = signal(None::<PendingDownload>);
    let (changelog_open, set_changelog_open) = signal(false);
    let (instructions_open, set_instructions_open) = signal(false);

    view! {
        <Title text=move || format!("{} | Evolution X", codename.get()) />
        <div class="pt-24 pb-24 px-6 max-w-5xl mx-auto">
            {move || {
                if state.loading.get() {
                    return view! { <Loading /> }.into_any();
                }
                if let Some(err) = state.error.get() {
                    return view! {
                        <p class="text-center text-red-400 py-32">"Failed to load device data: " {err}</p>
                    }
                    .into_any();
                }
                let Some(data) = state.device_data.get() else {
                    return view! { <DeviceNotFound codename=codename.get() /> }.into_any();
                };

                let codename_str = data.device_info.codename.clone();
                let name = data
                    .branches_data
                    .iter()
                    .flat_map(|b| b.ota.iter())
                    .find_map(|b| b.device.clone())
                    .or_else(|| data.device_info.device.clone())
                    .unwrap_or_else(|| codename_str.clone());
                let oem = data
                    .branches_data
                    .iter()
                    .flat_map(|b| b.ota.iter())
                    .find_map(|b| b.oem.clone())
                    .or_else(|| data.device_info.oem.clone())
                    .unwrap_or_default();

                let tabs = data
                    .branches_data
                    .iter()
                    .map(|branch| {
                        let branch_name = branch.branch.clone();
                        let label = version_label_display(&branch.version);
                        let is_selected = {
                            let branch_name = branch_name.clone();
                            move || selected_branch.get().as_deref() == Some(branch_name.as_str())
                        };
                        let select = {
                            let branch_name = branch_name.clone();
                            move |_| set_selected_branch.set(Some(branch_name.clone()))
                        };
                        view! {
                            <button
                                on:click=select
                                class=move || {
                                    if is_selected() {
                                        "px-5 py-2 rounded-full text-sm font-medium bg-blue-600 text-white"
                                    } else {
                                        "px-5 py-2 rounded-full text-sm font-medium bg-slate-900 border border-slate-800 text-slate-400 hover:text-white"
                                    }
                                }
                            >
                                {label}
                                <span class="text-xs opacity-70 ml-2">{branch_name.clone()}</span>
                            </button>
                        }
                    })
                    .collect_view();

                let active = data
                    .branches_data
                    .iter()
                    .find(|b| selected_branch.get().as_deref() == Some(b.branch.as_str()))
                    .cloned();

                view! {
                    <div class="text-center mb-12">
                        <img
                            src=endpoints::device_image_url(&codename_str)
                            alt=name.clone()
                            class="h-56 mx-auto mb-6 object-contain"
                        />
                        <h1 class="text-4xl font-bold text-white mb-2">
                            {oem.clone()} " " {name.clone()}
                        </h1>
                        <p class="text-slate-400 font-mono">{codename_str.clone()}</p>
                    </div>

                    {(!data.branches_data.is_empty()).then(|| view! {
                        <div class="flex flex-wrap justify-center gap-2 mb-10">{tabs}</div>
                    })}

                    {match active {
                        Some(branch) => branch_section(
                            branch,
                            codename_str.clone(),
                            ack_store,
                            set_pending,
                            set_changelog_open,
                            set_instructions_open,
                        )
                        .into_any(),
                        None => view! {
                            <p class="text-center text-slate-400 py-16">
                                "No builds are currently available for this device."
                            </p>
                        }
                        .into_any(),
                    }}
                }
                .into_any()
            }}

            // Overlays
            {move || {
                let branch = selected_branch.get()?;
                let version = state.device_data.with(|data| {
                    data.as_ref().and_then(|d| {
                        d.branches_data
                            .iter()
                            .find(|b| b.branch == branch)
                            .map(|b| version_label_display(&b.version))
                    })
                })?;
                changelog_open.get().then(|| {
                    let close = Callback::new(move |_| set_changelog_open.set(false));
                    view! {
                        <ChangelogPanel
                            branch=branch.clone()
                            codename=codename.get()
                            version=version.clone()
                            on_close=close
                        />
                    }
                })
            }}
            {move || {
                let branch = selected_branch.get()?;
                instructions_open.get().then(|| {
                    let close = Callback::new(move |_| set_instructions_open.set(false));
                    view! {
                        <InstructionsPanel branch=branch.clone() codename=codename.get() on_close=close />
                    }
                })
            }}

            // Download gates
            {move || {
                pending.get().map(|p| {
                    let acknowledge = {
                        let p = p.clone();
                        Callback::new(move |_| {
                            let store = storage::record_acknowledged(&p.identifier);
                            set_ack_store.set(store);
                            set_pending.set(None);
                            open_download(&p.url);
                        })
                    };
                    let close = Callback::new(move |_| set_pending.set(None));
                    view! { <UnmaintainedWarning on_acknowledge=acknowledge on_close=close /> }
                })
            }}
            {move || {
                show_first_visit.get().then(|| {
                    let dismiss = Callback::new(move |_| {
                        storage::mark_first_visit_warning_seen();
                        set_show_first_visit.set(false);
                    });
                    view! { <FirstVisitWarning on_dismiss=dismiss /> }
                })
            }}
        </div>
    }
}

fn branch_section(
    branch: BranchBuilds,
    codename: String,
    ack_store: ReadSignal<evox_data::AcknowledgedBuilds>,
    set_pending: WriteSignal<Option<PendingDownload>>,
    set_changelog_open: WriteSignal<bool>,
    set_instructions_open: WriteSignal<bool>,
) -> impl IntoView {
    let cards = branch
        .ota
        .iter()
        .map(|build| {
            let downloads = branch.download_count(&build.filename);
            let identifier = build_identifier(&codename, &build.version, &build.filename);
            let url = build.download.clone();
            let maintained = build.currently_maintained;
            let on_download = move |_| {
                if maintained || ack_store.with(|s| s.is_acknowledged(&identifier)) {
                    open_download(&url);
                } else {
                    set_pending.set(Some(PendingDownload {
                        identifier: identifier.clone(),
                        url: url.clone(),
                    }));
                }
            };

            view! {
                <div class="bg-slate-900/50 border border-slate-800 rounded-2xl p-8 mb-6">
                    <div class="flex flex-wrap justify-between items-start gap-4 mb-6">
                        <div>
                            <h3 class="text-lg font-bold text-white mb-1">
                                {version_label_display(&build.version)}
                                {(!build.buildtype.is_empty()).then(|| view! {
                                    <span class="text-xs font-medium bg-slate-800 text-slate-300 rounded-full px-3 py-1 ml-3 align-middle">
                                        {build.buildtype.clone()}
                                    </span>
                                })}
                            </h3>
                            <p class="text-sm text-slate-500 font-mono break-all">{build.filename.clone()}</p>
                        </div>
                        {(!maintained).then(|| view! {
                            <span class="text-xs font-medium bg-amber-900/40 text-amber-400 rounded-full px-3 py-1">
                                "Unmaintained"
                            </span>
                        })}
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-3 gap-4 text-sm mb-6">
                        <div>
                            <p class="text-slate-500">"Size"</p>
                            <p class="text-slate-300">{size_gb(build.size)}</p>
                        </div>
                        <div>
                            <p class="text-slate-500">"Date"</p>
                            <p class="text-slate-300">{build_date(build.timestamp)}</p>
                        </div>
                        <div>
                            <p class="text-slate-500">"Downloads"</p>
                            <p class="text-slate-300">{download_count_display(downloads)}</p>
                        </div>
                    </div>

                    {(!build.maintainer.is_empty()).then(|| view! {
                        <div class="flex items-center gap-3 mb-6">
                            <img
                                src=endpoints::avatar_url(&build.github)
                                alt=build.maintainer.clone()
                                class="w-10 h-10 rounded-full border border-slate-700"
                            />
                            <div>
                                <p class="text-sm text-white font-medium">{build.maintainer.clone()}</p>
                                <div class="flex items-center gap-3 text-slate-400">
                                    {(!build.github.is_empty()).then(|| view! {
                                        <a
                                            href=endpoints::github_profile_url(&build.github)
                                            target="_blank"
                                            rel="noreferrer"
                                            class="hover:text-white transition-colors"
                                        >
                                            <Github class="w-4 h-4" />
                                        </a>
                                    })}
                                    {build.paypal.clone().map(|paypal| view! {
                                        <a
                                            href=paypal
                                            target="_blank"
                                            rel="noreferrer"
                                            class="hover:text-white transition-colors"
                                        >
                                            <Heart class="w-4 h-4" />
                                        </a>
                                    })}
                                    {build.forum.clone().map(|forum| view! {
                                        <a
                                            href=forum
                                            target="_blank"
                                            rel="noreferrer"
                                            class="hover:text-white transition-colors"
                                        >
                                            <MessageSquare class="w-4 h-4" />
                                        </a>
                                    })}
                                </div>
                            </div>
                        </div>
                    })}

                    <button
                        on:click=on_download
                        class="px-8 py-3 bg-white text-black font-bold rounded-full hover:bg-slate-200 transition-colors flex items-center"
                    >
                        <Download class="w-5 h-5 mr-2" />
                        "Download"
                    </button>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="flex justify-center gap-4 mb-10">
            <button
                on:click=move |_| set_changelog_open.set(true)
                class="px-6 py-2 bg-slate-900 border border-slate-800 text-slate-300 rounded-full hover:text-white transition-colors flex items-center text-sm"
            >
                <FileText class="w-4 h-4 mr-2" />
                "Changelog"
            </button>
            <button
                on:click=move |_| set_instructions_open.set(true)
                class="px-6 py-2 bg-slate-900 border border-slate-800 text-slate-300 rounded-full hover:text-white transition-colors flex items-center text-sm"
            >
                <BookOpen class="w-4 h-4 mr-2" />
                "Flashing Instructions"
            </button>
        </div>
        {(branch.ota.is_empty()).then(|| view! {
            <p class="text-center text-slate-400 py-8">"No builds on this branch yet."</p>
        })}
        {cards}
    }
}
