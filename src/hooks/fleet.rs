//! Fleet listing data loading
//!
//! Fetches every device's branch build lists concurrently and reduces each
//! to a [`DeviceSummary`] card, newest build first.

use evox_data::prelude::*;
use evox_data::{
    endpoints, is_vanilla, latest_branch, settle_all, sort_by_latest, summarize_device,
    DeviceEntry, DeviceSummary, OtaResponse, VersionEntry,
};
use futures_util::future;
use leptos::prelude::*;

/// Signals the downloads listing renders from.
#[derive(Clone, Copy)]
pub struct FleetState {
    pub summaries: ReadSignal<Vec<DeviceSummary>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

async fn load_fleet() -> Result<Vec<DeviceSummary>> {
    let (devices, versions) = future::join(
        crate::fetch::fetch_json::<Vec<DeviceEntry>>(&endpoints::devices_url()),
        crate::fetch::fetch_json::<Vec<VersionEntry>>(&endpoints::versions_url()),
    )
    .await;
    let (devices, versions) = (devices?, versions?);
    let latest = latest_branch(&versions).map(str::to_string);

    let mut summaries = settle_all(devices, |device| {
        let latest = latest.clone();
        async move {
            // Vanilla branches never appear on listing cards, skip their fetches.
            let branches: Vec<String> = device
                .branches
                .iter()
                .filter(|branch| !is_vanilla(branch))
                .cloned()
                .collect();
            let ota_results = settle_all(branches, |branch| {
                let codename = device.codename.clone();
                async move {
                    let url = endpoints::ota_builds_url(&branch, &codename);
                    crate::fetch::fetch_json_optional::<OtaResponse>(&url)
                        .await
                        .map(|resp| resp.response)
                }
            })
            .await;
            summarize_device(&device, latest.as_deref(), &ota_results)
        }
    })
    .await;

    sort_by_latest(&mut summaries);
    Ok(summaries)
}

/// Loads the fleet once on mount, with the same stale-resolution guard as
/// the device hook.
pub fn use_fleet_summaries() -> FleetState {
    let (summaries, set_summaries) = signal(Vec::<DeviceSummary>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let generation = StoredValue::new(0_u64);
    on_cleanup(move || {
        generation.try_update_value(|g| *g += 1);
    });

    Effect::new(move || {
        let run = generation.get_value() + 1;
        generation.set_value(run);

        leptos::task::spawn_local(async move {
            let result = load_fleet().await;
            if generation.try_get_value() != Some(run) {
                log::debug!("dropping stale fleet load");
                return;
            }
            match result {
                Ok(fleet) => {
                    log::debug!("loaded {} device summaries", fleet.len());
                    set_summaries.set(fleet);
                }
                Err(err) => {
                    log::error!("failed to load fleet: {err}");
                    set_error.set(Some(err.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    FleetState {
        summaries,
        loading,
        error,
    }
}
