//! Device page data loading
//!
//! Joins the device catalog, version catalog, per-branch OTA build lists,
//! and per-build download counts into one [`DeviceData`]. Catalog fetches
//! are fatal to the page; per-branch and per-build fetches degrade to
//! dropped branches and zero counts.

use evox_data::prelude::*;
use evox_data::{
    endpoints, find_device, join_branches, settle_all, DeviceData, DeviceEntry, OtaResponse,
    StatsResponse, VersionEntry,
};
use futures_util::future;
use leptos::prelude::*;

/// Signals the device page renders from.
#[derive(Clone, Copy)]
pub struct DeviceDataState {
    /// `None` while loading or when the codename is not in the catalog.
    pub device_data: ReadSignal<Option<DeviceData>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

async fn load_device_data(codename: &str) -> Result<Option<DeviceData>> {
    let (devices, versions) = future::join(
        crate::fetch::fetch_json::<Vec<DeviceEntry>>(&endpoints::devices_url()),
        crate::fetch::fetch_json::<Vec<VersionEntry>>(&endpoints::versions_url()),
    )
    .await;
    let (devices, versions) = (devices?, versions?);
    let Some(device) = find_device(&devices, codename).cloned() else {
        return Ok(None);
    };

    let ota_results = settle_all(device.branches.clone(), |branch| async move {
        let url = endpoints::ota_builds_url(&branch, codename);
        crate::fetch::fetch_json_optional::<OtaResponse>(&url)
            .await
            .map(|resp| resp.response)
    })
    .await;

    let joined = join_branches(&device.branches, &versions, ota_results);

    let branches_data = settle_all(joined, |branch| async move {
        let counts = settle_all(branch.ota.clone(), |build| async move {
            if build.version.is_empty() || build.filename.is_empty() {
                return 0;
            }
            let url = endpoints::download_stats_url(codename, &build.version, &build.filename);
            crate::fetch::fetch_json_optional::<StatsResponse>(&url)
                .await
                .map(|stats| stats.download_count())
                .unwrap_or(0)
        })
        .await;
        branch.with_downloads(counts)
    })
    .await;

    Ok(Some(DeviceData {
        device_info: device,
        branches_data,
    }))
}

/// Loads device page data whenever `codename` changes.
///
/// Each run bumps a generation counter; a resolution whose generation no
/// longer matches (the route changed, or the page unmounted) is dropped
/// instead of writing into stale signals.
pub fn use_device_data(codename: Signal<String>) -> DeviceDataState {
    let (device_data, set_device_data) = signal(None::<DeviceData>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let generation = StoredValue::new(0_u64);
    on_cleanup(move || {
        generation.try_update_value(|g| *g += 1);
    });

    Effect::new(move || {
        let codename = codename.get();
        let run = generation.get_value() + 1;
        generation.set_value(run);

        if codename.is_empty() {
            set_device_data.set(None);
            set_loading.set(false);
            set_error.set(Some(Error::missing_input("Codename").to_string()));
            return;
        }

        set_device_data.set(None);
        set_loading.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            let result = load_device_data(&codename).await;
            // Stale when the route changed or the page unmounted mid-flight.
            if generation.try_get_value() != Some(run) {
                log::debug!("dropping stale device load for {codename}");
                return;
            }
            match result {
                Ok(data) => set_device_data.set(data),
                Err(err) => {
                    log::error!("failed to load device {codename}: {err}");
                    set_error.set(Some(err.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    DeviceDataState {
        device_data,
        loading,
        error,
    }
}
