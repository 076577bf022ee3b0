//! Narrow local-storage interface
//!
//! Only two things persist in the browser: whether the visitor has seen the
//! one-time flashing warning, and which unmaintained builds they have
//! acknowledged. Storage being unavailable (private browsing, disabled)
//! degrades to the warnings simply reappearing.

use evox_data::AcknowledgedBuilds;

const FIRST_VISIT_KEY: &str = "hasSeenThermonuclearWarning";
const ACKNOWLEDGED_KEY: &str = "acknowledgedUnmaintained";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn read_key(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

fn write_key(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to persist {key} to local storage");
        }
    }
}

pub fn has_seen_first_visit_warning() -> bool {
    read_key(FIRST_VISIT_KEY).as_deref() == Some("true")
}

pub fn mark_first_visit_warning_seen() {
    write_key(FIRST_VISIT_KEY, "true");
}

pub fn load_acknowledged() -> AcknowledgedBuilds {
    read_key(ACKNOWLEDGED_KEY)
        .map(|json| AcknowledgedBuilds::from_json(&json))
        .unwrap_or_default()
}

/// Records an acknowledgement and returns the updated store.
pub fn record_acknowledged(identifier: &str) -> AcknowledgedBuilds {
    let mut store = load_acknowledged();
    store.acknowledge(identifier);
    write_key(ACKNOWLEDGED_KEY, &store.to_json());
    store
}
