use chrono::{DateTime, Utc};
use chrono_tz::Africa::Algiers;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::CLOCK_REFRESH_MS;

/// Wall-clock time at the owner's location (GMT+1, no daylight saving).
pub fn format_local_time(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Algiers).format("%H:%M").to_string()
}

/// Local time string, refreshed once a minute.
#[hook]
pub fn use_current_time() -> String {
    let now = use_state(|| format_local_time(Utc::now()));

    {
        let now = now.clone();
        use_interval(move || now.set(format_local_time(Utc::now())), CLOCK_REFRESH_MS);
    }

    (*now).clone()
}
