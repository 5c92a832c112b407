use log::warn;

fn set_body_overflow(value: &str) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    if body.style().set_property("overflow", value).is_err() {
        warn!("could not set body overflow to {:?}", value);
    }
}

/// Stops the page behind an overlay from scrolling.
pub fn lock_body_scroll() {
    set_body_overflow("hidden");
}

pub fn unlock_body_scroll() {
    set_body_overflow("");
}
