//! Thin browser glue: clock, file downloads, location.
//!
//! TRADE-OFFS
//! ==========
//! Every helper is best-effort. Off-browser builds return deterministic
//! fallbacks so server rendering and unit tests never touch `web_sys`.

/// Milliseconds since the Unix epoch according to the browser clock.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Current time as an ISO-8601 string, e.g. `2026-10-19T08:15:00.000Z`.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01T00:00:00.000Z".to_owned()
    }
}

/// Offer `contents` to the user as a file download. Returns `false` when the
/// browser refused any step.
pub fn download_text(filename: &str, mime: &str, contents: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return false;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return false;
        };
        let anchor = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("a").ok())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        let Some(anchor) = anchor else {
            let _ = web_sys::Url::revoke_object_url(&url);
            return false;
        };
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, mime, contents);
        false
    }
}

/// Navigate the window to `href` (used for `mailto:` links).
pub fn open_href(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Read the first file picked in an `<input type="file">` as a data URL.
///
/// `validate` sees the file's MIME type and size first; a rejection is
/// handed to `on_error` and the file is never read.
#[cfg(feature = "hydrate")]
pub fn read_picked_image<V, E, OnErr, OnOk>(ev: &web_sys::Event, validate: V, on_error: OnErr, on_loaded: OnOk)
where
    V: FnOnce(&str, f64) -> Result<(), E>,
    OnErr: FnOnce(E),
    OnOk: FnOnce(String) + 'static,
{
    use wasm_bindgen::JsCast;

    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    if let Err(e) = validate(&file.type_(), file.size()) {
        on_error(e);
        return;
    }
    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };
    let reader_handle = reader.clone();
    let onload = wasm_bindgen::closure::Closure::once_into_js(move |_ev: web_sys::Event| {
        if let Some(url) = reader_handle.result().ok().and_then(|r| r.as_string()) {
            on_loaded(url);
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    let _ = reader.read_as_data_url(&file);
}
