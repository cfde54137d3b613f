//! File Reading Helpers
//!
//! Recipient and customer lists arrive as user-selected text files. The read
//! goes through the `File::text()` promise; callers flip their own pending
//! flag around the callback so the picker stays disabled while a read is in
//! flight.

use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// Read a user-selected file as UTF-8 text. `on_done` receives the file
/// contents or a display-ready error message.
pub fn read_text_file(file: File, on_done: impl FnOnce(Result<String, String>) + 'static) {
    let name = file.name();
    spawn_local(async move {
        match JsFuture::from(file.text()).await {
            Ok(value) => on_done(Ok(value.as_string().unwrap_or_default())),
            Err(_) => on_done(Err(format!("Could not read {name}"))),
        }
    });
}
