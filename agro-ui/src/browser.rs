//! Typed wrappers around the browser APIs the upload page needs.
//!
//! Everything that touches `window`, `document` or `localStorage` lives here
//! so components and the submission flow stay free of raw `web-sys` calls.

use agro_advice::{CityStore, ImageSource, StoreError};
use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

/// A file chosen in the browser, by drop or by picker.
#[derive(Clone, Debug, PartialEq)]
pub struct WebImage(pub File);

impl ImageSource for WebImage {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

/// `localStorage`, or `None` when the page has none or it is blocked
/// (sandboxed frames, storage disabled).
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// City persisted in `localStorage` as a raw string under one key.
///
/// Without storage nothing is remembered: `load` finds no city and `save`
/// reports `StoreError::Unavailable`.
#[derive(Clone, Debug)]
pub struct LocalStorageCityStore {
    key: String,
}

impl LocalStorageCityStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl CityStore for LocalStorageCityStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&mut self, city: &str) -> Result<(), StoreError> {
        local_storage()
            .ok_or(StoreError::Unavailable)?
            .set_item(&self.key, city)
            .map_err(|e| StoreError::Write {
                key: self.key.clone(),
                reason: format!("{:?}", e),
            })
    }
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn file_input(input_id: &str) -> Option<HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(input_id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// Open the native file picker behind the file input `input_id`.
pub fn open_file_picker(input_id: &str) {
    match file_input(input_id) {
        Some(input) => input.click(),
        None => log::warn!("File input #{} not found", input_id),
    }
}

/// First file currently selected in the file input `input_id`.
pub fn selected_file(input_id: &str) -> Option<WebImage> {
    file_input(input_id)?.files()?.get(0).map(WebImage)
}

/// Clear the file input so picking the same file again fires `change`.
pub fn reset_file_input(input_id: &str) {
    if let Some(input) = file_input(input_id) {
        input.set_value("");
    }
}

/// First file of a drop, if the drop carried any.
pub fn dropped_file(evt: &Event<DragData>) -> Option<WebImage> {
    let drag = evt.try_as_web_event()?;
    drag.data_transfer()?.files()?.get(0).map(WebImage)
}

/// Object URL for previewing `image` without uploading it.
pub fn object_url(image: &WebImage) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(&image.0).ok()
}

pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
