//! Download the favorites list as a JSON file.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

/// `data:` URI carrying `json`.
#[must_use]
pub fn json_data_uri(json: &str) -> String {
    format!("data:application/json;charset=utf-8,{}", urlencoding::encode(json))
}

/// Trigger a browser download of `json` named `file_name`.
pub fn download_json(file_name: &str, json: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let anchor = match document.create_element("a").map(|el| el.dyn_into::<web_sys::HtmlAnchorElement>()) {
            Ok(Ok(anchor)) => anchor,
            _ => {
                log::warn!("could not create download link");
                return;
            }
        };
        anchor.set_href(&json_data_uri(json));
        anchor.set_download(file_name);
        anchor.click();
        log::info!("exported {file_name}");
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (file_name, json);
    }
}
