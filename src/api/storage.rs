//! Local Storage Bindings
//!
//! `FlagStore` over `window.localStorage`. Values are stored as plain
//! strings, not JSON, so the page's own scripts can read them too.

use gloo_storage::{LocalStorage, Storage};
use storefront_core::{FlagStore, WidgetError, WidgetResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFlagStore;

fn storage_error(err: wasm_bindgen::JsValue) -> WidgetError {
    WidgetError::Storage(format!("{:?}", err))
}

impl FlagStore for LocalFlagStore {
    fn load(&self, key: &str) -> WidgetResult<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(storage_error)
    }

    fn save(&self, key: &str, value: &str) -> WidgetResult<()> {
        LocalStorage::raw().set_item(key, value).map_err(storage_error)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trips_plain_strings() {
        let store = LocalFlagStore;
        store.save("storefront-test-flag", "true").unwrap();
        assert_eq!(store.load("storefront-test-flag").unwrap().as_deref(), Some("true"));
        assert_eq!(LocalStorage::raw().get_item("storefront-test-flag").unwrap().as_deref(), Some("true"));
        LocalStorage::delete("storefront-test-flag");
        assert_eq!(store.load("storefront-test-flag").unwrap(), None);
    }
}
