//! Browser-side storage checks (run with `wasm-pack test --headless`).
//! The same Store facade, but over the real `window.localStorage`.

use wasm_bindgen_test::*;

use crate::models::BusinessProfile;
use crate::storage::Store;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let store = Store::local();
    let profile = BusinessProfile {
        name: "Test Boutique".to_string(),
        industry: "Fleuriste".to_string(),
        ..Default::default()
    };
    store.save_profile(&profile);
    assert_eq!(store.load_profile(), profile);
}

#[wasm_bindgen_test]
fn google_flag_survives_reload_of_the_facade() {
    let store = Store::local();
    store.set_google_connected(true);
    // A fresh facade over the same backing storage sees the flag.
    assert!(Store::local().google_connected());
}
