// Host-target tests for the pure layers: decoding, retention, storage and
// the reducer state machine.  DOM flows are covered by the wasm test in
// `tests/` and the browser suite.

mod action_parsing;
mod chat_flow;
mod checklist_toggle;
mod decode;
mod retention;
mod store_roundtrip;
#[cfg(target_arch = "wasm32")]
mod wasm_storage;
mod wire_requests;
