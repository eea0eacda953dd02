use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod activities;
mod components;
pub mod config;
mod logging;

pub use activities::api::{ActivityApi, ApiError, Endpoints, HttpActivityApi};
pub use activities::controller::{Controller, StateHandle};
pub use activities::state::{ActivityCard, DirectoryView, Notice, NoticeKind, PageState, Roster};
pub use activities::types::{Activity, Directory, SignupReceipt};
pub use components::board::Board;
pub use config::ClientConfig;
pub use logging::init_logging;

/// Root component mounting the activity board.
#[component]
pub fn App() -> impl IntoView {
    #[cfg(target_arch = "wasm32")]
    let config = ClientConfig::from_window();
    #[cfg(not(target_arch = "wasm32"))]
    let config = ClientConfig::default();

    view! {
        <main class="app-root">
            <Board config=config />
        </main>
    }
}

/// WASM entry point called automatically by `trunk`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), wasm_bindgen::JsValue> {
    init_logging();

    leptos::mount_to_body(|| view! { <App /> });
    Ok(())
}
