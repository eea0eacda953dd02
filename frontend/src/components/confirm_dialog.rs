use leptos::{ev, *};
use wasm_bindgen_futures::spawn_local;

use crate::activities::state::PendingUnregister;

use super::board::{PageController, PageStateSignal};

/// Non-blocking confirmation shown before a participant is unregistered.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let state = use_context::<PageStateSignal>()
        .expect("page state context missing")
        .0;
    let controller = use_context::<PageController>().expect("controller context missing");

    let prompt = create_memo(move |_| {
        state.with(|page| page.pending_unregister.as_ref().map(PendingUnregister::prompt))
    });

    let on_confirm = {
        let controller = controller.clone();
        move |_: ev::MouseEvent| {
            let controller = controller.clone();
            spawn_local(async move { controller.confirm_unregister().await });
        }
    };
    let on_cancel = move |_: ev::MouseEvent| controller.cancel_unregister();

    view! {
        <Show when=move || prompt.with(Option::is_some)>
            <div class="confirm-backdrop">
                <div class="confirm-dialog" role="alertdialog" aria-modal="true">
                    <p>{move || prompt.get().unwrap_or_default()}</p>
                    <div class="confirm-dialog__actions">
                        <button type="button" class="confirm-dialog__confirm" on:click=on_confirm.clone()>
                            "Unregister"
                        </button>
                        <button type="button" class="confirm-dialog__cancel" on:click=on_cancel.clone()>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
