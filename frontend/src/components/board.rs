use leptos::*;

use crate::activities::{api::HttpActivityApi, controller::Controller, state::PageState};
use crate::config::ClientConfig;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

use super::{
    activity_list::ActivityList, confirm_dialog::ConfirmDialog, notice::NoticeBanner,
    signup_form::SignupForm,
};

/// Controller type shared with every component through context.
pub type PageController = Controller<HttpActivityApi, RwSignal<PageState>>;

#[derive(Clone, Copy)]
pub struct PageStateSignal(pub RwSignal<PageState>);

/// Top-level page: owns the state signal, the controller and the notice timer.
#[component]
pub fn Board(config: ClientConfig) -> impl IntoView {
    let state = create_rw_signal(PageState::default());
    let controller: PageController =
        Controller::new(HttpActivityApi::new(config.api_base.clone()), state);

    provide_context(PageStateSignal(state));
    provide_context(controller.clone());

    #[cfg(target_arch = "wasm32")]
    {
        let initial = controller.clone();
        spawn_local(async move { initial.refresh().await });
        hide_notices_after(state, config.notice_duration_ms());
    }

    view! {
        <div class="board">
            <header class="board__header">
                <h1>"Mergington High School"</h1>
                <h2>"Extracurricular Activities"</h2>
            </header>
            <section class="board__body">
                <section id="activities-container" class="board__activities">
                    <h3>"Available Activities"</h3>
                    <ActivityList />
                </section>
                <section id="signup-container" class="board__signup">
                    <h3>"Sign Up for an Activity"</h3>
                    <SignupForm />
                    <NoticeBanner />
                </section>
            </section>
            <ConfirmDialog />
        </div>
    }
}

/// Keep a single hide timer for the message region. A new notice drops the
/// previous `Timeout`, which cancels it.
#[cfg(target_arch = "wasm32")]
fn hide_notices_after(state: RwSignal<PageState>, after_ms: u32) {
    use gloo_timers::callback::Timeout;

    let ticket = create_memo(move |_| {
        state.with(|page| page.notice.as_ref().map(|notice| notice.ticket))
    });
    let hide_timer = store_value(None::<Timeout>);

    create_effect(move |_| {
        hide_timer.set_value(None);
        if let Some(ticket) = ticket.get() {
            let timeout = Timeout::new(after_ms, move || {
                state.update(|page| page.dismiss_notice(ticket));
            });
            hide_timer.set_value(Some(timeout));
        }
    });
}
