use leptos::{ev, event_target_value, *};
use wasm_bindgen_futures::spawn_local;

use super::board::{PageController, PageStateSignal};

#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_context::<PageStateSignal>()
        .expect("page state context missing")
        .0;
    let controller = use_context::<PageController>().expect("controller context missing");

    let options = create_memo(move |_| state.with(|page| page.activity_options()));
    let selected = create_memo(move |_| state.with(|page| page.form.activity.clone()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move { controller.submit_signup().await });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || state.with(|page| page.form.email.clone())
                    on:input=move |ev: ev::Event| {
                        let value = event_target_value(&ev);
                        state.update(|page| page.form.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev: ev::Event| {
                        let value = event_target_value(&ev);
                        state.update(|page| page.form.activity = value);
                    }
                >
                    <option value="" prop:selected=move || selected.with(String::is_empty)>
                        "-- Select an activity --"
                    </option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|name| {
                                let key = name.clone();
                                view! {
                                    <option
                                        value=name.clone()
                                        prop:selected=move || selected.with(|current| *current == key)
                                    >
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
