use leptos::*;

use super::board::PageStateSignal;

/// The message region. Hidden whenever there is no notice.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let state = use_context::<PageStateSignal>()
        .expect("page state context missing")
        .0;

    let notice = create_memo(move |_| state.with(|page| page.notice.clone()));

    let class = move || {
        notice.with(|notice| match notice {
            Some(notice) => notice.kind.class(),
            None => "hidden",
        })
    };

    view! {
        <div id="message" class=class role="status">
            {move || notice.with(|notice| notice.as_ref().map(|n| n.text.clone()).unwrap_or_default())}
        </div>
    }
}
