use leptos::*;

use crate::activities::{
    format::{DIRECTORY_FAILED_TEXT, LOADING_TEXT, NO_PARTICIPANTS_TEXT, participants_heading},
    state::{ActivityCard, DirectoryView, ParticipantBadge, Roster},
};

use super::board::{PageController, PageStateSignal};

#[derive(Clone, PartialEq)]
enum Listing {
    Loading,
    Failed,
    Cards(Vec<ActivityCard>),
}

/// The activity cards. Redrawn in full whenever the directory changes.
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<PageStateSignal>()
        .expect("page state context missing")
        .0;

    let listing = create_memo(move |_| {
        state.with(|page| match &page.directory {
            DirectoryView::Loading => Listing::Loading,
            DirectoryView::Failed => Listing::Failed,
            DirectoryView::Ready(_) => Listing::Cards(page.activity_cards()),
        })
    });

    view! {
        <div id="activities-list">
            {move || match listing.get() {
                Listing::Loading => view! { <p>{LOADING_TEXT}</p> }.into_view(),
                Listing::Failed => view! { <p>{DIRECTORY_FAILED_TEXT}</p> }.into_view(),
                Listing::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let ActivityCard {
        title,
        description,
        schedule,
        availability,
        roster,
    } = card;

    view! {
        <div class="activity-card">
            <h4>{title}</h4>
            <p>{description}</p>
            <p><strong>"Schedule:"</strong>" "{schedule}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>
            <RosterView roster=roster />
        </div>
    }
}

#[component]
fn RosterView(roster: Roster) -> impl IntoView {
    let controller = use_context::<PageController>().expect("controller context missing");

    let badges = match roster {
        Roster::Empty => {
            return view! { <p class="no-participants">{NO_PARTICIPANTS_TEXT}</p> }.into_view();
        }
        Roster::Participants(badges) => badges,
    };

    let heading = participants_heading(badges.len());
    let items = badges
        .into_iter()
        .map(|badge| {
            let controller = controller.clone();
            let ParticipantBadge {
                label,
                activity,
                email,
            } = badge;

            view! {
                <li>
                    <span class="participant-badge">
                        {label}
                        <button
                            type="button"
                            class="delete-btn"
                            title="Unregister"
                            on:click=move |_| {
                                controller.request_unregister(activity.clone(), email.clone());
                            }
                        >
                            "✕"
                        </button>
                    </span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="participants">
            <h5 class="participants-title">{heading}</h5>
            <ul class="participants-list">{items}</ul>
        </div>
    }
    .into_view()
}
