//! Toast Notification Component
//!
//! Shows success and error notices until they time out or are clicked away.

use leptos::*;
use salon_booking::notice::{Notice, NoticeKind};

use crate::state::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            <For
                each=move || state.notices.with(|board| board.notices().to_vec())
                key=|notice| notice.id
                children=move |notice| view! { <ToastMessage notice=notice /> }
            />
        </div>
    }
}

#[component]
fn ToastMessage(notice: Notice) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (icon, bg_class) = match notice.kind {
        NoticeKind::Success => ("✓", "bg-green-600"),
        NoticeKind::Error => ("✕", "bg-red-600"),
    };
    let id = notice.id;

    view! {
        <div
            class=format!(
                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 cursor-pointer transform transition-all duration-300 ease-out animate-slide-in",
                bg_class
            )
            role=if notice.is_error() { "alert" } else { "status" }
            on:click=move |_| state.dismiss(id)
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{notice.message}</span>
        </div>
    }
}
