//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use salon_booking::nav::MenuState;
use salon_booking::notice::{NoticeBoard, NoticeKind, NOTICE_TTL_MS};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Live toast notices
    pub notices: RwSignal<NoticeBoard>,
    /// Mobile menu open/closed
    pub menu: RwSignal<MenuState>,
    /// Page is fading out before a navigation
    pub leaving: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        loading: create_rw_signal(false),
        notices: create_rw_signal(NoticeBoard::new()),
        menu: create_rw_signal(MenuState::default()),
        leaving: create_rw_signal(false),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.notify(NoticeKind::Success, message);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.notify(NoticeKind::Error, message);
    }

    fn notify(&self, kind: NoticeKind, message: &str) {
        let Some(id) = self.notices.try_update(|board| board.push(kind, message)) else {
            return;
        };

        let notices = self.notices;
        gloo_timers::callback::Timeout::new(NOTICE_TTL_MS, move || {
            notices.update(|board| {
                board.dismiss(id);
            });
        })
        .forget();
    }

    /// Remove a notice before its timeout
    pub fn dismiss(&self, id: u64) {
        self.notices.update(|board| {
            board.dismiss(id);
        });
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|menu| {
            menu.toggle();
        });
    }

    pub fn close_menu(&self) {
        self.menu.update(|menu| menu.close());
    }
}
