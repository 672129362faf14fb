//! Application Context
//!
//! Page routing, refresh triggers, and error reporting shared via the
//! Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The four mutually exclusive page sections
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    Wardrobe,
    Outfits,
    History,
}

/// Refreshable server-backed list containers
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Container {
    Items,
    History,
}

/// How long a reported error stays visible before auto-dismissing
const ERROR_DISMISS_MS: u32 = 6_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently visible page - read
    pub page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    /// Trigger to reload the item list - read
    pub items_trigger: ReadSignal<u32>,
    set_items_trigger: WriteSignal<u32>,
    /// Trigger to reload history - read
    pub history_trigger: ReadSignal<u32>,
    set_history_trigger: WriteSignal<u32>,
    /// Last reported failure, if still visible - read
    pub error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
    error_seq: ReadSignal<u32>,
    set_error_seq: WriteSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (page, set_page) = signal(Page::Home);
        let (items_trigger, set_items_trigger) = signal(0u32);
        let (history_trigger, set_history_trigger) = signal(0u32);
        let (error, set_error) = signal::<Option<String>>(None);
        let (error_seq, set_error_seq) = signal(0u32);
        Self {
            page,
            set_page,
            items_trigger,
            set_items_trigger,
            history_trigger,
            set_history_trigger,
            error,
            set_error,
            error_seq,
            set_error_seq,
        }
    }

    /// Switch the visible page; entering History always re-fetches it
    pub fn show_page(&self, page: Page) {
        self.set_page.set(page);
        if page == Page::History {
            self.refresh(Container::History);
        }
    }

    /// Re-fetch a container from the server after a mutation
    pub fn refresh(&self, container: Container) {
        match container {
            Container::Items => self.set_items_trigger.update(|v| *v += 1),
            Container::History => self.set_history_trigger.update(|v| *v += 1),
        }
    }

    /// Surface a failure in the non-blocking banner; auto-dismisses unless a
    /// newer error has replaced it
    pub fn report_error(&self, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::error_1(&format!("[APP] {message}").into());

        let seq = self.error_seq.get_untracked() + 1;
        self.set_error_seq.set(seq);
        self.set_error.set(Some(message));

        let set_error = self.set_error;
        let error_seq = self.error_seq;
        spawn_local(async move {
            TimeoutFuture::new(ERROR_DISMISS_MS).await;
            if error_seq.get_untracked() == seq {
                set_error.set(None);
            }
        });
    }

    /// Dismiss the banner immediately
    pub fn dismiss_error(&self) {
        self.set_error.set(None);
    }
}
