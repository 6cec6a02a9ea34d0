use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::theme::Theme;

/// Current theme plus the user's explicit choice, if they made one.
#[derive(Debug, Clone, Copy)]
pub struct ThemeStore {
    current: Signal<Theme>,
    set_choice: WriteSignal<Option<Theme>>,
}

impl ThemeStore {
    fn new(
        choice: Signal<Option<Theme>>,
        set_choice: WriteSignal<Option<Theme>>,
        prefers_dark: Signal<bool>,
        hydrated: Signal<bool>,
    ) -> Self {
        let current =
            Signal::derive(move || Theme::resolve(choice.get(), prefers_dark.get(), hydrated.get()));
        Self {
            current,
            set_choice,
        }
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn toggle(&self) {
        let next = self.current.get_untracked().toggled();
        self.set_choice.set(Some(next));
    }
}

/// Creates the theme store and provides it as context.
///
/// Until the user toggles, the theme follows the browser's color scheme.
/// The choice is remembered in local storage. Both are only applied once
/// hydration is done, so the first client render matches the server's.
pub fn provide_theme() -> ThemeStore {
    let prefers_dark = use_preferred_dark();

    #[cfg(feature = "hydrate")]
    let (choice, set_choice, _) = use_local_storage_with_options::<Option<Theme>, JsonSerdeWasmCodec>(
        "theme",
        UseStorageOptions::default().delay_during_hydration(true),
    );
    #[cfg(not(feature = "hydrate"))]
    let (choice, set_choice) = {
        let (choice, set_choice) = signal(None::<Theme>);
        (Signal::from(choice), set_choice)
    };

    // effects only run in the browser, after hydration
    let (hydrated, set_hydrated) = signal(false);
    Effect::new(move |_| set_hydrated.set(true));

    let store = ThemeStore::new(choice, set_choice, prefers_dark, hydrated.into());
    provide_context(store);
    store
}

pub fn use_theme() -> ThemeStore {
    expect_context::<ThemeStore>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="theme-toggle w-10 h-10 rounded-full flex items-center justify-center transition-transform duration-300 hover:rotate-180"
            aria-label="Toggle theme"
            title="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || theme.current().toggle_icon()}
        </button>
    }
}
