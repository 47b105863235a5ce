//! Light/dark theme switch

use leptos::*;

use crate::types::Theme;

#[component]
pub fn ThemeToggle(theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    let on_click = move |_| {
        let next = theme.get().toggled();
        log::info!("🎨 Switching to {} theme", next.as_str());
        set_theme.set(next);
    };

    view! {
        <button class="theme-switch" on:click=on_click>
            {move || match theme.get() {
                Theme::Light => "🌙 Dark mode",
                Theme::Dark => "☀️ Light mode",
            }}
        </button>
    }
}
