//! Folio - Frontend Rust/Leptos Application
//!
//! A WebAssembly client that fetches the shaped portfolio from the backend
//! and renders the same page as `folio render`, with a live theme switch.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├──────────────┬──────────────────────────────────────────────┤
//! │  Sidebar     │  ThemeToggle                                  │
//! │              │  Hero / About / Skills                        │
//! │              │  Gallery × 4 (research, extension, ...)       │
//! ├──────────────┴──────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Portfolio mirror types, Theme, errors
//! - [`components`] - UI components (Sidebar, Hero, Gallery, etc.)
//! - [`services`] - Backend communication

use leptos::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{
    // Portfolio
    GalleryItem, GalleryKind, Portfolio, ProfileField, SkillGroup, SocialLink,
    // Theme
    Theme,
    // Errors
    AppError, AppResult,
};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Mount the application on `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Folio - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (theme, set_theme) = create_signal(Theme::default());

    let portfolio = create_local_resource(
        || (),
        |_| async move {
            let result = fetch_portfolio(BACKEND_URL).await;
            if let Err(e) = &result {
                log::error!("❌ Could not load portfolio: {}", e);
            }
            result
        },
    );

    view! {
        <link rel="stylesheet" href=move || stylesheet_url(BACKEND_URL, theme.get())/>
        <link rel="stylesheet" href=ICON_STYLESHEET_URL/>

        <div class="layout" data-theme=move || theme.get().as_str()>
            <Suspense fallback=|| view! { <p class="loading">"Loading portfolio..."</p> }>
                {move || portfolio.get().map(|result| match result {
                    Ok(data) => view! { <PortfolioPage portfolio=data theme=theme set_theme=set_theme/> }.into_view(),
                    Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_view(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn PortfolioPage(
    portfolio: Portfolio,
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    let name = portfolio.name();
    let role = portfolio.role();

    let galleries = GalleryKind::ALL
        .into_iter()
        .map(|kind| {
            let items = kind.items(&portfolio).to_vec();
            view! { <Gallery kind=kind items=items/> }
        })
        .collect_view();

    view! {
        <Sidebar portfolio=portfolio.clone()/>

        <main class="content">
            <ThemeToggle theme=theme set_theme=set_theme/>
            <Hero name=name.clone() role=role/>
            <About about=portfolio.about.clone()/>
            <Skills skills=portfolio.skills.values().cloned().collect()/>
            {galleries}
        </main>

        <Footer name=name/>
    }
}
