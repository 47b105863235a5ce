//! Footer component

use chrono::Datelike;
use leptos::*;

#[component]
pub fn Footer(name: String) -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer>
            {format!("© {} {}. All rights reserved.", year, name)}
        </footer>
    }
}
