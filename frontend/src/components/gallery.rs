//! Gallery card grid

use leptos::*;

use crate::config::{DESCRIPTION_PREVIEW_CHARS, GRID_COLUMNS};
use crate::types::{preview_text, safe_url, GalleryItem, GalleryKind};

#[component]
fn Card(item: GalleryItem, kind: GalleryKind) -> impl IntoView {
    let description = item.description.map(|text| {
        if kind.truncates() {
            preview_text(&text, DESCRIPTION_PREVIEW_CHARS)
        } else {
            text
        }
    });

    let image = item.image.as_deref().and_then(safe_url).map(|src| {
        let alt = item.title.clone();
        view! { <img src=src alt=alt/> }
    });

    let link = item.link.as_deref().and_then(safe_url).map(|href| {
        view! { <a href=href target="_blank" rel="noopener">{kind.link_label()}</a> }
    });

    view! {
        <div class=kind.card_class()>
            {image}
            <h4>{item.title}</h4>
            {description.map(|text| view! { <p>{text}</p> })}
            {link}
        </div>
    }
}

#[component]
pub fn Gallery(kind: GalleryKind, items: Vec<GalleryItem>) -> impl IntoView {
    let body = if items.is_empty() {
        view! { <p class="empty-state">{kind.empty_message()}</p> }.into_view()
    } else {
        items
            .chunks(GRID_COLUMNS)
            .map(|row| {
                view! {
                    <div class="grid-row">
                        {row
                            .iter()
                            .cloned()
                            .map(|item| view! { <Card item=item kind=kind/> })
                            .collect_view()}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section>
            <h2>{kind.heading()}</h2>
            {body}
        </section>
    }
}
