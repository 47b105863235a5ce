//! Sidebar component

use leptos::*;

use crate::types::{safe_url, Portfolio};

fn contact_icon(key: &str) -> &'static str {
    match key {
        "location" => "fa-solid fa-location-dot",
        "phone" => "fa-solid fa-phone",
        _ => "fa-solid fa-envelope",
    }
}

#[component]
pub fn Sidebar(portfolio: Portfolio) -> impl IntoView {
    let name = portfolio.name();
    let contacts = portfolio.contacts();

    let avatar = portfolio.avatar().as_deref().and_then(safe_url).map(|src| {
        let alt = name.clone();
        view! { <img class="avatar" src=src alt=alt/> }
    });

    let contact = (!contacts.is_empty()).then(|| {
        view! {
            <details class="contact">
                <summary>"Contact"</summary>
                {contacts
                    .into_iter()
                    .map(|(key, value)| {
                        let line = if key == "email" {
                            let href = format!("mailto:{}", value);
                            view! { <a href=href>{value}</a> }.into_view()
                        } else {
                            value.into_view()
                        };
                        view! { <p><i class=contact_icon(key)></i> " " {line}</p> }
                    })
                    .collect_view()}
            </details>
        }
    });

    let social = portfolio
        .social_links
        .clone()
        .into_iter()
        .filter_map(|(key, link)| {
            let url = safe_url(&link.url)?;
            let class = format!("{} fa-2x", link.icon);
            Some(view! {
                <a href=url target="_blank" rel="noopener" title=key>
                    <i class=class></i>
                </a>
            })
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            {avatar}
            <h2>{name}</h2>
            <p class="role">{portfolio.role()}</p>
            {contact}
            <div class="social">{social}</div>
        </aside>
    }
}
