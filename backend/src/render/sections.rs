//! Page sections: sidebar, hero, about, skills, galleries and footer.
//!
//! Each function returns an HTML fragment; [`super::render_page`] assembles
//! them in page order.

use crate::models::{GalleryItem, Portfolio, Section};

use super::html::{grid_rows, html_escape, paragraphs, safe_url, truncate_chars, DESCRIPTION_PREVIEW_CHARS};

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Presentation of one gallery section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryLayout {
    pub section: Section,
    pub id: &'static str,
    pub heading: &'static str,
    pub empty_message: &'static str,
    pub card_class: &'static str,
    pub link_label: &'static str,
    /// Cut descriptions to [`DESCRIPTION_PREVIEW_CHARS`].
    pub truncate: bool,
}

/// Gallery sections in page order.
pub const GALLERIES: [GalleryLayout; 4] = [
    GalleryLayout {
        section: Section::Project,
        id: "research",
        heading: "🔬 Research",
        empty_message: "No research projects yet.",
        card_class: "project-card",
        link_label: "View project",
        truncate: true,
    },
    GalleryLayout {
        section: Section::Extension,
        id: "extension",
        heading: "📚 Extension",
        empty_message: "No extension projects yet.",
        card_class: "project-card",
        link_label: "View project",
        truncate: true,
    },
    GalleryLayout {
        section: Section::Certificate,
        id: "certificates",
        heading: "📜 Certificates",
        empty_message: "No certificates registered.",
        card_class: "certificate-card",
        link_label: "View certificate",
        truncate: false,
    },
    GalleryLayout {
        section: Section::Recognition,
        id: "recognitions",
        heading: "🏆 Recognitions and Awards",
        empty_message: "No recognitions registered.",
        card_class: "project-card",
        link_label: "More info",
        truncate: false,
    },
];

fn empty_state(message: &str) -> String {
    format!("<p class=\"empty-state\">{}</p>", html_escape(message))
}

fn contact_line(key: &str, value: &str) -> String {
    let value_html = html_escape(value);
    match key {
        "location" => format!("<p><i class=\"fa-solid fa-location-dot\"></i> {}</p>", value_html),
        "phone" => format!("<p><i class=\"fa-solid fa-phone\"></i> {}</p>", value_html),
        "email" => format!(
            "<p><i class=\"fa-solid fa-envelope\"></i> <a href=\"mailto:{0}\">{0}</a></p>",
            value_html
        ),
        _ => format!("<p>{}</p>", value_html),
    }
}

/// Sidebar: avatar, name, role, contact block and social buttons.
pub fn sidebar(portfolio: &Portfolio) -> String {
    let avatar = portfolio
        .avatar()
        .and_then(safe_url)
        .map(|src| {
            format!(
                "<img class=\"avatar\" src=\"{}\" alt=\"{}\">",
                src,
                html_escape(portfolio.name())
            )
        })
        .unwrap_or_default();

    let contacts = portfolio.contacts();
    let contact_html = if contacts.is_empty() {
        String::new()
    } else {
        let lines: Vec<String> = contacts.iter().map(|(k, v)| contact_line(k, v)).collect();
        format!(
            "<details class=\"contact\">\n<summary>📞 Contact</summary>\n{}\n</details>",
            lines.join("\n")
        )
    };

    format!(
        r#"<aside class="sidebar">
{avatar}
<h2>{name}</h2>
<p class="role">{role}</p>
{contact}
{social}
</aside>"#,
        avatar = avatar,
        name = html_escape(portfolio.name()),
        role = html_escape(portfolio.role()),
        contact = contact_html,
        social = social_links(portfolio),
    )
}

/// Row of icon buttons, one per social link.
pub fn social_links(portfolio: &Portfolio) -> String {
    let links: String = portfolio
        .social_links
        .iter()
        .filter_map(|(key, link)| {
            let url = safe_url(&link.url)?;
            Some(format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" aria-label=\"{}\"><i class=\"{} fa-2x\"></i></a>",
                url,
                html_escape(key),
                html_escape(&link.icon),
            ))
        })
        .collect();

    if links.is_empty() {
        return String::new();
    }
    format!("<div class=\"social\">{}</div>", links)
}

/// Page title block.
pub fn hero(portfolio: &Portfolio) -> String {
    format!(
        "<header class=\"hero\">\n<h1>{}</h1>\n<h3>{}</h3>\n</header>",
        html_escape(portfolio.name()),
        html_escape(portfolio.role())
    )
}

pub fn about(portfolio: &Portfolio) -> String {
    let body = if portfolio.about.trim().is_empty() {
        empty_state("Nothing here yet.")
    } else {
        paragraphs(&portfolio.about)
    };
    format!("<section id=\"about\">\n<h2>👋 About Me</h2>\n{}\n</section>", body)
}

/// Skills grid: one card per group, rows of [`GRID_COLUMNS`].
pub fn skills(portfolio: &Portfolio) -> String {
    let cards: Vec<String> = portfolio
        .skills
        .values()
        .map(|group| {
            let chips: String = group
                .skills
                .iter()
                .map(|skill| format!("<li class=\"chip\">{}</li>", html_escape(skill)))
                .collect();
            format!(
                "<div class=\"project-card\">\n<h4>{}</h4>\n<ul class=\"chips\">{}</ul>\n</div>",
                html_escape(&group.title),
                chips
            )
        })
        .collect();

    let body = if cards.is_empty() {
        empty_state("No skills listed yet.")
    } else {
        grid_rows(&cards, GRID_COLUMNS)
    };
    format!("<section id=\"skills\">\n<h2>💻 Skills</h2>\n{}\n</section>", body)
}

fn gallery_card(item: &GalleryItem, layout: &GalleryLayout) -> String {
    let mut parts = Vec::new();

    if let Some(src) = item.image.as_deref().and_then(safe_url) {
        parts.push(format!(
            "<img class=\"card-image\" src=\"{}\" alt=\"{}\">",
            src,
            html_escape(&item.title)
        ));
    }

    parts.push(format!("<h4>{}</h4>", html_escape(&item.title)));

    if let Some(description) = item.description.as_deref() {
        let text = if layout.truncate {
            truncate_chars(description, DESCRIPTION_PREVIEW_CHARS)
        } else {
            description.to_string()
        };
        parts.push(format!("<p>{}</p>", html_escape(&text)));
    }

    if let Some(href) = item.link.as_deref().and_then(safe_url) {
        parts.push(format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            href, layout.link_label
        ));
    }

    format!("<div class=\"{}\">\n{}\n</div>", layout.card_class, parts.join("\n"))
}

/// One gallery section, or its empty-state message.
pub fn gallery(portfolio: &Portfolio, layout: &GalleryLayout) -> String {
    let items = portfolio.gallery(layout.section);

    let body = if items.is_empty() {
        empty_state(layout.empty_message)
    } else {
        let cards: Vec<String> = items.iter().map(|item| gallery_card(item, layout)).collect();
        grid_rows(&cards, GRID_COLUMNS)
    };

    format!(
        "<section id=\"{}\">\n<h2>{}</h2>\n{}\n</section>",
        layout.id, layout.heading, body
    )
}

pub fn footer(portfolio: &Portfolio, year: i32) -> String {
    format!(
        "<footer>&copy; {} {}. All rights reserved.</footer>",
        year,
        html_escape(portfolio.name())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfileField, SkillGroup, SocialLink};

    fn portfolio() -> Portfolio {
        let mut p = Portfolio::default();
        p.profile.insert(
            "name".into(),
            ProfileField { title: "Ada <Lovelace>".into(), description: None, image: Some("ada.png".into()) },
        );
        p.profile.insert(
            "role".into(),
            ProfileField { title: "Analyst".into(), description: None, image: None },
        );
        p
    }

    #[test]
    fn test_sidebar_escapes_and_omits_empty_contact() {
        let html = sidebar(&portfolio());
        assert!(html.contains("<h2>Ada &lt;Lovelace&gt;</h2>"));
        assert!(html.contains("src=\"ada.png\""));
        assert!(!html.contains("<details"));
    }

    #[test]
    fn test_sidebar_contact_block() {
        let mut p = portfolio();
        p.profile.insert(
            "email".into(),
            ProfileField { title: "ada@example.com".into(), description: None, image: None },
        );
        let html = sidebar(&p);
        assert!(html.contains("<details class=\"contact\">"));
        assert!(html.contains("mailto:ada@example.com"));
    }

    #[test]
    fn test_social_links_skip_unsafe_urls() {
        let mut p = portfolio();
        p.social_links.insert(
            "github".into(),
            SocialLink { icon: "fab fa-github".into(), url: "https://github.com/ada".into() },
        );
        p.social_links.insert(
            "evil".into(),
            SocialLink { icon: "fab fa-x".into(), url: "javascript:alert(1)".into() },
        );

        let html = social_links(&p);
        assert!(html.contains("<i class=\"fab fa-github fa-2x\"></i>"));
        assert!(!html.contains("javascript"));
    }

    #[test]
    fn test_skills_grid_rows_of_three() {
        let mut p = portfolio();
        for i in 0..4 {
            p.skills.insert(
                format!("g{i}"),
                SkillGroup { title: format!("Group {i}"), skills: vec!["Rust".into(), "Go".into()] },
            );
        }
        let html = skills(&p);
        assert_eq!(html.matches("class=\"grid-row\"").count(), 2);
        assert_eq!(html.matches("<li class=\"chip\">").count(), 8);
    }

    #[test]
    fn test_project_description_truncated() {
        let mut p = portfolio();
        p.projects.push(GalleryItem {
            title: "Engine".into(),
            description: Some("x".repeat(140)),
            image: Some("engine.png".into()),
            link: None,
        });
        let html = gallery(&p, &GALLERIES[0]);
        assert!(html.contains(&format!("<p>{}...</p>", "x".repeat(100))));
        assert!(html.contains("class=\"card-image\""));
    }

    #[test]
    fn test_certificate_description_full() {
        let mut p = portfolio();
        p.certificates.push(GalleryItem {
            title: "Rust".into(),
            description: Some("y".repeat(140)),
            image: None,
            link: Some("https://cert".into()),
        });
        let html = gallery(&p, &GALLERIES[2]);
        assert!(html.contains(&format!("<p>{}</p>", "y".repeat(140))));
        assert!(html.contains(">View certificate</a>"));
    }

    #[test]
    fn test_empty_recognitions_show_empty_state() {
        let html = gallery(&portfolio(), &GALLERIES[3]);
        assert!(html.contains("class=\"empty-state\""));
        assert!(html.contains("No recognitions registered."));
    }

    #[test]
    fn test_every_empty_gallery_shows_its_message() {
        let p = portfolio();
        for layout in &GALLERIES {
            let html = gallery(&p, layout);
            assert!(html.contains(&format!("<p class=\"empty-state\">{}</p>", layout.empty_message)));
            assert!(!html.contains("grid-row"));
        }
        assert!(gallery(&p, &GALLERIES[2]).contains("No certificates registered."));
    }

    #[test]
    fn test_empty_about_shows_empty_state() {
        let mut p = portfolio();
        assert!(about(&p).contains("<p class=\"empty-state\">Nothing here yet.</p>"));

        p.about = "  \n\n ".into();
        assert!(about(&p).contains("Nothing here yet."));
    }

    #[test]
    fn test_about_keeps_line_breaks() {
        let mut p = portfolio();
        p.about = "Line one\nLine two\n\nNext".into();
        let html = about(&p);
        assert!(html.contains("<p>Line one<br>Line two</p>"));
        assert!(html.contains("<p>Next</p>"));
    }

    #[test]
    fn test_empty_skills_show_empty_state() {
        assert!(skills(&portfolio()).contains("No skills listed yet."));
    }

    #[test]
    fn test_footer() {
        assert_eq!(
            footer(&portfolio(), 2026),
            "<footer>&copy; 2026 Ada &lt;Lovelace&gt;. All rights reserved.</footer>"
        );
    }
}
