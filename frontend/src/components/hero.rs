//! Hero and About sections

use leptos::*;

#[component]
pub fn Hero(name: String, role: String) -> impl IntoView {
    view! {
        <section class="hero">
            <h1>{name}</h1>
            <h3>{role}</h3>
        </section>
    }
}

/// Split a biography into paragraphs on blank lines, each paragraph into its lines.
pub fn about_paragraphs(about: &str) -> Vec<Vec<String>> {
    about
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.split('\n').map(String::from).collect())
        .collect()
}

fn paragraph_view(lines: Vec<String>) -> impl IntoView {
    let content = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let br = (i > 0).then(|| view! { <br/> });
            view! { {br} {line} }
        })
        .collect_view();
    view! { <p>{content}</p> }
}

#[component]
pub fn About(about: String) -> impl IntoView {
    let paragraphs = about_paragraphs(&about);

    let body = if paragraphs.is_empty() {
        view! { <p class="empty-state">"Nothing here yet."</p> }.into_view()
    } else {
        paragraphs
            .into_iter()
            .map(paragraph_view)
            .collect_view()
    };

    view! {
        <section id="about">
            <h2>"👋 About Me"</h2>
            {body}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_paragraphs() {
        assert_eq!(about_paragraphs("One\n\n  Two  \n\n\n"), vec![vec!["One"], vec!["Two"]]);
        assert!(about_paragraphs("   ").is_empty());
    }

    #[test]
    fn test_about_line_breaks_inside_paragraph() {
        let paragraphs = about_paragraphs("Line one\nLine two\n\nNext");
        assert_eq!(paragraphs, vec![vec!["Line one", "Line two"], vec!["Next"]]);
    }
}
