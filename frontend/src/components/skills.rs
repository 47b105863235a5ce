//! Skills section

use leptos::*;

use crate::config::GRID_COLUMNS;
use crate::types::SkillGroup;

#[component]
fn SkillCard(group: SkillGroup) -> impl IntoView {
    view! {
        <div class="project-card">
            <h4>{group.title}</h4>
            <ul class="chips">
                {group
                    .skills
                    .into_iter()
                    .map(|skill| view! { <li class="chip">{skill}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Skills(skills: Vec<SkillGroup>) -> impl IntoView {
    let body = if skills.is_empty() {
        view! { <p class="empty-state">"No skills listed yet."</p> }.into_view()
    } else {
        skills
            .chunks(GRID_COLUMNS)
            .map(|row| {
                view! {
                    <div class="grid-row">
                        {row
                            .iter()
                            .cloned()
                            .map(|group| view! { <SkillCard group=group/> })
                            .collect_view()}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section id="skills">
            <h2>"💻 Skills"</h2>
            {body}
        </section>
    }
}
