use yew::prelude::*;

use super::theme::use_theme;
use crate::content::{Project, Skill, CONTACT_SECTION, PROJECTS_SECTION, SKILLS_SECTION};
use crate::theme::Theme;
use crate::ticker::SkillTicker;

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    index: usize,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    // Cards fade in one after another.
    let style = format!("animation-delay: {:.1}s;", props.index as f64 * 0.1);

    html! {
        <article class="project-card" style={style}>
            <h3 class="project-title">{project.title.clone()}</h3>
            <p class="project-description">{project.description.clone()}</p>
            <ul class="tech-stack">
                { for project.tags.iter().map(|tag| html! { <li class="tech">{tag.clone()}</li> }) }
            </ul>
            <div class="project-links">
                if let Some(repo) = project.repo.clone() {
                    <ExternalLink href={repo} label="code" class={classes!("icon-link")} />
                }
                if let Some(demo) = project.demo.clone() {
                    <ExternalLink href={demo} label="live" class={classes!("icon-link")} />
                }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Vec<Project>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    html! {
        <section id={PROJECTS_SECTION} class="section" aria-labelledby="projects-heading">
            <h2 id="projects-heading" class="section-title">{"PROJECTS"}</h2>
            <div class="projects-grid">
                { for props.projects.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCard key={index} project={project.clone()} index={index} />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub skills: Vec<Skill>,
    pub cycle_seconds: u32,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let theme = use_theme().theme;
    let ticker = SkillTicker::new(&props.skills, props.cycle_seconds);

    html! {
        <section id={SKILLS_SECTION} class="section" aria-labelledby="skills-heading">
            <h2 id="skills-heading" class="section-title">{"SKILLS"}</h2>
            if !ticker.is_empty() {
                <div class="slider">
                    <div class="slide-track" style={ticker.style()}>
                        { for ticker.items().map(|(key, skill)| html! {
                            <div key={key} class="skill-card">
                                <img
                                    class={classes!(
                                        "skill-icon",
                                        (skill.invert_on_dark && theme == Theme::Dark).then_some("inverted"),
                                    )}
                                    src={skill.icon.clone()}
                                    alt={skill.name.clone()}
                                    loading="lazy"
                                />
                                <span class="skill-name">{skill.name.clone()}</span>
                            </div>
                        }) }
                    </div>
                </div>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub name: AttrValue,
    pub mailto: AttrValue,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    html! {
        <section id={CONTACT_SECTION} class="section" aria-labelledby="contact-heading">
            <h2 id="contact-heading" class="section-title">{"CONTACT"}</h2>
            <a class="email-button" href={props.mailto.clone()}>{"email me"}</a>
            <footer class="site-footer">
                <p>{format!("Made by {} ❤️", props.name)}</p>
            </footer>
        </section>
    }
}
