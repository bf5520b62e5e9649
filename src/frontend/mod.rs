mod parallax;
mod scroll;
mod sections;
mod seo;
mod theme;
mod typewriter;

use std::rc::Rc;

use chrono::Local;
use tracing::{error, info};
use web_sys::window;
use yew::prelude::*;

use crate::content::{SiteContent, CONTACT_SECTION, PROJECTS_SECTION, SKILLS_SECTION};
use crate::logging;

use self::parallax::BlobLayer;
use self::scroll::{scroll_to_top, use_scroll_tracker};
use self::sections::{Contact, ExternalLink, Projects, Skills};
use self::seo::Seo;
use self::theme::{use_theme, ThemeProvider};
use self::typewriter::TypewriterText;

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component(Page)]
fn page(props: &AppProps) -> Html {
    let content = &props.content;
    let profile = &content.profile;
    let theme = use_theme();
    let scroll = use_scroll_tracker(content.site.sections.clone());
    let menu_open = use_state(|| false);

    let on_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let on_theme = theme.toggle.reform(|_: MouseEvent| ());
    let on_back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    let bio = profile.bio_on(Local::now().date_naive());
    let progress_style = format!("transform: scaleX({:.4});", scroll.progress);

    html! {
        <>
            <Seo profile={profile.clone()} />
            <div class="scroll-progress" style={progress_style} aria-hidden="true" />
            <BlobLayer blobs={content.blobs.clone()} />
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="page-shell">
                <nav class="site-nav">
                    <a class="logo" href="#">{profile.initials.clone()}</a>
                    <button
                        class="menu-button"
                        type="button"
                        aria-label="Toggle navigation"
                        aria-expanded={(*menu_open).to_string()}
                        onclick={on_menu}
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                    <div class={classes!("nav-links", (*menu_open).then_some("is-open"))}>
                        { for content.site.sections.iter().map(|id| html! {
                            <a
                                href={format!("#{id}")}
                                class={classes!("nav-link", scroll.is_active(id).then_some("active"))}
                                onclick={close_menu.clone()}
                            >
                                {id.clone()}
                            </a>
                        }) }
                        <button
                            class="theme-toggle"
                            type="button"
                            aria-label={theme.theme.toggle_label()}
                            onclick={on_theme}
                        >
                            <span aria-hidden="true">{theme.theme.icon()}</span>
                        </button>
                    </div>
                </nav>

                <header class="hero">
                    <h1 class="hero-title">
                        <TypewriterText config={content.hero.typewriter()} />
                    </h1>
                    <h2 class="hero-subtitle">{profile.title.clone()}</h2>
                    <p class="hero-text">{bio}</p>
                    <div class="social-links">
                        <a class="social-link" href={profile.mailto()}>{"email"}</a>
                        { for profile.links.iter().map(|link| html! {
                            <ExternalLink
                                href={link.href.clone()}
                                label={link.label.clone()}
                                class={classes!("social-link")}
                            />
                        }) }
                    </div>
                </header>

                <main id="content">
                    { for content.site.sections.iter().map(|id| match id.as_str() {
                        PROJECTS_SECTION => html! {
                            <Projects projects={content.projects.clone()} />
                        },
                        SKILLS_SECTION => html! {
                            <Skills
                                skills={content.skills.clone()}
                                cycle_seconds={content.ticker.cycle_seconds}
                            />
                        },
                        CONTACT_SECTION => html! {
                            <Contact name={profile.name.clone()} mailto={profile.mailto()} />
                        },
                        _ => Html::default(),
                    }) }
                </main>
            </div>
            if scroll.show_back_to_top {
                <button
                    class="back-to-top"
                    type="button"
                    aria-label="Back to top"
                    onclick={on_back_to_top}
                >
                    {"↑"}
                </button>
            }
        </>
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ThemeProvider>
            <Page content={props.content.clone()} />
        </ThemeProvider>
    }
}

pub fn run() {
    let log_handle = logging::init();

    let content = match SiteContent::load() {
        Ok(content) => content,
        Err(err) => {
            error!(%err, "site content failed to load");
            return;
        }
    };
    logging::set_level(&log_handle, content.log_level());
    info!(
        sections = content.site.sections.len(),
        projects = content.projects.len(),
        skills = content.skills.len(),
        "starting portfolio"
    );

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            content: Rc::new(content),
        },
    )
    .render();
}
