use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    SubmitEvent,
};
use yew::prelude::*;

use crate::contact::{self, ContactForm, SubmitStatus};
use crate::content::{self, Project, PROJECTS, TOOLS};
use crate::sections::{Observation, Section, TrackerState, VISIBILITY_THRESHOLD};

/// Reducer wrapper so observation batches dispatched from the long-lived
/// observer callback always fold into current state.
#[derive(PartialEq, Default)]
struct Tracker(TrackerState);

impl Reducible for Tracker {
    type Action = Vec<Observation>;

    fn reduce(self: Rc<Self>, batch: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.observe(&batch)))
    }
}

/// Smooth-scrolls the region with the section's id into view. Silently a
/// no-op when the element is absent.
fn scroll_to_section(section: Section) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(section.as_str()) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class="link"
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    active: Section,
    menu_open: bool,
    on_navigate: Callback<Section>,
    on_toggle_menu: Callback<()>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let nav_button = |section: Section, extra: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let is_active = props.active == section;
        html! {
            <button
                type="button"
                class={classes!("nav-link", extra, is_active.then_some("is-active"))}
                aria-current={is_active.then_some("true")}
                onclick={Callback::from(move |_| on_navigate.emit(section))}
            >
                {section.label()}
            </button>
        }
    };

    let on_toggle = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_| on_toggle_menu.emit(()))
    };

    html! {
        <nav class="site-nav">
            <div class="nav-inner">
                <span class="nav-brand">{content::OWNER_INITIALS}</span>
                <div class="nav-desktop">
                    { for Section::ALL.iter().map(|&s| nav_button(s, "")) }
                </div>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded={props.menu_open.to_string()}
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{if props.menu_open { "✕" } else { "☰" }}</span>
                </button>
            </div>
            if props.menu_open {
                <div class="nav-mobile">
                    { for Section::ALL.iter().map(|&s| nav_button(s, "nav-link-block")) }
                </div>
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HomeSectionProps {
    visible: bool,
    on_navigate: Callback<Section>,
}

#[function_component(HomeSection)]
fn home_section(props: &HomeSectionProps) -> Html {
    let on_scroll_down = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Section::Projects))
    };

    html! {
        <section id={Section::Home.as_str()} class="section section-home">
            <div class={classes!("section-inner", "rise-in", props.visible.then_some("is-visible"))}>
                <div class="avatar-ring">
                    <img src={content::AVATAR_PATH} alt={content::OWNER_NAME} />
                </div>
                <h1>{content::OWNER_NAME}</h1>
                <div class="headline-card">
                    <h2>{content::HEADLINE}</h2>
                    <p>{content::LANGUAGE_PAIR}</p>
                </div>
                <p class="summary">{content::SUMMARY}</p>
                <div class="tools-block">
                    <h3>{"Tools & Skills"}</h3>
                    <ul class="tag-list">
                        { for TOOLS.iter().map(|tool| html! { <li class="tag">{*tool}</li> }) }
                    </ul>
                </div>
                <button
                    type="button"
                    class="scroll-down"
                    aria-label="Scroll to projects"
                    onclick={on_scroll_down}
                >
                    <span aria-hidden="true">{"⌄"}</span>
                </button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    visible: bool,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    html! {
        <article class={classes!("project-card", "slide-in", props.visible.then_some("is-visible"))}>
            <h3>{project.title}</h3>
            <p>{project.description}</p>
            <ul class="detail-list">
                { for project.details.iter().map(|detail| html! { <li>{*detail}</li> }) }
            </ul>
            <ul class="tag-list">
                { for project.tools.iter().map(|tool| html! { <li class="tag">{*tool}</li> }) }
            </ul>
            if let Some(proof) = project.proof {
                <ExternalLink
                    href={proof.url}
                    label={format!("View {}", proof.label)}
                />
            }
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsSectionProps {
    visible: bool,
}

#[function_component(ProjectsSection)]
fn projects_section(props: &ProjectsSectionProps) -> Html {
    html! {
        <section id={Section::Projects.as_str()} class="section section-projects">
            <h2>{"Featured Projects"}</h2>
            <div class="project-stack">
                { for PROJECTS.iter().map(|project| html! {
                    <ProjectCard project={project} visible={props.visible} />
                }) }
            </div>
        </section>
    }
}

#[function_component(ContactFormView)]
fn contact_form_view() -> Html {
    let form = use_state(ContactForm::default);

    let edit = |update: fn(&mut ContactForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let apply = edit(|form, value| form.draft.name = value);
        Callback::from(move |event: InputEvent| {
            apply(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_email = {
        let apply = edit(|form, value| form.draft.email = value);
        Callback::from(move |event: InputEvent| {
            apply(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_message = {
        let apply = edit(|form, value| form.draft.message = value);
        Callback::from(move |event: InputEvent| {
            apply(event.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let current = (*form).clone();
            if current.status == SubmitStatus::Sending || !current.draft.is_complete() {
                return;
            }
            let sending = current.submitting();
            form.set(sending.clone());
            let form = form.clone();
            spawn_local(async move {
                let outcome = contact::send(&sending.draft).await;
                form.set(sending.resolved(outcome));
            });
        })
    };

    let sending = form.status == SubmitStatus::Sending;

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <fieldset disabled={sending}>
                <label>
                    {"Name"}
                    <input
                        type="text"
                        required=true
                        value={form.draft.name.clone()}
                        oninput={on_name}
                    />
                </label>
                <label>
                    {"Email"}
                    <input
                        type="email"
                        required=true
                        value={form.draft.email.clone()}
                        oninput={on_email}
                    />
                </label>
                <label>
                    {"Message"}
                    <textarea
                        required=true
                        rows="5"
                        value={form.draft.message.clone()}
                        oninput={on_message}
                    />
                </label>
                <button type="submit" class="submit-button">
                    {if sending { "Sending…" } else { "Send Message" }}
                </button>
            </fieldset>
            <p class="form-status" role="status">
                {match form.status {
                    SubmitStatus::Sent => "Thanks! Your message is on its way.",
                    SubmitStatus::Failed => "Something went wrong. Please try again.",
                    SubmitStatus::Idle | SubmitStatus::Sending => "",
                }}
            </p>
        </form>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section id={Section::Contact.as_str()} class="section section-contact">
            <h2>{"Let's Work Together"}</h2>
            <p class="section-lede">{"Have a project in mind? Reach out anytime."}</p>
            <div class="contact-grid">
                <div class="contact-cards">
                    <div class="contact-card">
                        <span class="card-label">{"Email"}</span>
                        <p>{content::EMAIL}</p>
                    </div>
                    <div class="contact-card">
                        <span class="card-label">{"Phone / WhatsApp"}</span>
                        <p>{content::PHONE}</p>
                    </div>
                    <div class="contact-card">
                        <span class="card-label">{"LinkedIn"}</span>
                        <ExternalLink href={content::LINKEDIN_URL} label="LinkedIn Profile" />
                    </div>
                    <div class="contact-card cv-card">
                        <h3>{"Download My CV"}</h3>
                        <a href={content::CV_PATH} download="" class="cv-button">
                            {"Download CV"}
                        </a>
                    </div>
                </div>
                <ContactFormView />
            </div>
            <p class="footer-note">{format!("© 2026 {}", content::OWNER_NAME)}</p>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let tracker = use_reducer(Tracker::default);
    let menu_open = use_state(|| false);

    {
        let dispatcher = tracker.dispatcher();
        use_effect_with((), move |_| {
            let callback =
                Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                    let batch: Vec<Observation> = entries
                        .iter()
                        .filter_map(|entry| {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            let section = Section::from_str(&entry.target().id())?;
                            Some(Observation {
                                section,
                                intersecting: entry.is_intersecting(),
                            })
                        })
                        .collect();
                    if !batch.is_empty() {
                        dispatcher.dispatch(batch);
                    }
                });

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from(VISIBILITY_THRESHOLD));

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .ok();
            match (&observer, window().and_then(|w| w.document())) {
                (Some(observer), Some(document)) => {
                    for section in Section::ALL {
                        if let Some(element) = document.get_element_by_id(section.as_str()) {
                            observer.observe(&element);
                        }
                    }
                }
                _ => log::warn!("section observer unavailable; nav highlighting disabled"),
            }

            // Released unconditionally with the view, fired or not.
            move || {
                if let Some(observer) = &observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        });
    }

    let on_navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |section: Section| {
            scroll_to_section(section);
            menu_open.set(false);
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |()| menu_open.set(!*menu_open))
    };

    let state = tracker.0;

    html! {
        <>
            <NavBar
                active={state.active}
                menu_open={*menu_open}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={on_toggle_menu}
            />
            <main>
                <HomeSection
                    visible={state.visibility.is_visible(Section::Home)}
                    on_navigate={on_navigate}
                />
                <ProjectsSection visible={state.visibility.is_visible(Section::Projects)} />
                <ContactSection />
            </main>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
