use super::dom;
use super::hooks::use_reveal;
use crate::overlay::ProjectModal;
use crate::pointer::{CardTilt, Tilt};
use crate::projects::{ProjectCatalog, ProjectRecord, ShowMore};
use crate::scroll::{reveal_delay, RevealGroup};
use std::rc::Rc;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    record: Rc<ProjectRecord>,
    index: usize,
    show: bool,
    on_open: Callback<String>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let (node, revealed) = use_reveal();
    let tilt = use_state_eq(CardTilt::default);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(bounds) = dom::element_bounds(&node) {
                tilt.set(CardTilt::Tilted(Tilt::from_pointer(
                    bounds,
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                )));
            }
        })
    };
    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(CardTilt::Released))
    };
    let on_card = {
        let id = props.record.id.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };
    let on_details = {
        let id = props.record.id.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_open.emit(id.clone());
        })
    };

    let record = &props.record;
    let style = format!("transition-delay: {}; {}", reveal_delay(props.index), tilt.style());

    html! {
        <article
            ref={node}
            class={classes!(
                RevealGroup::ProjectCard.class_name(),
                "reveal",
                revealed.then_some("active"),
                record.hidden.then_some("project-hidden"),
                props.show.then_some("show")
            )}
            data-project={record.id.clone()}
            style={style}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
            onclick={on_card}
        >
            <p class="project-company">{record.company.clone()}</p>
            <h3 class="project-title">{record.title.clone()}</h3>
            <p class="project-summary">{record.summary.clone()}</p>
            <div class="project-tech">
                { for record.tech.iter().take(4).map(|tech| html! { <span>{tech.clone()}</span> }) }
            </div>
            <button class="project-detail-btn" type="button" onclick={on_details}>
                {"View Details"}
            </button>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub catalog: Rc<ProjectCatalog>,
    pub on_open: Callback<String>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let show_more = use_state_eq(ShowMore::default);

    let on_show_more = {
        let show_more = show_more.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *show_more;
            next.toggle();
            show_more.set(next);
        })
    };

    html! {
        <section id="projects" class="projects">
            <h2 class="section-title">{"Featured Projects"}</h2>
            <div class="projects-grid">
                { for props.catalog.iter().enumerate().map(|(index, record)| html! {
                    <ProjectCard
                        key={record.id.clone()}
                        record={Rc::clone(record)}
                        index={index}
                        show={show_more.reveals(record)}
                        on_open={props.on_open.clone()}
                    />
                }) }
            </div>
            if props.catalog.has_hidden() {
                <button
                    id="show-more-projects"
                    type="button"
                    class={classes!("show-more-btn", show_more.expanded().then_some("expanded"))}
                    onclick={on_show_more}
                >
                    {show_more.label()}
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <polyline points="6 9 12 15 18 9" />
                    </svg>
                </button>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectModalViewProps {
    pub modal: ProjectModal,
    pub on_close: Callback<()>,
}

#[function_component(ProjectModalView)]
pub fn project_modal_view(props: &ProjectModalViewProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let (company, title, description, features, tech) = match props.modal.content() {
        Some(record) => (
            record.company.clone(),
            record.title.clone(),
            record.description.clone(),
            record.features.clone(),
            record.tech.clone(),
        ),
        None => Default::default(),
    };

    html! {
        <div id="project-modal" class={classes!("project-modal", props.modal.visible().then_some("active"))}>
            <div class="modal-overlay" onclick={on_close.clone()}></div>
            <div class="modal-content">
                <button id="modal-close" class="modal-close" type="button" onclick={on_close}>
                    {"×"}
                </button>
                <p class="modal-company">{company}</p>
                <h3 class="modal-title">{title}</h3>
                <p class="modal-description">{description}</p>
                <h4>{"Key Features"}</h4>
                <ul class="modal-features-list">
                    { for features.into_iter().map(|feature| html! { <li>{feature}</li> }) }
                </ul>
                <h4>{"Technologies"}</h4>
                <div class="modal-tech-list">
                    { for tech.into_iter().map(|tech| html! { <span>{tech}</span> }) }
                </div>
            </div>
        </div>
    }
}
