mod dom;
mod hero;
mod hooks;
mod nav;
mod sections;
mod showcase;

use crate::config::{NavSection, Owner, SiteConfig, SkillCategory, Stat, TimelineEntry};
use crate::contact::{LogSink, MessageSink};
use crate::overlay::{OverlayAction, Overlays};
use crate::projects::ProjectCatalog;
use crate::telemetry::{LogLevel, Logger};
use crate::theme::{Theme, ThemeController};
use dom::LocalStorageStore;
use hero::{CursorGlow, Hero};
use hooks::{use_global_listeners, ListenOn};
use nav::Navbar;
use sections::{About, Contact, Experience, Skills};
use serde_json::json;
use showcase::{ProjectModalView, Projects};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct OverlayState(Overlays);

impl Reducible for OverlayState {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        if next.apply(action) {
            Rc::new(Self(next))
        } else {
            self
        }
    }
}

/// Config slices shared with child components, built once per mount.
struct Content {
    nav: Rc<Vec<NavSection>>,
    phrases: Rc<Vec<String>>,
    about: Rc<Vec<String>>,
    stats: Rc<Vec<Stat>>,
    skills: Rc<Vec<SkillCategory>>,
    catalog: Rc<ProjectCatalog>,
    timeline: Rc<Vec<TimelineEntry>>,
}

impl Content {
    fn from_config(config: &SiteConfig) -> Self {
        Self {
            nav: Rc::new(config.nav.clone()),
            phrases: Rc::new(config.phrases.clone()),
            about: Rc::new(config.about.clone()),
            stats: Rc::new(config.stats.clone()),
            skills: Rc::new(config.skills.clone()),
            catalog: Rc::new(config.projects.clone()),
            timeline: Rc::new(config.timeline.clone()),
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let logger = props.config.logger();
    let content = {
        let config = Rc::clone(&props.config);
        use_memo((), move |_| Content::from_config(&config))
    };
    let overlays = {
        let catalog = Rc::clone(&content.catalog);
        use_reducer(move || OverlayState(Overlays::new(catalog)))
    };
    let theme = use_state_eq(|| ThemeController::new(LocalStorageStore).saved_theme());
    let sink = use_memo((), move |_| -> Rc<dyn MessageSink> { Rc::new(LogSink::new(logger)) });

    // Paints and persists on mount too, so an unrecognized stored name is
    // written back unchanged.
    use_effect_with((*theme).clone(), move |theme| {
        dom::paint_theme(theme);
        ThemeController::new(LocalStorageStore).apply(theme);
        logger.debug("theme_applied", json!({ "theme": theme.as_str() }));
        || ()
    });

    use_effect_with(overlays.0.scroll_locked(), |locked| {
        dom::set_scroll_locked(*locked);
        || ()
    });

    {
        let dispatcher = overlays.dispatcher();
        use_global_listeners(ListenOn::Document, &["keydown"], move |event| {
            if event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|event| event.key() == "Escape")
            {
                dispatcher.dispatch(OverlayAction::Escape);
            }
        });
    }

    use_global_listeners(ListenOn::Window, &["load"], move |_| {
        dom::mark_body_loaded();
        logger.debug("page_loaded", json!({}));
    });
    use_effect_with((), |_| {
        if dom::page_loaded() {
            dom::mark_body_loaded();
        }
        || ()
    });

    let on_overlay = {
        let dispatcher = overlays.dispatcher();
        Callback::from(move |action: OverlayAction| dispatcher.dispatch(action))
    };
    let on_select_theme = {
        let theme = theme.clone();
        let dispatcher = overlays.dispatcher();
        Callback::from(move |next: Theme| {
            theme.set(next);
            dispatcher.dispatch(OverlayAction::CloseDropdown);
        })
    };
    let on_open_project = {
        let dispatcher = overlays.dispatcher();
        let catalog = Rc::clone(&content.catalog);
        Callback::from(move |id: String| {
            if catalog.get(&id).is_some() {
                logger.info("project_modal_opened", json!({ "project": id }));
            } else {
                logger.debug("project_modal_missing", json!({ "project": id }));
            }
            dispatcher.dispatch(OverlayAction::OpenProject(id));
        })
    };
    let on_close_project = {
        let dispatcher = overlays.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(OverlayAction::CloseProject))
    };

    let owner = &props.config.owner;

    html! {
        <>
            <Navbar
                brand={owner.name.clone()}
                sections={Rc::clone(&content.nav)}
                theme={(*theme).clone()}
                menu_open={overlays.0.menu_open()}
                dropdown_open={overlays.0.dropdown_open()}
                on_overlay={on_overlay}
                on_select_theme={on_select_theme}
            />
            <main>
                <Hero
                    name={owner.name.clone()}
                    intro={owner.intro.clone()}
                    phrases={Rc::clone(&content.phrases)}
                />
                <About paragraphs={Rc::clone(&content.about)} stats={Rc::clone(&content.stats)} />
                <Skills categories={Rc::clone(&content.skills)} />
                <Projects catalog={Rc::clone(&content.catalog)} on_open={on_open_project} />
                <Experience entries={Rc::clone(&content.timeline)} />
                <Contact owner={owner.clone()} sink={(*sink).clone()} />
            </main>
            <footer class="footer">
                <p>{format!("© {}", owner.name)}</p>
            </footer>
            <ProjectModalView modal={overlays.0.modal().clone()} on_close={on_close_project} />
            <CursorGlow />
        </>
    }
}

fn greet(logger: &Logger, owner: &Owner) {
    logger.log_event(
        LogLevel::Info,
        "greeting",
        json!({
            "message": format!("Hello there! Thanks for checking out {}'s portfolio.", owner.name),
            "contact": owner.email,
        }),
    );
}

pub fn run() {
    let config = match SiteConfig::load() {
        Ok(config) => Rc::new(config),
        Err(error) => {
            Logger::default().info("site_config_invalid", json!({ "error": error.to_string() }));
            return;
        }
    };

    let logger = config.logger();
    logger.info(
        "site_config_loaded",
        json!({
            "projects": config.projects.len(),
            "phrases": config.phrases.len(),
            "log_level": config.log_level.as_str(),
        }),
    );
    greet(&logger, &config.owner);

    yew::Renderer::<App>::with_root_and_props(
        dom::document()
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps { config },
    )
    .render();
}
