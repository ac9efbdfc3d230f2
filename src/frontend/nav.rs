use super::dom;
use super::hooks::{use_global_listeners, ListenOn, SCROLL_EVENTS};
use crate::config::NavSection;
use crate::overlay::OverlayAction;
use crate::scroll::{active_section_ids, anchor_target, navbar_scrolled};
use crate::theme::{Theme, ThemeIcon};
use std::rc::Rc;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Default, PartialEq)]
struct ScrollSnapshot {
    scrolled: bool,
    active: Vec<String>,
}

impl ScrollSnapshot {
    fn capture(sections: &[NavSection]) -> Self {
        let scroll_y = dom::scroll_y();
        let bounds: Vec<_> = sections
            .iter()
            .filter_map(|section| dom::section_bounds(&section.id).map(|b| (section.id.as_str(), b)))
            .collect();

        Self {
            scrolled: navbar_scrolled(scroll_y),
            active: active_section_ids(scroll_y, bounds),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    pub children: Html,
}

/// Same-page link that scrolls smoothly instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(id) = anchor_target(&href) {
                event.prevent_default();
                dom::smooth_scroll_to(id);
            }
            on_navigate.emit(());
        })
    };

    html! {
        <a class={props.class.clone()} href={props.href.clone()} onclick={onclick}>
            {props.children.clone()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: AttrValue,
    pub sections: Rc<Vec<NavSection>>,
    pub theme: Theme,
    pub menu_open: bool,
    pub dropdown_open: bool,
    pub on_overlay: Callback<OverlayAction>,
    pub on_select_theme: Callback<Theme>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let snapshot = use_state_eq(ScrollSnapshot::default);
    let switcher = use_node_ref();

    {
        let sections = Rc::clone(&props.sections);
        let snapshot = snapshot.setter();
        use_global_listeners(ListenOn::Window, SCROLL_EVENTS, move |_| {
            snapshot.set(ScrollSnapshot::capture(&sections));
        });
    }

    {
        let switcher = switcher.clone();
        let on_overlay = props.on_overlay.clone();
        use_global_listeners(ListenOn::Document, &["click"], move |event| {
            if !dom::event_inside(&switcher, event) {
                on_overlay.emit(OverlayAction::CloseDropdown);
            }
        });
    }

    let on_toggle_menu = {
        let on_overlay = props.on_overlay.clone();
        Callback::from(move |_: MouseEvent| on_overlay.emit(OverlayAction::ToggleMenu))
    };
    let on_link = {
        let on_overlay = props.on_overlay.clone();
        Callback::from(move |_: ()| on_overlay.emit(OverlayAction::CloseMenu))
    };
    let on_toggle_dropdown = {
        let on_overlay = props.on_overlay.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_overlay.emit(OverlayAction::ToggleDropdown);
        })
    };

    html! {
        <nav id="navbar" class={classes!("navbar", snapshot.scrolled.then_some("scrolled"))}>
            <div class="nav-container">
                <AnchorLink href="#home" class="nav-logo">{props.brand.clone()}</AnchorLink>
                <ul id="nav-menu" class={classes!("nav-menu", props.menu_open.then_some("active"))}>
                    { for props.sections.iter().map(|section| {
                        let active = snapshot.active.contains(&section.id);
                        html! {
                            <li key={section.id.clone()}>
                                <AnchorLink
                                    href={format!("#{}", section.id)}
                                    class={classes!("nav-link", active.then_some("active"))}
                                    on_navigate={on_link.clone()}
                                >
                                    {section.label.clone()}
                                </AnchorLink>
                            </li>
                        }
                    }) }
                </ul>
                <div
                    id="theme-switcher"
                    ref={switcher}
                    class={classes!("theme-switcher", props.dropdown_open.then_some("active"))}
                >
                    <button id="theme-toggle" class="theme-toggle" type="button" onclick={on_toggle_dropdown}>
                        <ThemeGlyph icon={props.theme.icon()} />
                    </button>
                    <div id="theme-dropdown" class="theme-dropdown">
                        { for Theme::ALL.into_iter().map(|option| {
                            let active = option == props.theme;
                            let onclick = {
                                let on_select_theme = props.on_select_theme.clone();
                                let option = option.clone();
                                Callback::from(move |_: MouseEvent| on_select_theme.emit(option.clone()))
                            };
                            html! {
                                <button
                                    key={option.as_str().to_string()}
                                    type="button"
                                    class={classes!("theme-option", active.then_some("active"))}
                                    data-theme={option.as_str().to_string()}
                                    onclick={onclick}
                                >
                                    {option.label().to_string()}
                                </button>
                            }
                        }) }
                    </div>
                </div>
                <button
                    id="nav-toggle"
                    type="button"
                    class={classes!("nav-toggle", props.menu_open.then_some("active"))}
                    onclick={on_toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct ThemeGlyphProps {
    icon: ThemeIcon,
}

#[function_component(ThemeGlyph)]
fn theme_glyph(props: &ThemeGlyphProps) -> Html {
    let body = match props.icon {
        ThemeIcon::Sun => html! {
            <>
                <circle cx="12" cy="12" r="5" />
                <line x1="12" y1="1" x2="12" y2="3" />
                <line x1="12" y1="21" x2="12" y2="23" />
                <line x1="4.22" y1="4.22" x2="5.64" y2="5.64" />
                <line x1="18.36" y1="18.36" x2="19.78" y2="19.78" />
                <line x1="1" y1="12" x2="3" y2="12" />
                <line x1="21" y1="12" x2="23" y2="12" />
                <line x1="4.22" y1="19.78" x2="5.64" y2="18.36" />
                <line x1="18.36" y1="5.64" x2="19.78" y2="4.22" />
            </>
        },
        ThemeIcon::Moon => html! {
            <>
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
            </>
        },
    };

    html! {
        <svg class="theme-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            {body}
        </svg>
    }
}
