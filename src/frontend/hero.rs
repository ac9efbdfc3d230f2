use super::dom;
use super::hooks::{use_global_listeners, ListenOn};
use super::nav::AnchorLink;
use crate::pointer::CursorFollower;
use crate::typing::Typewriter;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub phrases: Rc<Vec<String>>,
}

/// Each render schedules exactly one keystroke; unmounting drops the
/// pending timeout.
#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let typewriter = use_state_eq(Typewriter::default);

    {
        let phrases = Rc::clone(&props.phrases);
        let setter = typewriter.setter();
        use_effect_with((*typewriter).clone(), move |current| {
            let current = current.clone();
            let timeout = Timeout::new(current.delay_ms, move || {
                if let Some(next) = current.advanced(&phrases) {
                    setter.set(next);
                }
            });
            move || drop(timeout)
        });
    }

    html! { <span class="typing-text">{typewriter.text.clone()}</span> }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub name: AttrValue,
    pub intro: AttrValue,
    pub phrases: Rc<Vec<String>>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <p class="hero-greeting">{"Hello, I'm"}</p>
                <h1 class="hero-name">{props.name.clone()}</h1>
                <h2 class="hero-title">
                    <TypingText phrases={Rc::clone(&props.phrases)} />
                    <span class="typing-cursor">{"|"}</span>
                </h2>
                <p class="hero-intro">{props.intro.clone()}</p>
                <div class="hero-buttons">
                    <AnchorLink href="#projects" class="btn btn-primary">{"View My Work"}</AnchorLink>
                    <AnchorLink href="#contact" class="btn btn-secondary">{"Get In Touch"}</AnchorLink>
                </div>
            </div>
        </section>
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn follow_cursor(node: NodeRef, follower: Rc<RefCell<CursorFollower>>, slot: FrameSlot) {
    let next = Rc::clone(&slot);
    let handle = request_animation_frame(move |_| {
        next.borrow_mut().take();
        let style = {
            let mut follower = follower.borrow_mut();
            follower.advance();
            follower.style()
        };
        dom::set_inline_style(&node, &style);
        follow_cursor(node, follower, next);
    });
    *slot.borrow_mut() = Some(handle);
}

/// Glow that trails the pointer. Touch devices get nothing.
#[function_component(CursorGlow)]
pub fn cursor_glow() -> Html {
    let node = use_node_ref();
    let touch = use_memo((), |_| dom::is_touch_device());
    let follower = use_mut_ref(CursorFollower::default);

    {
        let follower = Rc::clone(&follower);
        use_global_listeners(ListenOn::Document, &["mousemove"], move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                follower
                    .borrow_mut()
                    .point_at(f64::from(event.client_x()), f64::from(event.client_y()));
            }
        });
    }

    {
        let node = node.clone();
        use_effect_with(*touch, move |touch| {
            let slot: FrameSlot = Rc::default();
            if !*touch {
                follow_cursor(node, follower, Rc::clone(&slot));
            }
            move || {
                slot.borrow_mut().take();
            }
        });
    }

    if *touch {
        return Html::default();
    }

    html! { <div class="cursor-glow" ref={node}></div> }
}
