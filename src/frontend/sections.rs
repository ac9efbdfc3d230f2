use super::dom;
use super::hooks::{use_reveal, use_visible_once};
use crate::config::{Owner, SkillCategory, Stat, TimelineEntry};
use crate::contact::{ContactField, ContactForm, MessageSink, SubmitButton, SENT_CONFIRMATION_MS};
use crate::pointer::{glow_position, glow_style};
use crate::scroll::{reveal_delay, RevealGroup};
use crate::visibility::{
    skill_bar_width, CounterAnimation, CounterFrame, SKILLS_THRESHOLD, STATS_THRESHOLD,
};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct RevealProps {
    group: RevealGroup,
    index: usize,
    #[prop_or_default]
    children: Html,
}

#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <div
            ref={node}
            class={classes!(props.group.class_name(), "reveal", revealed.then_some("active"))}
            style={format!("transition-delay: {};", reveal_delay(props.index))}
        >
            {props.children.clone()}
        </div>
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn drive_counter(counter: Rc<RefCell<CounterAnimation>>, shown: UseStateSetter<u64>, slot: FrameSlot) {
    let frame = counter.borrow_mut().tick();
    shown.set(frame.value());

    if let CounterFrame::Running(_) = frame {
        let next = Rc::clone(&slot);
        let handle = request_animation_frame(move |_| {
            next.borrow_mut().take();
            drive_counter(counter, shown, next);
        });
        *slot.borrow_mut() = Some(handle);
    }
}

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    stat: Stat,
    start: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let shown = use_state_eq(|| 0_u64);

    {
        let shown = shown.setter();
        let target = props.stat.count;
        use_effect_with(props.start, move |start| {
            let slot: FrameSlot = Rc::default();
            if *start {
                let counter = Rc::new(RefCell::new(CounterAnimation::new(target)));
                drive_counter(counter, shown, Rc::clone(&slot));
            }
            move || {
                slot.borrow_mut().take();
            }
        });
    }

    html! {
        <div class="stat">
            <span class="stat-number" data-count={props.stat.count.to_string()}>{*shown}</span>
            <span class="stat-suffix">{props.stat.suffix.clone()}</span>
            <span class="stat-label">{props.stat.label.clone()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub paragraphs: Rc<Vec<String>>,
    pub stats: Rc<Vec<Stat>>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let section = use_node_ref();
    let counting = use_visible_once(section.clone(), STATS_THRESHOLD);

    html! {
        <section id="about" class="about" ref={section}>
            <h2 class="section-title">{"About Me"}</h2>
            <Reveal group={RevealGroup::AboutContent} index={0}>
                { for props.paragraphs.iter().map(|paragraph| html! { <p>{paragraph.clone()}</p> }) }
                <div class="stats">
                    { for props.stats.iter().map(|stat| html! {
                        <StatCounter key={stat.label.clone()} stat={stat.clone()} start={counting} />
                    }) }
                </div>
            </Reveal>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    category: SkillCategory,
    index: usize,
    filled: bool,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let (node, revealed) = use_reveal();
    let glow = use_state_eq(String::new);

    let onmousemove = {
        let node = node.clone();
        let glow = glow.clone();
        Callback::from(move |event: MouseEvent| {
            let position = dom::element_bounds(&node).and_then(|bounds| {
                glow_position(bounds, f64::from(event.client_x()), f64::from(event.client_y()))
            });
            if let Some((x, y)) = position {
                glow.set(glow_style(x, y));
            }
        })
    };

    let style = format!("transition-delay: {}; {}", reveal_delay(props.index), *glow);

    html! {
        <div
            ref={node}
            class={classes!(RevealGroup::SkillCategory.class_name(), "reveal", revealed.then_some("active"))}
            style={style}
            onmousemove={onmousemove}
        >
            <h3>{props.category.name.clone()}</h3>
            { for props.category.skills.iter().map(|skill| html! {
                <div class="skill-item" key={skill.name.clone()}>
                    <div class="skill-info">
                        <span>{skill.name.clone()}</span>
                        <span>{format!("{}%", skill.percent)}</span>
                    </div>
                    <div class="skill-bar">
                        <div
                            class="skill-progress"
                            data-progress={skill.percent.to_string()}
                            style={skill_bar_width(skill.percent, props.filled)}
                        ></div>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub categories: Rc<Vec<SkillCategory>>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let section = use_node_ref();
    let filled = use_visible_once(section.clone(), SKILLS_THRESHOLD);

    html! {
        <section id="skills" class="skills" ref={section}>
            <h2 class="section-title">{"Skills"}</h2>
            <div class="skills-grid">
                { for props.categories.iter().enumerate().map(|(index, category)| html! {
                    <SkillCard key={category.name.clone()} category={category.clone()} index={index} filled={filled} />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExperienceProps {
    pub entries: Rc<Vec<TimelineEntry>>,
}

#[function_component(Experience)]
pub fn experience(props: &ExperienceProps) -> Html {
    html! {
        <section id="experience" class="experience">
            <h2 class="section-title">{"Experience"}</h2>
            <div class="timeline">
                { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                    <Reveal group={RevealGroup::TimelineItem} index={index}>
                        <span class="timeline-date">{entry.period.clone()}</span>
                        <h3>{entry.role.clone()}</h3>
                        <h4>{entry.company.clone()}</h4>
                        <ul>
                            { for entry.highlights.iter().map(|line| html! { <li>{line.clone()}</li> }) }
                        </ul>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

enum ContactAction {
    Edit(ContactField, String),
    Submit(Rc<dyn MessageSink>),
    RestoreButton,
}

#[derive(Default, PartialEq)]
struct ContactFormState(ContactForm);

impl Reducible for ContactFormState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            ContactAction::Edit(field, value) => form.set(field, value),
            ContactAction::Submit(sink) => form.submit(sink.as_ref()),
            ContactAction::RestoreButton => form.restore_button(),
        }
        Rc::new(Self(form))
    }
}

fn edit_input(form: &UseReducerHandle<ContactFormState>, field: ContactField) -> Callback<InputEvent> {
    let dispatcher = form.dispatcher();
    Callback::from(move |event: InputEvent| {
        let value = event.target_unchecked_into::<HtmlInputElement>().value();
        dispatcher.dispatch(ContactAction::Edit(field, value));
    })
}

/// `sink` receives every submitted message.
#[derive(Properties)]
pub struct ContactProps {
    pub owner: Owner,
    pub sink: Rc<dyn MessageSink>,
}

impl PartialEq for ContactProps {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && Rc::ptr_eq(&self.sink, &other.sink)
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_reducer(ContactFormState::default);

    {
        let dispatcher = form.dispatcher();
        use_effect_with(form.0.button, move |button| {
            let timeout = (*button == SubmitButton::Sent).then(|| {
                Timeout::new(SENT_CONFIRMATION_MS, move || {
                    dispatcher.dispatch(ContactAction::RestoreButton)
                })
            });
            move || drop(timeout)
        });
    }

    let onsubmit = {
        let dispatcher = form.dispatcher();
        let sink = Rc::clone(&props.sink);
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(ContactAction::Submit(Rc::clone(&sink)));
        })
    };
    let on_message = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlTextAreaElement>().value();
            dispatcher.dispatch(ContactAction::Edit(ContactField::Message, value));
        })
    };

    let button = form.0.button;
    let fields = &form.0.fields;

    html! {
        <section id="contact" class="contact">
            <h2 class="section-title">{"Get In Touch"}</h2>
            <Reveal group={RevealGroup::ContactContent} index={0}>
                <div class="contact-info">
                    <p>{props.owner.email.clone()}</p>
                    <p>{props.owner.phone.clone()}</p>
                    <p>{props.owner.location.clone()}</p>
                </div>
                <form id="contact-form" class="contact-form" onsubmit={onsubmit}>
                    <input
                        name="name"
                        type="text"
                        placeholder="Your Name"
                        required={true}
                        value={fields.name.clone()}
                        oninput={edit_input(&form, ContactField::Name)}
                    />
                    <input
                        name="email"
                        type="email"
                        placeholder="Your Email"
                        required={true}
                        value={fields.email.clone()}
                        oninput={edit_input(&form, ContactField::Email)}
                    />
                    <textarea
                        name="message"
                        placeholder="Your Message"
                        required={true}
                        value={fields.message.clone()}
                        oninput={on_message}
                    />
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled={button.disabled()}
                        style={button.style()}
                    >
                        if button == SubmitButton::Sent {
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" style="width:18px;height:18px">
                                <polyline points="20 6 9 17 4 12"></polyline>
                            </svg>
                        }
                        {button.label()}
                    </button>
                </form>
            </Reveal>
        </section>
    }
}
