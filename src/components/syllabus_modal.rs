use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::collapse::BodyRefs;
use crate::syllabus::accordion::AccordionState;
use crate::syllabus::catalog::{Catalog, Course};
use crate::syllabus::modal::{
    ModalLifecycle, ModalVisibility, OpenRequest, HIDE_DELAY_MS, SHOW_DELAY_MS,
};

#[derive(Properties, PartialEq)]
pub struct SyllabusModalProps {
    pub catalog: Rc<Catalog>,
    /// Course to show; `None` while dismissed. An unknown id never opens the
    /// modal, a new request while open (or closing) re-populates it in place;
    /// the request's sequence number keeps a same-course re-click from
    /// comparing equal to the one already shown.
    pub request: Option<OpenRequest>,
    /// Fired once the out-transition finished and the container is hidden.
    pub on_dismissed: Callback<()>,
}

/// A click dismisses only when it landed on the backdrop element itself;
/// anything inside the content bubbles up with a different target.
fn is_backdrop_click<T: PartialEq>(overlay: Option<T>, target: Option<T>) -> bool {
    overlay.is_some() && overlay == target
}

#[function_component(SyllabusModal)]
pub fn syllabus_modal(props: &SyllabusModalProps) -> Html {
    // The lifecycle machine lives in a RefCell so timer callbacks always see
    // the current generation instead of a render-time snapshot; `visibility`
    // mirrors it for rendering.
    let machine = use_mut_ref(ModalLifecycle::new);
    let visibility = use_state(|| ModalVisibility::Closed);
    let course = use_state(|| None::<Rc<Course>>);
    let accordion = use_state(AccordionState::first_expanded);
    let bodies = use_state(BodyRefs::default);
    let overlay_ref = use_node_ref();

    {
        let machine = machine.clone();
        let visibility = visibility.clone();
        let course = course.clone();
        let accordion = accordion.clone();
        let bodies = (*bodies).clone();
        let catalog = props.catalog.clone();
        use_effect_with_deps(
            move |request: &Option<OpenRequest>| {
                if let Some(request) = request {
                    if let Some(found) = catalog.lookup(request.course_id()) {
                        course.set(Some(Rc::new(found.clone())));
                        accordion.set(AccordionState::first_expanded());
                        bodies.collapse_all();
                        let token = machine.borrow_mut().request_open();
                        visibility.set(ModalVisibility::Opening);
                        let machine = machine.clone();
                        let visibility = visibility.clone();
                        let bodies = bodies.clone();
                        Timeout::new(SHOW_DELAY_MS, move || {
                            if machine.borrow_mut().shown_elapsed(token) {
                                visibility.set(ModalVisibility::Open);
                                // The container is display:block by now, so
                                // the auto-expanded first topic finally
                                // measures to its real height.
                                bodies.expand(0);
                            }
                        })
                        .forget();
                    } else {
                        log::warn!(
                            "syllabus requested for unknown course `{}`",
                            request.course_id()
                        );
                    }
                }
                || ()
            },
            props.request.clone(),
        );
    }

    let dismiss = {
        let machine = machine.clone();
        let visibility = visibility.clone();
        let on_dismissed = props.on_dismissed.clone();
        Callback::from(move |_e: MouseEvent| {
            let token = machine.borrow_mut().request_close();
            let Some(token) = token else { return };
            visibility.set(ModalVisibility::Closing);
            let machine = machine.clone();
            let visibility = visibility.clone();
            let on_dismissed = on_dismissed.clone();
            Timeout::new(HIDE_DELAY_MS, move || {
                if machine.borrow_mut().hide_elapsed(token) {
                    visibility.set(ModalVisibility::Closed);
                    on_dismissed.emit(());
                }
            })
            .forget();
        })
    };

    let on_backdrop_click = {
        let overlay_ref = overlay_ref.clone();
        let dismiss = dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            let overlay = overlay_ref.cast::<Element>();
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            if is_backdrop_click(overlay, target) {
                dismiss.emit(e);
            }
        })
    };

    let display = if *visibility == ModalVisibility::Closed {
        "display: none"
    } else {
        "display: block"
    };
    let overlay_class = classes!(
        "syllabus-overlay",
        (*visibility == ModalVisibility::Open).then_some("show"),
    );

    html! {
        <div class={overlay_class} style={display} ref={overlay_ref} onclick={on_backdrop_click}>
            <div class="syllabus-modal">
                <button class="syllabus-close" onclick={dismiss.clone()}>{"×"}</button>
                {
                    if let Some(course) = &*course {
                        render_course(course, &accordion, &bodies)
                    } else {
                        html! {}
                    }
                }
            </div>

            <style>
                {r#"
                .syllabus-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.65);
                    z-index: 100;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    overflow-y: auto;
                }

                .syllabus-overlay.show {
                    opacity: 1;
                }

                .syllabus-modal {
                    background: #16181d;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 14px;
                    max-width: 680px;
                    margin: 6vh auto;
                    padding: 2rem;
                    position: relative;
                    transform: scale(0.96);
                    transition: transform 0.3s ease;
                }

                .syllabus-overlay.show .syllabus-modal {
                    transform: scale(1);
                }

                .syllabus-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #888;
                    font-size: 1.8rem;
                    cursor: pointer;
                }

                .syllabus-close:hover {
                    color: #fff;
                }

                .syllabus-title {
                    color: #fff;
                    font-size: 1.6rem;
                    margin-bottom: 0.5rem;
                    padding-right: 2rem;
                }

                .syllabus-desc {
                    color: #aaa;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .syllabus-meta {
                    display: flex;
                    gap: 1.5rem;
                    color: #ffd166;
                    font-size: 0.9rem;
                    margin-bottom: 1.5rem;
                }

                .accordion-item {
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 10px;
                    margin-bottom: 0.6rem;
                    overflow: hidden;
                }

                .accordion-header {
                    width: 100%;
                    padding: 1rem 1.1rem;
                    background: rgba(255, 255, 255, 0.04);
                    border: none;
                    color: #fff;
                    font-size: 1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .accordion-icon {
                    color: #ffd166;
                    transition: transform 0.3s ease;
                }

                .accordion-item.active .accordion-icon {
                    transform: rotate(180deg);
                }

                .accordion-body {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                }

                .materials-list {
                    list-style: none;
                    margin: 0;
                    padding: 0.5rem 1.1rem 1rem;
                }

                .material-item {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.45rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    color: #ccc;
                    font-size: 0.92rem;
                }

                .material-item:last-child {
                    border-bottom: none;
                }

                .material-duration {
                    color: #777;
                    font-variant-numeric: tabular-nums;
                    white-space: nowrap;
                }
                "#}
            </style>
        </div>
    }
}

fn render_course(course: &Rc<Course>, accordion: &UseStateHandle<AccordionState>, bodies: &UseStateHandle<BodyRefs>) -> Html {
    html! {
        <>
            <h2 class="syllabus-title">{&course.title}</h2>
            <p class="syllabus-desc">{&course.description}</p>
            <div class="syllabus-meta">
                <span>{format!("Total Durasi: {}", course.total_duration())}</span>
                <span>{format!("{} Materi", course.lesson_count())}</span>
            </div>
            <div class="syllabus-accordion">
                {
                    for course.topics.iter().enumerate().map(|(i, topic)| {
                        let on_toggle = {
                            let accordion = accordion.clone();
                            let bodies = (**bodies).clone();
                            Callback::from(move |_e: MouseEvent| {
                                let mut next = *accordion;
                                let outcome = next.toggle(i);
                                bodies.apply(&outcome);
                                accordion.set(next);
                            })
                        };
                        html! {
                            <div class={classes!("accordion-item", accordion.is_expanded(i).then_some("active"))}>
                                <button class="accordion-header" onclick={on_toggle}>
                                    <span class="accordion-title">{&topic.name}</span>
                                    <span class="accordion-icon">{"▾"}</span>
                                </button>
                                <div class="accordion-body" ref={bodies.node_ref(i)}>
                                    <ul class="materials-list">
                                        {
                                            for topic.lessons.iter().map(|lesson| html! {
                                                <li class="material-item">
                                                    <span class="material-title">{&lesson.title}</span>
                                                    <span class="material-duration">{lesson.duration.to_string()}</span>
                                                </li>
                                            })
                                        }
                                    </ul>
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::is_backdrop_click;

    #[test]
    fn click_on_the_backdrop_itself_dismisses() {
        assert!(is_backdrop_click(Some("overlay"), Some("overlay")));
    }

    #[test]
    fn click_inside_the_content_does_not_dismiss() {
        assert!(!is_backdrop_click(Some("overlay"), Some("modal-content")));
    }

    #[test]
    fn missing_overlay_or_target_never_dismisses() {
        assert!(!is_backdrop_click(None::<&str>, Some("overlay")));
        assert!(!is_backdrop_click(Some("overlay"), None));
        assert!(!is_backdrop_click(None::<&str>, None));
    }
}
