use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::collapse::BodyRefs;
use crate::syllabus::accordion::AccordionState;

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub entries: Vec<FaqEntry>,
}

/// Static FAQ list with single-open accordion behavior. Owns its own
/// [`AccordionState`], independent from the syllabus modal's.
#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let state = use_state(AccordionState::collapsed);
    let bodies = use_state(BodyRefs::default);

    html! {
        <section class="faq-section" id="faq">
            <h2>{"Pertanyaan yang Sering Diajukan"}</h2>
            {
                for props.entries.iter().enumerate().map(|(i, entry)| {
                    let on_toggle = {
                        let state = state.clone();
                        let bodies = (*bodies).clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            let mut next = *state;
                            let outcome = next.toggle(i);
                            bodies.apply(&outcome);
                            state.set(next);
                        })
                    };
                    let open = state.is_expanded(i);
                    html! {
                        <div class={classes!("faq-item", open.then_some("active"))}>
                            <button class="faq-question" onclick={on_toggle}>
                                <span>{entry.question}</span>
                                <span class="faq-icon">{if open { "−" } else { "+" }}</span>
                            </button>
                            <div class="faq-answer" ref={bodies.node_ref(i)}>
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                })
            }

            <style>
                {r#"
                .faq-section {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }

                .faq-section h2 {
                    text-align: center;
                    font-size: 2rem;
                    margin-bottom: 2rem;
                    color: #fff;
                }

                .faq-item {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 10px;
                    margin-bottom: 0.75rem;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.1rem 1.25rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .faq-icon {
                    color: #ffd166;
                    font-size: 1.3rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.25rem;
                }

                .faq-answer p {
                    color: #aaa;
                    line-height: 1.6;
                    padding-bottom: 1.1rem;
                }
                "#}
            </style>
        </section>
    }
}
