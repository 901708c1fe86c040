use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::syllabus::catalog::Catalog;

#[derive(Properties, PartialEq)]
pub struct CourseGridProps {
    pub catalog: Rc<Catalog>,
    /// Fired with the course id when a card's syllabus button is clicked.
    pub on_syllabus: Callback<String>,
}

/// The numbered course-card grid every track page shows. Card order follows
/// the catalog's build order.
#[function_component(CourseGrid)]
pub fn course_grid(props: &CourseGridProps) -> Html {
    html! {
        <section class="courses-section" id="courses">
            <h2>{"Apa Saja yang Akan Kamu Pelajari?"}</h2>
            <div class="course-grid">
                {
                    for props.catalog.courses().iter().enumerate().map(|(i, course)| {
                        let on_click = {
                            let on_syllabus = props.on_syllabus.clone();
                            let id = course.id.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_syllabus.emit(id.clone());
                            })
                        };
                        html! {
                            <div class="course-card">
                                <span class="course-number">{format!("{:02}", i + 1)}</span>
                                <h3>{&course.title}</h3>
                                <p>{&course.description}</p>
                                <div class="course-meta">
                                    <span>{format!("{} Materi", course.lesson_count())}</span>
                                    <span>{course.total_duration()}</span>
                                </div>
                                <button class="course-syllabus" onclick={on_click}>
                                    {"Lihat Silabus"}
                                </button>
                            </div>
                        }
                    })
                }
            </div>

            <style>
                {r#"
                .courses-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }

                .courses-section h2 {
                    text-align: center;
                    color: #fff;
                    font-size: 2rem;
                    margin-bottom: 2.5rem;
                }

                .course-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 1.25rem;
                }

                .course-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 14px;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .course-number {
                    color: #ffd166;
                    font-size: 0.9rem;
                    font-weight: 700;
                }

                .course-card h3 {
                    color: #fff;
                    font-size: 1.15rem;
                    line-height: 1.4;
                }

                .course-card p {
                    color: #999;
                    font-size: 0.92rem;
                    line-height: 1.6;
                    flex-grow: 1;
                }

                .course-meta {
                    display: flex;
                    gap: 1rem;
                    color: #ffd166;
                    font-size: 0.85rem;
                }

                .course-syllabus {
                    background: none;
                    border: 1px solid rgba(255, 209, 102, 0.5);
                    color: #ffd166;
                    border-radius: 8px;
                    padding: 0.6rem 1rem;
                    font-size: 0.92rem;
                    cursor: pointer;
                }

                .course-syllabus:hover {
                    background: rgba(255, 209, 102, 0.1);
                }
                "#}
            </style>
        </section>
    }
}
