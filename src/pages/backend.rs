use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::countdown::Countdown;
use crate::components::course_grid::CourseGrid;
use crate::components::faq::{FaqEntry, FaqSection};
use crate::components::syllabus_modal::SyllabusModal;
use crate::data::backend;
use crate::scroll_to_section;
use crate::syllabus::modal::OpenRequest;

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Apakah saya perlu bisa frontend dulu?",
        answer: "Tidak. Track ini berdiri sendiri dan dimulai dari Node.js paling dasar. Pemahaman JavaScript dasar membantu, tapi semua yang dibutuhkan dijelaskan ulang.",
    },
    FaqEntry {
        question: "Kenapa NestJS dipilih sebagai framework utamanya?",
        answer: "NestJS memaksa kamu memahami arsitektur: module, dependency injection, pipe, interceptor. Pola-pola itu yang membedakan backend engineer dari sekadar pembuat endpoint.",
    },
    FaqEntry {
        question: "Apakah materi testing-nya serius atau sekadar contoh?",
        answer: "Serius. Ada bab khusus unit testing dan integration testing di NestJS, termasuk mocking dan setup database khusus test.",
    },
    FaqEntry {
        question: "Berapa lama akses materinya?",
        answer: "Akses seumur hidup, termasuk semua update materi di masa depan tanpa biaya tambahan.",
    },
    FaqEntry {
        question: "Apakah saya mendapat sertifikat?",
        answer: "Ya, setiap kelas yang kamu selesaikan menghasilkan sertifikat penyelesaian yang bisa dipasang di LinkedIn.",
    },
];

#[function_component(BackendTrack)]
pub fn backend_track() -> Html {
    let catalog = use_state(|| match backend::catalog() {
        Ok(catalog) => Some(Rc::new(catalog)),
        Err(err) => {
            log::error!("backend catalog failed to build: {err}");
            None
        }
    });
    let syllabus_for = use_state(|| None::<OpenRequest>);

    let on_cta = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("courses");
    });

    // Each click mints a fresh request so re-opening the same course while
    // the previous close is still animating is not dropped as a no-change.
    let on_syllabus = {
        let syllabus_for = syllabus_for.clone();
        Callback::from(move |id: String| {
            syllabus_for.set(Some(OpenRequest::next((*syllabus_for).as_ref(), id)));
        })
    };

    let on_dismissed = {
        let syllabus_for = syllabus_for.clone();
        Callback::from(move |_| syllabus_for.set(None))
    };

    html! {
        <div class="track-page">
            <section class="hero">
                <span class="hero-badge">{"Backend Track"}</span>
                <h1>{"Menjadi Backend Engineer dengan Sistem Cepat dan Scaleable"}</h1>
                <p class="hero-sub">
                    {"Node.js, Express, MongoDB, sampai NestJS dengan arsitektur yang \
                      benar. Belajar membangun API yang aman, teruji, dan siap \
                      menerima beban produksi."}
                </p>
                <Countdown />
                <button class="hero-cta" onclick={on_cta}>{"Lihat Semua Kelas"}</button>
            </section>

            {
                if let Some(catalog) = &*catalog {
                    html! {
                        <>
                            <CourseGrid catalog={catalog.clone()} on_syllabus={on_syllabus} />
                            <FaqSection entries={FAQ.to_vec()} />
                            <SyllabusModal
                                catalog={catalog.clone()}
                                request={(*syllabus_for).clone()}
                                on_dismissed={on_dismissed}
                            />
                        </>
                    }
                } else {
                    html! { <FaqSection entries={FAQ.to_vec()} /> }
                }
            }

            { super::track_style() }
        </div>
    }
}
