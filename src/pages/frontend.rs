use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::countdown::Countdown;
use crate::components::course_grid::CourseGrid;
use crate::components::faq::{FaqEntry, FaqSection};
use crate::components::syllabus_modal::SyllabusModal;
use crate::data::frontend;
use crate::scroll_to_section;
use crate::syllabus::modal::OpenRequest;

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Saya belum pernah menulis JavaScript, bisa ikut?",
        answer: "Bisa. Track ini sengaja dimulai dari JavaScript paling dasar, lalu DOM, Tailwind, React, sampai Next.js. Setiap konsep dibangun di atas konsep sebelumnya.",
    },
    FaqEntry {
        question: "Kenapa React dan Next.js, bukan framework lain?",
        answer: "Keduanya masih yang paling banyak dicari di lowongan kerja frontend Indonesia maupun remote. Konsep yang kamu pelajari juga mudah dipindahkan ke framework lain.",
    },
    FaqEntry {
        question: "Berapa lama akses materinya?",
        answer: "Akses seumur hidup, termasuk semua update materi di masa depan tanpa biaya tambahan.",
    },
    FaqEntry {
        question: "Apakah ada proyek nyata yang dikerjakan?",
        answer: "Ada. Mulai dari manipulasi DOM sederhana sampai aplikasi Next.js dengan data fetching, kamu membangun proyek yang layak masuk portofolio.",
    },
    FaqEntry {
        question: "Apakah saya mendapat sertifikat?",
        answer: "Ya, setiap kelas yang kamu selesaikan menghasilkan sertifikat penyelesaian yang bisa dipasang di LinkedIn.",
    },
];

#[function_component(FrontendTrack)]
pub fn frontend_track() -> Html {
    let catalog = use_state(|| match frontend::catalog() {
        Ok(catalog) => Some(Rc::new(catalog)),
        Err(err) => {
            log::error!("frontend catalog failed to build: {err}");
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
                <span class="hero-badge">{"Frontend Track"}</span>
                <h1>{"Modern Frontend Master"}</h1>
                <p class="hero-sub">
                    {"Dari JavaScript dasar sampai React dan Next.js. Jalur lengkap \
                      untuk menjadi frontend developer yang siap kerja, bukan sekadar \
                      bisa ikut tutorial."}
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
