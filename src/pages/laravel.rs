use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::countdown::Countdown;
use crate::components::course_grid::CourseGrid;
use crate::components::faq::{FaqEntry, FaqSection};
use crate::components::syllabus_modal::SyllabusModal;
use crate::data::laravel;
use crate::scroll_to_section;
use crate::syllabus::modal::OpenRequest;

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Apakah kelas ini cocok untuk pemula?",
        answer: "Cocok. Materi dimulai dari dasar PHP 8 dan Git, lalu naik bertahap sampai Laravel 11, Filament, dan integrasi AI. Tidak ada syarat pengalaman sebelumnya.",
    },
    FaqEntry {
        question: "Berapa lama akses materinya?",
        answer: "Akses seumur hidup, termasuk semua update materi di masa depan tanpa biaya tambahan.",
    },
    FaqEntry {
        question: "Apakah saya mendapat sertifikat?",
        answer: "Ya, setiap kelas yang kamu selesaikan menghasilkan sertifikat penyelesaian yang bisa dipasang di LinkedIn.",
    },
    FaqEntry {
        question: "Bagaimana jika saya kesulitan mengikuti materi?",
        answer: "Ada grup diskusi member untuk bertanya langsung. Kamu juga bisa mengulang video kapan pun karena aksesnya tidak dibatasi.",
    },
    FaqEntry {
        question: "Apakah materi AI-nya membutuhkan biaya API tambahan?",
        answer: "Sebagian besar latihan memakai tier gratis. Untuk bagian yang berbayar, kami tunjukkan perkiraan biayanya dan alternatif gratisnya.",
    },
];

#[function_component(LaravelTrack)]
pub fn laravel_track() -> Html {
    let catalog = use_state(|| match laravel::catalog() {
        Ok(catalog) => Some(Rc::new(catalog)),
        Err(err) => {
            log::error!("laravel catalog failed to build: {err}");
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
                <span class="hero-badge">{"Kelas Terbaru"}</span>
                <h1>{"Menjadi Laravel Developer di Era AI"}</h1>
                <p class="hero-sub">
                    {"Kuasai PHP 8, Laravel 11, dan Filament sampai mampu membangun \
                      aplikasi ber-AI yang siap produksi. Satu paket lengkap dari \
                      dasar hingga deploy."}
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
