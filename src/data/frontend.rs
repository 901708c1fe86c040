//! Course table for the Modern Frontend track.

use crate::syllabus::catalog::{Catalog, CatalogError, CourseDef, TopicDef};

pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_defs(vec![
        CourseDef {
            id: "js-dasar",
            title: "JavaScript Dasar",
            description: "Pelajari fondasi utama bahasa pemrograman JavaScript, dari tipe data hingga fitur-fitur terbaru. Cocok untuk pemula yang ingin memahami konsep dasar JavaScript secara mendalam.",
            topics: vec![
                TopicDef {
                    name: "Tipe Data Primitif Dan Developer Tools Console",
                    lessons: &[
                        ("Tipe Data Primitif Dan Developer Tools Console", "06:11"),
                        ("Tipe Data Numbers", "06:34"),
                        ("Apa Itu Nilai Nan", "03:22"),
                        ("Variabel Dan Kata Kunci Let", "07:23"),
                        ("Memperbarui Nilai Number Di Dalam Variabel", "04:09"),
                        ("Kata Kunci Const Dan Var Untuk Variabel", "04:59"),
                        ("Tipe Data Booleani", "03:31"),
                        ("Tips Memberikan Nama Variabel Seperti Anak Sendiri", "05:22"),
                    ],
                },
                TopicDef {
                    name: "Tipe Data String dan Lainnya",
                    lessons: &[
                        ("Mengenal Tipe Data String", "05:49"),
                        ("Penjelasan Index Pada String Dan Panjang Karakter", "08:30"),
                        ("Method-Method Javascript Yang Memudahkan Hidup Kita", "04:46"),
                        ("Method Dan Argument (Parameter)", "05:20"),
                        ("Template Literals Save Your Life", "05:47"),
                        ("Mengenal Null Dan Undefined", "02:54"),
                        ("Mengenal Object Math Dan Angka Acak", "03:51"),
                    ],
                },
                TopicDef {
                    name: "JavaScript Logic Pembuat Keputusan",
                    lessons: &[
                        ("Bagaimana Membuat Keputusan Di Dalam Code", "03:10"),
                        ("Operator Pembanding", "04:41"),
                        ("Perbedaan Jumlah Sama Dengan Dua Dan Tiga", "06:19"),
                        ("Console Alert Dan Prompt", "04:27"),
                        ("Menjalankan Javascript Di Dalam File", "06:55"),
                        ("If Statement Pertama Yg Kamu Pelajari", "06:42"),
                        ("Else If Statement Makin Banyak Pilihan", "05:43"),
                        ("Else Adalah Pilihan Terakhir", "04:48"),
                        ("Cek Kondisi Berlapis Lebih Aman", "07:31"),
                        ("Operator Logic And", "05:39"),
                        ("Operator Logic Or", "04:27"),
                        ("Operator Logic Not", "02:44"),
                        ("Switch Sebagai Alternatif If Statement", "05:03"),
                    ],
                },
                TopicDef {
                    name: "JavaScript Struktur Data Array",
                    lessons: &[
                        ("Mengenal Struktur Data Array", "08:12"),
                        ("Mendapatkan Nilai Dengan Index Dan Mengubah Isinya", "07:38"),
                        ("Method Array Push Dan Pop", "06:25"),
                        ("Method Array Unshift Dan Shift", "04:22"),
                        ("Beberapa Method Array Yang Sering Digunakan", "08:20"),
                        ("Beberapa Method Array Yang Sering Digunakan Lagi", "08:32"),
                        ("Mengubah Nilai Const Dengan Array", "04:04"),
                        ("Array Multidimensi Atau Nested Array", "04:59"),
                    ],
                },
                TopicDef {
                    name: "JavaScript Struktur Data Object",
                    lessons: &[
                        ("Apa Itu Object", "04:47"),
                        ("Cara Membuat Struktur Data Object", "06:17"),
                        ("Cara Memanggil Data Dari Object", "05:18"),
                        ("Cara Membuat Object Berjalan", "03:40"),
                        ("Cara Memanggil Object Di Dalam Array", "03:50"),
                    ],
                },
                TopicDef {
                    name: "JavaScript Perulangan menggunakan For Loop",
                    lessons: &[
                        ("Pengenalan Perulangan", "06:47"),
                        ("Contoh Lain Perulangan For", "06:24"),
                        ("Awas Perulangan Tanpa Henti", "02:46"),
                        ("Mendapatkan Data Dari Array Dengan Perulangan", "04:00"),
                        ("Pengenalan Nested Loop", "06:59"),
                        ("Mendapatkan Data Dari Nested Array Dengan Nested Loop", "05:43"),
                        ("Perulangan Menggunakan Perintah While", "04:12"),
                        ("Kata Kunci Break Untuk Memberhentikan Perulangan", "06:04"),
                        ("Membuat Game Tebak Tebakkan Angka Dengan While", "07:44"),
                        ("Cara Elegan Melakukan Perulangan Pada Array For Of", "05:43"),
                        ("Melakukan Perulangan Pada Object Dengan Elegan For In", "05:38"),
                    ],
                },
                TopicDef {
                    name: "Function dan Method pada JavaScript",
                    lessons: &[
                        ("Pengenalan Function Di Javascript", "06:32"),
                        ("Mendefinisikan Dan Menjalankan Function", "07:08"),
                        ("Argument Dan Parameter Dalam Function", "06:56"),
                        ("Multiple Parameter Dan Argument", "05:42"),
                        ("Statement Return Pada Function", "08:28"),
                        ("Visibilitas Variabel Sesuai Scope Atau Ruang Lingkup", "09:13"),
                        ("Blocked Scope Variabel", "09:06"),
                        ("Lexical Scope", "05:01"),
                        ("Function Expressions", "05:28"),
                        ("Function Sebagai Argument Function Lain", "05:09"),
                        ("Function Bernilai Balik Function", "05:27"),
                        ("Definisi Sebuah Method", "05:10"),
                        ("This Adalah Keyword Sakti", "04:37"),
                        ("Try And Catch Adalah Penyelamat", "07:31"),
                    ],
                },
                TopicDef {
                    name: "Callback Function dan Method-method milik Array",
                    lessons: &[
                        ("Foreach Method", "09:23"),
                        ("Map Method", "06:45"),
                        ("Sebelum Lanjut Kenalan Dengan Arrow Function", "06:26"),
                        ("Return Secara Implisit Dari Arrow Function", "04:23"),
                        ("Memahami Settimeout Dan Setinterval", "08:01"),
                        ("Memilih Data Tertentu Di Dalam Array Dengan Filter Method", "09:38"),
                        ("Menentukan Benar Atau Salah Pada Array Dengan Every Dan Some Method", "05:49"),
                        ("Mendapatkan Satu Nilai Sesuai Kondisi Dari Sebuah Array Dengan Reduce", "12:41"),
                        ("Object This Di Dalam Arrow Function Mengarah Pada Object Global Window", "04:49"),
                    ],
                },
                TopicDef {
                    name: "Beberapa Fitur Terbaru dari JavaScript",
                    lessons: &[
                        ("Mengatur Default Value Pada Function", "08:24"),
                        ("Mengubah Array Atau Object Menjadi Deret Value Argument Function", "04:20"),
                        ("Menggabungkan Nilai Array Dengan Array Lagi", "05:24"),
                        ("Menggabungkan Property Object Dengan Object Lainnya", "03:31"),
                        ("Malas Bikin Parameter Banyak Bisa Pakai Rest Param", "07:38"),
                        ("Bongkar Element Array Ke Masing-Masing Variabel Dengan Mudah", "03:26"),
                        ("Bongkar Juga Properti Object Ke Masing-Masing Variabel", "05:43"),
                        ("Bongkar Properti Object Bisa Dilakukan Di Dalam Function", "04:48"),
                    ],
                },
            ],
        },
        CourseDef {
            id: "js-dom",
            title: "JavaScript DOM Mastery",
            description: "Pelajari cara memanipulasi halaman web secara langsung menggunakan Document Object Model. Dari dasar hingga event handling, semua ada di sini.",
            topics: vec![
                TopicDef {
                    name: "Mengenal Document Object Model",
                    lessons: &[
                        ("Apa Itu Dom", "04:34"),
                        ("Melihat Isi Document Object Model", "09:17"),
                        ("Mendapatkan Element Html Berdasarkan Id", "09:24"),
                        ("Mendapatkan Element Html Berdasarkan Tag Dan Class", "11:09"),
                        ("Lebih Mudah Memilih Element Dengan Menggunakan Queryselector", "07:43"),
                        ("Memahami Innerthtml, Innertext Dan Textcontent", "12:35"),
                        ("Mendapatkan Attribute Yang Dimiliki Element Html", "06:05"),
                        ("Melakukan Styling Dengan Javascript Dom", "08:03"),
                        ("Memanfaatkan Classlist Untuk Styling Dengan Dom", "08:04"),
                        ("Menjelajahi Element Parent, Child Dan Sibling", "10:20"),
                        ("Memahami Append Dan Appendchild", "11:37"),
                        ("Memahami Remove Dan Removechild", "04:41"),
                        ("Latihan Memanggil Pokemon Dengan Dom", "10:18"),
                    ],
                },
                TopicDef {
                    name: "Mengenal Event DOM - Membuat Web Lebih Interaktif",
                    lessons: &[
                        ("Pengantar Event Dom", "05:53"),
                        ("Menjalankan Event Pada Inline Element", "09:48"),
                        ("Menjalankan Event Melalui Property Dom", "07:15"),
                        ("Mengenal Fungsi Addeventlistener", "07:32"),
                        ("Latihan Addeventlistener Untuk Generate Color", "07:23"),
                        ("Manfaatkan Keyword This Pada Event Dom", "07:44"),
                        ("Belajar Keyboard Event Dan Mengenal Object Dalam Event", "12:14"),
                        ("Mengenal Event Preventdefault", "07:11"),
                        ("Praktek Input Realtime Dengan Event Dan Dom", "06:55"),
                        ("Event Input Dan Change Pada Form", "06:22"),
                        ("Mengenal Event Bubbling", "05:44"),
                        ("Mengenal Event Delegation", "07:14"),
                    ],
                },
                TopicDef {
                    name: "Latihan DOM Membuat Papan Skor",
                    lessons: &[
                        ("Latihan Dom Membuat Papan Skor Bag 1", "11:34"),
                        ("Latihan Dom Membuat Papan Skor Bag 2", "06:44"),
                        ("Latihan Dom Membuat Papan Skor Bag 3", "07:56"),
                        ("Latihan Dom Membuat Papan Skor Bag 4", "08:02"),
                    ],
                },
            ],
        },
        CourseDef {
            id: "tailwind-dasar",
            title: "Tailwind Dasar - Desain Web Kilat Jaman Sekarang",
            description: "Bosankah dengan CSS yang rumit dan makan waktu? Dalam waktu singkat, kamu akan menguasai framework CSS Tailwind untuk membangun antarmuka pengguna (UI) yang responsif dan indah dengan cepat.",
            topics: vec![TopicDef {
                name: "Tailwind Dasar",
                lessons: &[("Styling Website dengan Tailwind CSS", "120:00")],
            }],
        },
        CourseDef {
            id: "react-fundamental",
            title: "React Fundamental",
            description: "Pelajari fondasi React dari awal hingga mahir. Dari instalasi hingga routing, kuasai semua konsep dasar yang dibutuhkan untuk membangun aplikasi web modern.",
            topics: vec![TopicDef {
                name: "Belajar ReactJS",
                lessons: &[
                    ("Introduction - Instalasi", "09:54"),
                    ("Pengenalan Project React", "12:26"),
                    ("Pengenalan Component Dasar", "05:14"),
                    ("JSX", "08:04"),
                    ("Props pada Child Component", "06:43"),
                    ("Blog sederhana menggunakan JSON", "09:20"),
                    ("Fitur Filter Data dan Pengenalan useState", "11:34"),
                    ("Mengembalikan Value ke Parent melalui Props", "11:10"),
                    ("Conditional Rendering", "05:14"),
                    ("Conditional Rendering 2", "08:02"),
                    ("onClick Methods", "08:52"),
                    ("Lifecycle dan useEffect", "11:25"),
                    ("Fetch API dengan useEffect", "06:29"),
                    ("Multiple useEffect", "03:40"),
                    ("Dasar State Management dengan useContext", "12:17"),
                    ("Menginstall React Router", "09:35"),
                    ("Halaman About", "03:12"),
                    ("Layouting dan Children Routes", "10:26"),
                    ("Halaman Blog", "07:48"),
                    ("Dynamic Parameter Route dan Menampilkan Artikel", "12:56"),
                    ("React Router Data Loader", "09:37"),
                    ("Error Page", "03:47"),
                    ("Dynamic Style untuk NavLink", "09:22"),
                ],
            }],
        },
        CourseDef {
            id: "react-hook",
            title: "React Hook - Effect dan Data Fetching",
            description: "Kuasai konsep useEffect dan data fetching di React. Pelajari cara mengelola lifecycle component, menghindari infinite loop, dan membangun aplikasi dengan fetch data yang efisien.",
            topics: vec![TopicDef {
                name: "React.js - Belajar Hook Effect dan Data Fetching",
                lessons: &[
                    ("Memahami Component Lifecycle Sebelum Belajar Effect", "03:44"),
                    ("Cara Yang Harus Dihindari Saat Melakukan Fetch Dan Update State", "08:24"),
                    ("Gunakan Useeffect Untuk Mencegah Infinite loop", "03:34"),
                    ("Mengenal Effect Lebih Lanjut", "04:10"),
                    ("Menggunakan Async Function Di React", "05:03"),
                    ("Memanfaatkan State Untuk Loading Progress", "03:21"),
                    ("Cara Handle Error Dengan Baik", "08:15"),
                    ("Mengenal Dependency Array Pada Effect", "04:57"),
                    ("Contoh Proses Sinkronisasi Useeffect Di React", "04:13"),
                    ("Memanfaatkan Dependency Array Untuk Fetch Data", "04:03"),
                    ("Mendapatkan Id Movie Yang Dipilih", "05:05"),
                    ("Membuat Component Untuk Melihat Id Movie", "05:29"),
                    ("Cara Mendapatkan Detail Movie Melalui Fetch Menggunakan Effect", "06:02"),
                    ("Menampilkan Detail Movie Di Component Movie Detail", "07:48"),
                    ("Menambahkan Daftar Tonton Ke Watched List", "07:47"),
                    ("Menyimpan Nilai Rating Saat Tambah Data Movie", "05:47"),
                    ("Mendapatkan Kumpulan Nilai User Rating Dan Hapus Daftar Tonton", "06:02"),
                    ("Membuat Effect Untuk Membuat Judul Page Dinamis", "04:08"),
                    ("Memahami Lifecycle Unmount Pada Effect", "04:16"),
                    ("Menghindari Fetch Setiap Update State Query", "06:01"),
                ],
            }],
        },
        CourseDef {
            id: "next-js",
            title: "Next.js dengan Headless CMS",
            description: "Kuasai Next.js dari dasar hingga integrasi dengan Headless CMS. Pelajari routing, server rendering, styling dengan Tailwind, deployment, dan cara mengelola konten dengan Strapi.",
            topics: vec![
                TopicDef {
                    name: "Pengenalan dan Setup Next.js",
                    lessons: &[
                        ("Pengenalan Next.Js Beserta Jenisnya", "06:14"),
                        ("Apa Saja Yang Akan Dipelajari Dan Pengenalan Project", "06:30"),
                        ("Cara Setup Project Next.Js Dari Awal", "09:05"),
                        ("Cara Membuat Halaman Web", "05:40"),
                        ("Cara Menggunakan Typescript Di Project Next.Js", "05:21"),
                    ],
                },
                TopicDef {
                    name: "Routing Dan Layout",
                    lessons: &[
                        ("Cara Membuat Url Atau Memetakan Route Halaman", "05:12"),
                        ("Latihan Menambahkan Route Halaman", "04:16"),
                        ("Fitur Nested Layout Pada App Router", "04:36"),
                        ("Mengenal Server Rendering Di Next.Js", "06:06"),
                        ("Perbedaan Server Component Dan Client Component", "05:24"),
                        ("Menjalankan Project Next.Js Mode Production", "06:16"),
                        ("Menggunakan Component Link Untuk Tautan", "05:11"),
                        ("Mengenal Prefetch Di Next.Js", "04:59"),
                        ("Latihan Navigasi Dan Fungsi Layout", "04:15"),
                    ],
                },
                TopicDef {
                    name: "Styling Dan Component",
                    lessons: &[
                        ("Teknik Styling Di Next.Js", "07:01"),
                        ("Install Tailwindcss Dan Konfigurasinya", "05:36"),
                        ("Latihan Styling Layout", "07:36"),
                        ("Memanfaatkan Color Pallete Tailwindcss", "05:01"),
                        ("Membuat Component Reusable Di Next.Js", "04:40"),
                        ("Memanfaatkan Import Alias Untuk Perpendek Path", "04:06"),
                        ("Menggunakan Static Assets", "04:32"),
                        ("Membuat Card Post List", "05:46"),
                        ("Mengubah Post Card List Menjadi Component", "04:09"),
                        ("Cara Terbaik Menggunakan Font Di Next.Js", "05:30"),
                        ("Menggunakan Font Variable Dengan Tailwindcss", "04:50"),
                    ],
                },
                TopicDef {
                    name: "Mengelola Konten Markdown",
                    lessons: &[
                        ("Cara Membaca File Markdown Di Next.Js", "04:52"),
                        ("Menampilkan Data Markdown Pada Component", "04:10"),
                        ("Menampilkan Style Markdown Yang Sesuai Dengan Tailwindcss", "03:50"),
                        ("Mengenal Data Meta Dari Markdown - Front-Matter", "04:55"),
                        ("Memisahkan Layer Data Dengan Layer Ui", "04:58"),
                        ("Membuat Route Dinamis Untuk Post", "04:06"),
                        ("Membuat Fungsi Untuk Mendapatkan List Content Post", "06:02"),
                        ("Menampilkan Data Post Pada Halaman Blog", "03:40"),
                        ("Menambahkan Data Deskripsi Dan Cara Mendapatkan Link Sebuah Post", "02:54"),
                    ],
                },
                TopicDef {
                    name: "SEO, Metadata, Dan Fitur Tambahan",
                    lessons: &[
                        ("Cara Menggunakan Meta Data Untuk Seo Di Next.Js", "05:51"),
                        ("Template Meta Data Agar Title Menjadi Dinamis Setiap Halaman", "03:57"),
                        ("Membuat Metadata Lebih Dinamis Untuk Seo Friendly", "03:18"),
                        ("Menambahkan Favicon Dan Metadata Lainnya", "04:19"),
                        ("Membuat Component Client Untuk Share Link", "06:16"),
                        ("Membuat Fungsi Copy Link Dengan Client Component", "05:59"),
                        ("Percantik Halaman Web Dengan Icon Berbasis Tailwindcss", "03:35"),
                    ],
                },
                TopicDef {
                    name: "Deploy Project Next.Js",
                    lessons: &[
                        ("Persiapan Deploy Project Next.Js", "04:23"),
                        ("Deploy Project Next.Js Di Vercel", "04:25"),
                        ("Persiapan Deploy Static Page Next.Js", "04:10"),
                        ("Deploy Project Static Page Next.Js Di Self Hosting", "04:33"),
                    ],
                },
                TopicDef {
                    name: "Integrasi Headless CMS Dengan Strapi",
                    lessons: &[
                        ("Mengenal Teknologi Headless Cms", "04:15"),
                        ("Persiapan Headless Cms Untuk Membuat Konten", "08:19"),
                        ("Cara Mendapatkan Data Dari Strapi Di Next.Js", "07:02"),
                        ("Menentukan Data Response Dari Strapi Dengan Parameter", "06:02"),
                        ("Persiapan Menampilkan Data List Post Dari Strapi", "04:22"),
                        ("Mendapatkan Gambar Dan Data Lainnya Dari Strapi", "04:21"),
                        ("Cara Mendapatkan Satu Data Dari Strapi Berdasarkan Slug", "04:07"),
                        ("Menampilkan Single Post Dari Strapi", "04:25"),
                        ("Refactor Kode Fetch Data Post Dari Strapi", "06:19"),
                        ("Mendapatkand Data Slug Untuk Digenerate Static Page", "05:23"),
                    ],
                },
                TopicDef {
                    name: "Optimasi, Revalidasi, Dan Pagination",
                    lessons: &[
                        ("Setup Eslint Untuk Menjaga Kualitas Kode Program", "05:37"),
                        ("Menggunakan Image Component Dari Next", "05:00"),
                        ("Proses Konversi File Gambar Dengan Component Image", "04:29"),
                        ("Mengenal Fungsi Dynamic Parameter", "05:26"),
                        ("Mengenal Fungsi Force Dynamic Pada Component", "04:34"),
                        ("Menampilkan Halaman Not Found", "03:49"),
                        ("Mengenal Fungsi Revalidate Untuk Fetch Data", "04:16"),
                        ("Menggunakan Force Update Dan Revalidate Di Fetch", "04:36"),
                        ("Menyiapkan Jalan Untuk Webhook Konten Dari Cms", "07:16"),
                        ("Menggunakan On Demand Revalidation", "05:33"),
                        ("Mendapatkan Data Dari Query Parameter Untuk Pagination", "07:29"),
                        ("Menggunakan Parameter Pagination Strapi", "04:24"),
                        ("Mendapatkan Nilai Total Halaman Dari Pagination", "03:54"),
                        ("Memisahkan Component Pagination Dan Logic Batas Page", "06:21"),
                    ],
                },
            ],
        },
        CourseDef {
            id: "career",
            title: "Strategi Karir Full Stack Web Developer",
            description: "Roadmap langkah demi langkah menembus industri tech, dari CV hingga negosiasi gaji.",
            topics: vec![TopicDef {
                name: "Introduction",
                lessons: &[("Strategi Karir Full Stack Web Developer", "120:00")],
            }],
        },
        CourseDef {
            id: "branding",
            title: "Membangun Personal Branding untuk Programmer",
            description: "Cara menonjol di antara ribuan developer lain dan dikejar recruiter melalui LinkedIn & GitHub.",
            topics: vec![TopicDef {
                name: "Introduction",
                lessons: &[("Personal Branding", "120:00")],
            }],
        },
        CourseDef {
            id: "english",
            title: "English For Developer",
            description: "Kuasai istilah teknis dan percakapan profesional untuk bekerja di perusahaan internasional.",
            topics: vec![TopicDef {
                name: "Introduction",
                lessons: &[("English For Developer!", "120:00")],
            }],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_builds_and_validates() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.courses().len(), 9);
        assert!(catalog.lookup("next-js").is_some());
    }

    #[test]
    fn js_dasar_keeps_topic_order() {
        let catalog = catalog().unwrap();
        let course = catalog.lookup("js-dasar").unwrap();
        assert_eq!(course.topics.len(), 9);
        assert_eq!(course.topics[0].name, "Tipe Data Primitif Dan Developer Tools Console");
    }
}
