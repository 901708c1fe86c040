//! Course table for the Backend Engineer track.

use crate::syllabus::catalog::{Catalog, CatalogError, CourseDef, TopicDef};

pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_defs(vec![
        CourseDef {
            id: "node-npm",
            title: "Belajar Dasar Node.js dan NPM",
            description: "Panduan untuk mempelajari dasar-dasar Node.js dan NPM di JavaScript dalam pemrograman web",
            topics: vec![TopicDef {
                name: "Belajar Dasar Node.js dan NPM",
                lessons: &[
                    ("Perkenalan Apa Itu Node.Js", "06:44"),
                    ("Hal Yang Bisa Dilakukan Node.Js", "05:58"),
                    ("Cara Install Node.Js", "02:30"),
                    ("Berinteraksi Dengan Repl Milik Node.Js", "04:47"),
                    ("Menjalankan File Javascript Dengan Node.Js", "04:13"),
                    ("Memperlajari Object Process Dan Args Pada Node.Js", "10:54"),
                    ("Latihan Menggunakan Modul Filesystem Node.Js", "13:42"),
                    ("Bekerja Dengan Module Exports Di Node.Js", "10:06"),
                    ("Cara Lain Memanggil File Javascript Dengan Require", "05:31"),
                    ("Apa Itu Npm", "02:47"),
                    ("Cara Menginstall Package Dan Menggunakannya", "08:15"),
                    ("Menggunakan Global Package", "04:04"),
                    ("Pentingnya File Package.Json", "07:11"),
                    ("Cara Menginstall Package Dari Package.Json", "05:26"),
                    ("Latihan Membuat Project Berbasis Node.Js Dengan Package Npm", "14:49"),
                ],
            }],
        },
        CourseDef {
            id: "express-js",
            title: "Belajar Express Js",
            description: "Panduan untuk mempelajari dasar-dasar Express.js di JavaScript dalam pemrograman web",
            topics: vec![TopicDef {
                name: "Belajar Dasar Express.js",
                lessons: &[
                    ("Belajar Dasar Express.js", "06:11"),
                    ("Membuat Aplikasi Dengan Express.Js Pertama Kali", "07:43"),
                    ("Mengenal Object Request Dan Response", "05:36"),
                    ("Membuat Route Untuk Menentukan Response Tertentu", "09:17"),
                    ("Mempelajari Route Parameter Di Express.Js", "08:00"),
                    ("Mendapatkan Nilai Dari Query String", "05:50"),
                    ("Otomatis Restart Project Node.Js Dengan Nodemon", "02:55"),
                ],
            }],
        },
        CourseDef {
            id: "mongo-db",
            title: "Belajar MongoDB",
            description: "Panduan untuk mempelajari dasar belajar MongoDB",
            topics: vec![TopicDef {
                name: "Belajar MongoDB",
                lessons: &[
                    ("Perkenalan Database Dan Mongodb", "03:50"),
                    ("Perbedaan Database Sql Dan Nosql", "06:39"),
                    ("Kenapa Belajar Mongodb", "05:32"),
                    ("Cara Install Mongodb", "06:07"),
                    ("Cara Menjalankan Mongodb Dan Menggunakan Mongo Shell", "05:36"),
                    ("Apa Itu Bson", "05:50"),
                    ("Perintah Insert Di Mongodb", "05:23"),
                    ("Perintah Find Dan Findone Di Mongodb", "09:02"),
                    ("Perintah Updateone Dan Updatemany Di Mongodb", "07:17"),
                    ("Perintah Deleteone Dan Deletemany Di Mongodb", "04:40"),
                    ("Beberapa Query Operator Yang Perlu Kamu Coba", "08:40"),
                ],
            }],
        },
        CourseDef {
            id: "express-auth",
            title: "Belajar Konsep Auth dan Implementasi di Express.js",
            description: "Panduan untuk mempelajari konsep Auth dan implementasi di Express.js",
            topics: vec![TopicDef {
                name: "Belajar Konsep Auth dan Implementasi di Express.js",
                lessons: &[
                    ("Memahami Perbedaan Authentication Dan Authorization", "03:56"),
                    ("(Bukan) Cara Terbaik Simpan Password", "04:18"),
                    ("Syarat Kriptografi Yang Aman Untuk Password", "05:35"),
                    ("Mengenal Cara Kerja Salt Untuk Hash", "06:09"),
                    ("Mengenal Cara Kerja Bcrypt Untuk Hash Password", "11:25"),
                    ("Persiapan Auth Dengan Membuat Model Dan Halaman Register", "06:57"),
                    ("Cara Menyimpan Data Registrasi Dengan Bcrypt", "04:58"),
                    ("Implementasi Fungi Login Dengan Bcrypt", "06:19"),
                    ("Menyimpan Data Auth Dengan Session", "06:09"),
                    ("Implementasi Logout Dengan Menghapus Session", "04:28"),
                    ("Membuat Middleware Untuk Halaman Wajib Login", "04:40"),
                    ("Refactor Fungsi Bcrypt Register Dan Login", "08:05"),
                ],
            }],
        },
        CourseDef {
            id: "nestjs",
            title: "Belajar Menguasai NestJS, Framework JavaScript Populer",
            description: "Panduan untuk mempelajari menguasai Nest.js",
            topics: vec![
                TopicDef {
                    name: "Memulainya dari awal",
                    lessons: &[
                        ("Apa Itu Nest.Js Dan Setup Awal", "05:41"),
                        ("Penjelasan Library Yg Dibutuhkan Dan Setup Typescript", "04:34"),
                        ("Cara Membuat Controller Di Nest.Js", "05:15"),
                        ("Menjalankan Project Nest.Js", "04:36"),
                        ("Aturan Main (Naming Convention) Nest.Js", "06:18"),
                        ("Menentukan Route Pada Controller", "03:52"),
                    ],
                },
                TopicDef {
                    name: "Membuat Project dengan Nest CLI",
                    lessons: &[
                        ("Menggunakan Nest Cli Untuk Project Todo App", "05:54"),
                        ("Membuat File Module Dengan Nest Cli", "06:30"),
                        ("Membuat File Controller Dengan Nest Cli", "03:20"),
                        ("Cara Mendefinisikan Route Di Sebuah Controller", "04:17"),
                        ("Mengenal Software Untuk Mencoba Berbagai Method Http", "03:34"),
                    ],
                },
                TopicDef {
                    name: "Cara Kerja Validasi Data pada Pipe",
                    lessons: &[
                        ("Mendapatkan Data Yang Dikirim Dalam Request", "06:54"),
                        ("Mengenal Cara Kerja Pipe Di Nest.Js", "03:44"),
                        ("Implementasi Validasi Data Request Beserta Aturannya", "06:52"),
                        ("Cara Kerja Validation Pipe", "05:54"),
                        ("Bagaimana Parameter Menyajikan Data Sesuai Dengan Type Nya", "07:09"),
                    ],
                },
                TopicDef {
                    name: "Arsitektur Nest.js - Service dan Repository",
                    lessons: &[
                        ("Mengenal Service Dan Repository Di Nestjs", "05:07"),
                        ("Membuat Repository Beserta Methodnya", "05:15"),
                        ("Melanjutkan Method Pada Repository", "04:22"),
                        ("Membuat Service Untuk Memanggil Repository", "03:51"),
                        ("Implementasi Service Dan Repository Melalui Controller", "07:54"),
                        ("Menampilkan Pesan Error Dengan Exception", "05:45"),
                        ("Memahami Prinsip Inversion Of Control", "07:09"),
                        ("Sebelum Menggunakan Dependency Injection", "06:38"),
                        ("Implementasi Dependency Injection", "07:05"),
                    ],
                },
                TopicDef {
                    name: "Arsitektur Nest.js - Dependency Module",
                    lessons: &[
                        ("Project Yang Akan Kita Buat", "03:44"),
                        ("Buat Project Nest Dan Generate Modul-Modulnya", "05:54"),
                        ("Dependency Injection Antar Modul", "04:33"),
                        ("Memanggil Method Dari Lain Modul", "04:47"),
                        ("Menjalankan Banyak Modul Dalam Satu Controller", "05:47"),
                    ],
                },
                TopicDef {
                    name: "Persiapan Project",
                    lessons: &[
                        ("Menguasai Nest.Js Dengan Studi Kasus", "03:26"),
                        ("Persiapan Project Dan Desain Api", "03:58"),
                        ("Merancang Module Yang Dibutuhkan", "04:46"),
                        ("Generate Module Yang Dibutuhkan Dalam Project Nest", "03:24"),
                    ],
                },
                TopicDef {
                    name: "Membuat Entitas dengan TypeORM dan Repository",
                    lessons: &[
                        ("Persiapan Database Yang Akan Digunakan", "03:59"),
                        ("Setup Koneksi Database", "06:13"),
                        ("Membuat Entitas Dengan Typeorm", "04:44"),
                        ("Melihat Isi Database Dari Hasil Membuat Entitas", "06:44"),
                        ("Mengenal Cara Kerja Typeorm Beserta Decoratornya", "06:46"),
                        ("Catatan Tentang Repository Pada Nest", "03:52"),
                        ("Membuat Method Controller Untuk Create User Dan Validasinya", "06:25"),
                    ],
                },
                TopicDef {
                    name: "Membuat dan Menyimpan data User",
                    lessons: &[
                        ("Proses Menyimpan Data User Melalui Service Dan Repository", "07:10"),
                        ("Alur Kerja Logic Yang Sudah Dibuat", "05:29"),
                        ("Mengenal Method-Method Hook Di Nest", "03:57"),
                        ("Membuat Method Service Untuk Mendapatkan Data User", "05:01"),
                        ("Membuat Method Service Untuk Memperbarui Data User", "06:38"),
                        ("Membuat Method Service Untuk Menghapus Data User", "03:41"),
                        ("Mencari Data Berdasarkan Paramter Dan Query Di Database", "06:46"),
                        ("Menghapus Data Yang Ada Di Database", "04:09"),
                        ("Mengubah Data Yang Ada Di Database", "05:49"),
                        ("Catatan Tentang Error Handling Dengan Exception", "04:08"),
                    ],
                },
                TopicDef {
                    name: "Mengenal Interceptor untuk Mengurai data",
                    lessons: &[
                        ("Cara Memilih Properti Entitas Yang Muncul Pada Response", "05:50"),
                        ("Solusi Yang Direkomendasikan Untuk Mengubah Data Response", "03:55"),
                        ("Mengenal Interceptor Di Nest.Js", "10:35"),
                        ("Mengurai Data Response Melalui Dto Pada Interceptor", "04:58"),
                        ("Membuat Dto Pada Interceptor Menjadi Dimanis", "03:37"),
                        ("Refactor Dekorator Untuk Interceptor", "04:39"),
                        ("Menggunakan Interceptor Secara Global Di Controller", "04:06"),
                        ("Improve Type Safety Pada Serialize Interceptor", "04:53"),
                    ],
                },
                TopicDef {
                    name: "Authentication dengan Nest.js",
                    lessons: &[
                        ("Memahami Cara Kerja Auth Di Nest.Js Yg Akan Dibuat", "04:57"),
                        ("Setup Modul Dan Service Untuk Auth", "04:14"),
                        ("Fungsi Registrasi Dan Cara Mengamankan Password", "07:24"),
                        ("Membuat Salt Dan Melakukan Hash Untuk Password", "06:06"),
                        ("Menyimpan Data User Dengan Password Sudah Dihashed", "05:46"),
                        ("Membuat Service Proses Login", "08:04"),
                        ("Setup Session Dan Cara Kerja Cookie", "04:51"),
                        ("Contoh Menggunakan Session", "06:27"),
                        ("Implementasi Register Dan Login Dengan Session", "05:05"),
                        ("Implementasi Logout Dengan Menghapus Session", "04:34"),
                        ("Memisahkan Modul Auth Dari Modul User", "08:31"),
                        ("Membuat Custom Decorator Untuk Current User", "05:13"),
                        ("Persiapan Decorator Dan Interceptor Untuk Current User", "08:43"),
                        ("Cara Menghubungkan Interceptor Ke Dependency Injection", "04:31"),
                        ("Membuat Interceptor Menjadi Global", "04:38"),
                        ("Mencegah Request Masuk Tanpa Otentikasi", "05:33"),
                    ],
                },
                TopicDef {
                    name: "Belajar Unit Testing dan Integration Testing di Nest.js",
                    lessons: &[
                        ("Perkenalan Unit Testing", "06:21"),
                        ("Setup Awal File Unit Test", "10:06"),
                        ("Menguji Method Register Di Auth Service Harus Bekerja Dengan Benar", "06:27"),
                        ("Menguji Muncul Pesan Error Saat Registrasi Email Yg Sama", "04:54"),
                        ("Menguji Muncul Pesan Error Saat Login Dengan Invalid Email", "03:18"),
                        ("Menguji Saat Password Salah Dan Berhasil Login", "05:30"),
                        ("Refactor Mock Data Untuk Auth Service", "05:05"),
                        ("Implementasi Mock Data Dari Refactor Sebelumnya", "04:00"),
                        ("Setup Mock Unit Testing Auth Controller", "06:54"),
                        ("Menguji Method Login Berhasil Di Auth Controller", "06:58"),
                        ("Mengenal Integration Testing Atau E2e", "07:23"),
                        ("Langkah Awal Membuat File E2e Test", "07:06"),
                        ("Perbaiki Setup Integration Test Modul Auth", "05:37"),
                        ("Cara Lain Implementasi Pipe Dan Middleware Secara Global", "06:43"),
                        ("Setup Env Variable Untuk Project Nest", "06:22"),
                        ("Perbaiki Error Database Khusus Untuk Test", "06:32"),
                        ("Menguji Fungsi Register Kemudian Login Secara E2e", "04:45"),
                    ],
                },
                TopicDef {
                    name: "Relasi Table Database dengan TypeORM",
                    lessons: &[
                        ("Menyiapkan Request Handler Item Dengan Dto-Nya", "04:38"),
                        ("Menerapkan Validator Pada Item Dto", "03:39"),
                        ("Membuat Service Create Item", "05:38"),
                        ("Penjelasan Jenis-Jenis Relasi Database", "07:05"),
                        ("Setup Relasi Onetomany Pada Entitas Dengan Typeorm", "06:37"),
                        ("Menyimpan Data Item Beserta Usernya", "05:37"),
                        ("Mengubah Response Create Item Dengan Class-Transform", "05:42"),
                    ],
                },
                TopicDef {
                    name: "Authorization di Nest.js",
                    lessons: &[
                        ("Persiapan Approve Data Item Dari Admin", "05:46"),
                        ("Mencoba Membuat Data Item Dengan Status Approved False", "06:30"),
                        ("Mengenal Perbedaan Authentication Dengan Authorization Dulu", "05:20"),
                        ("Menyiapkan User Admin Dan Middleware Role Admin", "06:38"),
                        ("Membuat Middleware Current User", "07:32"),
                        ("Menerapkan Current User Middleware", "03:58"),
                    ],
                },
                TopicDef {
                    name: "Menggunakan Query builder di Nest.js",
                    lessons: &[
                        ("Persiapan Api Endpoint Item Dengan Query Builder", "05:26"),
                        ("Menggunakan Query Builder Di Typeorm", "04:19"),
                        ("Menambahkan Query Builder Dengan Query Parameter", "05:35"),
                        ("Menerapkan Opsional Pada Dto Dan Menerapkan Query Operator Like", "04:56"),
                    ],
                },
            ],
        },
        CourseDef {
            id: "security",
            title: "Security for Developer (Bangun aplikasimu menjadi super tangguh)",
            description: "Keamanan Siber Dasar: Lindungi Data dan Sistem Kamu. Kursus ini mengajarkan dasar-dasar Keamanan Siber, mulai dari pilar utama (CIA Triad, Availability) hingga ancaman nyata dan cara menanganinya",
            topics: vec![TopicDef {
                name: "Security for Developer",
                lessons: &[("Main Course", "120:00")],
            }],
        },
        CourseDef {
            id: "deploy",
            title: "Deploy JavaScript Project di cPanel",
            description: "Panduan cara deploy aplikasi JavaScript ke cPanel dengan mudah dan cepat.",
            topics: vec![TopicDef {
                name: "Deploy",
                lessons: &[("Deploying Javascript", "60:00")],
            }],
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
        assert_eq!(catalog.courses().len(), 10);
        assert!(catalog.lookup("nestjs").is_some());
    }

    #[test]
    fn nestjs_is_the_deep_course() {
        let catalog = catalog().unwrap();
        let course = catalog.lookup("nestjs").unwrap();
        assert_eq!(course.topics.len(), 14);
        assert!(course.total_seconds() > 3600);
    }
}
