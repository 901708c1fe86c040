//! Course table for the AI-Powered Laravel track, supplied by the content
//! team and validated on load.

use crate::syllabus::catalog::{Catalog, CatalogError, CourseDef, TopicDef};

pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_defs(vec![
        CourseDef {
            id: "php8",
            title: "Modern PHP 8 & Database Mastery",
            description: "Pelajari fondasi utama bahasa pemrograman PHP versi terbaru dan teknik pengelolaan database. Inilah modal utama kamu sebelum menjadi developer profesional.",
            topics: vec![TopicDef {
                name: "PHP 8 dan MySQL: Panduan CRUD Lengkap untuk Pemula",
                lessons: &[
                    ("Introduction", "04:14"),
                    ("PHPMyAdmin", "08:12"),
                    ("Create Table", "08:46"),
                    ("Alter Table", "04:41"),
                    ("Insert Data", "13:18"),
                    ("Select", "12:45"),
                    ("Select Filter", "06:51"),
                    ("Update", "11:18"),
                    ("Delete", "04:41"),
                    ("Pengenalan MySQLi", "05:07"),
                    ("Mengkoneksikan database", "12:51"),
                    ("Select Query", "09:00"),
                    ("Menampilkan data", "08:53"),
                    ("Menampilkan data detail", "10:50"),
                    ("Menampilkan data detail", "10:32"),
                    ("Form Tambah Data", "14:33"),
                    ("Insert data", "13:49"),
                    ("Form Update", "12:53"),
                    ("Update", "05:27"),
                    ("Delete", "06:52"),
                    ("Search", "13:56"),
                    ("Pendahuluan & Connection", "08:51"),
                    ("Insert", "10:16"),
                    ("List & Search", "11:09"),
                    ("Detail", "04:46"),
                    ("Update & Delete", "06:17"),
                ],
            }],
        },
        CourseDef {
            id: "git",
            title: "Professional Workflow dengan Git",
            description: "Kuasai cara mengelola kode dan kolaborasi tim menggunakan Git. Kamu akan belajar standar kerja yang digunakan oleh tim developer di perusahaan besar.",
            topics: vec![TopicDef {
                name: "Belajar Git Pemula",
                lessons: &[
                    ("GIT Pendahuluan", "11:40"),
                    ("GIT Panduan Instalasi GIT", "03:38"),
                    ("GIT Macam-macam Perintah GIT Dasar", "02:44"),
                    ("GIT Menginisialisasi project dengan git init dan mencoba clone", "06:12"),
                    ("GIT Menambahkan file baru, dan melakukan git add", "03:47"),
                    ("GIT Reset perubahan file dengan git reset", "01:54"),
                    ("GIT Melakukan commit, mempraktekan diff dan log", "06:51"),
                    ("GIT Melakukan unggah file dengan git push", "08:52"),
                    ("GIT Melakukan unduh file dengan git pull", "03:16"),
                    ("GIT Bermain main dengan fetch dan branch", "05:21"),
                    ("GIT Membuat branch baru, melakukan checkout", "07:31"),
                    ("GIT Menyatukan branch satu dengan lainnya, git merge", "03:44"),
                    ("GIT Menyelesaikan Konflik pada GIT", "07:23"),
                    ("GIT Menandai milestone project dengan git tag", "04:21"),
                ],
            }],
        },
        CourseDef {
            id: "oop",
            title: "Mastering OOP PHP (Object Oriented Programming)",
            description: "Pelajari cara menulis kode yang rapi, terstruktur, dan mudah dikembangkan. Konsep ini adalah kunci utama untuk memahami kecanggihan framework Laravel.",
            topics: vec![
                TopicDef {
                    name: "Pengenalan OOP",
                    lessons: &[
                        ("Apa itu OOP", "09:05"),
                        ("Cara Mendefinisikan Class", "08:06"),
                        ("Memahami Instance Object", "05:16"),
                        ("Property pada Class OOP", "10:37"),
                        ("Method pada Class OOP", "07:32"),
                        ("Menggunakan Object", "08:54"),
                        ("Mengenal Inheritance", "05:39"),
                        ("Mendefinisikan Subclass", "08:39"),
                    ],
                },
                TopicDef {
                    name: "MATERI LANJUTAN",
                    lessons: &[
                        ("Extend dan Override", "09:52"),
                        ("Visibilitas Object – Encapsulation", "14:24"),
                        ("Setter dan Getter", "08:59"),
                        ("Static Property dan Method", "10:14"),
                        ("Pewarisan Static Property dan Method", "08:07"),
                        ("Constant Class", "06:01"),
                        ("Merujuk Parent Class", "09:45"),
                        ("Construct Method", "06:57"),
                        ("Construct Argument", "08:05"),
                        ("Destruct Method", "07:30"),
                        ("Clone Method", "05:50"),
                        ("Autoload Method", "08:50"),
                        ("PHP Namespace Overview", "04:17"),
                        ("Menggunakan Namespace", "07:18"),
                        ("Menggunakan Composer", "08:19"),
                        ("Penjelasan Interface", "04:50"),
                        ("Membuat Interface", "06:35"),
                        ("Penjelasan Trait", "03:11"),
                        ("Membuat Trait", "03:55"),
                        ("Penjelasan Abstract Class", "02:48"),
                        ("Membuat Abstract Class", "04:11"),
                        ("Penjelasan Type Hint", "06:04"),
                        ("Penjelasan Strict Declaration", "04:49"),
                        ("Penjelasan Return Type", "07:15"),
                        ("Penjelasan Closure", "07:41"),
                        ("Membuat Closure", "08:48"),
                    ],
                },
            ],
        },
        CourseDef {
            id: "olx",
            title: "Membangun Marketplace dengan AI Assist",
            description: "Praktek langsung membuat website marketplace (OLX Clone) menggunakan PHP yang dipercepat dengan bantuan AI. Belajar cara kerja cerdas sejak awal.",
            topics: vec![TopicDef {
                name: "PHP Native & MySQL: Membangun Website OLX Clone dengan AI Assist Windsurf",
                lessons: &[
                    ("Introduction", "02:07"),
                    ("Mengapa AI", "04:07"),
                    ("Apakah AI Akan Menggantikan Programmer", "05:14"),
                    ("Skenario Yang Akan Dibuat", "02:54"),
                    ("Tools yang dibutuhkan apa saja", "03:21"),
                    ("Sekilas Tentang Agentic IDE", "03:46"),
                    ("Apa Itu Database", "03:38"),
                    ("Instalasi Windsurf Editor", "04:12"),
                    ("Instalasi XAMPP", "05:46"),
                    ("User Persona", "06:23"),
                    ("Merancang Database", "04:52"),
                    ("Konfigurasi Dulu", "07:05"),
                    ("Relasi dan Table", "15:05"),
                    ("Halaman Utama", "11:51"),
                    ("Halaman Detail", "06:11"),
                    ("Halaman Login dan Register", "04:37"),
                    ("Halaman Pasang Iklan", "08:36"),
                    ("Konfigurasi Awal", "06:06"),
                    ("Skema Register", "11:44"),
                    ("Skema Login", "08:19"),
                    ("Kategori dinamis pada post ad", "09:22"),
                    ("Location dinamis pada post ad", "11:03"),
                    ("Post ad bagian 1", "13:31"),
                    ("Post ad bagian 2", "06:05"),
                    ("Testing pasang iklan", "06:03"),
                    ("Skenario Halaman Beranda", "08:42"),
                    ("Skenario Halaman Detail", "09:26"),
                    ("Percantik Halaman Detail", "05:51"),
                    ("Halaman Iklan Saya", "07:36"),
                    ("Fitur Edit dan Hapus Iklan Saya", "12:27"),
                    ("Session Notice dan Logout", "04:12"),
                    ("Halaman Edit Profile", "09:09"),
                    ("Testing Semua Fitur", "08:54"),
                    ("Persiapan Launch Market", "04:10"),
                    ("Hosting Bagian 1", "16:36"),
                    ("Hosting Lanjutan dan Final Testing", "08:01"),
                ],
            }],
        },
        CourseDef {
            id: "laravel11",
            title: "Laravel: The Ultimate Fullstack Framework",
            description: "Kuasai framework PHP paling populer saat ini. Kamu akan belajar membangun aplikasi web yang utuh, aman, dan berperforma tinggi dari nol.",
            topics: vec![
                TopicDef {
                    name: "Router",
                    lessons: &[
                        ("router - mengenal cara kerja router", "05:05"),
                        ("router - kenali http method sebelum praktek", "04:30"),
                        ("router - contoh penggunaan method get", "07:36"),
                        ("router - cara kerja method post di laravel", "08:55"),
                        ("router - mendapatkan data dari user menggunakan method post", "06:27"),
                        ("router - mengubah data dengan method put dan cara kirim melalui form", "06:00"),
                        ("router - menggunakan route parameter untuk menentukan data", "04:12"),
                        ("router - menggunakan method patch untuk ubah data", "04:02"),
                        ("router - menggunakan method delete dan kesimpulan", "04:31"),
                    ],
                },
                TopicDef {
                    name: "Middleware",
                    lessons: &[
                        ("middleware - pengenalan middleware", "07:16"),
                        ("middleware - cek membership dengan middleware", "08:55"),
                        ("middleware - melakukan aksi sebelum atau sesudah request dilanjutkan", "05:43"),
                        ("middleware - mendefinisikan middleware pada tempatnya", "03:32"),
                        ("middleware - satu route bisa banyak middleware", "04:38"),
                        ("middleware - cara menerapkan middleware di banyak route", "04:49"),
                    ],
                },
                TopicDef {
                    name: "Controller",
                    lessons: &[
                        ("controller - cara membuat controller", "07:02"),
                        ("controller - cara mendefinsikan data di controller", "04:28"),
                        ("controller - cara menghubungkan router dengan controller", "05:27"),
                        ("controller - mendapatkan data berdasarkan parameter di controller", "05:34"),
                        ("controller - mengirimkan data dari user ke controller", "05:39"),
                        ("controller - mengubah data properti dari class controller", "07:22"),
                        ("controller - menghapus nilai property dari class controller", "05:40"),
                        ("Controller - Menerapkan Middleware Controller Lebih Spesifik", "04:35"),
                    ],
                },
                TopicDef {
                    name: "Request",
                    lessons: &[
                        ("Request - Apa Saja Data Di Dalam Request", "03:45"),
                        ("Request - Menggunakan Object Request Sebagai Dependency Injection", "05:58"),
                        ("Request - Contoh Method Request Yg Bermanfaat", "05:20"),
                        ("Request - Cara Mendapatkan Data", "05:30"),
                        ("Request - Cara Mengolah Data Dari Request", "07:33"),
                        ("Request - Method Khusus Untuk Data Input Dan Query Params", "04:58"),
                        ("Request - Method Khusus Untuk Data Tanggal", "05:31"),
                        ("Request - Cek Data Dari Request", "04:04"),
                        ("Request - Mencari Request Yg Hilang Dan Menambahkannya", "03:47"),
                    ],
                },
                TopicDef {
                    name: "Response",
                    lessons: &[
                        ("Response - Mengenal Response Dan Response Pada Header", "05:16"),
                        ("Response - Menambahkan Data Headers Untuk Cache", "06:06"),
                        ("Response - Menambahkan Data Cookie Melalui Response", "05:00"),
                        ("Response - Menghapus Data Cookie Dari Response", "04:13"),
                        ("Redirect - Response Beralih Ke Halaman Lain", "03:58"),
                        ("Redirect - Redirect Menggunakan Controller", "04:00"),
                        ("Redirect - Redirect Ke Halaman External Atau Menggunakan Url", "02:58"),
                        ("Response - Membuat Nilai Balik Dalam Bentuk Json", "03:45"),
                    ],
                },
                TopicDef {
                    name: "View",
                    lessons: &[
                        ("View - Cara Menampilkan Halaman", "05:48"),
                        ("View - Membuat File View Lebih Terstruktur", "05:17"),
                        ("View - Melempar Data Dari Controller Ke View", "04:24"),
                        ("View - Cara Lain Mengirimkan Data Ke View", "03:48"),
                        ("View - Berbagi Data Di Manapun View Berada", "05:48"),
                        ("View - Membuat Service Provider Untuk Sharing Data", "05:32"),
                        ("View - Membagikan Data Menggunakan View Composer", "03:43"),
                        ("View - Memisahkan Logic Data Untuk View Composer", "05:41"),
                    ],
                },
                TopicDef {
                    name: "Blade",
                    lessons: &[
                        ("Blade - Cara Blade Menampilkan Data", "06:36"),
                        ("Blade - Kondisi If", "04:46"),
                        ("Blade - Cara Ternary If Di Blade", "04:22"),
                        ("Blade - Switch Statement", "04:39"),
                        ("Blade - Perulangan Di Dalam Blade", "08:42"),
                        ("Blade - Penerapan Continue Dan Break Di Perulangan Blade", "05:36"),
                        ("Blade - Ada Variabel Tersembunyi Dari Perulangan", "06:16"),
                        ("Blade - Menggunakan Kondisi Di Dalam Attribute Class", "04:06"),
                        ("Blade - Memecah Tampilan Blade Dengan Fungsi Include", "05:19"),
                    ],
                },
                TopicDef {
                    name: "Layouting",
                    lessons: &[
                        ("Layouting - Membuat Master Layout", "05:01"),
                        ("Layouting - Membuat Content Dan Component Blade Dinamis", "08:14"),
                        ("Layouting - Menampilkan Daftar Movie Dari Array", "07:47"),
                        ("Layouting - Menampilkan Detail Movie", "10:20"),
                        ("Layouting - Membuat Form Tambah Movie", "08:48"),
                        ("Layouting - Menyimpan Data Movie Baru", "09:54"),
                        ("Layouting - Menampilkan Halaman Edit Beserta Datanya", "09:13"),
                        ("Layouting - Memperbarui Data Movie", "06:00"),
                        ("Layouting - Memperbaiki Link Pada Icon Edit Movie", "04:35"),
                        ("Layouting - Membuat Action Button Delete Movie Dan Menghapusnya", "06:30"),
                        ("Layouting - Mengenal Layouting Dengan Component Anonymous", "07:50"),
                        ("Layouting - Membuat Banyak Section Di Satu Component", "05:14"),
                        ("Layouting - Mengirimkan Data Ke Child Component Anonymous", "04:54"),
                        ("Layouting - Membuat Card Movie Dengan Class Component", "06:39"),
                        ("Layouting - Mengirimkan Data Ke Class Component", "04:30"),
                        ("Layouting - Memodifikasi Data Di Class Component", "04:48"),
                        ("Layouting - Membuat Logic Validasi Di Class Component", "04:09"),
                        ("Layouting - Membuat Method Bisa Diakses Di Component View", "04:34"),
                    ],
                },
                TopicDef {
                    name: "Validation",
                    lessons: &[
                        ("Validation - Cara Membuat Validasi Requets Input", "06:19"),
                        ("Validation - Menampilkan Error Message Berdasarkan Field", "06:44"),
                        ("Validation - Menambahkan Rules Validation Lebih Dari Satu", "05:15"),
                        ("Validation - Mengembalikan Nilai Inputan Sebelumnya", "04:42"),
                        ("Validation - Menulis Rules Validation Pada Tempatnya", "06:09"),
                        ("Validation - Membuat Error Message Validasi Sendiri", "04:50"),
                    ],
                },
                TopicDef {
                    name: "Session",
                    lessons: &[
                        ("Session - Mengenal Session Dan Konfigurasinya", "07:58"),
                        ("Session - Menyimpan Dan Menampilkan Data Session", "04:50"),
                        ("Session - Menyimpan Data Array Dan Menampilkan Seluruh Isi Session", "03:31"),
                        ("Session - Cara Menghapus Data Session", "04:47"),
                    ],
                },
                TopicDef {
                    name: "Migration",
                    lessons: &[
                        ("Configurasi Database di Laravel", "06:17"),
                        ("Membuat Desain Tabel dengan Migration", "08:14"),
                        ("Menambahkan Kolom Baru Pada Tabel", "07:15"),
                        ("Memodifikasi Tabel yang Sudah Ada", "06:12"),
                        ("Menghapus Kolom Menggunakan Migration", "03:25"),
                        ("Menambahkan Index Kolom pada Tabel", "04:34"),
                    ],
                },
                TopicDef {
                    name: "Seeder",
                    lessons: &[("Membuat Contoh Data dengan Seeder", "09:23")],
                },
                TopicDef {
                    name: "Query",
                    lessons: &[("Mendapatkan Data dengan Query Builder", "07:56")],
                },
                TopicDef {
                    name: "Query dan ORM",
                    lessons: &[
                        ("Mendapatkan Data dengan Eloquent", "06:34"),
                        ("Menambahkan Data ke DB dengan Query Builder", "06:58"),
                        ("Menambahkan Data ke DB dengan Eloquent", "05:46"),
                        ("Mengubah Data ke DB dengan Query Builder", "04:10"),
                        ("Mengubah Data ke DB dengan Eloquent", "04:34"),
                        ("Menghapus Data di DB with Query Builder and Eloquent", "04:09"),
                    ],
                },
                TopicDef {
                    name: "Database Relationship",
                    lessons: &[
                        ("persiapan desain tabel yang berelasi", "05:59"),
                        ("one to one - menambahkan data yg berelasi", "08:28"),
                        ("one to one - menampilkan data relasi", "05:15"),
                        ("one to one - mengubah dan menghapus data", "05:33"),
                        ("one to many - persiapan model dan migration", "06:39"),
                        ("one to many - mendapatkan parent beserta child", "07:35"),
                        ("one to many - Mendapatkan data dari relasi dengan filtering", "09:19"),
                        ("many to many - persiapan tabel dan model", "06:41"),
                        ("many to many - menambahkan data antar model", "05:47"),
                        ("many to many - menghapus data antar model", "03:35"),
                        ("many to many - menambahkan dan menghapus data antar model sekaligus", "04:36"),
                    ],
                },
                TopicDef {
                    name: "Auth",
                    lessons: &[
                        ("Register", "06:28"),
                        ("Register Part 2", "07:47"),
                        ("Login", "06:32"),
                        ("Penerapan Middleware Auth Pada Halaman dan Logout", "05:44"),
                    ],
                },
            ],
        },
        CourseDef {
            id: "filament",
            title: "Filament Mastery: Membuat Admin Panel Kilat",
            description: "Pelajari cara membangun dashboard admin yang canggih dan terlihat sangat profesional hanya dalam hitungan menit. Teknik ini akan sangat menghemat waktu kerjamu.",
            topics: vec![TopicDef {
                name: "Filament untuk Pemula: Laravel Admin Tanpa Pusing ",
                lessons: &[("Filament Laravel Admin", "60:01")],
            }],
        },
        CourseDef {
            id: "laravel12",
            title: "Proyek Enterprise: Sistem HRIS Laravel 12",
            description: "Tantang dirimu membangun sistem manajemen karyawan (HRIS) yang kompleks. Gunakan fitur-fitur terbaru Laravel 12 untuk menangani logika bisnis skala besar.",
            topics: vec![TopicDef {
                name: "Mengembangkan Sistem HRIS Seperti Talenta Menggunakan Laravel 12",
                lessons: &[
                    ("Pembukaan", "01:07"),
                    ("Pengenalan Tools", "03:37"),
                    ("Konteks & Demo Sisi Admin", "05:31"),
                    ("Konteks & Demo Sisi Karyawan", "05:16"),
                    ("Database Design (ERD)", "04:48"),
                    ("Install Laravel", "02:24"),
                    ("Setup ENV dan DB", "05:09"),
                    ("Setup Migration", "21:05"),
                    ("Run Migration & Bug Fixing", "08:45"),
                    ("Seeding", "32:19"),
                    ("Install Laravel Breeze", "08:34"),
                    ("Install Dashboard Template", "27:14"),
                    ("Mengatur Layouts", "14:58"),
                    ("Fitur Tasks - Index", "34:12"),
                    ("Fitur Tasks - Handle Create", "15:12"),
                    ("Fitur Tasks - Install Flatpickr", "07:09"),
                    ("Fitur Tasks - Handle Form Edit", "17:19"),
                    ("Fitur Tasks - Handle Delete", "06:07"),
                    ("Fitur Tasks - Marking Status", "05:59"),
                    ("Fitur Tasks - Handle show", "06:51"),
                    ("Fitur Employees - Index", "21:21"),
                    ("Fitur Employees - Handle Create", "24:04"),
                    ("Fitur Employees - Handle show", "05:14"),
                    ("Fitur Employees - Update Data", "25:34"),
                    ("Fitur Employees - Delete Data", "04:37"),
                    ("Fitur Departments - Index", "08:27"),
                    ("Fitur Departments - Create", "09:44"),
                    ("FItur Departments - Edit", "10:15"),
                    ("Fitur Departments - Delete", "02:37"),
                    ("Fitur Roles - Index", "04:33"),
                    ("Fitur Roles - Create", "01:16"),
                    ("Fitur Roles - Update", "06:51"),
                    ("Fitur Roles - Delete", "01:36"),
                    ("Fitur Presences - Index", "11:36"),
                    ("Fitur Presences - Create", "00:10"),
                    ("Fitur Presences - Update", "09:04"),
                    ("Fitur Presence - Delete", "02:10"),
                    ("Fitur Payrolls - Index", "15:12"),
                    ("Fitur Payrolls - Create", "14:32"),
                    ("Fitur Payrolls - Update", "11:41"),
                    ("Fitur Payrolls - Delete", "03:31"),
                    ("Fitur Payrolls - Salary Slip", "14:38"),
                    ("Fitur Leave Requests - Index", "12:38"),
                    ("Fitur Leave Requests - Create", "08:58"),
                    ("Fitur Leave Requests - Update", "07:33"),
                    ("Fitur Leave Requests - Confirm Reject", "07:08"),
                    ("Fitur Leave Requests - Delete", "01:45"),
                    ("Konsep Auth & Authorization", "02:52"),
                    ("Implementasi Middleware CheckRole", "19:55"),
                    ("Memperbaiki Link Sidebar", "03:22"),
                    ("Memperbaiki Link Sidebar - Minor Patch", "01:08"),
                    ("Fitur Tasks Karyawan", "03:24"),
                    ("Fitur Presence Karyawan", "32:58"),
                    ("Fitur Payroll Karyawan", "03:49"),
                    ("Fitur Leave Request Karyawan", "08:10"),
                    ("Handle menu active", "04:05"),
                    ("Mempercantik Insight - Total Data", "14:41"),
                    ("Mempercantik Insight - Latest Task", "04:57"),
                    ("Mempercantik Insight - Presence Chart", "16:56"),
                    ("Finishing", "02:13"),
                ],
            }],
        },
        CourseDef {
            id: "restoran",
            title: "AI-Driven SaaS: Aplikasi Restoran & QR Order",
            description: "Gunakan bantuan AI tingkat lanjut untuk membangun aplikasi sistem pesanan restoran berbasis QR. Proyek ini sangat berkelas untuk dijadikan portofolio unggulan.",
            topics: vec![TopicDef {
                name: "Mengembangkan Aplikasi Restoran Berbasis QR dengan Laravel 12 + Copilot AI",
                lessons: &[
                    ("Pendahuluan Gambaran Aplikasi", "02:24"),
                    ("Demo Aplikasi - Pembayaran Tunai", "07:19"),
                    ("Demo Aplikasi - Pembayaran QRIS", "04:43"),
                    ("ER Diagram", "05:22"),
                    ("Use Case Diagram", "02:46"),
                    ("Instalasi", "03:14"),
                    ("Setup ENV", "02:40"),
                    ("Setup Repository Git", "02:48"),
                    ("Struktur Folder", "02:34"),
                    ("Migrations Table Users", "04:53"),
                    ("Migrations & Seeder Table Roles", "03:25"),
                    ("Migration Table Categories dan Items", "02:58"),
                    ("Factory Seeder Categories dan Items", "03:16"),
                    ("Factory Seeder Users", "03:10"),
                    ("Migrations Table Orders and Order", "03:29"),
                    ("Migrate", "01:53"),
                    ("Models", "08:48"),
                    ("Integrasi Template Menu", "09:50"),
                    ("Integrasi Template Cart dan Checkout", "03:18"),
                    ("Database Seeder", "04:03"),
                    ("MenuController Index", "18:38"),
                    ("MenuController AddToCart", "11:23"),
                    ("MenuController Empty Cart", "04:26"),
                    ("MenuController Update Quantity Cart", "21:36"),
                    ("MenuController Remove Cart", "11:33"),
                    ("MenuController Checkout Page", "10:50"),
                    ("MenuController Checkout Payment Cash", "22:40"),
                    ("MenuController Order Success", "24:15"),
                    ("Konfigurasi Midtrans Payment Gateway", "05:50"),
                    ("Implementasi Midtrans Payment Gateway", "21:49"),
                    ("Integrasi Template Admin", "12:07"),
                    ("Sidebar & Routes Admin", "08:53"),
                    ("Menampilkan Item dengan DataTable", "29:26"),
                    ("Store dan Update Data Item", "24:48"),
                    ("Delete Data Item dan Alert", "10:47"),
                    ("CRUD Role", "07:35"),
                    ("CRUD Karyawan", "22:40"),
                    ("CRUD Kategori", "12:19"),
                    ("Daftar Pesanan", "09:52"),
                    ("Melihat Detail Pesanan", "22:54"),
                    ("Update Status Menu", "07:56"),
                    ("Setup Autentikasi dengan Breeze", "23:50"),
                    ("Role Cashier & Konfirmasi Pesanan T", "07:12"),
                    ("Role Chef & Update Pesanan Menjadi", "06:30"),
                    ("Memperbaiki UI dan Halaman Login", "20:49"),
                    ("Recap Project & Pengembangan Selanjutnya", "13:00"),
                ],
            }],
        },
        CourseDef {
            id: "deploy",
            title: "Deployment Expert: Meng-online-kan Aplikasi",
            description: "Tahap akhir yang sangat krusial. Pelajari cara menyewa server (VPS), setting keamanan SSL, hingga aplikasi buatanmu resmi online dan bisa diakses seluruh dunia.",
            topics: vec![TopicDef {
                name: "Introduction",
                lessons: &[("VPS, Domain Setting dan DNS", "60:00")],
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
        assert_eq!(catalog.courses().len(), 12);
        assert!(catalog.lookup("laravel11").is_some());
        assert!(catalog.lookup("js-dasar").is_none());
    }

    #[test]
    fn oop_course_spans_two_topics() {
        let catalog = catalog().unwrap();
        let oop = catalog.lookup("oop").unwrap();
        assert_eq!(oop.topics.len(), 2);
        assert_eq!(oop.lesson_count(), 34);
    }
}
