//! Static page handlers. Content is compiled into the binary; the page
//! layouts themselves are plain HTML under `static/`.

use actix_web::{web, HttpResponse, Responder};

fn page(html: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

async fn index() -> impl Responder {
    page(include_str!("../static/index.html"))
}

async fn about() -> impl Responder {
    page(include_str!("../static/about.html"))
}

async fn teachers() -> impl Responder {
    page(include_str!("../static/teachers.html"))
}

async fn achievements() -> impl Responder {
    page(include_str!("../static/achievements.html"))
}

async fn admissions() -> impl Responder {
    page(include_str!("../static/admissions.html"))
}

async fn news() -> impl Responder {
    page(include_str!("../static/news.html"))
}

async fn contact() -> impl Responder {
    page(include_str!("../static/contact.html"))
}

async fn consultant() -> impl Responder {
    page(include_str!("../static/consultant.html"))
}

async fn admin_login() -> impl Responder {
    page(include_str!("../static/admin_login.html"))
}

async fn admin_dashboard() -> impl Responder {
    page(include_str!("../static/admin_dashboard.html"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/about", web::get().to(about))
        .route("/teachers", web::get().to(teachers))
        .route("/achievements", web::get().to(achievements))
        .route("/admissions", web::get().to(admissions))
        .route("/news", web::get().to(news))
        .route("/contact", web::get().to(contact))
        .route("/consultant", web::get().to(consultant))
        .route("/admin/login", web::get().to(admin_login))
        .route("/admin/dashboard", web::get().to(admin_dashboard));
}
