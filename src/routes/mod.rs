use actix_web::{HttpResponse, web};
use lazy_static::lazy_static;
use log::error;
use tera::{Context, Tera};

pub mod api;
pub mod dashboard;

lazy_static! {
    pub static ref TEMPLATES: Tera = {
        match Tera::new("templates/**/*") {
            Ok(t) => t,
            Err(e) => {
                println!("Parsing error(s): {}", e);
                ::std::process::exit(1);
            }
        }
    };
}

/// Register every route the application serves. Order matters: the API
/// scope and the login/logout prefixes must come before the page
/// catch-all, which also serves `/` with an empty slug.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(web::resource("/healthz").to(api::healthz))
            .service(web::resource("/pages/{tail:.*}").to(api::page_content))
            .service(web::resource("/authenticate").to(api::authenticate))
            .default_service(web::route().to(api::not_found)),
    )
    .service(web::resource("/login{tail:.*}").to(dashboard::login))
    .service(web::resource("/logout{tail:.*}").to(dashboard::logout))
    .service(web::resource("/{slug:.*}").to(dashboard::page));
}

fn render_template(template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(TEMPLATES.render(template, context).unwrap_or_else(|e| {
            error!("Failed to render template '{}': {}", template, e);
            String::new()
        }))
}
