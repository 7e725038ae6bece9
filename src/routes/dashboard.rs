use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};
use tera::Context;

use crate::models::app::AppState;
use crate::routes::render_template;

/// Render a dashboard page. An empty slug resolves to the first configured
/// page; an unknown slug is a plain 404. Widgets are not rendered; the
/// registry is empty until concrete widget kinds exist.
pub async fn page(app: AppState, slug: web::Path<String>) -> impl Responder {
    let mut slug = slug.into_inner();
    if slug == "/" {
        // A doubled leading slash still addresses the root page.
        slug.clear();
    }
    let Some(page) = app.pages.resolve(&slug) else {
        return HttpResponse::NotFound().finish();
    };

    let mut context = Context::new();
    context.insert("page_name", page.name());
    context.insert("base_url", &app.server.base_url);
    context.insert("auth_enabled", &app.auth.enabled());
    context.insert("disable_theme_picker", &app.theme.disable_picker);

    render_template("dashboard/page.html", &context)
}

/// Static login form; the POST target is the authentication endpoint,
/// which never establishes a session.
pub async fn login(_app: AppState) -> impl Responder {
    render_template("auth/login.html", &Context::new())
}

/// Clear the auth cookie and send the client back to the default page.
pub async fn logout(_app: AppState) -> impl Responder {
    let mut cookie = Cookie::new("auth", "");
    cookie.set_path("/");
    cookie.make_removal();

    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .cookie(cookie)
        .finish()
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};

    use crate::routes::configure;
    use crate::test_env;

    const PAGES: &str = r#"[{"name":"Home","slug":""},{"name":"About","slug":"about"}]"#;

    async fn get(path: &str, vars: &[(&str, &str)]) -> (StatusCode, String) {
        let _env = test_env::scoped(vars);
        let app = test::init_service(App::new().configure(configure)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        let status = resp.status();
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        (status, body)
    }

    #[actix_web::test]
    async fn root_renders_default_page() {
        let (status, body) = get("/", &[("GLANCE_PAGES", PAGES)]).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Home - Glance</title>"));
        assert!(body.contains("<h1>Home</h1>"));
    }

    #[actix_web::test]
    async fn named_page_renders_by_slug() {
        let (status, body) = get("/about", &[("GLANCE_PAGES", PAGES)]).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>About - Glance</title>"));
        assert!(body.contains("<h1>About</h1>"));
    }

    #[actix_web::test]
    async fn unknown_slug_is_not_found() {
        let (status, _) = get("/missing", &[("GLANCE_PAGES", PAGES)]).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn multi_segment_slug_resolves() {
        let (status, body) = get(
            "/team/docs",
            &[("GLANCE_PAGES", r#"[{"name":"Docs","slug":"team/docs"}]"#)],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Docs</h1>"));
    }

    #[actix_web::test]
    async fn synthesized_dashboard_serves_root_without_pages() {
        let (status, body) = get("/", &[]).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Dashboard</h1>"));
    }

    #[actix_web::test]
    async fn malformed_config_yields_generic_500() {
        let (status, body) = get("/", &[("GLANCE_PAGES", "{zz-malformed-zz")]).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("zz-malformed-zz"));
        assert_eq!(body, "Failed to initialize application");
    }

    #[actix_web::test]
    async fn login_page_posts_to_authenticate() {
        let (status, body) = get("/login", &[]).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"action="/api/authenticate""#));
        assert!(body.contains(r#"method="post""#));
    }

    #[actix_web::test]
    async fn login_matches_by_prefix() {
        let (status, _) = get("/login/anything", &[]).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn page_links_login_when_auth_configured() {
        let (status, body) = get("/", &[("GLANCE_AUTH_SECRET", "c2VjcmV0")]).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"href="/login""#));
    }

    #[actix_web::test]
    async fn logout_clears_cookie_and_redirects() {
        let _env = test_env::scoped(&[]);
        let app = test::init_service(App::new().configure(configure)).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/logout").to_request()).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

        let set_cookie = resp
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(set_cookie.starts_with("auth="));
        assert!(set_cookie.contains("Max-Age=0"));
    }
}
