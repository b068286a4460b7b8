//! Placeholder pages for the main site and its subdomains

use axum::response::Html;

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body><main><h1>{title}</h1>{body}</main></body>\n\
         </html>\n"
    ))
}

pub async fn home() -> Html<String> {
    page(
        "Grant Hopkins",
        "<p>Projects, writing and experiments.</p>\
         <nav><a href=\"/demos\">Demos</a> <a href=\"/blog\">Blog</a></nav>",
    )
}

pub async fn demos() -> Html<String> {
    page("Demos", "<p>Interactive demos are on their way.</p>")
}

/// Posts are loaded client-side from `/api/medium`
pub async fn blog() -> Html<String> {
    page(
        "Blog",
        "<p>Latest writing from Medium.</p><section id=\"posts\" data-source=\"/api/medium\"></section>",
    )
}
