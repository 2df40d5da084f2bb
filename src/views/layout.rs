use crate::models::Session;
use crate::utils::escape_html;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Wraps a body fragment in the shared page shell. `script` is inserted
/// verbatim at the end of the body.
pub fn render_page(title: &str, session: Option<&Session>, body: &str, script: Option<&str>) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>{title}</title>
    <link rel=\"stylesheet\" href=\"{css}\">
</head>
<body class=\"bg-light\">
{nav}
    <main class=\"container py-5\">
        <div id=\"verify-root\" class=\"row justify-content-center\">
{body}
        </div>
    </main>
{script}
</body>
</html>",
        title = escape_html(title),
        css = BOOTSTRAP_CSS,
        nav = render_navbar(session),
        body = body,
        script = script.map(|s| format!("    <script>{}</script>", s)).unwrap_or_default(),
    )
}

fn render_navbar(session: Option<&Session>) -> String {
    let right = match session {
        Some(session) => format!(
            "<span class=\"navbar-text me-3\">Signed in as {name}</span>
            <a class=\"btn btn-outline-light btn-sm\" href=\"{dashboard}\">Dashboard</a>",
            name = escape_html(&session.name),
            dashboard = escape_html(&session.role.dashboard_path()),
        ),
        None => String::new(),
    };
    format!(
        "    <nav class=\"navbar navbar-dark bg-primary\">
        <div class=\"container\">
            <span class=\"navbar-brand\">Hospital Management System</span>
            <div class=\"d-flex align-items-center\">{right}</div>
        </div>
    </nav>",
        right = right,
    )
}
