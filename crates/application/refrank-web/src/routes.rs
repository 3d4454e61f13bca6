//! Route definitions for the site

/// All routes defined in the application
pub const ROUTES: &[(&str, &str, &str)] = &[
    // Page routes
    ("GET", "/", "Home page"),
    ("GET", "/about", "About - methodology and feature weights"),
    ("GET", "/results", "Model results, charts and sample predictions"),
    ("GET", "/team", "Team members and acknowledgments"),
    ("GET", "/:slug", "Any page by slug, case-insensitive (also /home)"),

    // HTMX partial routes
    ("GET", "/htmx/menu", "Mobile menu partial (toggles ?open=)"),

    // API routes
    ("GET", "/api/health", "Health check"),
    ("GET", "/api/pages", "Navigation entries"),
    ("GET", "/api/results", "Results datasets as JSON"),

    // Static assets
    ("GET", "/static/style.css", "CSS stylesheet"),
    ("GET", "/static/htmx.min.js", "HTMX JavaScript"),

    // Everything else
    ("GET", "*", "Not-found page inside the shell (404)"),
];

/// Print all routes
pub fn print_routes() {
    println!("\nRefRank Routes:");
    println!("{:-<60}", "");
    for (method, path, desc) in ROUTES {
        println!("{:6} {:20} {}", method, path, desc);
    }
    println!();
}
