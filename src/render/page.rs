//! HTML page shell shared by all routed views.

use crate::models::ColorScheme;

/// Base stylesheet embedded in every page.
///
/// Kept minimal: the shell only provides the coordinate frame and the
/// light/dark backdrop; screen renderers bring their own styling inline.
const BASE_CSS: &str = "\
  * { box-sizing: border-box; }\n\
  body { margin: 0; font-family: system-ui, sans-serif; }\n\
  body.light { background: #ffffff; color: #111111; }\n\
  body.dark { background: #1e1e1e; color: #eeeeee; }\n\
  .screen { overflow: hidden; position: relative; }\n\
  .overview-controls { display: flex; gap: 16px; padding: 12px; }\n\
  .overview-device { padding: 12px; }\n\
  .overview-screens { display: flex; flex-wrap: wrap; gap: 16px; }\n\
  .overview-screen-wrapper { overflow: hidden; position: relative; }\n";

/// Escapes text for safe interpolation into HTML content and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps rendered body markup in a complete HTML document.
///
/// The color scheme becomes a class on `<body>` so both the shell and the
/// rendered screens can key their styling off it.
pub fn html_page(title: &str, scheme: ColorScheme, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n{BASE_CSS}</style>\n\
         </head>\n\
         <body class=\"{scheme}\">\n{body}\n</body>\n\
         </html>\n",
        title = escape_html(title),
        scheme = scheme.as_str(),
        body = body,
    )
}

/// Formats a pixel length, trimming trailing zeros the way a browser would
/// (`322.5px`, `1290px`).
pub fn px(value: f32) -> String {
    format!("{value}px")
}
