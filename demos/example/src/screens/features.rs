//! Feature list screen for the example app.

use crate::translations::t;
use screegen::models::{ScreenContext, ScreenRenderer};
use screegen::render::escape_html;

/// Renders the localized feature list with a title, subtitle, and badge.
pub struct FeaturesScreen;

impl ScreenRenderer for FeaturesScreen {
    fn render(&self, ctx: &ScreenContext) -> String {
        let features = [
            ("feature1", "feature1Desc"),
            ("feature2", "feature2Desc"),
            ("feature3", "feature3Desc"),
        ];

        let mut items = String::new();
        for (title_key, description_key) in features {
            items.push_str(&format!(
                "<div style=\"background: rgba(255, 255, 255, 0.15); border-radius: 16px; padding: 32px; margin: 16px 0;\">\
                 <h3 style=\"font-size: 24px; margin: 0 0 8px 0;\">{}</h3>\
                 <p style=\"font-size: 18px; margin: 0;\">{}</p>\
                 </div>",
                escape_html(&t(&ctx.language, title_key)),
                escape_html(&t(&ctx.language, description_key)),
            ));
        }

        format!(
            "<div style=\"display: flex; flex-direction: column; align-items: center; justify-content: center; \
             width: 100%; height: 100%; padding: 60px 40px; \
             background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white;\">\
             <span style=\"font-size: 20px; opacity: 0.8;\">{badge}</span>\
             <h1 style=\"font-size: 64px; margin: 0 0 16px 0;\">{title}</h1>\
             <p style=\"font-size: 28px; margin: 0 0 60px 0;\">{subtitle}</p>\
             <div style=\"width: 100%; max-width: 800px;\">{items}</div>\
             </div>",
            badge = escape_html(&t(&ctx.language, "badge")),
            title = escape_html(&t(&ctx.language, "title")),
            subtitle = escape_html(&t(&ctx.language, "subtitle")),
            items = items,
        )
    }
}
