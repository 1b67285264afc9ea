//! Overview grid: every device/screen combination at reduced scale.

use crate::models::{ColorScheme, ProjectConfig, COLOR_SCHEMES};
use crate::render::page::{escape_html, px};
use crate::render::screen::render_screen;
use std::fmt::Write;

/// Scale factors offered by the overview controls.
pub const SCALE_OPTIONS: [f32; 3] = [0.1, 0.25, 1.0];

/// Default thumbnail scale when the URL does not specify one.
pub const DEFAULT_SCALE: f32 = 0.25;

/// Per-view display state, derived from URL query parameters.
///
/// Not persisted anywhere beyond the URL: the overview's controls write
/// these values back to the query string, and every render re-reads them
/// with fallbacks applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Active language code
    pub language: String,
    /// Thumbnail scale factor (always `> 0`)
    pub scale: f32,
    /// Active color scheme
    pub color_scheme: ColorScheme,
}

impl DisplayState {
    /// Resolves display state from raw query parameters.
    ///
    /// Fallbacks: first configured language; [`DEFAULT_SCALE`] for a
    /// missing, unparseable, or non-positive scale; OS-detected color
    /// scheme when the parameter is absent, empty, or unrecognized.
    pub fn resolve(
        config: &ProjectConfig,
        language: Option<&str>,
        scale: Option<&str>,
        color_scheme: Option<&str>,
    ) -> Self {
        let language = language
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .or_else(|| config.default_language().map(str::to_string))
            .unwrap_or_default();

        let scale = scale
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|s| *s > 0.0)
            .unwrap_or(DEFAULT_SCALE);

        let color_scheme = color_scheme
            .and_then(ColorScheme::from_param)
            .unwrap_or_else(ColorScheme::detect);

        Self {
            language,
            scale,
            color_scheme,
        }
    }
}

/// Formats a scale factor the way it appears in the query string
/// (`0.25`, `0.5`, `1`). Simple decimals survive a write/read round trip.
pub fn format_scale(scale: f32) -> String {
    format!("{scale}")
}

/// Renders the overview grid: controls plus every device/screen thumbnail.
///
/// Each screen is wrapped in a box of `width * scale` by `height * scale`
/// pixels containing the full-resolution render shrunk by a CSS transform.
/// The transform is visual-only, so capture fidelity at `/screens/...`
/// routes is unaffected. No pagination or virtualization; configs are
/// small and human-authored.
pub fn render_overview(config: &ProjectConfig, state: &DisplayState) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"overview\" data-testid=\"overview-grid\">\n");
    html.push_str(&render_controls(config, state));

    html.push_str("<div class=\"overview-grid\">\n");
    for device in &config.devices {
        let _ = write!(
            html,
            "<div class=\"overview-device\" data-device=\"{}\">\n<h2>{}</h2>\n<div class=\"overview-screens\">\n",
            escape_html(&device.key),
            escape_html(&device.key),
        );

        for screen in &device.screens {
            let screen_html = render_screen(config, &device.key, &screen.key, &state.language)
                .unwrap_or_default();
            let _ = write!(
                html,
                "<div class=\"overview-screen-wrapper\" style=\"width: {w}; height: {h};\">\
                 <div class=\"overview-screen-scaled\" style=\"transform: scale({s}); transform-origin: top left;\">{inner}</div>\
                 </div>\n",
                w = px(device.width as f32 * state.scale),
                h = px(device.height as f32 * state.scale),
                s = format_scale(state.scale),
                inner = screen_html,
            );
        }

        html.push_str("</div>\n</div>\n");
    }
    html.push_str("</div>\n</div>\n");

    html
}

/// Renders the language/scale/color-scheme controls as a self-submitting
/// GET form, so every change is written straight back to the URL query.
fn render_controls(config: &ProjectConfig, state: &DisplayState) -> String {
    let mut html = String::new();

    html.push_str("<form class=\"overview-controls\" method=\"get\" action=\"/\">\n");

    // Language select
    html.push_str("<label>Language: <select name=\"language\" onchange=\"this.form.submit()\">\n");
    for lang in &config.languages {
        let _ = write!(
            html,
            "<option value=\"{value}\"{selected}>{value}</option>\n",
            value = escape_html(lang),
            selected = selected_if(*lang == state.language),
        );
    }
    html.push_str("</select></label>\n");

    // Scale select
    html.push_str("<label>Scale: <select name=\"scale\" onchange=\"this.form.submit()\">\n");
    for option in SCALE_OPTIONS {
        let _ = write!(
            html,
            "<option value=\"{value}\"{selected}>{percent}%</option>\n",
            value = format_scale(option),
            selected = selected_if((option - state.scale).abs() < f32::EPSILON),
            percent = format_scale(option * 100.0),
        );
    }
    html.push_str("</select></label>\n");

    // Color scheme select
    html.push_str(
        "<label>Color Scheme: <select name=\"colorScheme\" onchange=\"this.form.submit()\">\n",
    );
    for scheme in COLOR_SCHEMES {
        let _ = write!(
            html,
            "<option value=\"{value}\"{selected}>{label}</option>\n",
            value = scheme.as_str(),
            selected = selected_if(scheme == state.color_scheme),
            label = scheme.label(),
        );
    }
    html.push_str("</select></label>\n");

    html.push_str("</form>\n");
    html
}

fn selected_if(selected: bool) -> &'static str {
    if selected {
        " selected"
    } else {
        ""
    }
}
