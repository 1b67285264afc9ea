//! Screen resolution and the fixed-size container.

use crate::models::{ProjectConfig, ScreenContext};
use crate::render::page::{escape_html, px};

/// Resolves and renders a single screen at full device size.
///
/// Looks up the device by key, then the screen by key within that device.
/// Returns `None` when either lookup misses; a missing entry renders
/// nothing rather than raising an error. When the screen has no bound
/// renderer, the screen key itself is rendered as literal fallback text.
///
/// The surrounding container is sized exactly to the device's configured
/// pixel dimensions, establishing the fixed coordinate frame the capture
/// tooling screenshots.
pub fn render_screen(
    config: &ProjectConfig,
    device_key: &str,
    screen_key: &str,
    language: &str,
) -> Option<String> {
    let device = config.device(device_key)?;
    let screen = device.screen(screen_key)?;

    let body = match &screen.component {
        Some(component) => {
            let ctx = ScreenContext {
                language: language.to_string(),
                device_key: device.key.clone(),
                width: device.width,
                height: device.height,
            };
            component.render(&ctx)
        }
        None => escape_html(screen_key),
    };

    Some(format!(
        "<div class=\"screen\" data-device=\"{key}\" style=\"width: {w}; height: {h};\">{body}</div>",
        key = escape_html(&device.key),
        w = px(device.width as f32),
        h = px(device.height as f32),
        body = body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceConfig, ScreenConfig};
    use std::sync::Arc;

    fn test_config() -> ProjectConfig {
        ProjectConfig {
            languages: vec!["en-US".to_string()],
            devices: vec![DeviceConfig {
                key: "iphone".to_string(),
                fastlane_keys: vec!["APP_IPHONE_67".to_string()],
                width: 1290,
                height: 2796,
                screens: vec![
                    ScreenConfig::new(
                        "features",
                        Arc::new(|ctx: &ScreenContext| {
                            format!("[{} {} {}x{}]", ctx.language, ctx.device_key, ctx.width, ctx.height)
                        }),
                    ),
                    ScreenConfig::unbound("pricing"),
                ],
            }],
        }
    }

    #[test]
    fn test_renders_bound_component_with_device_dimensions() {
        let html = render_screen(&test_config(), "iphone", "features", "en-US").unwrap();
        assert!(html.contains("[en-US iphone 1290x2796]"));
        assert!(html.contains("width: 1290px; height: 2796px;"));
        assert!(html.contains("data-device=\"iphone\""));
    }

    #[test]
    fn test_unknown_device_renders_nothing() {
        assert!(render_screen(&test_config(), "ipad", "features", "en-US").is_none());
    }

    #[test]
    fn test_unknown_screen_renders_nothing() {
        assert!(render_screen(&test_config(), "iphone", "missing", "en-US").is_none());
    }

    #[test]
    fn test_unbound_screen_falls_back_to_key_text() {
        let html = render_screen(&test_config(), "iphone", "pricing", "en-US").unwrap();
        assert!(html.contains(">pricing</div>"));
    }

    #[test]
    fn test_language_passes_through_unchecked() {
        // Out-of-set languages flow to the renderer, which handles fallback.
        let html = render_screen(&test_config(), "iphone", "features", "fr-FR").unwrap();
        assert!(html.contains("[fr-FR iphone 1290x2796]"));
    }
}
