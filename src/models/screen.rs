//! Screen configuration and the renderable capability.
//!
//! A screen is a named, renderable view bound to one device. The renderable
//! itself is an interface-typed capability so that configuration data stays
//! decoupled from executable references.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Parameters passed to a screen renderer for a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContext {
    /// Language code to render in (e.g., "en-US")
    pub language: String,
    /// Key of the device being rendered
    pub device_key: String,
    /// Device width in pixels
    pub width: u32,
    /// Device height in pixels
    pub height: u32,
}

/// A renderable unit that produces the HTML body of one screen.
///
/// Renderers receive the full [`ScreenContext`] and must produce markup that
/// fills the device-sized container. Plain closures work via the blanket impl:
///
/// ```
/// use screegen::models::{ScreenContext, ScreenRenderer};
///
/// let renderer = |ctx: &ScreenContext| format!("<h1>{}</h1>", ctx.language);
/// let html = renderer.render(&ScreenContext {
///     language: "en-US".to_string(),
///     device_key: "iphone".to_string(),
///     width: 1290,
///     height: 2796,
/// });
/// assert_eq!(html, "<h1>en-US</h1>");
/// ```
pub trait ScreenRenderer: Send + Sync {
    /// Renders the screen body for the given context.
    fn render(&self, ctx: &ScreenContext) -> String;
}

impl<F> ScreenRenderer for F
where
    F: Fn(&ScreenContext) -> String + Send + Sync,
{
    fn render(&self, ctx: &ScreenContext) -> String {
        self(ctx)
    }
}

/// Configuration for a single screen within a device.
///
/// The renderer reference is excluded from serialization; the config
/// inspector only ever sees the screen key.
#[derive(Clone, Serialize)]
pub struct ScreenConfig {
    /// Unique screen identifier within its device
    pub key: String,
    /// The bound renderable, if any. Screens without a renderer fall back
    /// to displaying their key as literal text.
    #[serde(skip)]
    pub component: Option<Arc<dyn ScreenRenderer>>,
}

impl ScreenConfig {
    /// Creates a screen bound to a renderer.
    pub fn new(key: impl Into<String>, component: Arc<dyn ScreenRenderer>) -> Self {
        Self {
            key: key.into(),
            component: Some(component),
        }
    }

    /// Creates a screen with no bound renderer.
    pub fn unbound(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            component: None,
        }
    }
}

impl fmt::Debug for ScreenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenConfig")
            .field("key", &self.key)
            .field("component", &self.component.as_ref().map(|_| "<renderer>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_renderer() {
        let screen = ScreenConfig::new("features", Arc::new(|ctx: &ScreenContext| {
            format!("{}x{}", ctx.width, ctx.height)
        }));

        let ctx = ScreenContext {
            language: "en-US".to_string(),
            device_key: "iphone".to_string(),
            width: 1290,
            height: 2796,
        };

        let component = screen.component.expect("renderer should be bound");
        assert_eq!(component.render(&ctx), "1290x2796");
    }

    #[test]
    fn test_serialization_skips_component() {
        let screen = ScreenConfig::new("features", Arc::new(|_: &ScreenContext| String::new()));
        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json, serde_json::json!({ "key": "features" }));
    }

    #[test]
    fn test_unbound_screen() {
        let screen = ScreenConfig::unbound("pricing");
        assert_eq!(screen.key, "pricing");
        assert!(screen.component.is_none());
    }
}
