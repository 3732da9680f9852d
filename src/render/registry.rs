//! Renderer lookup by name

use crate::error::RenderError;
use crate::render::Renderer;
use std::str::FromStr;

/// Registered renderers, default first
pub const VARIANTS: &[(&str, Renderer)] = &[
    ("inline", Renderer::Inline),
    ("breakline", Renderer::Breakline),
    ("json", Renderer::Json),
];

/// Look up a renderer by name (ASCII case-insensitive)
///
/// # Errors
/// Returns `RenderError::UnknownVariant` if no renderer is registered as `name`
pub fn select(name: &str) -> Result<Renderer, RenderError> {
    VARIANTS
        .iter()
        .find(|(registered, _)| registered.eq_ignore_ascii_case(name))
        .map(|(_, renderer)| *renderer)
        .ok_or_else(|| RenderError::UnknownVariant(name.to_string()))
}

impl FromStr for Renderer {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        select(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_registered() {
        assert_eq!(select("inline"), Ok(Renderer::Inline));
        assert_eq!(select("Breakline"), Ok(Renderer::Breakline));
        assert_eq!(select("JSON"), Ok(Renderer::Json));
    }

    #[test]
    fn test_select_unknown() {
        assert_eq!(
            select("fancy"),
            Err(RenderError::UnknownVariant("fancy".to_string()))
        );
        assert!(select("").is_err());
    }

    #[test]
    fn test_default_is_first() {
        assert_eq!(VARIANTS[0].1, Renderer::default());
    }

    #[test]
    fn test_names_round_trip() {
        for (name, renderer) in VARIANTS {
            assert_eq!(renderer.name(), *name);
            assert_eq!(name.parse::<Renderer>(), Ok(*renderer));
        }
    }
}
