//! Fallback font registry.
//!
//! Holds the fallback list and the optional override callback consulted by
//! the text layer when the primary font misses a glyph. Whichever of the two
//! was configured last is the source of fallback fonts.

use std::fmt;
use std::sync::{Arc, OnceLock};

use motiontext_config::Config;
use parking_lot::RwLock;

use crate::descriptor::FallbackFont;
use crate::resolver::{FontResolver, ResolvedFont};
use crate::style::FontStyle;

/// Override callback returning fallback fonts for a requested style.
pub type FallbackFontsCallback = Arc<dyn Fn(&FontStyle) -> Vec<FallbackFont> + Send + Sync>;

/// Where fallback fonts come from.
#[derive(Clone)]
enum FallbackSource {
    List,
    Callback(FallbackFontsCallback),
}

struct RegistryState {
    fonts: Vec<FallbackFont>,
    source: FallbackSource,
}

/// A glyph found in a fallback font.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMatch {
    /// Position of the font in the resolved fallback chain
    pub fallback_index: usize,
    pub glyph_id: u16,
    pub font: ResolvedFont,
}

/// Fallback font configuration owned by a runtime instance.
///
/// Reads take a shared lock, so the render thread can query fallbacks while
/// the host thread reconfigures them.
pub struct FallbackRegistry {
    state: RwLock<RegistryState>,
}

impl fmt::Debug for FallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("FallbackRegistry")
            .field("fonts", &state.fonts)
            .field(
                "callback",
                &matches!(state.source, FallbackSource::Callback(_)),
            )
            .finish()
    }
}

impl Default for FallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackRegistry {
    /// Create a registry holding the built-in default list.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState {
                fonts: Self::default_fonts(),
                source: FallbackSource::List,
            }),
        }
    }

    /// Create a registry seeded with the configured fallback list.
    pub fn from_config(config: &Config) -> Self {
        let registry = Self::new();
        let fonts = config
            .effective_fallback_fonts()
            .iter()
            .map(FallbackFont::from)
            .collect();
        registry.set_fallback_fonts(fonts);
        registry
    }

    /// Process-wide registry for hosts that do not own one per runtime.
    pub fn global() -> &'static FallbackRegistry {
        static GLOBAL: OnceLock<FallbackRegistry> = OnceLock::new();
        GLOBAL.get_or_init(FallbackRegistry::new)
    }

    /// The built-in list: one regular-weight, default-design descriptor.
    pub fn default_fonts() -> Vec<FallbackFont> {
        vec![FallbackFont::default()]
    }

    /// The static fallback list.
    pub fn fallback_fonts(&self) -> Vec<FallbackFont> {
        self.state.read().fonts.clone()
    }

    /// Replace the static fallback list and make it the active source.
    ///
    /// An empty list resets to [`Self::default_fonts`]; use [`Self::clear`]
    /// to disable fallback fonts.
    pub fn set_fallback_fonts(&self, fonts: Vec<FallbackFont>) {
        let fonts = if fonts.is_empty() {
            log::debug!("Empty fallback list, resetting to default");
            Self::default_fonts()
        } else {
            fonts
        };
        log::info!("Set {} fallback fonts", fonts.len());

        let mut state = self.state.write();
        state.fonts = fonts;
        state.source = FallbackSource::List;
    }

    /// Install an override callback; it takes precedence over the static list
    /// until it is cleared or the list is set again.
    pub fn set_fallback_fonts_callback<F>(&self, callback: F)
    where
        F: Fn(&FontStyle) -> Vec<FallbackFont> + Send + Sync + 'static,
    {
        log::info!("Installed fallback fonts callback");
        self.state.write().source = FallbackSource::Callback(Arc::new(callback));
    }

    /// Remove the override callback, reverting to the static list.
    pub fn clear_fallback_fonts_callback(&self) {
        let mut state = self.state.write();
        if matches!(state.source, FallbackSource::Callback(_)) {
            log::info!("Cleared fallback fonts callback");
        }
        state.source = FallbackSource::List;
    }

    pub fn has_callback(&self) -> bool {
        matches!(self.state.read().source, FallbackSource::Callback(_))
    }

    /// Restore the built-in default list and remove any callback.
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.fonts = Self::default_fonts();
        state.source = FallbackSource::List;
    }

    /// Disable fallback fonts: an empty static list and no callback.
    pub fn clear(&self) {
        log::info!("Cleared fallback fonts");
        let mut state = self.state.write();
        state.fonts.clear();
        state.source = FallbackSource::List;
    }

    /// Fallback fonts for a requested style: the callback's result when one
    /// is installed, the static list otherwise.
    pub fn fallback_fonts_for(&self, style: &FontStyle) -> Vec<FallbackFont> {
        // Clone out of the lock so the callback may use the registry itself
        let callback = {
            let state = self.state.read();
            match &state.source {
                FallbackSource::List => return state.fonts.clone(),
                FallbackSource::Callback(callback) => Arc::clone(callback),
            }
        };
        callback(style)
    }

    /// Resolve the fallback fonts for a style, in priority order.
    pub fn resolve_fallbacks(
        &self,
        style: &FontStyle,
        resolver: &FontResolver,
    ) -> Vec<ResolvedFont> {
        self.fallback_fonts_for(style)
            .iter()
            .map(|font| resolver.resolve_font(font))
            .collect()
    }

    /// Find the first fallback font that has a glyph for `character`.
    ///
    /// This is the glyph-miss hook: candidates are tried in order and the
    /// first nonzero glyph wins.
    pub fn find_glyph(
        &self,
        style: &FontStyle,
        character: char,
        resolver: &FontResolver,
    ) -> Option<GlyphMatch> {
        let fallbacks = self.resolve_fallbacks(style, resolver);
        for (fallback_index, font) in fallbacks.into_iter().enumerate() {
            if let Some(glyph_id) = resolver.glyph_index(&font, character) {
                log::debug!(
                    "Character '{}' (U+{:04X}) found in fallback '{}' (index {})",
                    character,
                    character as u32,
                    font.name,
                    fallback_index
                );
                return Some(GlyphMatch {
                    fallback_index,
                    glyph_id,
                    font,
                });
            }
        }

        log::debug!(
            "Character '{}' (U+{:04X}) not found in any fallback font",
            character,
            character as u32
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FallbackFontDescriptor;
    use motiontext_config::{FontDesignClass, FontWeightClass};

    fn weight_descriptor(weight: FontWeightClass) -> FallbackFont {
        FallbackFontDescriptor::default().with_weight(weight).into()
    }

    #[test]
    fn test_callback_can_read_registry() {
        let registry = Arc::new(FallbackRegistry::new());
        let inner = Arc::clone(&registry);
        registry.set_fallback_fonts_callback(move |_| {
            let mut fonts = inner.fallback_fonts();
            fonts.push(weight_descriptor(FontWeightClass::Black));
            fonts
        });

        let fonts = registry.fallback_fonts_for(&FontStyle::default());
        assert_eq!(fonts.len(), 2);
        assert_eq!(fonts[1].weight(), FontWeightClass::Black);
    }

    #[test]
    fn test_callback_receives_requested_style() {
        let registry = FallbackRegistry::new();
        registry.set_fallback_fonts_callback(|style| vec![weight_descriptor(style.weight)]);

        let fonts = registry.fallback_fonts_for(&FontStyle::from_raw_weight(720.0));
        assert_eq!(fonts[0].weight(), FontWeightClass::Bold);
    }

    #[test]
    fn test_reset_removes_callback() {
        let registry = FallbackRegistry::new();
        registry.set_fallback_fonts(vec![weight_descriptor(FontWeightClass::Heavy)]);
        registry.set_fallback_fonts_callback(|_| Vec::new());
        registry.reset();

        assert!(!registry.has_callback());
        assert_eq!(registry.fallback_fonts(), FallbackRegistry::default_fonts());
    }

    #[test]
    fn test_from_config_uses_configured_list() {
        let config = Config::from_yaml("fallback_fonts:\n  - design: serif\n    weight: light\n")
            .unwrap();
        let registry = FallbackRegistry::from_config(&config);
        assert_eq!(
            registry.fallback_fonts(),
            vec![FallbackFont::Descriptor(FallbackFontDescriptor::new(
                FontDesignClass::Serif,
                FontWeightClass::Light,
                Default::default(),
            ))]
        );
    }

    #[test]
    fn test_find_glyph_without_faces() {
        let registry = FallbackRegistry::new();
        let resolver = FontResolver::new();
        assert_eq!(registry.find_glyph(&FontStyle::default(), 'A', &resolver), None);
    }

    #[test]
    fn test_from_config_empty_list_means_default() {
        let config = Config::from_yaml("fallback_fonts: []\n").unwrap();
        let registry = FallbackRegistry::from_config(&config);
        assert_eq!(registry.fallback_fonts(), FallbackRegistry::default_fonts());
    }
}
