//! Fallback font descriptors and fallback list entries.

use motiontext_config::{FallbackFontEntry, FontDesignClass, FontWeightClass, FontWidthClass};

use crate::resolver::{FontResolver, ResolvedFont};

/// An immutable request for a system font by design, weight and width.
///
/// Descriptors that differ in any field resolve to fonts with different
/// identifying names; see [`FontResolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FallbackFontDescriptor {
    pub design: FontDesignClass,
    pub weight: FontWeightClass,
    pub width: FontWidthClass,
}

impl FallbackFontDescriptor {
    pub fn new(design: FontDesignClass, weight: FontWeightClass, width: FontWidthClass) -> Self {
        Self {
            design,
            weight,
            width,
        }
    }

    pub fn with_design(mut self, design: FontDesignClass) -> Self {
        self.design = design;
        self
    }

    pub fn with_weight(mut self, weight: FontWeightClass) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_width(mut self, width: FontWidthClass) -> Self {
        self.width = width;
        self
    }

    /// Resolve this descriptor to a concrete font. Never fails.
    pub fn resolve(&self, resolver: &FontResolver) -> ResolvedFont {
        resolver.resolve(self)
    }
}

/// One entry of a fallback list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FallbackFont {
    /// A system font described by trait classes
    Descriptor(FallbackFontDescriptor),
    /// A specific installed family; resolves like a default-design
    /// descriptor when the family is not installed
    Family {
        name: String,
        weight: FontWeightClass,
        width: FontWidthClass,
    },
}

impl FallbackFont {
    pub fn family(name: impl Into<String>) -> Self {
        FallbackFont::Family {
            name: name.into(),
            weight: FontWeightClass::Regular,
            width: FontWidthClass::Standard,
        }
    }

    /// The descriptor, if this entry is a system descriptor.
    pub fn as_descriptor(&self) -> Option<&FallbackFontDescriptor> {
        match self {
            FallbackFont::Descriptor(descriptor) => Some(descriptor),
            FallbackFont::Family { .. } => None,
        }
    }

    pub fn weight(&self) -> FontWeightClass {
        match self {
            FallbackFont::Descriptor(descriptor) => descriptor.weight,
            FallbackFont::Family { weight, .. } => *weight,
        }
    }

    pub fn resolve(&self, resolver: &FontResolver) -> ResolvedFont {
        resolver.resolve_font(self)
    }
}

impl Default for FallbackFont {
    fn default() -> Self {
        FallbackFont::Descriptor(FallbackFontDescriptor::default())
    }
}

impl From<FallbackFontDescriptor> for FallbackFont {
    fn from(descriptor: FallbackFontDescriptor) -> Self {
        FallbackFont::Descriptor(descriptor)
    }
}

impl From<&FallbackFontEntry> for FallbackFont {
    fn from(entry: &FallbackFontEntry) -> Self {
        match entry {
            FallbackFontEntry::Family {
                family,
                weight,
                width,
            } => FallbackFont::Family {
                name: family.clone(),
                weight: *weight,
                width: *width,
            },
            FallbackFontEntry::System {
                design,
                weight,
                width,
            } => FallbackFont::Descriptor(FallbackFontDescriptor::new(*design, *weight, *width)),
        }
    }
}
