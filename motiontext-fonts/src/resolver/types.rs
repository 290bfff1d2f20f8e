//! Resolved font handles.

use motiontext_config::{FontDesignClass, FontWeightClass, FontWidthClass};

use crate::style::FontUsage;

/// Trait dictionary of a resolved font.
///
/// `width` is always set, standard width included, so consumers never have
/// to guess a default when the matched face does not declare one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontTraits {
    pub design: FontDesignClass,
    /// Signed weight trait, see [`FontWeightClass::weight_trait`]
    pub weight: f32,
    /// Signed width trait, see [`FontWidthClass::width_trait`]
    pub width: f32,
}

/// Requested traits the matched face does not carry natively and that the
/// renderer has to emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Synthesis {
    pub design: bool,
    pub weight: bool,
    pub width: bool,
}

/// A concrete font chosen for a fallback request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont {
    /// Identifying name: the face's PostScript name, followed by one `+Tag`
    /// per synthesized trait
    pub name: String,
    /// Family name of the matched face
    pub family: String,
    /// Matched face, `None` when the database had no usable face
    pub face_id: Option<fontdb::ID>,
    pub weight: FontWeightClass,
    pub width: FontWidthClass,
    pub usage: FontUsage,
    pub traits: FontTraits,
    pub synthesis: Synthesis,
}

impl ResolvedFont {
    /// Whether this is the built-in system default rather than a real face.
    pub fn is_system_default(&self) -> bool {
        self.face_id.is_none()
    }
}
