//! Descriptor resolution against a font database.
//!
//! This module maps fallback descriptors to faces in a `fontdb::Database`:
//! - each design class tries a configured family, then a priority list of
//!   well-known families, then the database's generic family
//! - weight classes map to `fontdb::Weight`, width classes to `fontdb::Stretch`
//! - traits the matched face lacks are recorded as synthesized and tagged in
//!   the font name, so distinct descriptors never share a name
//! - glyph coverage is checked through `swash` charmaps

mod families;
mod types;

use std::fmt;

use fontdb::{Database, FaceInfo, Family, ID, Query};
use motiontext_config::{Config, FontDesignClass, FontWeightClass, FontWidthClass, GenericFamilies};

use crate::descriptor::{FallbackFont, FallbackFontDescriptor};
use crate::style::FontUsage;

pub use families::{
    MONOSPACE_FAMILIES, ROUNDED_FAMILIES, SANS_SERIF_FAMILIES, SERIF_FAMILIES,
    SYSTEM_DEFAULT_FONT_NAME,
};
pub use types::{FontTraits, ResolvedFont, Synthesis};

/// Resolves fallback descriptors to concrete fonts.
///
/// Every resolution succeeds: when nothing in the database matches, the
/// result is the system default font.
pub struct FontResolver {
    /// Font database for face queries
    db: Database,

    /// Families tried before the built-in lists, per design
    generic: GenericFamilies,
}

impl fmt::Debug for FontResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontResolver")
            .field("faces", &self.db.len())
            .field("generic", &self.generic)
            .finish()
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FontResolver {
    /// Create a resolver over an empty database.
    ///
    /// Every descriptor resolves to the system default font until faces are
    /// loaded.
    pub fn new() -> Self {
        Self::from_database(Database::new())
    }

    /// Create a resolver over the platform's installed fonts.
    pub fn with_system_fonts() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        log::info!("Loaded {} system fonts", db.len());
        Self::from_database(db)
    }

    pub fn from_database(db: Database) -> Self {
        Self {
            db,
            generic: GenericFamilies::default(),
        }
    }

    /// Build the database described by the configuration.
    ///
    /// Font files and directories that cannot be read are logged and skipped.
    pub fn from_config(config: &Config) -> Self {
        let mut db = Database::new();

        if config.load_system_fonts {
            db.load_system_fonts();
            log::info!("Loaded {} system fonts", db.len());
        }

        for dir in &config.font_dirs {
            if !dir.is_dir() {
                log::warn!("Font directory {:?} not found, skipping", dir);
                continue;
            }
            let before = db.len();
            db.load_fonts_dir(dir);
            log::info!("Loaded {} fonts from {:?}", db.len() - before, dir);
        }

        for file in &config.font_files {
            match db.load_font_file(file) {
                Ok(()) => log::debug!("Loaded font file {:?}", file),
                Err(e) => log::warn!("Failed to load font file {:?}: {}", file, e),
            }
        }

        Self {
            db,
            generic: config.generic_families.clone(),
        }
    }

    /// Add a font from raw TTF/OTF/TTC bytes.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    /// Set the families tried first for each design.
    pub fn set_generic_families(&mut self, generic: GenericFamilies) {
        self.generic = generic;
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Resolve a descriptor to a concrete font.
    ///
    /// For a fixed weight and width the four design classes resolve to four
    /// distinct names, and for a fixed design and width the nine weight
    /// classes resolve to nine distinct names.
    pub fn resolve(&self, descriptor: &FallbackFontDescriptor) -> ResolvedFont {
        let FallbackFontDescriptor {
            design,
            weight,
            width,
        } = *descriptor;

        let resolved = match self.native_design_face(design, weight, width) {
            Some(id) => self.build(Some(id), design, weight, width, false),
            None => {
                // The default face with the design tagged as synthesized
                let fallback = self.default_face(weight, width);
                self.build(
                    fallback,
                    design,
                    weight,
                    width,
                    design != FontDesignClass::Default,
                )
            }
        };

        log::debug!("Resolved {:?} to '{}'", descriptor, resolved.name);
        resolved
    }

    /// Resolve any fallback list entry.
    pub fn resolve_font(&self, font: &FallbackFont) -> ResolvedFont {
        match font {
            FallbackFont::Descriptor(descriptor) => self.resolve(descriptor),
            FallbackFont::Family {
                name,
                weight,
                width,
            } => {
                let families = [Family::Name(name.as_str())];
                match self.query(&families, *weight, *width) {
                    Some(id) => {
                        let resolved =
                            self.build(Some(id), FontDesignClass::Default, *weight, *width, false);
                        log::debug!("Resolved family '{}' to '{}'", name, resolved.name);
                        resolved
                    }
                    None => {
                        log::warn!("Fallback family '{}' not found, using system font", name);
                        self.resolve(&FallbackFontDescriptor::new(
                            FontDesignClass::Default,
                            *weight,
                            *width,
                        ))
                    }
                }
            }
        }
    }

    /// Look up the glyph for a character in a resolved font.
    ///
    /// # Returns
    /// `Some(glyph_id)` if the font's charmap maps the character to a
    /// nonzero glyph, `None` otherwise (including for the system default,
    /// which has no face data).
    pub fn glyph_index(&self, font: &ResolvedFont, character: char) -> Option<u16> {
        let id = font.face_id?;
        self.db
            .with_face_data(id, |data, index| {
                let font_ref = swash::FontRef::from_index(data, index as usize)?;
                let glyph_id = font_ref.charmap().map(character);
                (glyph_id != 0).then_some(glyph_id)
            })
            .flatten()
    }

    fn query(
        &self,
        families: &[Family<'_>],
        weight: FontWeightClass,
        width: FontWidthClass,
    ) -> Option<ID> {
        if families.is_empty() {
            return None;
        }
        self.db.query(&Query {
            families,
            weight: to_fontdb_weight(weight),
            stretch: to_fontdb_stretch(width),
            style: fontdb::Style::Normal,
        })
    }

    /// The face every design falls back to: the sans-serif families, else
    /// the family of the first face in the database.
    fn default_face(&self, weight: FontWeightClass, width: FontWidthClass) -> Option<ID> {
        let families = candidate_families(
            &self.generic.sans_serif,
            SANS_SERIF_FAMILIES,
            Some(Family::SansSerif),
        );
        if let Some(id) = self.query(&families, weight, width) {
            return Some(id);
        }
        let first_family = self
            .db
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))?;
        self.query(&[Family::Name(first_family.as_str())], weight, width)
    }

    /// The first family holding a fixed-pitch face, at this weight and width.
    fn any_monospaced_face(&self, weight: FontWeightClass, width: FontWidthClass) -> Option<ID> {
        let family = self
            .db
            .faces()
            .filter(|face| face.monospaced)
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))?;
        self.query(&[Family::Name(family.as_str())], weight, width)
            .filter(|id| self.is_monospaced(*id))
    }

    fn is_monospaced(&self, id: ID) -> bool {
        self.db.face(id).is_some_and(|face| face.monospaced)
    }

    fn design_face(
        &self,
        design: FontDesignClass,
        weight: FontWeightClass,
        width: FontWidthClass,
    ) -> Option<ID> {
        match design {
            FontDesignClass::Default => self.default_face(weight, width),
            FontDesignClass::Serif => {
                let families =
                    candidate_families(&self.generic.serif, SERIF_FAMILIES, Some(Family::Serif));
                self.query(&families, weight, width)
            }
            FontDesignClass::Monospaced => {
                let families = candidate_families(
                    &self.generic.monospace,
                    MONOSPACE_FAMILIES,
                    Some(Family::Monospace),
                );
                self.query(&families, weight, width)
                    .filter(|id| self.is_monospaced(*id))
                    .or_else(|| self.any_monospaced_face(weight, width))
            }
            FontDesignClass::Rounded => {
                let families = candidate_families(&self.generic.rounded, ROUNDED_FAMILIES, None);
                self.query(&families, weight, width)
            }
        }
    }

    /// The face that natively provides `design` at this weight and width.
    ///
    /// Designs claim faces in declaration order, so a face already claimed by
    /// an earlier design (e.g. a serif family configured to the sans-serif
    /// one) does not count as native for a later design.
    fn native_design_face(
        &self,
        design: FontDesignClass,
        weight: FontWeightClass,
        width: FontWidthClass,
    ) -> Option<ID> {
        let mut claimed: Vec<ID> = Vec::with_capacity(FontDesignClass::all().len());
        for candidate in FontDesignClass::all() {
            let face = self
                .design_face(*candidate, weight, width)
                .filter(|id| !claimed.contains(id));
            if *candidate == design {
                return face;
            }
            claimed.extend(face);
        }
        None
    }

    /// Faces loaded earlier with the same PostScript name.
    ///
    /// Installed copies of one font share a PostScript name; the ordinal
    /// keeps their identifying names apart.
    fn duplicate_ordinal(&self, face: &FaceInfo) -> usize {
        self.db
            .faces()
            .take_while(|other| other.id != face.id)
            .filter(|other| other.post_script_name == face.post_script_name)
            .count()
    }

    fn build(
        &self,
        face_id: Option<ID>,
        design: FontDesignClass,
        weight: FontWeightClass,
        width: FontWidthClass,
        synthesize_design: bool,
    ) -> ResolvedFont {
        let face = face_id.and_then(|id| self.db.face(id));

        let (base_name, family, synthesis) = match face {
            Some(face) => {
                let family = face
                    .families
                    .first()
                    .map(|(name, _)| name.clone())
                    .unwrap_or_else(|| face.post_script_name.clone());
                let base_name = match self.duplicate_ordinal(face) {
                    0 => face.post_script_name.clone(),
                    n => format!("{}#{}", face.post_script_name, n + 1),
                };
                let synthesis = Synthesis {
                    design: synthesize_design,
                    weight: face.weight != to_fontdb_weight(weight),
                    width: face.stretch != to_fontdb_stretch(width),
                };
                (base_name, family, synthesis)
            }
            None => (
                SYSTEM_DEFAULT_FONT_NAME.to_string(),
                SYSTEM_DEFAULT_FONT_NAME.to_string(),
                Synthesis {
                    design: design != FontDesignClass::Default,
                    weight: true,
                    width: width != FontWidthClass::Standard,
                },
            ),
        };

        let mut name = base_name;
        if synthesis.design {
            name.push('+');
            name.push_str(design.display_name());
        }
        if synthesis.weight {
            name.push('+');
            name.push_str(weight.display_name());
        }
        if synthesis.width {
            name.push('+');
            name.push_str(width.display_name());
        }

        ResolvedFont {
            name,
            family,
            face_id: face.map(|face| face.id),
            weight,
            width,
            usage: FontUsage::for_weight(weight),
            traits: FontTraits {
                design,
                weight: weight.weight_trait(),
                width: width.width_trait(),
            },
            synthesis,
        }
    }
}

/// Query order for a design: the configured family, the known families,
/// then the generic family.
fn candidate_families<'a>(
    configured: &'a Option<String>,
    known: &[&'a str],
    generic: Option<Family<'a>>,
) -> Vec<Family<'a>> {
    configured
        .iter()
        .map(String::as_str)
        .chain(known.iter().copied())
        .map(Family::Name)
        .chain(generic)
        .collect()
}

fn to_fontdb_weight(weight: FontWeightClass) -> fontdb::Weight {
    fontdb::Weight(weight.to_number())
}

fn to_fontdb_stretch(width: FontWidthClass) -> fontdb::Stretch {
    match width {
        FontWidthClass::Compressed => fontdb::Stretch::ExtraCondensed,
        FontWidthClass::Condensed => fontdb::Stretch::Condensed,
        FontWidthClass::Standard => fontdb::Stretch::Normal,
        FontWidthClass::Expanded => fontdb::Stretch::Expanded,
    }
}
