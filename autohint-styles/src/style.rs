//! Style classes and the per-font glyph style map.

use crate::{
    coverage::Coverage,
    error::CoverageError,
    options::CoverageOptions,
    resolve::{compute_coverage, CoverageKind},
    script::{ScriptClass, SCRIPT_CLASSES},
    shape::ShapingProvider,
};
use raw::types::GlyphId;

/// Defines the basic properties for each style supported by the
/// autohinter.
///
/// There's mostly a 1:1 correspondence between styles and scripts except
/// in the cases where style coverage is determined by OpenType feature
/// coverage.
#[derive(Clone, Debug)]
pub struct StyleClass {
    pub name: &'static str,
    /// Short identifier in the form `<script>_<coverage>`.
    pub id: &'static str,
    /// Index of self in the STYLE_CLASSES array.
    pub index: usize,
    /// Associated Unicode script.
    pub script: &'static ScriptClass,
    /// Features that determine which glyphs belong to this style.
    pub coverage: Coverage,
}

impl StyleClass {
    pub fn from_index(index: usize) -> Option<&'static StyleClass> {
        STYLE_CLASSES.get(index)
    }

    /// Returns the style with the given identifier, such as `latn_smcp`.
    pub fn from_id(id: &str) -> Option<&'static StyleClass> {
        STYLE_CLASSES.iter().find(|style| style.id == id)
    }

    /// Returns true if this is the entry at its own index in
    /// [`STYLE_CLASSES`].
    pub fn is_known(&self) -> bool {
        Self::from_index(self.index).is_some_and(|style| {
            style.id == self.id && style.script == self.script && style.coverage == self.coverage
        })
    }
}

impl PartialEq for StyleClass {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for StyleClass {}

/// Defines the style associated with a single glyph.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct GlyphStyle(u16);

impl GlyphStyle {
    const STYLE_INDEX_MASK: u16 = 0xFF;
    const UNASSIGNED: u16 = Self::STYLE_INDEX_MASK;

    /// Creates a glyph style for the given style class.
    pub const fn new(style: &StyleClass) -> Self {
        Self(style.index as u16 & Self::STYLE_INDEX_MASK)
    }

    pub const fn is_unassigned(self) -> bool {
        self.0 & Self::STYLE_INDEX_MASK == Self::UNASSIGNED
    }

    pub fn style_class(self) -> Option<&'static StyleClass> {
        StyleClass::from_index(self.style_index()? as usize)
    }

    pub fn style_index(self) -> Option<u16> {
        let ix = self.0 & Self::STYLE_INDEX_MASK;
        if ix != Self::UNASSIGNED {
            Some(ix)
        } else {
            None
        }
    }

    /// Assigns the given style if no style has been assigned yet.
    ///
    /// Returns `true` if the style was applied.
    pub fn maybe_assign(&mut self, style: &StyleClass) -> bool {
        if self.is_unassigned() {
            self.0 = (self.0 & !Self::STYLE_INDEX_MASK) | style.index as u16;
            true
        } else {
            false
        }
    }
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self(Self::UNASSIGNED)
    }
}

/// Sentinel for unused styles in [`GlyphStyleMap::metrics_map`].
const UNMAPPED_STYLE: u8 = 0xFF;

const MAX_STYLES: usize = STYLE_CLASSES.len();

/// Maps glyph identifiers to glyph styles.
///
/// Also keeps track of the styles that are actually used so we can allocate
/// an appropriately sized metrics array.
#[derive(Clone, Debug)]
pub struct GlyphStyleMap {
    /// List of styles, indexed by glyph id.
    styles: Vec<GlyphStyle>,
    /// Maps an actual style class index into a compacted index for the
    /// metrics table.
    ///
    /// Uses `0xFF` to signify unused styles.
    metrics_map: [u8; MAX_STYLES],
    /// Number of metrics styles in use.
    metrics_count: u8,
}

impl GlyphStyleMap {
    /// Computes a new glyph style map for the given glyph count using
    /// layout information from the shaping provider.
    ///
    /// Only glyphs produced by GSUB lookups are classified. There is no
    /// pass over the character map, so glyphs reachable only through cmap
    /// receive the fallback style.
    ///
    /// Roughly based on <https://gitlab.freedesktop.org/freetype/freetype/-/blob/57617782464411201ce7bbc93b086c1b4d7d84a5/src/autofit/afglobal.c#L126>
    pub fn new<P: ShapingProvider + ?Sized>(
        glyph_count: u32,
        provider: &P,
        options: &CoverageOptions,
    ) -> Result<Self, CoverageError> {
        let mut map = Self {
            styles: vec![GlyphStyle::default(); glyph_count as usize],
            ..Default::default()
        };
        if map.styles.is_empty() {
            return Ok(map);
        }
        // The `none` script has no layout tags of its own and only ever
        // applies as a fallback
        let styles = STYLE_CLASSES
            .iter()
            .filter(|style| style.script.index != ScriptClass::NONE);
        // Step 1: styles restricted to specific features, such as small
        // capitals, so that they take precedence over the default
        // coverage of their script
        for style in styles.clone().filter(|style| !style.coverage.is_default()) {
            map.compute_style(provider, style, CoverageKind::Script)?;
        }
        // Step 2: default coverage for every script, in catalog order
        for style in styles.clone().filter(|style| style.coverage.is_default()) {
            map.compute_style(provider, style, CoverageKind::Script)?;
        }
        // Step 3: the default script again, this time picking up lookups
        // registered for `DFLT`
        if let Some(style) = styles
            .clone()
            .find(|style| CoverageKind::for_style(style, options) == CoverageKind::Default)
        {
            map.compute_style(provider, style, CoverageKind::Default)?;
        }
        // Step 4: everything left over gets the fallback style
        let fallback = options.fallback_style;
        let mut fallback_count = 0;
        for style in map.styles.iter_mut() {
            if style.maybe_assign(fallback) {
                fallback_count += 1;
            }
        }
        if fallback_count != 0 {
            map.use_style(fallback.index);
        }
        log::debug!(
            "{fallback_count} of {glyph_count} glyphs assigned fallback style `{}`",
            fallback.id
        );
        Ok(map)
    }

    pub fn style(&self, glyph_id: GlyphId) -> Option<GlyphStyle> {
        self.styles.get(glyph_id.to_u32() as usize).copied()
    }

    /// Returns the style of every glyph, indexed by glyph id.
    pub fn styles(&self) -> &[GlyphStyle] {
        &self.styles
    }

    /// Returns a compacted metrics index for the given glyph style.
    pub fn metrics_index(&self, style: GlyphStyle) -> Option<usize> {
        let ix = style.style_index()? as usize;
        let metrics_ix = *self.metrics_map.get(ix)?;
        if metrics_ix != UNMAPPED_STYLE {
            Some(metrics_ix as usize)
        } else {
            None
        }
    }

    /// Returns the required size of the compacted metrics array.
    pub fn metrics_count(&self) -> usize {
        self.metrics_count as usize
    }

    /// Returns an iterator yielding each style class referenced by this
    /// map, ordered by metrics index.
    pub fn metrics_styles(&self) -> impl Iterator<Item = &'static StyleClass> + '_ {
        // Need to build a reverse map so that these are properly ordered
        let mut reverse_map = [UNMAPPED_STYLE; MAX_STYLES];
        for (ix, &entry) in self.metrics_map.iter().enumerate() {
            if entry != UNMAPPED_STYLE {
                reverse_map[entry as usize] = ix as u8;
            }
        }
        reverse_map
            .into_iter()
            .take(self.metrics_count())
            .filter_map(|style_ix| STYLE_CLASSES.get(style_ix as usize))
    }

    fn compute_style<P: ShapingProvider + ?Sized>(
        &mut self,
        provider: &P,
        style: &StyleClass,
        kind: CoverageKind,
    ) -> Result<(), CoverageError> {
        if compute_coverage(provider, style, kind, &mut self.styles)? != 0 {
            self.use_style(style.index);
        }
        Ok(())
    }

    fn use_style(&mut self, style_ix: usize) {
        let Some(mapped) = self.metrics_map.get_mut(style_ix) else {
            return;
        };
        if *mapped == UNMAPPED_STYLE {
            // This the first time we've seen this style so record
            // it in the metrics map
            *mapped = self.metrics_count;
            self.metrics_count += 1;
        }
    }
}

impl Default for GlyphStyleMap {
    fn default() -> Self {
        Self {
            styles: Default::default(),
            metrics_map: [UNMAPPED_STYLE; MAX_STYLES],
            metrics_count: 0,
        }
    }
}

impl StyleClass {
    pub const CYRL_DFLT: usize = 23;
    pub const GREK_DFLT: usize = 41;
    pub const LATN_C2SC: usize = 51;
    pub const LATN_SMCP: usize = 56;
    pub const LATN_SUPS: usize = 58;
    pub const LATN_DFLT: usize = 60;
    pub const HANI_DFLT: usize = 88;
    pub const NONE_DFLT: usize = 89;
}

/// The style catalog.
///
/// Order matters: earlier styles get the first claim on a glyph during
/// coverage resolution, so feature styles precede the default style of
/// their script.
pub const STYLE_CLASSES: &[StyleClass] = &[
    StyleClass {
        name: "Adlam",
        id: "adlm_dflt",
        index: 0,
        script: &SCRIPT_CLASSES[ScriptClass::ADLM],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Arabic",
        id: "arab_dflt",
        index: 1,
        script: &SCRIPT_CLASSES[ScriptClass::ARAB],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Armenian",
        id: "armn_dflt",
        index: 2,
        script: &SCRIPT_CLASSES[ScriptClass::ARMN],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Avestan",
        id: "avst_dflt",
        index: 3,
        script: &SCRIPT_CLASSES[ScriptClass::AVST],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Bamum",
        id: "bamu_dflt",
        index: 4,
        script: &SCRIPT_CLASSES[ScriptClass::BAMU],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Bengali",
        id: "beng_dflt",
        index: 5,
        script: &SCRIPT_CLASSES[ScriptClass::BENG],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Buhid",
        id: "buhd_dflt",
        index: 6,
        script: &SCRIPT_CLASSES[ScriptClass::BUHD],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Chakma",
        id: "cakm_dflt",
        index: 7,
        script: &SCRIPT_CLASSES[ScriptClass::CAKM],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Canadian Syllabics",
        id: "cans_dflt",
        index: 8,
        script: &SCRIPT_CLASSES[ScriptClass::CANS],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Carian",
        id: "cari_dflt",
        index: 9,
        script: &SCRIPT_CLASSES[ScriptClass::CARI],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Cherokee",
        id: "cher_dflt",
        index: 10,
        script: &SCRIPT_CLASSES[ScriptClass::CHER],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Coptic",
        id: "copt_dflt",
        index: 11,
        script: &SCRIPT_CLASSES[ScriptClass::COPT],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Cypriot",
        id: "cprt_dflt",
        index: 12,
        script: &SCRIPT_CLASSES[ScriptClass::CPRT],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Cyrillic petite capitals from capitals",
        id: "cyrl_c2cp",
        index: 13,
        script: &SCRIPT_CLASSES[ScriptClass::CYRL],
        coverage: Coverage::PetiteCapitalsFromCapitals,
    },
    StyleClass {
        name: "Cyrillic small capitals from capitals",
        id: "cyrl_c2sc",
        index: 14,
        script: &SCRIPT_CLASSES[ScriptClass::CYRL],
        coverage: Coverage::SmallCapitalsFromCapitals,
    },
    StyleClass {
        name: "Cyrillic ordinals",
        id: "cyrl_ordn",
        index: 15,
        script: &SCRIPT_CLASSES[ScriptClass::CYRL],
        coverage: Coverage::Ordinals,
    },
    StyleClass {
        name: "Cyrillic petite capitals",
        id: "cyrl_pcap",
        index: 16,
        script: &SCRIPT_CLASSES[ScriptClass::CYRL],
        coverage: Coverage::PetiteCapitals,
    },
    StyleClass {
        name: "Cyrillic ruby",
        id: "cyrl_ruby",
        index: 17,
        script: &SCRIPT_CLASSES[ScriptClass::CYRL],
        coverage: Coverage::Ruby,
    },
    StyleClass {
        name: "Cyrillic scientific inferiors",
        id: "cyrl_sinf",
        index: 18,
        script: &SCRIPT_CLASSES[ScriptClass::CYRL],
        coverage: Coverage::ScientificInferiors,
    },
    StyleClass {
        name: "Cyrillic small capitals",
        id: "cyrl_smcp",
        index: 19,
        script: &SCRIPT_CLASSES[ScriptClass::CYRL],
        coverage: Coverage::SmallCapitals,
    },
    StyleClass {
        name: "Cyrillic subscript",
        id: "cyrl_subs",
        index: 20,
        script: &SCRIPT_CLASSES[ScriptClass::CYRL],
        coverage: Coverage::Subscript,
    },
    StyleClass {
        name: "Cyrillic superscript",
        id: "cyrl_sups",
        index: 21,
        script: &SCRIPT_CLASSES[ScriptClass::CYRL],
        coverage: Coverage::Superscript,
    },
    StyleClass {
        name: "Cyrillic titling",
        id: "cyrl_titl",
        index: 22,
        script: &SCRIPT_CLASSES[ScriptClass::CYRL],
        coverage: Coverage::Titling,
    },
    StyleClass {
        name: "Cyrillic",
        id: "cyrl_dflt",
        index: 23,
        script: &SCRIPT_CLASSES[ScriptClass::CYRL],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Devanagari",
        id: "deva_dflt",
        index: 24,
        script: &SCRIPT_CLASSES[ScriptClass::DEVA],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Deseret",
        id: "dsrt_dflt",
        index: 25,
        script: &SCRIPT_CLASSES[ScriptClass::DSRT],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Ethiopic",
        id: "ethi_dflt",
        index: 26,
        script: &SCRIPT_CLASSES[ScriptClass::ETHI],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Georgian (Mkhedruli)",
        id: "geor_dflt",
        index: 27,
        script: &SCRIPT_CLASSES[ScriptClass::GEOR],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Georgian (Khutsuri)",
        id: "geok_dflt",
        index: 28,
        script: &SCRIPT_CLASSES[ScriptClass::GEOK],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Glagolitic",
        id: "glag_dflt",
        index: 29,
        script: &SCRIPT_CLASSES[ScriptClass::GLAG],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Gothic",
        id: "goth_dflt",
        index: 30,
        script: &SCRIPT_CLASSES[ScriptClass::GOTH],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Greek petite capitals from capitals",
        id: "grek_c2cp",
        index: 31,
        script: &SCRIPT_CLASSES[ScriptClass::GREK],
        coverage: Coverage::PetiteCapitalsFromCapitals,
    },
    StyleClass {
        name: "Greek small capitals from capitals",
        id: "grek_c2sc",
        index: 32,
        script: &SCRIPT_CLASSES[ScriptClass::GREK],
        coverage: Coverage::SmallCapitalsFromCapitals,
    },
    StyleClass {
        name: "Greek ordinals",
        id: "grek_ordn",
        index: 33,
        script: &SCRIPT_CLASSES[ScriptClass::GREK],
        coverage: Coverage::Ordinals,
    },
    StyleClass {
        name: "Greek petite capitals",
        id: "grek_pcap",
        index: 34,
        script: &SCRIPT_CLASSES[ScriptClass::GREK],
        coverage: Coverage::PetiteCapitals,
    },
    StyleClass {
        name: "Greek ruby",
        id: "grek_ruby",
        index: 35,
        script: &SCRIPT_CLASSES[ScriptClass::GREK],
        coverage: Coverage::Ruby,
    },
    StyleClass {
        name: "Greek scientific inferiors",
        id: "grek_sinf",
        index: 36,
        script: &SCRIPT_CLASSES[ScriptClass::GREK],
        coverage: Coverage::ScientificInferiors,
    },
    StyleClass {
        name: "Greek small capitals",
        id: "grek_smcp",
        index: 37,
        script: &SCRIPT_CLASSES[ScriptClass::GREK],
        coverage: Coverage::SmallCapitals,
    },
    StyleClass {
        name: "Greek subscript",
        id: "grek_subs",
        index: 38,
        script: &SCRIPT_CLASSES[ScriptClass::GREK],
        coverage: Coverage::Subscript,
    },
    StyleClass {
        name: "Greek superscript",
        id: "grek_sups",
        index: 39,
        script: &SCRIPT_CLASSES[ScriptClass::GREK],
        coverage: Coverage::Superscript,
    },
    StyleClass {
        name: "Greek titling",
        id: "grek_titl",
        index: 40,
        script: &SCRIPT_CLASSES[ScriptClass::GREK],
        coverage: Coverage::Titling,
    },
    StyleClass {
        name: "Greek",
        id: "grek_dflt",
        index: 41,
        script: &SCRIPT_CLASSES[ScriptClass::GREK],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Gujarati",
        id: "gujr_dflt",
        index: 42,
        script: &SCRIPT_CLASSES[ScriptClass::GUJR],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Gurmukhi",
        id: "guru_dflt",
        index: 43,
        script: &SCRIPT_CLASSES[ScriptClass::GURU],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Hebrew",
        id: "hebr_dflt",
        index: 44,
        script: &SCRIPT_CLASSES[ScriptClass::HEBR],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Kayah Li",
        id: "kali_dflt",
        index: 45,
        script: &SCRIPT_CLASSES[ScriptClass::KALI],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Khmer",
        id: "khmr_dflt",
        index: 46,
        script: &SCRIPT_CLASSES[ScriptClass::KHMR],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Khmer Symbols",
        id: "khms_dflt",
        index: 47,
        script: &SCRIPT_CLASSES[ScriptClass::KHMS],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Kannada",
        id: "knda_dflt",
        index: 48,
        script: &SCRIPT_CLASSES[ScriptClass::KNDA],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Lao",
        id: "lao_dflt",
        index: 49,
        script: &SCRIPT_CLASSES[ScriptClass::LAO],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Latin petite capitals from capitals",
        id: "latn_c2cp",
        index: 50,
        script: &SCRIPT_CLASSES[ScriptClass::LATN],
        coverage: Coverage::PetiteCapitalsFromCapitals,
    },
    StyleClass {
        name: "Latin small capitals from capitals",
        id: "latn_c2sc",
        index: 51,
        script: &SCRIPT_CLASSES[ScriptClass::LATN],
        coverage: Coverage::SmallCapitalsFromCapitals,
    },
    StyleClass {
        name: "Latin ordinals",
        id: "latn_ordn",
        index: 52,
        script: &SCRIPT_CLASSES[ScriptClass::LATN],
        coverage: Coverage::Ordinals,
    },
    StyleClass {
        name: "Latin petite capitals",
        id: "latn_pcap",
        index: 53,
        script: &SCRIPT_CLASSES[ScriptClass::LATN],
        coverage: Coverage::PetiteCapitals,
    },
    StyleClass {
        name: "Latin ruby",
        id: "latn_ruby",
        index: 54,
        script: &SCRIPT_CLASSES[ScriptClass::LATN],
        coverage: Coverage::Ruby,
    },
    StyleClass {
        name: "Latin scientific inferiors",
        id: "latn_sinf",
        index: 55,
        script: &SCRIPT_CLASSES[ScriptClass::LATN],
        coverage: Coverage::ScientificInferiors,
    },
    StyleClass {
        name: "Latin small capitals",
        id: "latn_smcp",
        index: 56,
        script: &SCRIPT_CLASSES[ScriptClass::LATN],
        coverage: Coverage::SmallCapitals,
    },
    StyleClass {
        name: "Latin subscript",
        id: "latn_subs",
        index: 57,
        script: &SCRIPT_CLASSES[ScriptClass::LATN],
        coverage: Coverage::Subscript,
    },
    StyleClass {
        name: "Latin superscript",
        id: "latn_sups",
        index: 58,
        script: &SCRIPT_CLASSES[ScriptClass::LATN],
        coverage: Coverage::Superscript,
    },
    StyleClass {
        name: "Latin titling",
        id: "latn_titl",
        index: 59,
        script: &SCRIPT_CLASSES[ScriptClass::LATN],
        coverage: Coverage::Titling,
    },
    StyleClass {
        name: "Latin",
        id: "latn_dflt",
        index: 60,
        script: &SCRIPT_CLASSES[ScriptClass::LATN],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Latin Subscript Fallback",
        id: "latb_dflt",
        index: 61,
        script: &SCRIPT_CLASSES[ScriptClass::LATB],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Latin Superscript Fallback",
        id: "latp_dflt",
        index: 62,
        script: &SCRIPT_CLASSES[ScriptClass::LATP],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Limbu",
        id: "limb_dflt",
        index: 63,
        script: &SCRIPT_CLASSES[ScriptClass::LIMB],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Lisu",
        id: "lisu_dflt",
        index: 64,
        script: &SCRIPT_CLASSES[ScriptClass::LISU],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Malayalam",
        id: "mlym_dflt",
        index: 65,
        script: &SCRIPT_CLASSES[ScriptClass::MLYM],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Medefaidrin",
        id: "medf_dflt",
        index: 66,
        script: &SCRIPT_CLASSES[ScriptClass::MEDF],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Mongolian",
        id: "mong_dflt",
        index: 67,
        script: &SCRIPT_CLASSES[ScriptClass::MONG],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Myanmar",
        id: "mymr_dflt",
        index: 68,
        script: &SCRIPT_CLASSES[ScriptClass::MYMR],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "N'Ko",
        id: "nkoo_dflt",
        index: 69,
        script: &SCRIPT_CLASSES[ScriptClass::NKOO],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Ol Chiki",
        id: "olck_dflt",
        index: 70,
        script: &SCRIPT_CLASSES[ScriptClass::OLCK],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Old Turkic",
        id: "orkh_dflt",
        index: 71,
        script: &SCRIPT_CLASSES[ScriptClass::ORKH],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Oriya",
        id: "orya_dflt",
        index: 72,
        script: &SCRIPT_CLASSES[ScriptClass::ORYA],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Osage",
        id: "osge_dflt",
        index: 73,
        script: &SCRIPT_CLASSES[ScriptClass::OSGE],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Osmanya",
        id: "osma_dflt",
        index: 74,
        script: &SCRIPT_CLASSES[ScriptClass::OSMA],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Hanifi Rohingya",
        id: "rohg_dflt",
        index: 75,
        script: &SCRIPT_CLASSES[ScriptClass::ROHG],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Saurashtra",
        id: "saur_dflt",
        index: 76,
        script: &SCRIPT_CLASSES[ScriptClass::SAUR],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Shavian",
        id: "shaw_dflt",
        index: 77,
        script: &SCRIPT_CLASSES[ScriptClass::SHAW],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Sinhala",
        id: "sinh_dflt",
        index: 78,
        script: &SCRIPT_CLASSES[ScriptClass::SINH],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Sundanese",
        id: "sund_dflt",
        index: 79,
        script: &SCRIPT_CLASSES[ScriptClass::SUND],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Syloti Nagri",
        id: "sylo_dflt",
        index: 80,
        script: &SCRIPT_CLASSES[ScriptClass::SYLO],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Tamil",
        id: "taml_dflt",
        index: 81,
        script: &SCRIPT_CLASSES[ScriptClass::TAML],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Tai Viet",
        id: "tavt_dflt",
        index: 82,
        script: &SCRIPT_CLASSES[ScriptClass::TAVT],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Telugu",
        id: "telu_dflt",
        index: 83,
        script: &SCRIPT_CLASSES[ScriptClass::TELU],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Tifinagh",
        id: "tfng_dflt",
        index: 84,
        script: &SCRIPT_CLASSES[ScriptClass::TFNG],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Thai",
        id: "thai_dflt",
        index: 85,
        script: &SCRIPT_CLASSES[ScriptClass::THAI],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Tibetan",
        id: "tibt_dflt",
        index: 86,
        script: &SCRIPT_CLASSES[ScriptClass::TIBT],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "Vai",
        id: "vaii_dflt",
        index: 87,
        script: &SCRIPT_CLASSES[ScriptClass::VAII],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "CJKV ideographs",
        id: "hani_dflt",
        index: 88,
        script: &SCRIPT_CLASSES[ScriptClass::HANI],
        coverage: Coverage::Default,
    },
    StyleClass {
        name: "no script",
        id: "none_dflt",
        index: 89,
        script: &SCRIPT_CLASSES[ScriptClass::NONE],
        coverage: Coverage::Default,
    },
];
