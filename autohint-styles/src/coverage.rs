//! OpenType feature coverage for styles.

use raw::types::Tag;

const C2CP: &[Tag] = &[Tag::new(b"c2cp")];
const C2SC: &[Tag] = &[Tag::new(b"c2sc")];
const ORDN: &[Tag] = &[Tag::new(b"ordn")];
const PCAP: &[Tag] = &[Tag::new(b"pcap")];
const RUBY: &[Tag] = &[Tag::new(b"ruby")];
const SINF: &[Tag] = &[Tag::new(b"sinf")];
const SMCP: &[Tag] = &[Tag::new(b"smcp")];
const SUBS: &[Tag] = &[Tag::new(b"subs")];
const SUPS: &[Tag] = &[Tag::new(b"sups")];
const TITL: &[Tag] = &[Tag::new(b"titl")];

/// Set of OpenType features that determines which glyphs belong to a
/// style.
///
/// Most styles use [`Coverage::Default`] which means "every feature for
/// the script". The others select glyphs produced by specific features
/// such as small capitals or superscripts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Coverage {
    PetiteCapitalsFromCapitals,
    SmallCapitalsFromCapitals,
    Ordinals,
    PetiteCapitals,
    Ruby,
    ScientificInferiors,
    SmallCapitals,
    Subscript,
    Superscript,
    Titling,
    #[default]
    Default,
}

impl Coverage {
    /// All coverages that are restricted to a feature list, in catalog order.
    pub const FEATURES: [Coverage; 10] = [
        Self::PetiteCapitalsFromCapitals,
        Self::SmallCapitalsFromCapitals,
        Self::Ordinals,
        Self::PetiteCapitals,
        Self::Ruby,
        Self::ScientificInferiors,
        Self::SmallCapitals,
        Self::Subscript,
        Self::Superscript,
        Self::Titling,
    ];

    /// Returns the feature tags that define this coverage.
    ///
    /// `None` means no restriction. This is distinct from an empty list
    /// which would select no features at all.
    pub fn feature_tags(self) -> Option<&'static [Tag]> {
        Some(match self {
            Self::PetiteCapitalsFromCapitals => C2CP,
            Self::SmallCapitalsFromCapitals => C2SC,
            Self::Ordinals => ORDN,
            Self::PetiteCapitals => PCAP,
            Self::Ruby => RUBY,
            Self::ScientificInferiors => SINF,
            Self::SmallCapitals => SMCP,
            Self::Subscript => SUBS,
            Self::Superscript => SUPS,
            Self::Titling => TITL,
            Self::Default => return None,
        })
    }

    /// Short identifier used as the suffix of style identifiers.
    pub fn id(self) -> &'static str {
        match self {
            Self::PetiteCapitalsFromCapitals => "c2cp",
            Self::SmallCapitalsFromCapitals => "c2sc",
            Self::Ordinals => "ordn",
            Self::PetiteCapitals => "pcap",
            Self::Ruby => "ruby",
            Self::ScientificInferiors => "sinf",
            Self::SmallCapitals => "smcp",
            Self::Subscript => "subs",
            Self::Superscript => "sups",
            Self::Titling => "titl",
            Self::Default => "dflt",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::PetiteCapitalsFromCapitals => "petite capitals from capitals",
            Self::SmallCapitalsFromCapitals => "small capitals from capitals",
            Self::Ordinals => "ordinals",
            Self::PetiteCapitals => "petite capitals",
            Self::Ruby => "ruby",
            Self::ScientificInferiors => "scientific inferiors",
            Self::SmallCapitals => "small capitals",
            Self::Subscript => "subscript",
            Self::Superscript => "superscript",
            Self::Titling => "titling",
            Self::Default => "default",
        }
    }

    pub fn is_default(self) -> bool {
        self == Self::Default
    }
}
