//! Scripts known to the autohinter.

use raw::types::Tag;

/// Defines the basic properties for each script supported by the
/// autohinter.
///
/// Hinting parameters such as blue zones live with the hinting code; this
/// only carries what is needed to classify glyphs.
#[derive(Clone, Debug)]
pub struct ScriptClass {
    pub name: &'static str,
    /// Short identifier, also used as the prefix of style identifiers.
    pub id: &'static str,
    /// Index of self in the SCRIPT_CLASSES array.
    pub index: usize,
    /// Unicode (ISO 15924) tag for the script.
    ///
    /// This is what gets handed to the shaping provider which maps it to
    /// one or more OpenType script tags.
    pub tag: Tag,
}

impl ScriptClass {
    pub fn from_index(index: usize) -> Option<&'static ScriptClass> {
        SCRIPT_CLASSES.get(index)
    }

    /// Returns the script with the given short identifier, such as `latn`.
    pub fn from_id(id: &str) -> Option<&'static ScriptClass> {
        SCRIPT_CLASSES.iter().find(|script| script.id == id)
    }
}

impl PartialEq for ScriptClass {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for ScriptClass {}

impl ScriptClass {
    pub const ADLM: usize = 0;
    pub const ARAB: usize = 1;
    pub const ARMN: usize = 2;
    pub const AVST: usize = 3;
    pub const BAMU: usize = 4;
    pub const BENG: usize = 5;
    pub const BUHD: usize = 6;
    pub const CAKM: usize = 7;
    pub const CANS: usize = 8;
    pub const CARI: usize = 9;
    pub const CHER: usize = 10;
    pub const COPT: usize = 11;
    pub const CPRT: usize = 12;
    pub const CYRL: usize = 13;
    pub const DEVA: usize = 14;
    pub const DSRT: usize = 15;
    pub const ETHI: usize = 16;
    pub const GEOR: usize = 17;
    pub const GEOK: usize = 18;
    pub const GLAG: usize = 19;
    pub const GOTH: usize = 20;
    pub const GREK: usize = 21;
    pub const GUJR: usize = 22;
    pub const GURU: usize = 23;
    pub const HEBR: usize = 24;
    pub const KALI: usize = 25;
    pub const KHMR: usize = 26;
    pub const KHMS: usize = 27;
    pub const KNDA: usize = 28;
    pub const LAO: usize = 29;
    pub const LATN: usize = 30;
    pub const LATB: usize = 31;
    pub const LATP: usize = 32;
    pub const LIMB: usize = 33;
    pub const LISU: usize = 34;
    pub const MLYM: usize = 35;
    pub const MEDF: usize = 36;
    pub const MONG: usize = 37;
    pub const MYMR: usize = 38;
    pub const NKOO: usize = 39;
    pub const OLCK: usize = 40;
    pub const ORKH: usize = 41;
    pub const ORYA: usize = 42;
    pub const OSGE: usize = 43;
    pub const OSMA: usize = 44;
    pub const ROHG: usize = 45;
    pub const SAUR: usize = 46;
    pub const SHAW: usize = 47;
    pub const SINH: usize = 48;
    pub const SUND: usize = 49;
    pub const SYLO: usize = 50;
    pub const TAML: usize = 51;
    pub const TAVT: usize = 52;
    pub const TELU: usize = 53;
    pub const TFNG: usize = 54;
    pub const THAI: usize = 55;
    pub const TIBT: usize = 56;
    pub const VAII: usize = 57;
    pub const HANI: usize = 58;
    pub const NONE: usize = 59;
}

/// Scripts supported by the autohinter, in style catalog order.
pub const SCRIPT_CLASSES: &[ScriptClass] = &[
    ScriptClass {
        name: "Adlam",
        id: "adlm",
        index: 0,
        tag: Tag::new(b"Adlm"),
    },
    ScriptClass {
        name: "Arabic",
        id: "arab",
        index: 1,
        tag: Tag::new(b"Arab"),
    },
    ScriptClass {
        name: "Armenian",
        id: "armn",
        index: 2,
        tag: Tag::new(b"Armn"),
    },
    ScriptClass {
        name: "Avestan",
        id: "avst",
        index: 3,
        tag: Tag::new(b"Avst"),
    },
    ScriptClass {
        name: "Bamum",
        id: "bamu",
        index: 4,
        tag: Tag::new(b"Bamu"),
    },
    ScriptClass {
        name: "Bengali",
        id: "beng",
        index: 5,
        tag: Tag::new(b"Beng"),
    },
    ScriptClass {
        name: "Buhid",
        id: "buhd",
        index: 6,
        tag: Tag::new(b"Buhd"),
    },
    ScriptClass {
        name: "Chakma",
        id: "cakm",
        index: 7,
        tag: Tag::new(b"Cakm"),
    },
    ScriptClass {
        name: "Canadian Syllabics",
        id: "cans",
        index: 8,
        tag: Tag::new(b"Cans"),
    },
    ScriptClass {
        name: "Carian",
        id: "cari",
        index: 9,
        tag: Tag::new(b"Cari"),
    },
    ScriptClass {
        name: "Cherokee",
        id: "cher",
        index: 10,
        tag: Tag::new(b"Cher"),
    },
    ScriptClass {
        name: "Coptic",
        id: "copt",
        index: 11,
        tag: Tag::new(b"Copt"),
    },
    ScriptClass {
        name: "Cypriot",
        id: "cprt",
        index: 12,
        tag: Tag::new(b"Cprt"),
    },
    ScriptClass {
        name: "Cyrillic",
        id: "cyrl",
        index: 13,
        tag: Tag::new(b"Cyrl"),
    },
    ScriptClass {
        name: "Devanagari",
        id: "deva",
        index: 14,
        tag: Tag::new(b"Deva"),
    },
    ScriptClass {
        name: "Deseret",
        id: "dsrt",
        index: 15,
        tag: Tag::new(b"Dsrt"),
    },
    ScriptClass {
        name: "Ethiopic",
        id: "ethi",
        index: 16,
        tag: Tag::new(b"Ethi"),
    },
    ScriptClass {
        name: "Georgian (Mkhedruli)",
        id: "geor",
        index: 17,
        tag: Tag::new(b"Geor"),
    },
    ScriptClass {
        name: "Georgian (Khutsuri)",
        id: "geok",
        index: 18,
        tag: Tag::new(b"Geor"),
    },
    ScriptClass {
        name: "Glagolitic",
        id: "glag",
        index: 19,
        tag: Tag::new(b"Glag"),
    },
    ScriptClass {
        name: "Gothic",
        id: "goth",
        index: 20,
        tag: Tag::new(b"Goth"),
    },
    ScriptClass {
        name: "Greek",
        id: "grek",
        index: 21,
        tag: Tag::new(b"Grek"),
    },
    ScriptClass {
        name: "Gujarati",
        id: "gujr",
        index: 22,
        tag: Tag::new(b"Gujr"),
    },
    ScriptClass {
        name: "Gurmukhi",
        id: "guru",
        index: 23,
        tag: Tag::new(b"Guru"),
    },
    ScriptClass {
        name: "Hebrew",
        id: "hebr",
        index: 24,
        tag: Tag::new(b"Hebr"),
    },
    ScriptClass {
        name: "Kayah Li",
        id: "kali",
        index: 25,
        tag: Tag::new(b"Kali"),
    },
    ScriptClass {
        name: "Khmer",
        id: "khmr",
        index: 26,
        tag: Tag::new(b"Khmr"),
    },
    ScriptClass {
        name: "Khmer Symbols",
        id: "khms",
        index: 27,
        tag: Tag::new(b"Khmr"),
    },
    ScriptClass {
        name: "Kannada",
        id: "knda",
        index: 28,
        tag: Tag::new(b"Knda"),
    },
    ScriptClass {
        name: "Lao",
        id: "lao",
        index: 29,
        tag: Tag::new(b"Laoo"),
    },
    ScriptClass {
        name: "Latin",
        id: "latn",
        index: 30,
        tag: Tag::new(b"Latn"),
    },
    ScriptClass {
        name: "Latin Subscript Fallback",
        id: "latb",
        index: 31,
        tag: Tag::new(b"Latn"),
    },
    ScriptClass {
        name: "Latin Superscript Fallback",
        id: "latp",
        index: 32,
        tag: Tag::new(b"Latn"),
    },
    ScriptClass {
        name: "Limbu",
        id: "limb",
        index: 33,
        tag: Tag::new(b"Limb"),
    },
    ScriptClass {
        name: "Lisu",
        id: "lisu",
        index: 34,
        tag: Tag::new(b"Lisu"),
    },
    ScriptClass {
        name: "Malayalam",
        id: "mlym",
        index: 35,
        tag: Tag::new(b"Mlym"),
    },
    ScriptClass {
        name: "Medefaidrin",
        id: "medf",
        index: 36,
        tag: Tag::new(b"Medf"),
    },
    ScriptClass {
        name: "Mongolian",
        id: "mong",
        index: 37,
        tag: Tag::new(b"Mong"),
    },
    ScriptClass {
        name: "Myanmar",
        id: "mymr",
        index: 38,
        tag: Tag::new(b"Mymr"),
    },
    ScriptClass {
        name: "N'Ko",
        id: "nkoo",
        index: 39,
        tag: Tag::new(b"Nkoo"),
    },
    ScriptClass {
        name: "Ol Chiki",
        id: "olck",
        index: 40,
        tag: Tag::new(b"Olck"),
    },
    ScriptClass {
        name: "Old Turkic",
        id: "orkh",
        index: 41,
        tag: Tag::new(b"Orkh"),
    },
    ScriptClass {
        name: "Oriya",
        id: "orya",
        index: 42,
        tag: Tag::new(b"Orya"),
    },
    ScriptClass {
        name: "Osage",
        id: "osge",
        index: 43,
        tag: Tag::new(b"Osge"),
    },
    ScriptClass {
        name: "Osmanya",
        id: "osma",
        index: 44,
        tag: Tag::new(b"Osma"),
    },
    ScriptClass {
        name: "Hanifi Rohingya",
        id: "rohg",
        index: 45,
        tag: Tag::new(b"Rohg"),
    },
    ScriptClass {
        name: "Saurashtra",
        id: "saur",
        index: 46,
        tag: Tag::new(b"Saur"),
    },
    ScriptClass {
        name: "Shavian",
        id: "shaw",
        index: 47,
        tag: Tag::new(b"Shaw"),
    },
    ScriptClass {
        name: "Sinhala",
        id: "sinh",
        index: 48,
        tag: Tag::new(b"Sinh"),
    },
    ScriptClass {
        name: "Sundanese",
        id: "sund",
        index: 49,
        tag: Tag::new(b"Sund"),
    },
    ScriptClass {
        name: "Syloti Nagri",
        id: "sylo",
        index: 50,
        tag: Tag::new(b"Sylo"),
    },
    ScriptClass {
        name: "Tamil",
        id: "taml",
        index: 51,
        tag: Tag::new(b"Taml"),
    },
    ScriptClass {
        name: "Tai Viet",
        id: "tavt",
        index: 52,
        tag: Tag::new(b"Tavt"),
    },
    ScriptClass {
        name: "Telugu",
        id: "telu",
        index: 53,
        tag: Tag::new(b"Telu"),
    },
    ScriptClass {
        name: "Tifinagh",
        id: "tfng",
        index: 54,
        tag: Tag::new(b"Tfng"),
    },
    ScriptClass {
        name: "Thai",
        id: "thai",
        index: 55,
        tag: Tag::new(b"Thai"),
    },
    ScriptClass {
        name: "Tibetan",
        id: "tibt",
        index: 56,
        tag: Tag::new(b"Tibt"),
    },
    ScriptClass {
        name: "Vai",
        id: "vaii",
        index: 57,
        tag: Tag::new(b"Vaii"),
    },
    ScriptClass {
        name: "CJKV ideographs",
        id: "hani",
        index: 58,
        tag: Tag::new(b"Hani"),
    },
    ScriptClass {
        name: "no script",
        id: "none",
        index: 59,
        tag: Tag::new(b"Zzzz"),
    },
];
