//! Configuration for style coverage.

use crate::{
    script::{ScriptClass, SCRIPT_CLASSES},
    style::{StyleClass, STYLE_CLASSES},
};

/// Options that affect how glyphs are assigned to styles.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageOptions {
    /// Script whose default style also receives glyphs reachable only
    /// through the `DFLT` OpenType script.
    ///
    /// Defaults to Latin.
    #[cfg_attr(feature = "serde", serde(with = "serde_ids::script"))]
    pub default_script: &'static ScriptClass,
    /// Style assigned to every glyph that is not covered by any other
    /// style.
    ///
    /// Defaults to the CJK ideographs style.
    #[cfg_attr(feature = "serde", serde(with = "serde_ids::style"))]
    pub fallback_style: &'static StyleClass,
}

impl CoverageOptions {
    pub fn with_default_script(mut self, script: &'static ScriptClass) -> Self {
        self.default_script = script;
        self
    }

    pub fn with_fallback_style(mut self, style: &'static StyleClass) -> Self {
        self.fallback_style = style;
        self
    }
}

impl Default for CoverageOptions {
    fn default() -> Self {
        Self {
            default_script: &SCRIPT_CLASSES[ScriptClass::LATN],
            fallback_style: &STYLE_CLASSES[StyleClass::HANI_DFLT],
        }
    }
}

/// Scripts and styles are (de)serialized by their short identifiers.
#[cfg(feature = "serde")]
mod serde_ids {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    fn deserialize_id<'de, D, T>(
        deserializer: D,
        lookup: fn(&str) -> Option<&'static T>,
        what: &str,
    ) -> Result<&'static T, D::Error>
    where
        D: Deserializer<'de>,
        T: 'static,
    {
        let id = String::deserialize(deserializer)?;
        lookup(&id).ok_or_else(|| D::Error::custom(format!("unknown {what} '{id}'")))
    }

    pub mod script {
        use super::*;
        use crate::script::ScriptClass;

        pub fn serialize<S: Serializer>(
            script: &&'static ScriptClass,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(script.id)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<&'static ScriptClass, D::Error> {
            deserialize_id(deserializer, ScriptClass::from_id, "script")
        }
    }

    pub mod style {
        use super::*;
        use crate::style::StyleClass;

        pub fn serialize<S: Serializer>(
            style: &&'static StyleClass,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(style.id)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<&'static StyleClass, D::Error> {
            deserialize_id(deserializer, StyleClass::from_id, "style")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = CoverageOptions::default();
        assert_eq!(options.default_script.id, "latn");
        assert_eq!(options.fallback_style.id, "hani_dflt");
    }

    #[test]
    fn builder_methods() {
        let options = CoverageOptions::default()
            .with_default_script(ScriptClass::from_id("cyrl").unwrap())
            .with_fallback_style(StyleClass::from_id("none_dflt").unwrap());
        assert_eq!(options.default_script.index, ScriptClass::CYRL);
        assert_eq!(options.fallback_style.index, StyleClass::NONE_DFLT);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_ids() {
        let json = serde_json::to_string(&CoverageOptions::default()).unwrap();
        assert_eq!(
            json,
            r#"{"default_script":"latn","fallback_style":"hani_dflt"}"#
        );
        let options: CoverageOptions =
            serde_json::from_str(r#"{"default_script":"cyrl","fallback_style":"none_dflt"}"#)
                .unwrap();
        assert_eq!(options.default_script.index, ScriptClass::CYRL);
        assert_eq!(options.fallback_style.index, StyleClass::NONE_DFLT);
        assert!(serde_json::from_str::<CoverageOptions>(
            r#"{"default_script":"klingon","fallback_style":"none_dflt"}"#
        )
        .is_err());
    }
}
