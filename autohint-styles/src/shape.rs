//! Shaping support for style coverage.
//!
//! The autohinter only needs three things from a shaping engine: mapping a
//! Unicode script to OpenType script tags, collecting the GSUB lookups
//! reachable from a set of scripts and features, and collecting the glyphs
//! that a lookup produces. These are captured by [`ShapingProvider`].

use raw::{
    collections::IntSet,
    tables::{
        gsub::{Gsub, SingleSubst, SubstitutionLookupList, SubstitutionSubtables},
        layout::{ChainedSequenceContext, Feature, FeatureList, LangSys, SequenceContext},
    },
    types::{GlyphId, Tag},
    FontRef, ReadError, TableProvider,
};

/// Tag for the OpenType default script.
pub const DEFAULT_SCRIPT_TAG: Tag = Tag::new(b"DFLT");

// Nested lookups deeper than this are ignored.
// See <https://github.com/harfbuzz/harfbuzz/blob/8d517f7e43f648cb804c46c47ae8009330fe4a47/src/hb-ot-layout-common.hh#L57>
const MAX_NESTING_LEVEL: u8 = 64;

/// Selects which features are considered when collecting lookups.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FeatureFilter<'a> {
    /// Every feature for the requested scripts.
    All,
    /// Only features with one of the given tags. An empty list selects
    /// nothing.
    Only(&'a [Tag]),
}

impl FeatureFilter<'_> {
    pub fn contains(&self, tag: Tag) -> bool {
        match self {
            Self::All => true,
            Self::Only(tags) => tags.contains(&tag),
        }
    }
}

impl<'a> From<Option<&'a [Tag]>> for FeatureFilter<'a> {
    fn from(value: Option<&'a [Tag]>) -> Self {
        value.map(Self::Only).unwrap_or(Self::All)
    }
}

/// The OpenType script tags used to select lookups for a style.
///
/// There are exactly three slots: primary, secondary and tertiary. The
/// first two are filled by [`ShapingProvider::script_to_tags`] and the
/// third is only ever used for the default script tag.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct ScriptTagSlots(pub [Option<Tag>; 3]);

impl ScriptTagSlots {
    pub fn new(primary: Option<Tag>, secondary: Option<Tag>) -> Self {
        Self([primary, secondary, None])
    }

    pub fn primary(&self) -> Option<Tag> {
        self.0[0]
    }

    pub fn secondary(&self) -> Option<Tag> {
        self.0[1]
    }

    pub fn tertiary(&self) -> Option<Tag> {
        self.0[2]
    }

    /// Returns an iterator over the filled slots, in order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().filter_map(|tag| *tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.tags().any(|slot| slot == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

/// Layout queries required to compute style coverage.
///
/// Implementations are bound to a single font.
pub trait ShapingProvider {
    /// Maps a Unicode script tag to up to two OpenType script tags.
    ///
    /// Some scripts (mostly Indic) have both a "new" and an "old" tag in
    /// which case the new tag is primary. Otherwise the secondary tag is
    /// usually [`DEFAULT_SCRIPT_TAG`].
    fn script_to_tags(&self, script: Tag) -> (Option<Tag>, Option<Tag>);

    /// Adds the indices of all GSUB lookups reachable from the given
    /// scripts and features to `lookups`.
    fn collect_lookups(
        &self,
        scripts: &ScriptTagSlots,
        features: FeatureFilter,
        lookups: &mut IntSet<u16>,
    ) -> Result<(), ReadError>;

    /// Adds every glyph produced by the given GSUB lookup to `glyphs`.
    fn collect_glyphs(
        &self,
        lookup_index: u16,
        glyphs: &mut IntSet<GlyphId>,
    ) -> Result<(), ReadError>;

    /// Number of glyphs in the font, if known.
    fn glyph_count(&self) -> Option<u32> {
        None
    }
}

/// Maps a Unicode script tag to OpenType script tags.
///
/// This is the two tag form of the mapping where the secondary tag falls
/// back to `DFLT`. Unknown, common and inherited scripts map to `DFLT`
/// in both slots.
///
/// See [hb_ot_tags_from_script](https://github.com/harfbuzz/harfbuzz/blob/2c53eac9bc05c4bca4f1d9c6bf8cdd6bdbcb8e26/src/hb-ot-tag.cc#L102)
pub fn ot_tags_from_script(unicode_script: Tag) -> (Option<Tag>, Option<Tag>) {
    let old_tag = old_tag_from_unicode(unicode_script);
    match new_tag_from_unicode(unicode_script) {
        Some(new_tag) => (Some(new_tag), Some(old_tag)),
        None => (Some(old_tag), Some(DEFAULT_SCRIPT_TAG)),
    }
}

// See <https://github.com/harfbuzz/harfbuzz/blob/63d09dbefcf7ad9f794ca96445d37b6d8c3c9124/src/hb-ot-tag.cc#L37>
fn old_tag_from_unicode(unicode_script: Tag) -> Tag {
    let mut bytes = unicode_script.to_be_bytes();
    let tag_bytes = match &bytes {
        b"Zyyy" | b"Zinh" | b"Zzzz" => b"DFLT",
        b"Zmth" => b"math",
        // Katakana and Hiragana both map to 'kana'
        b"Hira" => b"kana",
        // OpenType pads short tags with spaces
        b"Laoo" => b"lao ",
        b"Yiii" => b"yi  ",
        b"Nkoo" => b"nko ",
        b"Vaii" => b"vai ",
        _ => {
            bytes[0] = bytes[0].to_ascii_lowercase();
            &bytes
        }
    };
    Tag::new(tag_bytes)
}

/// Unicode scripts that have a second generation OpenType tag.
const NEW_OPENTYPE_SCRIPT_TAGS: &[(&[u8; 4], Tag)] = &[
    (b"Beng", Tag::new(b"bng2")),
    (b"Deva", Tag::new(b"dev2")),
    (b"Gujr", Tag::new(b"gjr2")),
    (b"Guru", Tag::new(b"gur2")),
    (b"Knda", Tag::new(b"knd2")),
    (b"Mlym", Tag::new(b"mlm2")),
    (b"Mymr", Tag::new(b"mym2")),
    (b"Orya", Tag::new(b"ory2")),
    (b"Taml", Tag::new(b"tml2")),
    (b"Telu", Tag::new(b"tel2")),
];

fn new_tag_from_unicode(unicode_script: Tag) -> Option<Tag> {
    let ix = NEW_OPENTYPE_SCRIPT_TAGS
        .binary_search_by_key(&unicode_script.to_be_bytes(), |entry| *entry.0)
        .ok()?;
    NEW_OPENTYPE_SCRIPT_TAGS.get(ix).map(|entry| entry.1)
}

/// Shaping provider backed by the GSUB table of a font.
///
/// Fonts without a GSUB table (or with one that fails to parse) are
/// treated as having no lookups at all.
#[derive(Clone)]
pub struct GsubShaper<'a> {
    gsub: Option<Gsub<'a>>,
    glyph_count: Option<u32>,
}

impl<'a> GsubShaper<'a> {
    pub fn new(font: &FontRef<'a>) -> Self {
        let glyph_count = font.maxp().ok().map(|maxp| maxp.num_glyphs() as u32);
        Self {
            gsub: font.gsub().ok(),
            glyph_count,
        }
    }

    /// Creates a provider for a standalone GSUB table.
    pub fn from_gsub(gsub: Option<Gsub<'a>>) -> Self {
        Self {
            gsub,
            glyph_count: None,
        }
    }

    pub fn gsub(&self) -> Option<&Gsub<'a>> {
        self.gsub.as_ref()
    }
}

impl ShapingProvider for GsubShaper<'_> {
    fn script_to_tags(&self, script: Tag) -> (Option<Tag>, Option<Tag>) {
        ot_tags_from_script(script)
    }

    fn collect_lookups(
        &self,
        scripts: &ScriptTagSlots,
        features: FeatureFilter,
        lookups: &mut IntSet<u16>,
    ) -> Result<(), ReadError> {
        let Some(gsub) = self.gsub.as_ref() else {
            return Ok(());
        };
        if scripts.is_empty() {
            return Ok(());
        }
        let feature_list = gsub.feature_list()?;
        let script_list = gsub.script_list()?;
        let script_data = script_list.offset_data();
        let mut feature_indices = IntSet::empty();
        for record in script_list.script_records() {
            if !scripts.contains(record.script_tag()) {
                continue;
            }
            let script = record.script(script_data)?;
            if let Some(lang_sys) = script.default_lang_sys().transpose()? {
                collect_features(&lang_sys, &feature_list, features, &mut feature_indices);
            }
            for lang_sys_record in script.lang_sys_records() {
                let lang_sys = lang_sys_record.lang_sys(script.offset_data())?;
                collect_features(&lang_sys, &feature_list, features, &mut feature_indices);
            }
        }
        if feature_indices.is_empty() {
            return Ok(());
        }
        let records = feature_list.feature_records();
        for feature_index in feature_indices.iter() {
            let Some(record) = records.get(feature_index as usize) else {
                continue;
            };
            let feature = record.feature(feature_list.offset_data())?;
            add_feature_lookups(&feature, lookups);
        }
        // Alternate versions of the selected features may reference
        // additional lookups
        if let Some(feature_variations) = gsub.feature_variations().transpose()? {
            let data = feature_variations.offset_data();
            for record in feature_variations.feature_variation_records() {
                let Some(substitution) = record.feature_table_substitution(data).transpose()?
                else {
                    continue;
                };
                for sub_record in substitution.substitutions() {
                    if !feature_indices.contains(sub_record.feature_index()) {
                        continue;
                    }
                    let feature = sub_record.alternate_feature(substitution.offset_data())?;
                    add_feature_lookups(&feature, lookups);
                }
            }
        }
        Ok(())
    }

    fn collect_glyphs(
        &self,
        lookup_index: u16,
        glyphs: &mut IntSet<GlyphId>,
    ) -> Result<(), ReadError> {
        let Some(gsub) = self.gsub.as_ref() else {
            return Ok(());
        };
        let lookup_list = gsub.lookup_list()?;
        let mut collector = GlyphCollector {
            lookup_list: &lookup_list,
            visited: IntSet::empty(),
            nesting_level_left: MAX_NESTING_LEVEL,
            glyphs,
        };
        collector.collect(lookup_index)
    }

    fn glyph_count(&self) -> Option<u32> {
        self.glyph_count
    }
}

fn collect_features(
    lang_sys: &LangSys,
    feature_list: &FeatureList,
    filter: FeatureFilter,
    feature_indices: &mut IntSet<u16>,
) {
    let records = feature_list.feature_records();
    let required = lang_sys.required_feature_index();
    let indices = lang_sys.feature_indices().iter().map(|ix| ix.get());
    for index in (required != 0xFFFF).then_some(required).into_iter().chain(indices) {
        let Some(record) = records.get(index as usize) else {
            continue;
        };
        if filter.contains(record.feature_tag()) {
            feature_indices.insert(index);
        }
    }
}

fn add_feature_lookups(feature: &Feature, lookups: &mut IntSet<u16>) {
    lookups.extend_unsorted(feature.lookup_list_indices().iter().map(|ix| ix.get()));
}

/// Gathers the output glyphs of a lookup, following nested lookups
/// referenced by contextual subtables.
struct GlyphCollector<'a, 'b> {
    lookup_list: &'b SubstitutionLookupList<'a>,
    visited: IntSet<u16>,
    nesting_level_left: u8,
    glyphs: &'b mut IntSet<GlyphId>,
}

impl GlyphCollector<'_, '_> {
    fn collect(&mut self, lookup_index: u16) -> Result<(), ReadError> {
        if !self.visited.insert(lookup_index) {
            return Ok(());
        }
        let lookup = self.lookup_list.lookups().get(lookup_index as usize)?;
        match lookup.subtables()? {
            SubstitutionSubtables::Single(tables) => {
                for table in tables.iter() {
                    match table? {
                        SingleSubst::Format1(table) => {
                            let delta = table.delta_glyph_id() as i32;
                            let coverage = table.coverage()?;
                            self.glyphs.extend_unsorted(coverage.iter().map(|gid| {
                                // Deltas are applied modulo 65536
                                let new_gid = (gid.to_u32() as i32 + delta) & 0xFFFF;
                                GlyphId::new(new_gid as u32)
                            }));
                        }
                        SingleSubst::Format2(table) => {
                            self.add_glyphs(table.substitute_glyph_ids().iter().map(|g| g.get()))
                        }
                    }
                }
            }
            SubstitutionSubtables::Multiple(tables) => {
                for table in tables.iter() {
                    for sequence in table?.sequences().iter() {
                        let sequence = sequence?;
                        self.add_glyphs(sequence.substitute_glyph_ids().iter().map(|g| g.get()));
                    }
                }
            }
            SubstitutionSubtables::Alternate(tables) => {
                for table in tables.iter() {
                    for alt_set in table?.alternate_sets().iter() {
                        let alt_set = alt_set?;
                        self.add_glyphs(alt_set.alternate_glyph_ids().iter().map(|g| g.get()));
                    }
                }
            }
            SubstitutionSubtables::Ligature(tables) => {
                for table in tables.iter() {
                    for lig_set in table?.ligature_sets().iter() {
                        for ligature in lig_set?.ligatures().iter() {
                            let ligature = ligature?;
                            self.glyphs
                                .insert(GlyphId::new(ligature.ligature_glyph().to_u32()));
                        }
                    }
                }
            }
            SubstitutionSubtables::Reverse(tables) => {
                for table in tables.iter() {
                    let table = table?;
                    self.add_glyphs(table.substitute_glyph_ids().iter().map(|g| g.get()));
                }
            }
            SubstitutionSubtables::Contextual(tables) => {
                for table in tables.iter() {
                    let nested = sequence_context_lookups(&table?)?;
                    self.recurse(nested)?;
                }
            }
            SubstitutionSubtables::ChainContextual(tables) => {
                for table in tables.iter() {
                    let nested = chained_sequence_context_lookups(&table?)?;
                    self.recurse(nested)?;
                }
            }
        }
        Ok(())
    }

    fn recurse(&mut self, lookups: IntSet<u16>) -> Result<(), ReadError> {
        if self.nesting_level_left == 0 {
            return Ok(());
        }
        self.nesting_level_left -= 1;
        for lookup_index in lookups.iter() {
            self.collect(lookup_index)?;
        }
        self.nesting_level_left += 1;
        Ok(())
    }

    fn add_glyphs(&mut self, glyphs: impl Iterator<Item = raw::types::GlyphId16>) {
        self.glyphs
            .extend_unsorted(glyphs.map(|gid| GlyphId::new(gid.to_u32())));
    }
}

/// Returns the indices of lookups referenced by a contextual subtable.
fn sequence_context_lookups(table: &SequenceContext) -> Result<IntSet<u16>, ReadError> {
    let mut lookups = IntSet::empty();
    match table {
        SequenceContext::Format1(table) => {
            for rule_set in table.seq_rule_sets().iter().flatten() {
                for rule in rule_set?.seq_rules().iter() {
                    let rule = rule?;
                    lookups.extend_unsorted(
                        rule.seq_lookup_records()
                            .iter()
                            .map(|rec| rec.lookup_list_index()),
                    );
                }
            }
        }
        SequenceContext::Format2(table) => {
            for rule_set in table.class_seq_rule_sets().iter().flatten() {
                for rule in rule_set?.class_seq_rules().iter() {
                    let rule = rule?;
                    lookups.extend_unsorted(
                        rule.seq_lookup_records()
                            .iter()
                            .map(|rec| rec.lookup_list_index()),
                    );
                }
            }
        }
        SequenceContext::Format3(table) => {
            lookups.extend_unsorted(
                table
                    .seq_lookup_records()
                    .iter()
                    .map(|rec| rec.lookup_list_index()),
            );
        }
    }
    Ok(lookups)
}

/// Returns the indices of lookups referenced by a chained contextual
/// subtable.
fn chained_sequence_context_lookups(
    table: &ChainedSequenceContext,
) -> Result<IntSet<u16>, ReadError> {
    let mut lookups = IntSet::empty();
    match table {
        ChainedSequenceContext::Format1(table) => {
            for rule_set in table.chained_seq_rule_sets().iter().flatten() {
                for rule in rule_set?.chained_seq_rules().iter() {
                    let rule = rule?;
                    lookups.extend_unsorted(
                        rule.seq_lookup_records()
                            .iter()
                            .map(|rec| rec.lookup_list_index()),
                    );
                }
            }
        }
        ChainedSequenceContext::Format2(table) => {
            for rule_set in table.chained_class_seq_rule_sets().iter().flatten() {
                for rule in rule_set?.chained_class_seq_rules().iter() {
                    let rule = rule?;
                    lookups.extend_unsorted(
                        rule.seq_lookup_records()
                            .iter()
                            .map(|rec| rec.lookup_list_index()),
                    );
                }
            }
        }
        ChainedSequenceContext::Format3(table) => {
            lookups.extend_unsorted(
                table
                    .seq_lookup_records()
                    .iter()
                    .map(|rec| rec.lookup_list_index()),
            );
        }
    }
    Ok(lookups)
}
