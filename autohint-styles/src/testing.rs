//! Helpers for assembling small fonts and GSUB tables in tests.

use raw::types::Tag;

/// A table along with the child tables referenced by offsets.
///
/// Offsets are relative to the start of the parent table and children are
/// written immediately after it.
#[derive(Default)]
struct TableData {
    data: Vec<u8>,
    /// (position of offset, offset size in bytes, child)
    children: Vec<(usize, usize, TableData)>,
}

impl TableData {
    fn push_u16(&mut self, value: u16) -> &mut Self {
        self.data.extend_from_slice(&value.to_be_bytes());
        self
    }

    fn push_i16(&mut self, value: i16) -> &mut Self {
        self.data.extend_from_slice(&value.to_be_bytes());
        self
    }

    fn push_u32(&mut self, value: u32) -> &mut Self {
        self.data.extend_from_slice(&value.to_be_bytes());
        self
    }

    fn push_tag(&mut self, tag: Tag) -> &mut Self {
        self.data.extend_from_slice(&tag.to_be_bytes());
        self
    }

    fn push_offset(&mut self, child: TableData) -> &mut Self {
        self.children.push((self.data.len(), 2, child));
        self.push_u16(0)
    }

    fn push_offset32(&mut self, child: TableData) -> &mut Self {
        self.children.push((self.data.len(), 4, child));
        self.push_u32(0)
    }

    fn push_null_offset(&mut self) -> &mut Self {
        self.push_u16(0)
    }

    fn push_array(&mut self, values: &[u16]) -> &mut Self {
        for value in values {
            self.push_u16(*value);
        }
        self
    }

    fn push_lookup_records(&mut self, lookups: &[u16]) -> &mut Self {
        for lookup in lookups {
            self.push_u16(0).push_u16(*lookup);
        }
        self
    }

    fn serialize(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for (pos, size, child) in &self.children {
            let offset = out.len();
            match *size {
                2 => out[*pos..*pos + 2].copy_from_slice(&(offset as u16).to_be_bytes()),
                _ => out[*pos..*pos + 4].copy_from_slice(&(offset as u32).to_be_bytes()),
            }
            out.extend(child.serialize());
        }
        out
    }
}

/// A single lookup subtable.
pub(crate) enum SubtableSpec {
    /// Format 2 single substitution; `from` must be sorted.
    Single { from: Vec<u16>, to: Vec<u16> },
    /// Format 1 single substitution; `from` must be sorted.
    SingleDelta { from: Vec<u16>, delta: i16 },
    /// One sequence per glyph in `from`, which must be sorted.
    Multiple {
        from: Vec<u16>,
        sequences: Vec<Vec<u16>>,
    },
    Alternate { from: u16, alternates: Vec<u16> },
    Ligature {
        first: u16,
        components: Vec<u16>,
        ligature: u16,
    },
    /// Format 3 contextual substitution applying every lookup at the
    /// first position.
    ContextFormat3 { coverage: Vec<u16>, lookups: Vec<u16> },
    /// Format 1 chained context with a single rule for `first`.
    ChainContextFormat1 {
        first: u16,
        backtrack: Vec<u16>,
        lookahead: Vec<u16>,
        lookups: Vec<u16>,
    },
    /// Format 2 chained context where every glyph in `coverage` is in
    /// class 1 and a single rule matches that class.
    ChainContextFormat2 { coverage: Vec<u16>, lookups: Vec<u16> },
    /// Format 3 chained context with one input coverage and no backtrack
    /// or lookahead.
    ChainContextFormat3 { coverage: Vec<u16>, lookups: Vec<u16> },
    /// Reverse chaining substitution with a single backtrack glyph.
    ReverseChain {
        from: Vec<u16>,
        to: Vec<u16>,
        backtrack: u16,
    },
}

impl SubtableSpec {
    fn lookup_type(&self) -> u16 {
        match self {
            Self::Single { .. } | Self::SingleDelta { .. } => 1,
            Self::Multiple { .. } => 2,
            Self::Alternate { .. } => 3,
            Self::Ligature { .. } => 4,
            Self::ContextFormat3 { .. } => 5,
            Self::ChainContextFormat1 { .. }
            | Self::ChainContextFormat2 { .. }
            | Self::ChainContextFormat3 { .. } => 6,
            Self::ReverseChain { .. } => 8,
        }
    }

    fn to_table(&self) -> TableData {
        let mut table = TableData::default();
        match self {
            Self::Single { from, to } => {
                table
                    .push_u16(2)
                    .push_offset(coverage(from))
                    .push_u16(to.len() as u16)
                    .push_array(to);
            }
            Self::SingleDelta { from, delta } => {
                table
                    .push_u16(1)
                    .push_offset(coverage(from))
                    .push_i16(*delta);
            }
            Self::Multiple { from, sequences } => {
                table
                    .push_u16(1)
                    .push_offset(coverage(from))
                    .push_u16(sequences.len() as u16);
                for glyphs in sequences {
                    let mut sequence = TableData::default();
                    sequence.push_u16(glyphs.len() as u16).push_array(glyphs);
                    table.push_offset(sequence);
                }
            }
            Self::Alternate { from, alternates } => {
                let mut alt_set = TableData::default();
                alt_set
                    .push_u16(alternates.len() as u16)
                    .push_array(alternates);
                table
                    .push_u16(1)
                    .push_offset(coverage(&[*from]))
                    .push_u16(1)
                    .push_offset(alt_set);
            }
            Self::Ligature {
                first,
                components,
                ligature,
            } => {
                let mut lig = TableData::default();
                lig.push_u16(*ligature)
                    .push_u16(components.len() as u16 + 1)
                    .push_array(components);
                let mut lig_set = TableData::default();
                lig_set.push_u16(1).push_offset(lig);
                table
                    .push_u16(1)
                    .push_offset(coverage(&[*first]))
                    .push_u16(1)
                    .push_offset(lig_set);
            }
            Self::ContextFormat3 {
                coverage: glyphs,
                lookups,
            } => {
                table
                    .push_u16(3)
                    .push_u16(1)
                    .push_u16(lookups.len() as u16)
                    .push_offset(coverage(glyphs))
                    .push_lookup_records(lookups);
            }
            Self::ChainContextFormat1 {
                first,
                backtrack,
                lookahead,
                lookups,
            } => {
                let mut rule = TableData::default();
                rule.push_u16(backtrack.len() as u16)
                    .push_array(backtrack)
                    .push_u16(1)
                    .push_u16(lookahead.len() as u16)
                    .push_array(lookahead)
                    .push_u16(lookups.len() as u16)
                    .push_lookup_records(lookups);
                let mut rule_set = TableData::default();
                rule_set.push_u16(1).push_offset(rule);
                table
                    .push_u16(1)
                    .push_offset(coverage(&[*first]))
                    .push_u16(1)
                    .push_offset(rule_set);
            }
            Self::ChainContextFormat2 {
                coverage: glyphs,
                lookups,
            } => {
                let mut rule = TableData::default();
                rule.push_u16(0)
                    .push_u16(1)
                    .push_u16(0)
                    .push_u16(lookups.len() as u16)
                    .push_lookup_records(lookups);
                let mut rule_set = TableData::default();
                rule_set.push_u16(1).push_offset(rule);
                // No rules start with class 0
                table
                    .push_u16(2)
                    .push_offset(coverage(glyphs))
                    .push_offset(class_def(glyphs))
                    .push_offset(class_def(glyphs))
                    .push_offset(class_def(glyphs))
                    .push_u16(2)
                    .push_null_offset()
                    .push_offset(rule_set);
            }
            Self::ChainContextFormat3 {
                coverage: glyphs,
                lookups,
            } => {
                table
                    .push_u16(3)
                    .push_u16(0)
                    .push_u16(1)
                    .push_offset(coverage(glyphs))
                    .push_u16(0)
                    .push_u16(lookups.len() as u16)
                    .push_lookup_records(lookups);
            }
            Self::ReverseChain {
                from,
                to,
                backtrack,
            } => {
                table
                    .push_u16(1)
                    .push_offset(coverage(from))
                    .push_u16(1)
                    .push_offset(coverage(&[*backtrack]))
                    .push_u16(0)
                    .push_u16(to.len() as u16)
                    .push_array(to);
            }
        }
        table
    }
}

fn coverage(glyphs: &[u16]) -> TableData {
    let mut table = TableData::default();
    table
        .push_u16(1)
        .push_u16(glyphs.len() as u16)
        .push_array(glyphs);
    table
}

/// Format 1 class definition assigning class 1 to each of `glyphs`.
fn class_def(glyphs: &[u16]) -> TableData {
    let start = glyphs.iter().copied().min().unwrap_or_default();
    let end = glyphs.iter().copied().max().unwrap_or_default();
    let classes = (start..=end)
        .map(|gid| glyphs.contains(&gid) as u16)
        .collect::<Vec<_>>();
    let mut table = TableData::default();
    table
        .push_u16(1)
        .push_u16(start)
        .push_u16(classes.len() as u16)
        .push_array(&classes);
    table
}

fn feature(lookups: &[u16]) -> TableData {
    let mut table = TableData::default();
    table
        .push_null_offset()
        .push_u16(lookups.len() as u16)
        .push_array(lookups);
    table
}

/// Builds a GSUB table with one language system per script.
///
/// Scripts should be added in tag order.
#[derive(Default)]
pub(crate) struct GsubBuilder {
    scripts: Vec<(Tag, Option<u16>, Vec<u16>)>,
    features: Vec<(Tag, Vec<u16>)>,
    lookups: Vec<SubtableSpec>,
    /// (feature index, lookups of the alternate feature)
    feature_variations: Vec<(u16, Vec<u16>)>,
}

impl GsubBuilder {
    pub fn add_lookup(&mut self, subtable: SubtableSpec) -> u16 {
        self.lookups.push(subtable);
        self.lookups.len() as u16 - 1
    }

    pub fn add_feature(&mut self, tag: Tag, lookups: &[u16]) -> u16 {
        self.features.push((tag, lookups.to_vec()));
        self.features.len() as u16 - 1
    }

    /// Adds a script with a default language system.
    pub fn add_script(&mut self, tag: Tag, required_feature: Option<u16>, features: &[u16]) {
        self.scripts.push((tag, required_feature, features.to_vec()));
    }

    /// Adds a feature variation record, with an empty condition set, that
    /// replaces the given feature with one referencing `lookups`.
    pub fn add_feature_variation(&mut self, feature_index: u16, lookups: &[u16]) {
        self.feature_variations
            .push((feature_index, lookups.to_vec()));
    }

    pub fn build(&self) -> Vec<u8> {
        let mut script_list = TableData::default();
        script_list.push_u16(self.scripts.len() as u16);
        for (tag, required_feature, features) in &self.scripts {
            let mut lang_sys = TableData::default();
            lang_sys
                .push_null_offset()
                .push_u16(required_feature.unwrap_or(0xFFFF))
                .push_u16(features.len() as u16)
                .push_array(features);
            let mut script = TableData::default();
            script.push_offset(lang_sys).push_u16(0);
            script_list.push_tag(*tag).push_offset(script);
        }
        let mut feature_list = TableData::default();
        feature_list.push_u16(self.features.len() as u16);
        for (tag, lookups) in &self.features {
            feature_list.push_tag(*tag).push_offset(feature(lookups));
        }
        let mut lookup_list = TableData::default();
        lookup_list.push_u16(self.lookups.len() as u16);
        for subtable in &self.lookups {
            let mut lookup = TableData::default();
            lookup
                .push_u16(subtable.lookup_type())
                .push_u16(0)
                .push_u16(1)
                .push_offset(subtable.to_table());
            lookup_list.push_offset(lookup);
        }
        let mut gsub = TableData::default();
        let minor_version = if self.feature_variations.is_empty() {
            0
        } else {
            1
        };
        gsub.push_u16(1)
            .push_u16(minor_version)
            .push_offset(script_list)
            .push_offset(feature_list)
            .push_offset(lookup_list);
        if !self.feature_variations.is_empty() {
            let mut variations = TableData::default();
            variations
                .push_u16(1)
                .push_u16(0)
                .push_u32(self.feature_variations.len() as u32);
            for (feature_index, lookups) in &self.feature_variations {
                let mut condition_set = TableData::default();
                condition_set.push_u16(0);
                let mut substitution = TableData::default();
                substitution
                    .push_u16(1)
                    .push_u16(0)
                    .push_u16(1)
                    .push_u16(*feature_index)
                    .push_offset32(feature(lookups));
                variations
                    .push_offset32(condition_set)
                    .push_offset32(substitution);
            }
            gsub.push_offset32(variations);
        }
        gsub.serialize()
    }
}

/// Wraps the given tables in an OpenType font file.
///
/// Tables should be given in tag order.
pub(crate) fn build_font(tables: &[(Tag, Vec<u8>)]) -> Vec<u8> {
    let mut header = TableData::default();
    header
        .push_u32(0x00010000)
        .push_u16(tables.len() as u16)
        .push_u16(0)
        .push_u16(0)
        .push_u16(0);
    let mut offset = 12 + 16 * tables.len();
    let mut data = Vec::new();
    for (tag, table) in tables {
        header
            .push_tag(*tag)
            .push_u32(0)
            .push_u32(offset as u32)
            .push_u32(table.len() as u32);
        let padded_len = table.len().next_multiple_of(4);
        data.extend_from_slice(table);
        data.resize(data.len() + padded_len - table.len(), 0);
        offset += padded_len;
    }
    let mut font = header.serialize();
    font.extend(data);
    font
}

/// Version 0.5 maxp table.
pub(crate) fn build_maxp(num_glyphs: u16) -> Vec<u8> {
    let mut maxp = TableData::default();
    maxp.push_u32(0x00005000).push_u16(num_glyphs);
    maxp.serialize()
}
