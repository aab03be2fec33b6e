//! Style coverage resolution.
//!
//! Based on <https://gitlab.freedesktop.org/freetype/freetype/-/blob/57617782464411201ce7bbc93b086c1b4d7d84a5/src/autofit/hbshim.c#L140>

use crate::{
    error::CoverageError,
    options::CoverageOptions,
    shape::{FeatureFilter, ScriptTagSlots, ShapingProvider, DEFAULT_SCRIPT_TAG},
    style::{GlyphStyle, StyleClass},
};
use raw::{collections::IntSet, types::GlyphId};

/// Selects whether the `DFLT` OpenType script is consulted when
/// resolving a style.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum CoverageKind {
    /// Only the OpenType tags of the style's own script.
    #[default]
    Script,
    /// The style's script tags along with `DFLT`.
    ///
    /// Only applies to styles with default coverage.
    Default,
}

impl CoverageKind {
    /// Returns [`CoverageKind::Default`] for the default coverage style of
    /// the configured default script and [`CoverageKind::Script`] for every
    /// other style.
    pub fn for_style(style: &StyleClass, options: &CoverageOptions) -> Self {
        if style.script == options.default_script && style.coverage.is_default() {
            Self::Default
        } else {
            Self::Script
        }
    }
}

/// Assigns the given style to every unassigned glyph that is produced by
/// a GSUB lookup reachable from the style's script and features.
///
/// Glyphs that already have a style are never modified so the order in
/// which styles are resolved determines precedence.
///
/// Returns the number of newly assigned glyphs. On error, `styles` is left
/// unchanged.
pub fn compute_coverage<P: ShapingProvider + ?Sized>(
    provider: &P,
    style: &StyleClass,
    kind: CoverageKind,
    styles: &mut [GlyphStyle],
) -> Result<usize, CoverageError> {
    if !style.is_known() {
        return Err(CoverageError::InvalidArgument("unknown style class"));
    }
    if styles.is_empty() {
        return Err(CoverageError::InvalidArgument("empty glyph style table"));
    }
    if provider
        .glyph_count()
        .is_some_and(|count| count as usize != styles.len())
    {
        return Err(CoverageError::InvalidArgument(
            "glyph style table does not match glyph count",
        ));
    }
    let features = FeatureFilter::from(style.coverage.feature_tags());
    let (primary, secondary) = provider.script_to_tags(style.script.tag);
    let mut scripts = ScriptTagSlots::new(primary, secondary);
    fixup_script_tags(
        &mut scripts,
        kind == CoverageKind::Default && style.coverage.is_default(),
    );
    let mut lookups = IntSet::empty();
    provider.collect_lookups(&scripts, features, &mut lookups)?;
    let mut glyphs = IntSet::empty();
    for lookup_index in lookups.iter() {
        provider.collect_glyphs(lookup_index, &mut glyphs)?;
    }
    if log::log_enabled!(log::Level::Trace) {
        trace_coverage(style, &lookups, &glyphs, styles);
    }
    let mut count = 0;
    for gid in glyphs.iter() {
        // Lookups may produce glyph ids beyond the end of the font
        let Some(glyph_style) = styles.get_mut(gid.to_u32() as usize) else {
            continue;
        };
        if glyph_style.maybe_assign(style) {
            count += 1;
        }
    }
    Ok(count)
}

/// Adjusts the script tags returned by the shaping provider.
///
/// The mapping usually returns `DFLT` as the secondary tag. That is
/// removed for all styles except the default coverage of the default
/// script, which instead makes sure `DFLT` appears in some slot.
pub fn fixup_script_tags(scripts: &mut ScriptTagSlots, is_default_script: bool) {
    let [primary, secondary, tertiary] = &mut scripts.0;
    if is_default_script {
        if primary.is_none() {
            *primary = Some(DEFAULT_SCRIPT_TAG);
        } else if secondary.is_none() {
            *secondary = Some(DEFAULT_SCRIPT_TAG);
        } else if *secondary != Some(DEFAULT_SCRIPT_TAG) {
            *tertiary = Some(DEFAULT_SCRIPT_TAG);
        }
    } else if *secondary == Some(DEFAULT_SCRIPT_TAG) {
        *secondary = None;
    }
}

fn trace_coverage(
    style: &StyleClass,
    lookups: &IntSet<u16>,
    glyphs: &IntSet<GlyphId>,
    styles: &[GlyphStyle],
) {
    let lookup_list = if lookups.is_empty() {
        " (none)".to_string()
    } else {
        lookups.iter().map(|ix| format!(" {ix}")).collect()
    };
    log::trace!("lookups (style `{}`):{lookup_list}", style.id);
    let glyph_list = if glyphs.is_empty() {
        " (none)".to_string()
    } else {
        glyphs
            .iter()
            .map(|gid| {
                let gid = gid.to_u32();
                let assigned = styles
                    .get(gid as usize)
                    .is_some_and(|style| !style.is_unassigned());
                format!(" {gid}{}", if assigned { "*" } else { "" })
            })
            .collect()
    };
    log::trace!("glyphs (`*` means already assigned):{glyph_list}");
}
