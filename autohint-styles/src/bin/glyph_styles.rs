//! Glyph Styles
//!
//! This command prints the autohinting style assigned to each glyph of a font.

use std::process::ExitCode;

use autohint_styles::{
    raw::{types::GlyphId, FontRef, TableProvider},
    CoverageOptions, GlyphStyleMap, GsubShaper, ScriptClass, StyleClass,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Prints the autohinting style assigned to each glyph of a font.",
    long_about = "Prints the autohinting style assigned to each glyph of a font.\n\n\
        Only glyphs produced by GSUB lookups are classified. Every other glyph, \
        including those only reachable through the character map, gets the \
        fallback style."
)]
struct Args {
    /// The input font file.
    #[arg(short, long)]
    font: std::path::PathBuf,

    /// Index of the font in a collection.
    #[arg(long, default_value_t = 0)]
    index: u32,

    /// Script whose default style also covers the `DFLT` OpenType script,
    /// such as `latn`.
    #[arg(long)]
    default_script: Option<String>,

    /// Style assigned to glyphs not covered by any other style, such as
    /// `hani_dflt`.
    #[arg(long)]
    fallback_style: Option<String>,

    /// Only print these glyph ids.
    #[arg(long, num_args = 1..)]
    gid: Vec<u32>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let mut options = CoverageOptions::default();
    if let Some(id) = &args.default_script {
        let script =
            ScriptClass::from_id(id).ok_or_else(|| format!("Unknown script '{id}'"))?;
        options = options.with_default_script(script);
    }
    if let Some(id) = &args.fallback_style {
        let style = StyleClass::from_id(id).ok_or_else(|| format!("Unknown style '{id}'"))?;
        options = options.with_fallback_style(style);
    }
    let data = std::fs::read(&args.font)
        .map_err(|e| format!("Unable to read {}: {e}", args.font.display()))?;
    let font = FontRef::from_index(&data, args.index)
        .map_err(|e| format!("Unable to parse font: {e}"))?;
    let glyph_count = font
        .maxp()
        .map_err(|e| format!("Unable to read maxp: {e}"))?
        .num_glyphs() as u32;
    let shaper = GsubShaper::new(&font);
    let map = GlyphStyleMap::new(glyph_count, &shaper, &options)
        .map_err(|e| format!("Unable to compute glyph styles: {e}"))?;

    println!("styles in use:");
    for (ix, style) in map.metrics_styles().enumerate() {
        println!("  {ix}: {} ({})", style.id, style.name);
    }
    println!("glyphs:");
    let gids: Vec<u32> = if args.gid.is_empty() {
        (0..glyph_count).collect()
    } else {
        args.gid.clone()
    };
    for gid in gids {
        match map
            .style(GlyphId::new(gid))
            .and_then(|style| style.style_class())
        {
            Some(style) => println!("  {gid}: {}", style.id),
            None => println!("  {gid}: (none)"),
        }
    }
    Ok(())
}
