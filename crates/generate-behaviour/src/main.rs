//! generate-behaviour - Scaffold a Forge Behaviour component
//!
//! Fills the Behaviour template pair with the supplied namespace, class
//! name, and display name, then writes `<Class>.cpp` / `<Class>.hpp`
//! into the destination directory. The two generated file names are
//! printed to stdout for the caller (build tool or editor integration)
//! to capture; everything else goes to stderr.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use forge_core::{emit, paths, tokens, GeneratedPair, Paths, Substitutions, TemplatePair};

#[derive(Parser)]
#[command(name = "generate-behaviour")]
#[command(about = "Scaffold a Forge Behaviour component source/header pair")]
#[command(version)]
#[command(after_help = r#"EXAMPLES:
    generate-behaviour Source/Demo Gun "Weapons/Gun" Demo
    generate-behaviour /abs/path/Source/Demo PinballHandle "Pinball/Handle" Demo

OUTPUT:
    Prints the two generated file names (<Class>.cpp, <Class>.hpp) on
    stdout, newline separated. Existing files are overwritten."#)]
struct Cli {
    /// Destination directory (absolute, or relative to the current directory)
    dir: PathBuf,

    /// Behaviour class name; also names the generated files
    class_name: String,

    /// Human-readable display name shown in the editor
    display_name: String,

    /// C++ namespace the class is declared in
    namespace: String,

    /// Extra trailing arguments are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _extra: Vec<String>,
}

fn main() -> Result<()> {
    // Logging goes to stderr; stdout carries only the file names.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = Paths::discover()?;
    let dest = paths::absolute(&cli.dir)?;
    tracing::debug!(dest = %dest.display(), class = %cli.class_name, "generating behaviour pair");

    let generated = generate(
        &paths.templates,
        &dest,
        &cli.class_name,
        &cli.display_name,
        &cli.namespace,
    )?;

    println!("{}", generated.file_names());

    Ok(())
}

/// Fill the Behaviour template pair and write it into `dest`.
fn generate(
    templates: &Path,
    dest: &Path,
    class_name: &str,
    display_name: &str,
    namespace: &str,
) -> Result<GeneratedPair> {
    let pair = TemplatePair::load(&templates.join("behaviour"), "Behaviour")?;

    let mut subs = Substitutions::new();
    subs.push("%%NAMESPACE%%", namespace);
    subs.push("%%CLASS_NAME%%", class_name);
    subs.push("%%DISPLAY_NAME%%", display_name);

    let source = subs.apply(&pair.source);
    let header = subs.apply(&pair.header);

    // Footer symbols land in the header only.
    let mut footers = Substitutions::new();
    footers.push("%%FILE_GENERATED%%", &tokens::file_footer(class_name));
    footers.push(
        "%%CLASS_FOOTER_GENERATED%%",
        &tokens::class_footer(namespace, class_name),
    );
    let header = footers.apply(&header);

    emit(dest, class_name, &source, &header)
}
