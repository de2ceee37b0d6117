//! generate-resource - Scaffold a Forge Resource
//!
//! Fills the Resource template pair with the supplied namespace, macro
//! key, class name, resource display name, and supported file
//! extensions, then writes `<Class>.cpp` / `<Class>.hpp` under the
//! project root. The destination is given relative to the project root,
//! which is the parent of the tools directory the generator lives in.
//!
//! Prints the two generated file names to stdout, newline separated.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use forge_core::{emit, tokens, GeneratedPair, Paths, Substitutions, TemplatePair};

#[derive(Parser)]
#[command(name = "generate-resource")]
#[command(about = "Scaffold a Forge Resource source/header pair")]
#[command(version)]
#[command(after_help = r#"EXAMPLES:
    generate-resource Source/Demo MaterialResource Material Demo FG_DEMO .mat
    generate-resource Source/Demo TextureResource Texture Demo FG_DEMO .png .jpg .tga

OUTPUT:
    Prints the two generated file names (<Class>.cpp, <Class>.hpp) on
    stdout, newline separated. Existing files are overwritten."#)]
struct Cli {
    /// Destination directory, relative to the project root
    relative_dir: PathBuf,

    /// Resource class name; also names the generated files
    class_name: String,

    /// Resource display name (substituted as a quoted literal)
    resource_name: String,

    /// C++ namespace the class is declared in
    namespace: String,

    /// Namespace macro key (e.g. FG_DEMO)
    namespace_key: String,

    /// Supported file extensions, in order (e.g. .png .jpg)
    #[arg(required = true)]
    extensions: Vec<String>,
}

fn main() -> Result<()> {
    // Logging goes to stderr; stdout carries only the file names.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = Paths::discover()?;
    let dest = paths.project_root.join(&cli.relative_dir);
    tracing::debug!(dest = %dest.display(), class = %cli.class_name, "generating resource pair");

    let generated = generate(
        &paths.templates,
        &dest,
        &cli.class_name,
        &cli.resource_name,
        &cli.namespace,
        &cli.namespace_key,
        &cli.extensions,
    )?;

    println!("{}", generated.file_names());

    Ok(())
}

/// Fill the Resource template pair and write it into `dest`.
fn generate(
    templates: &Path,
    dest: &Path,
    class_name: &str,
    resource_name: &str,
    namespace: &str,
    namespace_key: &str,
    extensions: &[String],
) -> Result<GeneratedPair> {
    let pair = TemplatePair::load(&templates.join("resource"), "Resource")?;

    // The macro key goes first so %%NAMESPACE%% never sees it.
    let mut subs = Substitutions::new();
    subs.push("%%NAMESPACE_KEY%%", namespace_key);
    subs.push("%%NAMESPACE%%", namespace);
    subs.push("%%CLASS_NAME%%", class_name);
    subs.push("%%RESOURCE_NAME%%", &tokens::quoted(resource_name));
    subs.push("%%SUPPORTED_EXT%%", &tokens::quoted_list(extensions));

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
