pub mod cli;
pub mod error;
pub mod generator;
pub mod registry;
pub mod source;

use roxmltree::{Document, ParsingOptions};

use cli::Cli;
use registry::Spec;

/// Reads the registry named on the command line and writes the bindings for it.
pub fn run(cli: &Cli) -> error::Result<()> {
    let text = source::load(&cli.input)?;
    let options = ParsingOptions {
        allow_dtd: cli.allow_dtd,
        ..Default::default()
    };
    let document =
        Document::parse_with_options(&text, options).map_err(error::RegistryError::from)?;
    let spec = Spec::from_xml(&document, &cli.registry_options())?;
    log::info!(
        "{} versions across {} API families",
        spec.versions.len(),
        spec.families().len()
    );

    let artifacts = generator::generate(&spec, &cli.generator_options())?;
    let written = source::write_artifacts(&cli.out_dir, &artifacts)?;
    log::info!(
        "{written} of {} files written to {}",
        artifacts.len(),
        cli.out_dir.display()
    );
    Ok(())
}
