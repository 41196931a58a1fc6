use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::generator::{ErrorChecks, GeneratorOptions, Mode};
use crate::registry::{Profile, RegistryOptions};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ProfileArg {
    Core,
    Compatibility,
}

impl From<ProfileArg> for Profile {
    fn from(profile: ProfileArg) -> Self {
        match profile {
            ProfileArg::Core => Profile::Core,
            ProfileArg::Compatibility => Profile::Compatibility,
        }
    }
}

#[derive(Parser)]
#[clap(version, about)]
pub struct Cli {
    #[clap(value_parser, help = "The registry file or URL")]
    pub input: String,

    #[clap(long, short, default_value = ".", help = "Directory the generated files are written to")]
    pub out_dir: PathBuf,

    #[clap(long, help = "Give every version its own function pointer table")]
    pub isolated: bool,

    #[clap(long, help = "Emit loaders that store whatever the resolver returns")]
    pub no_error_check: bool,

    #[clap(long, default_value = "core", value_enum)]
    pub profile: ProfileArg,

    #[clap(long = "api", help = "Only generate this API family (repeatable)")]
    pub apis: Vec<String>,

    #[clap(long, help = "Allow a XML Document Type Definition (DTD) to occur")]
    pub allow_dtd: bool,

    #[clap(long, help = "Record the generation time in every file header")]
    pub timestamp: bool,
}

impl Cli {
    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            profile: self.profile.into(),
            families: self.apis.clone(),
        }
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            mode: if self.isolated {
                Mode::Isolated
            } else {
                Mode::Shared
            },
            checks: if self.no_error_check {
                ErrorChecks::Unchecked
            } else {
                ErrorChecks::Checked
            },
            timestamp: self.timestamp,
        }
    }
}
