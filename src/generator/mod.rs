mod dedup;
mod interop;
mod naming;
mod type_map;
mod version;

use syn::{parse_quote, Attribute, Item};

use crate::error::GenerateError;
use crate::registry::Spec;

pub use dedup::family_commands;
pub use type_map::{rust_type, IntWidth};

/// Where function pointer storage lives.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Every version module declares its own private table.
    Isolated,
    /// One table per family, deduplicated by command name, referenced by every version.
    #[default]
    Shared,
}

/// Whether the generated loaders validate what the resolver returns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorChecks {
    #[default]
    Checked,
    Unchecked,
}

#[derive(Clone, Debug, Default)]
pub struct GeneratorOptions {
    pub mode: Mode,
    pub checks: ErrorChecks,
    /// Adds the generation time to every file header. Makes the output differ between runs.
    pub timestamp: bool,
}

/// One generated source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
}

struct FileHeader {
    lines: Vec<String>,
}

impl FileHeader {
    fn new(spec: &Spec, options: &GeneratorOptions) -> Self {
        let mut lines = vec![concat!(
            "Generated by ",
            env!("CARGO_PKG_NAME"),
            " ",
            env!("CARGO_PKG_VERSION")
        )
        .to_string()];
        if options.timestamp {
            lines.push(format!(
                "Generated on {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        if !spec.header_comment.trim().is_empty() {
            lines.push(String::new());
            lines.push("Original copyright from the registry:".to_string());
            lines.extend(spec.header_comment.trim().lines().map(|l| l.trim_end().to_string()));
        }
        Self { lines }
    }

    fn attrs(&self) -> Vec<Attribute> {
        let mut attrs: Vec<Attribute> = self
            .lines
            .iter()
            .map(|line| {
                let line = if line.is_empty() {
                    String::new()
                } else {
                    format!(" {line}")
                };
                parse_quote!(#![doc = #line])
            })
            .collect();
        attrs.push(parse_quote!(#![allow(
            dead_code,
            non_snake_case,
            non_upper_case_globals,
            unused_imports,
            unused_mut,
            clippy::missing_safety_doc,
            clippy::too_many_arguments
        )]));
        attrs
    }

    fn artifact(&self, module: &str, items: Vec<Item>) -> Artifact {
        let file = syn::File {
            shebang: None,
            attrs: self.attrs(),
            items,
        };
        Artifact {
            file_name: naming::file_name(module),
            contents: prettyplease::unparse(&file),
        }
    }
}

/// Produces every artifact for `spec`: one file per version, one interop file per family in
/// shared mode, and a `mod.rs` tying them together.
pub fn generate(spec: &Spec, options: &GeneratorOptions) -> Result<Vec<Artifact>, GenerateError> {
    let header = FileHeader::new(spec, options);
    let mut artifacts = Vec::new();
    let mut modules = Vec::new();

    if options.mode == Mode::Shared {
        for family in spec.families() {
            let commands = dedup::family_commands(spec, family);
            log::debug!(
                "{family}: {} distinct commands in the shared table",
                commands.len()
            );
            let module = naming::interop_module(family);
            let table = naming::interop_type(family);
            let items = interop::scope_items(&table, &commands, options.checks);
            artifacts.push(header.artifact(&module, items));
            modules.push(module);
        }
    }

    for version in &spec.versions {
        let storage = match options.mode {
            Mode::Isolated => version::Storage::Private,
            Mode::Shared => version::Storage::Family {
                module: naming::ident(&naming::interop_module(&version.api_family)),
                table: naming::interop_type(&version.api_family),
            },
        };
        let module = naming::version_module(&version.name);
        log::debug!("emitting {} as {module}", version.name);
        let items = version::version_items(version, &storage, options.checks)?;
        artifacts.push(header.artifact(&module, items));
        modules.push(module);
    }

    let mods = modules.iter().map(|module| -> Item {
        let module = naming::ident(module);
        parse_quote!(pub mod #module;)
    });
    artifacts.push(header.artifact("mod", mods.collect()));

    Ok(artifacts)
}
