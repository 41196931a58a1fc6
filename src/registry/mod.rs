//! In-memory model of the API registry: versions with their constants and commands.

pub mod command;
pub mod lexer;
pub mod type_desc;

use std::collections::{HashMap, HashSet};

use roxmltree::{Document, Node};

pub use command::{Command, Parameter};
pub use type_desc::{BaseType, Modifier, TypeDescriptor};

use crate::error::RegistryError;

/// Which `profile="..."` blocks of a feature apply.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Profile {
    #[default]
    Core,
    Compatibility,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Core => "core",
            Profile::Compatibility => "compatibility",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegistryOptions {
    pub profile: Profile,
    /// Only features of these API families become versions; empty means all of them.
    pub families: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: String,
    /// Decimal or `0x`-prefixed literal, as written in the registry.
    pub value: String,
}

impl EnumConstant {
    pub const TAG_NAME: &'static str = "enum";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Version {
    pub api_family: String,
    pub name: String,
    pub number: Option<String>,
    pub enums: Vec<EnumConstant>,
    pub commands: Vec<Command>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Spec {
    pub versions: Vec<Version>,
    pub header_comment: String,
}

/// An `<enum>` entry together with the API it is restricted to, if any.
struct EnumEntry<'a> {
    api: Option<&'a str>,
    value: &'a str,
}

/// Everything one family has required so far, in first-required order.
#[derive(Default)]
struct FamilyState<'a> {
    enums: Vec<&'a str>,
    commands: Vec<&'a str>,
}

impl<'a> FamilyState<'a> {
    fn require(list: &mut Vec<&'a str>, name: &'a str) {
        if !list.contains(&name) {
            list.push(name);
        }
    }

    fn remove(list: &mut Vec<&'a str>, names: &HashSet<&'a str>) {
        list.retain(|name| !names.contains(name));
    }
}

impl Spec {
    pub fn parse(text: &str, options: &RegistryOptions) -> Result<Self, RegistryError> {
        let document = Document::parse(text)?;
        Self::from_xml(&document, options)
    }

    pub fn from_xml(document: &Document, options: &RegistryOptions) -> Result<Self, RegistryError> {
        let registry = document.root_element();

        let header_comment = registry
            .children()
            .find(|n| n.has_tag_name("comment"))
            .and_then(|n| n.text())
            .unwrap_or_default()
            .to_string();

        let enums = collect_enums(registry)?;
        let mut commands = CommandTable::collect(registry)?;
        log::debug!(
            "registry holds {} enum names and {} commands",
            enums.len(),
            commands.len()
        );

        let mut families: HashMap<&str, FamilyState> = HashMap::new();
        let mut versions = Vec::new();
        for feature in registry.children().filter(|n| n.has_tag_name("feature")) {
            let api = required_attribute(feature, "api")?;
            let name = required_attribute(feature, "name")?;
            if !options.families.is_empty() && !options.families.iter().any(|f| f == api) {
                continue;
            }

            let state = families.entry(api).or_default();
            apply_feature(state, feature, api, options.profile);

            let version = Version {
                api_family: api.to_string(),
                name: name.to_string(),
                number: feature.attribute("number").map(str::to_string),
                enums: resolve_enums(&state.enums, &enums, api, name),
                commands: resolve_commands(&state.commands, &mut commands, name)?,
            };
            log::debug!(
                "{} ({}): {} enums, {} commands",
                version.name,
                version.api_family,
                version.enums.len(),
                version.commands.len()
            );
            versions.push(version);
        }

        Ok(Spec {
            versions,
            header_comment,
        })
    }

    /// API family names in order of first appearance.
    pub fn families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = Vec::new();
        for version in &self.versions {
            if !families.contains(&version.api_family.as_str()) {
                families.push(&version.api_family);
            }
        }
        families
    }

    pub fn versions_of<'s>(&'s self, family: &'s str) -> impl Iterator<Item = &'s Version> + 's {
        self.versions
            .iter()
            .filter(move |version| version.api_family == family)
    }
}

fn required_attribute<'a>(node: Node<'a, '_>, attribute: &'static str) -> Result<&'a str, RegistryError> {
    node.attribute(attribute)
        .ok_or_else(|| RegistryError::MissingAttribute {
            element: node.tag_name().name().to_string(),
            attribute,
        })
}

fn collect_enums<'a>(
    registry: Node<'a, '_>,
) -> Result<HashMap<&'a str, Vec<EnumEntry<'a>>>, RegistryError> {
    let mut enums: HashMap<&str, Vec<EnumEntry>> = HashMap::new();
    for group in registry.children().filter(|n| n.has_tag_name("enums")) {
        for node in group
            .children()
            .filter(|n| n.has_tag_name(EnumConstant::TAG_NAME))
        {
            let name = required_attribute(node, "name")?;
            let value = required_attribute(node, "value")?;
            enums.entry(name).or_default().push(EnumEntry {
                api: node.attribute("api"),
                value,
            });
        }
    }
    Ok(enums)
}

fn command_name<'a>(command: Node<'a, '_>) -> Result<&'a str, RegistryError> {
    command
        .children()
        .find(|n| n.has_tag_name("proto"))
        .and_then(|proto| proto.children().find(|n| n.has_tag_name("name")))
        .and_then(|name| name.text())
        .map(str::trim)
        .ok_or_else(|| RegistryError::MissingName {
            element: Command::TAG_NAME.to_string(),
        })
}

/// Every `<command>` of the registry by name. A declaration is only parsed once a feature
/// requires it.
struct CommandTable<'a, 'input> {
    nodes: HashMap<&'a str, Node<'a, 'input>>,
    parsed: HashMap<&'a str, Command>,
}

impl<'a, 'input> CommandTable<'a, 'input> {
    fn collect(registry: Node<'a, 'input>) -> Result<Self, RegistryError> {
        let mut nodes = HashMap::new();
        for group in registry.children().filter(|n| n.has_tag_name("commands")) {
            for node in group
                .children()
                .filter(|n| n.has_tag_name(Command::TAG_NAME))
            {
                nodes.insert(command_name(node)?, node);
            }
        }
        Ok(Self {
            nodes,
            parsed: HashMap::new(),
        })
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn get(&mut self, name: &'a str) -> Result<Option<&Command>, RegistryError> {
        let node = match self.nodes.get(name) {
            Some(node) => *node,
            None => return Ok(None),
        };
        if !self.parsed.contains_key(name) {
            let command = Command::map_from_xml(node)?;
            self.parsed.insert(name, command);
        }
        Ok(self.parsed.get(name))
    }
}

/// Whether a `<require>`/`<remove>` block applies to `api` under `profile`.
fn block_applies(block: Node, api: &str, profile: Profile) -> bool {
    let profile_matches = block
        .attribute("profile")
        .map_or(true, |p| p == profile.as_str());
    let api_matches = block.attribute("api").map_or(true, |a| a == api);
    profile_matches && api_matches
}

fn apply_feature<'a>(state: &mut FamilyState<'a>, feature: Node<'a, '_>, api: &str, profile: Profile) {
    for block in feature.children().filter(|n| n.is_element()) {
        if !block_applies(block, api, profile) {
            continue;
        }
        let references = |tag: &str| {
            block
                .children()
                .filter(|n| n.has_tag_name(tag))
                .filter_map(|n| n.attribute("name"))
                .collect::<Vec<&'a str>>()
        };
        let enums = references("enum");
        let commands = references("command");

        match block.tag_name().name() {
            "require" => {
                for name in enums {
                    FamilyState::require(&mut state.enums, name);
                }
                for name in commands {
                    FamilyState::require(&mut state.commands, name);
                }
            }
            "remove" => {
                FamilyState::remove(&mut state.enums, &enums.into_iter().collect());
                FamilyState::remove(&mut state.commands, &commands.into_iter().collect());
            }
            _ => {}
        }
    }
}

fn resolve_enums(
    names: &[&str],
    enums: &HashMap<&str, Vec<EnumEntry>>,
    api: &str,
    version: &str,
) -> Vec<EnumConstant> {
    let mut resolved = Vec::with_capacity(names.len());
    for &name in names {
        let entries = enums.get(name).map(Vec::as_slice).unwrap_or_default();
        let entry = entries
            .iter()
            .find(|e| e.api == Some(api))
            .or_else(|| entries.iter().find(|e| e.api.is_none()));
        match entry {
            Some(entry) => resolved.push(EnumConstant {
                name: name.to_string(),
                value: entry.value.to_string(),
            }),
            None => log::warn!("{version}: skipping unknown enum {name}"),
        }
    }
    resolved
}

fn resolve_commands<'a>(
    names: &[&'a str],
    commands: &mut CommandTable<'a, '_>,
    version: &str,
) -> Result<Vec<Command>, RegistryError> {
    let mut resolved = Vec::with_capacity(names.len());
    for &name in names {
        match commands.get(name)? {
            Some(command) => resolved.push(command.clone()),
            None => log::warn!("{version}: skipping unknown command {name}"),
        }
    }
    Ok(resolved)
}
