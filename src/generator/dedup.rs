use std::collections::HashSet;

use crate::registry::{Command, Spec};

/// Commands of every version of `family`, one per name, sorted by name.
///
/// The first declaration of a name in document order is kept, signature included. Later
/// versions are not checked for agreeing signatures.
pub fn family_commands<'s>(spec: &'s Spec, family: &'s str) -> Vec<&'s Command> {
    let mut seen = HashSet::new();
    let mut commands = Vec::new();
    for version in spec.versions_of(family) {
        for command in &version.commands {
            if seen.insert(command.name.as_str()) {
                commands.push(command);
            }
        }
    }
    commands.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
    commands
}
