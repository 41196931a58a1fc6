use roxmltree::Node;

use super::type_desc::TypeDescriptor;
use crate::error::RegistryError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub ty: TypeDescriptor,
    /// Semantic group tag (`group="AccumOp"`); has no influence on the generated signature.
    pub group: Option<String>,
    pub name: String,
}

impl Parameter {
    pub const TAG_NAME: &'static str = "param";

    pub fn map_from_xml(param: Node) -> Result<Self, RegistryError> {
        assert_eq!(param.tag_name().name(), Self::TAG_NAME);

        let group = param.attribute("group").map(str::to_string);
        let (ty, name) = TypeDescriptor::map_from_xml(param)?;
        Ok(Self { ty, group, name })
    }
}

/// One entry point of the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub return_type: TypeDescriptor,
    /// In call order.
    pub params: Vec<Parameter>,
}

impl Command {
    pub const TAG_NAME: &'static str = "command";

    pub fn map_from_xml(command: Node) -> Result<Self, RegistryError> {
        assert_eq!(command.tag_name().name(), Self::TAG_NAME);

        let proto = command
            .children()
            .find(|n| n.has_tag_name("proto"))
            .ok_or_else(|| RegistryError::MissingName {
                element: Self::TAG_NAME.to_string(),
            })?;
        let (return_type, name) = TypeDescriptor::map_from_xml(proto)?;

        let params = command
            .children()
            .filter(|n| n.has_tag_name(Parameter::TAG_NAME))
            .map(Parameter::map_from_xml)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            return_type,
            params,
        })
    }
}
