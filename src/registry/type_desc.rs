use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use roxmltree::Node;

use super::lexer::{self, DeclPart, Token};
use crate::error::RegistryError;

/// The base type of a declaration, with the qualifiers and pointers removed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BaseType {
    Boolean,
    UnsignedInt32Like,
    SignedInt32Like,
    Float32,
    Float64,
    UInt8,
    Int8,
    UInt16,
    Int16,
    UInt64,
    Int64,
    Char,
    /// Pointers, sync objects, callbacks and pointer sized integers.
    AddressSized,
    Void,
    /// A keyword missing from the base type table; keeps the text as written.
    Unrecognized(String),
}

/// The qualifier/pointer shape wrapped around a [`BaseType`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `T`
    None,
    /// `T *`
    PointerTo,
    /// `const T *` and `T *const*`
    PointerToConst,
    /// `const T *const*`
    PointerToConstPointerToConst,
    /// `T **`
    PointerToPointer,
    /// `const T **`
    PointerToPointerToConst,
}

impl Modifier {
    pub fn is_pointer(self) -> bool {
        self != Modifier::None
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub base: BaseType,
    pub modifier: Modifier,
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.base)?;
        match self.modifier {
            Modifier::None => Ok(()),
            modifier => write!(f, " ({modifier:?})"),
        }
    }
}

lazy_static! {
    /// Base type keywords, after the `GL` prefix has been stripped from typed leaves.
    static ref BASE_TYPES: HashMap<&'static str, BaseType> = {
        use BaseType::*;
        let mut map = HashMap::new();
        map.insert("boolean", Boolean);
        for keyword in ["enum", "uint", "bitfield", "handleARB"] {
            map.insert(keyword, UnsignedInt32Like);
        }
        for keyword in ["int", "sizei", "fixed", "clampx"] {
            map.insert(keyword, SignedInt32Like);
        }
        for keyword in [
            "intptr",
            "sizeiptr",
            "intptrARB",
            "sizeiptrARB",
            "sync",
            "DEBUGPROC",
            "DEBUGPROCARB",
            "DEBUGPROCKHR",
            "DEBUGPROCAMD",
            "VULKANPROCNV",
            "eglImageOES",
            "eglClientBufferEXT",
            "vdpauSurfaceNV",
        ] {
            map.insert(keyword, AddressSized);
        }
        map.insert("float", Float32);
        map.insert("clampf", Float32);
        map.insert("double", Float64);
        map.insert("clampd", Float64);
        map.insert("ubyte", UInt8);
        map.insert("byte", Int8);
        map.insert("ushort", UInt16);
        map.insert("half", UInt16);
        map.insert("halfNV", UInt16);
        map.insert("short", Int16);
        map.insert("uint64", UInt64);
        map.insert("uint64EXT", UInt64);
        map.insert("int64", Int64);
        map.insert("int64EXT", Int64);
        map.insert("char", Char);
        map.insert("charARB", Char);
        map.insert("void", Void);
        map
    };
}

impl TypeDescriptor {
    pub fn new(base: BaseType, modifier: Modifier) -> Self {
        Self { base, modifier }
    }

    pub fn is_void(&self) -> bool {
        self.base == BaseType::Void && self.modifier == Modifier::None
    }

    /// Classifies a token stream against the closed declarator grammar.
    ///
    /// `name` is only used to label the error.
    pub fn from_tokens(tokens: &[Token], name: &str) -> Result<Self, RegistryError> {
        let unsupported = || RegistryError::UnsupportedDeclarator {
            name: name.to_string(),
            text: lexer::render(tokens),
        };

        let (leading_const, rest) = match tokens.split_first() {
            Some((Token::Const, rest)) => (true, rest),
            _ => (false, tokens),
        };
        let base_len = rest
            .iter()
            .take_while(|t| matches!(t, Token::Word { .. }))
            .count();
        if base_len == 0 {
            return Err(unsupported());
        }
        let (words, suffix) = rest.split_at(base_len);

        use Token::{Const, Star};
        let modifier = match (leading_const, suffix) {
            (false, []) => Modifier::None,
            (false, [Star]) => Modifier::PointerTo,
            (true, [Star]) | (false, [Star, Const, Star]) => Modifier::PointerToConst,
            (true, [Star, Const, Star]) => Modifier::PointerToConstPointerToConst,
            (false, [Star, Star]) => Modifier::PointerToPointer,
            (true, [Star, Star]) => Modifier::PointerToPointerToConst,
            _ => return Err(unsupported()),
        };

        let (mut keyword, mut raw) = (Vec::new(), Vec::new());
        for word in words {
            if let Token::Word { keyword: k, raw: r } = word {
                keyword.push(k.as_str());
                raw.push(r.as_str());
            }
        }
        let base = classify_base(&keyword.join(" "), &raw.join(" "), modifier);
        Ok(Self { base, modifier })
    }

    /// Parses the children of a `<proto>` or `<param>` element.
    ///
    /// Returns the type and the text of the `<name>` leaf.
    pub fn map_from_xml(declaration: Node) -> Result<(Self, String), RegistryError> {
        let mut name = None;
        let mut parts = Vec::new();
        for child in declaration.children() {
            if child.is_text() {
                parts.push(DeclPart::Text(child.text().unwrap_or_default()));
            } else if child.has_tag_name("name") {
                if name.is_none() {
                    name = Some(child.text().unwrap_or_default().trim().to_string());
                }
            } else if child.is_element() {
                parts.push(DeclPart::Leaf(child.text().unwrap_or_default()));
            }
        }

        let name = name.ok_or_else(|| RegistryError::MissingName {
            element: declaration.tag_name().name().to_string(),
        })?;
        let tokens = lexer::tokenize(&parts);
        let ty = Self::from_tokens(&tokens, &name)?;
        Ok((ty, name))
    }
}

fn classify_base(keyword: &str, raw: &str, modifier: Modifier) -> BaseType {
    match BASE_TYPES.get(keyword) {
        Some(BaseType::Void) if modifier.is_pointer() => BaseType::AddressSized,
        Some(base) => base.clone(),
        None => BaseType::Unrecognized(raw.to_string()),
    }
}
