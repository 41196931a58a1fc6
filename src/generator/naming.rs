use check_keyword::CheckKeyword;
use heck::{ToPascalCase, ToSnakeCase};
use proc_macro2::Span;
use syn::Ident;

/// Turns a registry name into a Rust identifier, escaping keywords.
pub fn ident(name: &str) -> Ident {
    if ["crate", "self", "super", "Self"].contains(&name) {
        // These are keywords that are not allowed as raw identifiers
        Ident::new(&format!("{}_", name), Span::call_site())
    } else if name.is_keyword() {
        Ident::new_raw(name, Span::call_site())
    } else {
        Ident::new(name, Span::call_site())
    }
}

/// `GL_VERSION_3_3` -> `GlVersion33`
pub fn version_type(version: &str) -> Ident {
    ident(&version.to_pascal_case())
}

/// `GL_VERSION_3_3` -> `gl_version_3_3`
pub fn version_module(version: &str) -> String {
    version.to_snake_case()
}

/// `gles2` -> `Gles2Interop`
pub fn interop_type(family: &str) -> Ident {
    ident(&format!("{}Interop", family.to_pascal_case()))
}

/// `gles2` -> `gles2_interop`
pub fn interop_module(family: &str) -> String {
    format!("{}_interop", family.to_snake_case())
}

pub fn file_name(module: &str) -> String {
    format!("{module}.rs")
}
