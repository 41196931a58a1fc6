//! Per-version module: constants, the binding struct with its forwarding wrappers, and loaders.

use proc_macro2::Span;
use syn::{parse_quote, FnArg, Ident, Item, ItemFn, LitStr, Type};

use super::type_map::{self, IntWidth};
use super::{interop, naming, ErrorChecks};
use crate::error::GenerateError;
use crate::registry::{Command, EnumConstant, TypeDescriptor, Version};

/// Where a version finds its function pointer storage.
pub enum Storage {
    /// A private table declared inside the version module.
    Private,
    /// The table shared by the whole family, declared in a sibling module.
    Family { module: Ident, table: Ident },
}

fn parse_type(ty: &TypeDescriptor, context: &str) -> Result<Type, GenerateError> {
    let text = type_map::rust_type(ty);
    syn::parse_str(&text).map_err(|source| GenerateError::InvalidType {
        text: text.into_owned(),
        context: context.to_string(),
        source,
    })
}

fn constant_item(constant: &EnumConstant) -> Result<Item, GenerateError> {
    let name = naming::ident(&constant.name);
    let ty = naming::ident(IntWidth::classify(&constant.value).rust_type());
    let value: syn::Expr =
        syn::parse_str(&constant.value).map_err(|source| GenerateError::InvalidLiteral {
            name: constant.name.clone(),
            value: constant.value.clone(),
            source,
        })?;
    Ok(parse_quote!(pub const #name: #ty = #value;))
}

/// The forwarding wrapper: transmute the slot to the command's signature and call it.
fn wrapper_fn(command: &Command) -> Result<ItemFn, GenerateError> {
    let name = naming::ident(&command.name);
    let mut params: Vec<FnArg> = Vec::with_capacity(command.params.len());
    let mut arg_types = Vec::with_capacity(command.params.len());
    let mut args = Vec::with_capacity(command.params.len());
    for param in &command.params {
        let ident = naming::ident(&param.name);
        let ty = parse_type(&param.ty, &format!("{}({})", command.name, param.name))?;
        params.push(parse_quote!(#ident: #ty));
        arg_types.push(ty);
        args.push(ident);
    }

    let output: syn::ReturnType = if command.return_type.is_void() {
        syn::ReturnType::Default
    } else {
        let ret = parse_type(&command.return_type, &command.name)?;
        parse_quote!(-> #ret)
    };
    let fn_type: Type = parse_quote!(unsafe extern "system" fn(#(#arg_types),*) #output);

    Ok(parse_quote! {
        #[inline]
        pub unsafe fn #name(&self, #(#params),*) #output {
            (mem::transmute::<*const c_void, #fn_type>(self.interop.loaded(interop::slots::#name)))(#(#args),*)
        }
    })
}

fn loader_fns(checks: ErrorChecks) -> Vec<ItemFn> {
    match checks {
        ErrorChecks::Checked => vec![
            parse_quote! {
                /// Resolves every command of this version, in declaration order.
                pub fn load_all<F>(&self, mut resolver: F) -> Result<(), LoadError>
                where
                    F: FnMut(&str) -> Option<*const c_void>,
                {
                    for (name, slot) in COMMAND_SLOTS {
                        let address = interop::resolve_bulk(name, &mut resolver)?;
                        self.interop.store(slot, address);
                    }
                    Ok(())
                }
            },
            parse_quote! {
                /// Re-resolves a single command by name and overwrites its slot.
                pub fn load_one<F>(&self, name: &str, mut resolver: F) -> Result<(), LoadError>
                where
                    F: FnMut(&str) -> Option<*const c_void>,
                {
                    let slot = self
                        .interop
                        .index_of(name)
                        .ok_or_else(|| LoadError::UnknownCommand(name.to_string()))?;
                    let address = interop::resolve_single(name, &mut resolver)?;
                    self.interop.store(slot, address);
                    Ok(())
                }
            },
        ],
        ErrorChecks::Unchecked => vec![
            parse_quote! {
                /// Resolves every command of this version, in declaration order.
                pub fn load_all<F>(&self, mut resolver: F)
                where
                    F: FnMut(&str) -> Option<*const c_void>,
                {
                    for (name, slot) in COMMAND_SLOTS {
                        self.interop
                            .store(slot, interop::resolve_unchecked(name, &mut resolver));
                    }
                }
            },
            parse_quote! {
                /// Re-resolves a single command by name and overwrites its slot.
                pub fn load_one<F>(&self, name: &str, mut resolver: F)
                where
                    F: FnMut(&str) -> Option<*const c_void>,
                {
                    if let Some(slot) = self.interop.index_of(name) {
                        self.interop
                            .store(slot, interop::resolve_unchecked(name, &mut resolver));
                    }
                }
            },
        ],
    }
}

/// Builds the items of one version module.
pub fn version_items(
    version: &Version,
    storage: &Storage,
    checks: ErrorChecks,
) -> Result<Vec<Item>, GenerateError> {
    let mut items: Vec<Item> = vec![
        parse_quote!(
            use std::ffi::c_void;
        ),
        parse_quote!(
            use std::mem;
        ),
    ];

    let scope = naming::ident(interop::SCOPE_MODULE);
    let table: Type = match storage {
        Storage::Private => {
            let table = naming::ident("Interop");
            let commands: Vec<&Command> = version.commands.iter().collect();
            let scope_items = interop::scope_items(&table, &commands, checks);
            items.push(parse_quote! {
                mod #scope {
                    #(#scope_items)*
                }
            });
            parse_quote!(#scope::#table)
        }
        Storage::Family { module, table } => {
            items.push(parse_quote!(
                use super::#module as #scope;
            ));
            parse_quote!(#scope::#table)
        }
    };
    if checks == ErrorChecks::Checked {
        items.push(parse_quote!(
            pub use #scope::LoadError;
        ));
    }

    for constant in &version.enums {
        items.push(constant_item(constant)?);
    }

    let count = version.commands.len();
    let slots = version.commands.iter().map(|command| {
        let name = naming::ident(&command.name);
        let literal = LitStr::new(&command.name, Span::call_site());
        quote::quote!((#literal, #scope::slots::#name))
    });
    items.push(parse_quote! {
        /// Commands of this version in declaration order, with their storage slot.
        const COMMAND_SLOTS: [(&str, usize); #count] = [#(#slots),*];
    });

    let type_name = naming::version_type(&version.name);
    let doc = match &version.number {
        Some(number) => format!(" {} {} ({}).", version.api_family, number, version.name),
        None => format!(" {} ({}).", version.api_family, version.name),
    };
    let wrappers = version
        .commands
        .iter()
        .map(wrapper_fn)
        .collect::<Result<Vec<_>, _>>()?;
    let loaders = loader_fns(checks);

    match storage {
        Storage::Private => {
            items.push(parse_quote! {
                #[doc = #doc]
                ///
                /// Owns its function pointers; call `load_all` before using any command.
                pub struct #type_name {
                    interop: #table,
                }
            });
            items.push(parse_quote! {
                impl #type_name {
                    pub fn new() -> Self {
                        Self { interop: #table::new() }
                    }

                    pub fn is_loaded(&self, name: &str) -> bool {
                        self.interop.is_loaded(name)
                    }

                    #(#loaders)*

                    #(#wrappers)*
                }
            });
            items.push(parse_quote! {
                impl Default for #type_name {
                    fn default() -> Self {
                        Self::new()
                    }
                }
            });
        }
        Storage::Family { .. } => {
            items.push(parse_quote! {
                #[doc = #doc]
                ///
                /// Calls through the family's shared function pointer table.
                pub struct #type_name<'a> {
                    interop: &'a #table,
                }
            });
            items.push(parse_quote! {
                impl<'a> #type_name<'a> {
                    pub fn new(interop: &'a #table) -> Self {
                        Self { interop }
                    }

                    pub fn is_loaded(&self, name: &str) -> bool {
                        self.interop.is_loaded(name)
                    }

                    #(#loaders)*

                    #(#wrappers)*
                }
            });
        }
    }

    Ok(items)
}
