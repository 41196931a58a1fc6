//! Function pointer storage: the slot table plus the helpers loaders use to fill it.
//!
//! The same items are emitted either as the body of a family-wide `<family>_interop.rs` file
//! (shared mode) or as a private `mod interop` inside a version file (isolated mode).

use proc_macro2::Span;
use syn::{parse_quote, Item, LitStr};

use super::{naming, ErrorChecks};
use crate::registry::Command;

/// Name of the storage module as seen from a version file.
pub const SCOPE_MODULE: &str = "interop";

fn use_items() -> Vec<Item> {
    vec![
        parse_quote!(
            use std::collections::HashMap;
        ),
        parse_quote!(
            use std::ffi::c_void;
        ),
        parse_quote!(
            use std::fmt;
        ),
        parse_quote!(
            use std::ptr;
        ),
        parse_quote!(
            use std::sync::atomic::{AtomicPtr, Ordering};
        ),
    ]
}

/// `LoadError` and the resolve helpers of checked mode.
fn checked_support() -> Vec<Item> {
    vec![
        parse_quote! {
            /// Why a function pointer could not be loaded. Every variant names the command.
            #[derive(Clone, Debug, PartialEq, Eq)]
            pub enum LoadError {
                /// Bulk loading could not obtain a usable address.
                ResolveFailed(&'static str),
                /// No storage slot exists for this name.
                UnknownCommand(String),
                /// The resolver returned no address.
                MissingAddress(String),
                /// The resolver returned a value that cannot be called through.
                IncompatibleAddress(String),
            }
        },
        parse_quote! {
            impl fmt::Display for LoadError {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self {
                        Self::ResolveFailed(name) => {
                            write!(f, "failed to get function pointer for '{}'", name)
                        }
                        Self::UnknownCommand(name) => {
                            write!(f, "no function named '{}' in this binding", name)
                        }
                        Self::MissingAddress(name) => {
                            write!(f, "failed to find function address for '{}'", name)
                        }
                        Self::IncompatibleAddress(name) => {
                            write!(f, "address returned for '{}' is not callable", name)
                        }
                    }
                }
            }
        },
        parse_quote! {
            impl std::error::Error for LoadError {}
        },
        parse_quote! {
            /// Some platform loaders signal failure with small integers instead of null.
            fn is_callable(address: *const c_void) -> bool {
                !matches!(address as isize, 0 | 1 | 2 | 3 | -1)
            }
        },
        parse_quote! {
            pub fn resolve_bulk<F>(name: &'static str, resolver: &mut F) -> Result<*const c_void, LoadError>
            where
                F: FnMut(&str) -> Option<*const c_void>,
            {
                match resolver(name) {
                    Some(address) if is_callable(address) => Ok(address),
                    _ => Err(LoadError::ResolveFailed(name)),
                }
            }
        },
        parse_quote! {
            pub fn resolve_single<F>(name: &str, resolver: &mut F) -> Result<*const c_void, LoadError>
            where
                F: FnMut(&str) -> Option<*const c_void>,
            {
                let address = resolver(name)
                    .filter(|address| !address.is_null())
                    .ok_or_else(|| LoadError::MissingAddress(name.to_string()))?;
                if !is_callable(address) {
                    return Err(LoadError::IncompatibleAddress(name.to_string()));
                }
                Ok(address)
            }
        },
    ]
}

/// The unchecked resolve helper: whatever the resolver returns is stored, absence as null.
fn unchecked_support() -> Vec<Item> {
    vec![parse_quote! {
        pub fn resolve_unchecked<F>(name: &str, resolver: &mut F) -> *const c_void
        where
            F: FnMut(&str) -> Option<*const c_void>,
        {
            resolver(name).unwrap_or(ptr::null())
        }
    }]
}

/// Emits the storage scope for `commands`; slot numbers follow the slice order.
pub fn scope_items(table: &syn::Ident, commands: &[&Command], checks: ErrorChecks) -> Vec<Item> {
    let mut items = use_items();
    items.extend(match checks {
        ErrorChecks::Checked => checked_support(),
        ErrorChecks::Unchecked => unchecked_support(),
    });

    let slot_consts = commands.iter().enumerate().map(|(slot, command)| -> Item {
        let name = naming::ident(&command.name);
        parse_quote!(pub const #name: usize = #slot;)
    });
    items.push(parse_quote! {
        /// Storage slot of every command.
        pub mod slots {
            #(#slot_consts)*
        }
    });

    let count = commands.len();
    let names = commands
        .iter()
        .map(|command| LitStr::new(&command.name, Span::call_site()));
    items.push(parse_quote! {
        /// One function pointer cell per command, looked up by name when reloading.
        pub struct #table {
            cells: Vec<AtomicPtr<c_void>>,
            by_name: HashMap<&'static str, usize>,
        }
    });
    items.push(parse_quote! {
        impl #table {
            pub const COMMANDS: [&'static str; #count] = [#(#names),*];

            /// Creates a table with every slot unloaded.
            pub fn new() -> Self {
                Self {
                    cells: Self::COMMANDS
                        .iter()
                        .map(|_| AtomicPtr::new(ptr::null_mut()))
                        .collect(),
                    by_name: Self::COMMANDS
                        .iter()
                        .enumerate()
                        .map(|(slot, name)| (*name, slot))
                        .collect(),
                }
            }

            pub fn index_of(&self, name: &str) -> Option<usize> {
                self.by_name.get(name).copied()
            }

            #[inline]
            pub fn address(&self, slot: usize) -> *const c_void {
                self.cells[slot].load(Ordering::Relaxed)
            }

            /// The address in `slot`. Panics if the command was never loaded.
            #[inline]
            pub fn loaded(&self, slot: usize) -> *const c_void {
                let address = self.address(slot);
                if address.is_null() {
                    panic!("{} was called before it was loaded", Self::COMMANDS[slot]);
                }
                address
            }

            pub fn store(&self, slot: usize, address: *const c_void) {
                self.cells[slot].store(address as *mut c_void, Ordering::Relaxed);
            }

            pub fn is_loaded(&self, name: &str) -> bool {
                self.index_of(name)
                    .map_or(false, |slot| !self.address(slot).is_null())
            }

            /// Forgets every loaded address.
            pub fn clear(&self) {
                for cell in &self.cells {
                    cell.store(ptr::null_mut(), Ordering::Relaxed);
                }
            }
        }
    });
    items.push(parse_quote! {
        impl Default for #table {
            fn default() -> Self {
                Self::new()
            }
        }
    });
    items
}
