//! Generated by glreg-gen 0.1.0
//!
//! Original copyright from the registry:
//! Test registry.
#![allow(
    dead_code,
    non_snake_case,
    non_upper_case_globals,
    unused_imports,
    unused_mut,
    clippy::missing_safety_doc,
    clippy::too_many_arguments
)]
use std::collections::HashMap;
use std::ffi::c_void;
use std::fmt;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
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
impl std::error::Error for LoadError {}
/// Some platform loaders signal failure with small integers instead of null.
fn is_callable(address: *const c_void) -> bool {
    !matches!(address as isize, 0 | 1 | 2 | 3 | -1)
}
pub fn resolve_bulk<F>(name: &'static str, resolver: &mut F) -> Result<*const c_void, LoadError>
where
    F: FnMut(&str) -> Option<*const c_void>,
{
    match resolver(name) {
        Some(address) if is_callable(address) => Ok(address),
        _ => Err(LoadError::ResolveFailed(name)),
    }
}
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
/// Storage slot of every command.
pub mod slots {
    pub const glAdd: usize = 0usize;
    pub const glClear: usize = 1usize;
}
/// One function pointer cell per command, looked up by name when reloading.
pub struct GlInterop {
    cells: Vec<AtomicPtr<c_void>>,
    by_name: HashMap<&'static str, usize>,
}
impl GlInterop {
    pub const COMMANDS: [&'static str; 2usize] = ["glAdd", "glClear"];
    /// Creates a table with every slot unloaded.
    pub fn new() -> Self {
        Self {
            cells: Self::COMMANDS.iter().map(|_| AtomicPtr::new(ptr::null_mut())).collect(),
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
        self.index_of(name).map_or(false, |slot| !self.address(slot).is_null())
    }
    /// Forgets every loaded address.
    pub fn clear(&self) {
        for cell in &self.cells {
            cell.store(ptr::null_mut(), Ordering::Relaxed);
        }
    }
}
impl Default for GlInterop {
    fn default() -> Self {
        Self::new()
    }
}
