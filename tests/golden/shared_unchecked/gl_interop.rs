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
pub fn resolve_unchecked<F>(name: &str, resolver: &mut F) -> *const c_void
where
    F: FnMut(&str) -> Option<*const c_void>,
{
    resolver(name).unwrap_or(ptr::null())
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
