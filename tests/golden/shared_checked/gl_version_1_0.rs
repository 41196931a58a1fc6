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
use std::ffi::c_void;
use std::mem;
use super::gl_interop as interop;
pub use interop::LoadError;
pub const GL_COLOR_BUFFER_BIT: u32 = 0x00004000;
pub const GL_TIMEOUT_IGNORED: u64 = 0xFFFFFFFFFFFFFFFF;
/// Commands of this version in declaration order, with their storage slot.
const COMMAND_SLOTS: [(&str, usize); 2usize] = [
    ("glAdd", interop::slots::glAdd),
    ("glClear", interop::slots::glClear),
];
/// gl 1.0 (GL_VERSION_1_0).
///
/// Calls through the family's shared function pointer table.
pub struct GlVersion10<'a> {
    interop: &'a interop::GlInterop,
}
impl<'a> GlVersion10<'a> {
    pub fn new(interop: &'a interop::GlInterop) -> Self {
        Self { interop }
    }
    pub fn is_loaded(&self, name: &str) -> bool {
        self.interop.is_loaded(name)
    }
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
    #[inline]
    pub unsafe fn glAdd(&self, a: i32, b: i32) -> i32 {
        (mem::transmute::<
            *const c_void,
            unsafe extern "system" fn(i32, i32) -> i32,
        >(self.interop.loaded(interop::slots::glAdd)))(a, b)
    }
    #[inline]
    pub unsafe fn glClear(&self, mask: u32) {
        (mem::transmute::<
            *const c_void,
            unsafe extern "system" fn(u32),
        >(self.interop.loaded(interop::slots::glClear)))(mask)
    }
}
