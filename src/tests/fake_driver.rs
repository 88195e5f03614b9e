// glbind/src/tests/fake_driver.rs
//
//! A driver made of `extern "system"` stubs that records what it is asked.

use crate::context::GLContext;
use crate::gl;
use crate::gl::types::*;

use std::collections::HashSet;
use std::ffi::{CStr, CString};
use std::os::raw::c_void;
use std::ptr;
use std::slice;
use std::sync::{Mutex, MutexGuard};

/// Which names `get_proc_address` answers for.
pub enum Exports {
    /// Every name except those in `DriverState::hidden`.
    All,
    /// Only these names.
    Only(HashSet<&'static str>),
}

/// One recorded call into the driver.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub name: &'static str,
    pub args: Vec<i64>,
    pub text: Vec<String>,
}

pub struct DriverState {
    pub exports: Exports,
    pub hidden: HashSet<&'static str>,
    pub probes: Vec<String>,
    pub calls: Vec<Call>,
    pub error: GLenum,
    version: Option<CString>,
    extensions: Vec<CString>,
    extension_string: CString,
}

impl DriverState {
    fn new() -> DriverState {
        DriverState {
            exports: Exports::All,
            hidden: HashSet::new(),
            probes: vec![],
            calls: vec![],
            error: gl::NO_ERROR,
            version: CString::new("4.6.0 glbind fake driver").ok(),
            extensions: vec![],
            extension_string: CString::default(),
        }
    }

    fn record(&mut self, name: &'static str, args: &[i64], text: Vec<String>) {
        self.calls.push(Call { name, args: args.to_vec(), text });
    }
}

lazy_static! {
    static ref DRIVER: Mutex<DriverState> = Mutex::new(DriverState::new());
}

fn state() -> MutexGuard<'static, DriverState> {
    // A test that panics on purpose poisons the lock; the state is reset anyway.
    DRIVER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Restores the default driver: GL 4.6, no extensions, every name exported.
pub fn reset() {
    *state() = DriverState::new();
}

pub fn set_version(version: Option<&str>) {
    state().version = version.map(|version| CString::new(version).unwrap());
}

pub fn set_extensions(extensions: &[&str]) {
    let mut state = state();
    state.extensions = extensions.iter().map(|name| CString::new(*name).unwrap()).collect();
    state.extension_string = CString::new(extensions.join(" ")).unwrap();
}

/// Exports only the given names.
pub fn export_only(names: &[&'static str]) {
    state().exports = Exports::Only(names.iter().copied().collect());
}

/// Hides the given names from an `Exports::All` driver.
pub fn hide(names: &[&'static str]) {
    state().hidden.extend(names.iter().copied());
}

pub fn set_error(error: GLenum) {
    state().error = error;
}

pub fn probes() -> Vec<String> {
    state().probes.clone()
}

pub fn calls() -> Vec<Call> {
    state().calls.clone()
}

pub fn last_call() -> Call {
    state().calls.last().cloned().expect("no call was recorded")
}

/// The context handed to loaders.
pub struct FakeDriver;

impl GLContext for FakeDriver {
    fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        let mut state = state();
        state.probes.push(symbol_name.to_owned());
        let exported = match state.exports {
            Exports::All => !state.hidden.contains(symbol_name),
            Exports::Only(ref names) => names.contains(symbol_name),
        };
        if exported {
            stub_address(symbol_name)
        } else {
            ptr::null()
        }
    }
}

/// The address of the stub that implements `name`. Names without a dedicated stub share one
/// that fails the test if it is ever called.
pub fn stub_address(name: &str) -> *const c_void {
    match name {
        "glGetString" => get_string as *const c_void,
        "glGetStringi" => get_string_i as *const c_void,
        "glGetIntegerv" => get_integerv as *const c_void,
        "glGetError" => get_error as *const c_void,
        "glEnable" => enable as *const c_void,
        "glBlendFunc" => blend_func as *const c_void,
        "glViewport" => viewport as *const c_void,
        "glClipControl" => clip_control as *const c_void,
        "glClipControlARB" => clip_control_arb as *const c_void,
        "glClipControlEXT" => clip_control_ext as *const c_void,
        "glDrawBuffers" => draw_buffers as *const c_void,
        "glShaderSource" => shader_source as *const c_void,
        "glGetUniformLocation" => get_uniform_location as *const c_void,
        "glBufferData" => buffer_data as *const c_void,
        "glMapBufferRange" => map_buffer_range as *const c_void,
        "glObjectLabel" => object_label as *const c_void,
        "glGetIntegeri_v" => get_integer_i as *const c_void,
        "glGetIntegerIndexedvEXT" => get_integer_indexed_ext as *const c_void,
        _ => unexpected_call as *const c_void,
    }
}

extern "system" fn unexpected_call() {
    panic!("the fake driver has no implementation for this entry point");
}

extern "system" fn get_string(name: GLenum) -> *const GLubyte {
    let state = state();
    let string = match name {
        gl::VERSION => state.version.as_ref().map_or(ptr::null(), |version| version.as_ptr()),
        gl::EXTENSIONS => state.extension_string.as_ptr(),
        _ => ptr::null(),
    };
    string as *const GLubyte
}

extern "system" fn get_string_i(name: GLenum, index: GLuint) -> *const GLubyte {
    let state = state();
    match (name, state.extensions.get(index as usize)) {
        (gl::EXTENSIONS, Some(extension)) => extension.as_ptr() as *const GLubyte,
        _ => ptr::null(),
    }
}

extern "system" fn get_integerv(pname: GLenum, data: *mut GLint) {
    let mut state = state();
    let value = match pname {
        gl::NUM_EXTENSIONS => state.extensions.len() as GLint,
        _ => 0,
    };
    state.record("glGetIntegerv", &[pname as i64], vec![]);
    unsafe {
        *data = value;
    }
}

extern "system" fn get_error() -> GLenum {
    let mut state = state();
    let error = state.error;
    state.error = gl::NO_ERROR;
    error
}

extern "system" fn enable(capability: GLenum) {
    state().record("glEnable", &[capability as i64], vec![]);
}

extern "system" fn blend_func(src: GLenum, dst: GLenum) {
    state().record("glBlendFunc", &[src as i64, dst as i64], vec![]);
}

extern "system" fn viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
    state().record("glViewport", &[x as i64, y as i64, width as i64, height as i64], vec![]);
}

extern "system" fn clip_control(origin: GLenum, depth: GLenum) {
    state().record("glClipControl", &[origin as i64, depth as i64], vec![]);
}

extern "system" fn clip_control_arb(origin: GLenum, depth: GLenum) {
    state().record("glClipControlARB", &[origin as i64, depth as i64], vec![]);
}

extern "system" fn clip_control_ext(origin: GLenum, depth: GLenum) {
    state().record("glClipControlEXT", &[origin as i64, depth as i64], vec![]);
}

extern "system" fn draw_buffers(n: GLsizei, bufs: *const GLenum) {
    let buffers = unsafe { slice::from_raw_parts(bufs, n as usize) };
    let args: Vec<i64> = buffers.iter().map(|&buffer| buffer as i64).collect();
    state().record("glDrawBuffers", &args, vec![]);
}

extern "system" fn shader_source(shader: GLuint,
                                 count: GLsizei,
                                 strings: *const *const GLchar,
                                 lengths: *const GLint) {
    let mut text = vec![];
    let mut args = vec![shader as i64, count as i64];
    for index in 0..count as usize {
        unsafe {
            let length = *lengths.add(index);
            let string = *strings.add(index);
            let bytes = slice::from_raw_parts(string as *const u8, length as usize);
            // The terminator must follow the counted bytes.
            assert_eq!(*string.add(length as usize), 0);
            text.push(String::from_utf8_lossy(bytes).into_owned());
            args.push(length as i64);
        }
    }
    state().record("glShaderSource", &args, text);
}

extern "system" fn get_uniform_location(program: GLuint, name: *const GLchar) -> GLint {
    let name = unsafe { CStr::from_ptr(name).to_string_lossy().into_owned() };
    let location = if name == "missing" { -1 } else { name.len() as GLint };
    state().record("glGetUniformLocation", &[program as i64], vec![name]);
    location
}

extern "system" fn buffer_data(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum) {
    let bytes = if data.is_null() {
        vec![]
    } else {
        unsafe { slice::from_raw_parts(data as *const u8, size as usize).to_vec() }
    };
    let mut args = vec![target as i64, size as i64, usage as i64];
    args.extend(bytes.iter().map(|&byte| byte as i64));
    state().record("glBufferData", &args, vec![]);
}

extern "system" fn map_buffer_range(target: GLenum,
                                    offset: GLintptr,
                                    length: GLsizeiptr,
                                    access: GLbitfield)
                                    -> *mut c_void {
    state().record("glMapBufferRange",
                   &[target as i64, offset as i64, length as i64, access as i64],
                   vec![]);
    ptr::null_mut()
}

extern "system" fn object_label(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar) {
    let text = if label.is_null() {
        vec![]
    } else {
        let bytes = unsafe { slice::from_raw_parts(label as *const u8, length as usize) };
        vec![String::from_utf8_lossy(bytes).into_owned()]
    };
    state().record("glObjectLabel", &[identifier as i64, name as i64, length as i64], text);
}

extern "system" fn get_integer_i(target: GLenum, index: GLuint, data: *mut GLint) {
    state().record("glGetIntegeri_v", &[target as i64, index as i64], vec![]);
    unsafe {
        *data = 10 + index as GLint;
    }
}

extern "system" fn get_integer_indexed_ext(target: GLenum, index: GLuint, data: *mut GLint) {
    state().record("glGetIntegerIndexedvEXT", &[target as i64, index as i64], vec![]);
    unsafe {
        *data = 100 + index as GLint;
    }
}
