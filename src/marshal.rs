// glbind/src/marshal.rs
//
//! Conversion of Rust values to and from the C representations the driver expects.

use crate::gl;
use crate::gl::types::{GLboolean, GLchar, GLsizei, GLsizeiptr, GLubyte};

use smallvec::SmallVec;
use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr;

/// Inline capacity, in bytes, of the scratch buffer used for text parameters.
pub const SCRATCH_CAPACITY: usize = 256;

/// A NUL-terminated UTF-8 copy of a string, living on the stack when it fits in
/// `SCRATCH_CAPACITY` bytes and on the heap otherwise.
///
/// The copy lives exactly as long as the value; pointers from `as_ptr` must not outlive it.
pub struct ScratchCStr {
    bytes: SmallVec<[u8; SCRATCH_CAPACITY]>,
}

impl ScratchCStr {
    pub fn new(text: &str) -> ScratchCStr {
        let mut bytes = SmallVec::with_capacity(text.len() + 1);
        bytes.extend_from_slice(text.as_bytes());
        bytes.push(0);
        ScratchCStr { bytes }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const GLchar {
        self.bytes.as_ptr() as *const GLchar
    }

    /// Length of the text in bytes, not counting the terminator.
    #[inline]
    pub fn len(&self) -> GLsizei {
        (self.bytes.len() - 1) as GLsizei
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == 1
    }

    /// Returns `true` if the text didn't fit in the inline buffer.
    #[inline]
    pub fn spilled(&self) -> bool {
        self.bytes.spilled()
    }

    /// The text, terminator included.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }
}

/// An array of NUL-terminated strings, for entry points taking `const GLchar *const *`.
///
/// The strings are boxed in a `Vec`, so the pointer array stays valid when this value moves.
pub struct ScratchCStrArray {
    strings: Vec<ScratchCStr>,
    pointers: SmallVec<[*const GLchar; 8]>,
    lengths: SmallVec<[GLsizei; 8]>,
}

impl ScratchCStrArray {
    pub fn new<S>(texts: &[S]) -> ScratchCStrArray
    where
        S: AsRef<str>,
    {
        let strings: Vec<ScratchCStr> =
            texts.iter().map(|text| ScratchCStr::new(text.as_ref())).collect();
        let pointers = strings.iter().map(|string| string.as_ptr()).collect();
        let lengths = strings.iter().map(|string| string.len()).collect();
        ScratchCStrArray { strings, pointers, lengths }
    }

    #[inline]
    pub fn count(&self) -> GLsizei {
        self.strings.len() as GLsizei
    }

    #[inline]
    pub fn as_ptr(&self) -> *const *const GLchar {
        self.pointers.as_ptr()
    }

    #[inline]
    pub fn lengths(&self) -> *const GLsizei {
        self.lengths.as_ptr()
    }
}

#[inline]
pub(crate) fn gl_bool(value: bool) -> GLboolean {
    if value { gl::TRUE } else { gl::FALSE }
}

#[inline]
pub(crate) fn from_gl_bool(value: GLboolean) -> bool {
    value != gl::FALSE
}

/// Number of elements in a slice, as a `GLsizei`.
#[inline]
pub(crate) fn count<T>(slice: &[T]) -> GLsizei {
    slice.len() as GLsizei
}

/// Size of a slice in bytes, as a `GLsizeiptr`.
#[inline]
pub(crate) fn byte_len<T>(slice: &[T]) -> GLsizeiptr {
    std::mem::size_of_val(slice) as GLsizeiptr
}

/// Base pointer of a slice, or null when it is `None`.
#[inline]
pub(crate) fn data_ptr<T>(data: Option<&[T]>) -> *const c_void {
    data.map_or(ptr::null(), |data| data.as_ptr() as *const c_void)
}

/// Converts an offset into the currently bound buffer to the pointer argument GL expects.
#[inline]
pub(crate) fn offset_ptr(offset: usize) -> *const c_void {
    offset as *const c_void
}

/// Copies a driver-owned NUL-terminated string. Null yields `None`.
pub(crate) unsafe fn read_string(string: *const GLubyte) -> Option<String> {
    if string.is_null() {
        return None;
    }
    Some(CStr::from_ptr(string as *const GLchar).to_string_lossy().into_owned())
}

/// Decodes the first `length` bytes written by the driver into `buffer`.
pub(crate) fn string_from_buffer(mut buffer: Vec<u8>, length: GLsizei) -> String {
    let length = (length.max(0) as usize).min(buffer.len());
    buffer.truncate(length);
    match String::from_utf8(buffer) {
        Ok(string) => string,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
