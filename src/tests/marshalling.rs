// glbind/src/tests/marshalling.rs

use crate::gl;
use crate::marshal::{self, ScratchCStr, ScratchCStrArray, SCRATCH_CAPACITY};

use std::ffi::CStr;

#[test]
fn test_scratch_string_fits_inline() {
    let text = "a".repeat(SCRATCH_CAPACITY - 1);
    let scratch = ScratchCStr::new(&text);
    assert!(!scratch.spilled());
    assert_eq!(scratch.len() as usize, text.len());
    assert_eq!(scratch.as_bytes_with_nul().last(), Some(&0));
}

#[test]
fn test_scratch_string_spills_without_truncating() {
    let text = "b".repeat(SCRATCH_CAPACITY);
    let scratch = ScratchCStr::new(&text);
    assert!(scratch.spilled());
    assert_eq!(scratch.len() as usize, SCRATCH_CAPACITY);

    let copy = unsafe { CStr::from_ptr(scratch.as_ptr()) };
    assert_eq!(copy.to_str().unwrap(), text);
}

#[test]
fn test_scratch_string_is_utf8() {
    let scratch = ScratchCStr::new("größe");
    assert_eq!(scratch.len(), 7);
    assert_eq!(scratch.as_bytes_with_nul(), "größe\0".as_bytes());

    let empty = ScratchCStr::new("");
    assert!(empty.is_empty());
    assert_eq!(empty.as_bytes_with_nul(), [0]);
}

#[test]
fn test_scratch_string_array() {
    let long = "c".repeat(1000);
    let array = ScratchCStrArray::new(&["void main() {}", long.as_str(), ""]);
    assert_eq!(array.count(), 3);

    unsafe {
        let pointers = std::slice::from_raw_parts(array.as_ptr(), 3);
        let lengths = std::slice::from_raw_parts(array.lengths(), 3);
        assert_eq!(lengths, [14, 1000, 0]);
        assert_eq!(CStr::from_ptr(pointers[0]).to_str().unwrap(), "void main() {}");
        assert_eq!(CStr::from_ptr(pointers[1]).to_bytes().len(), 1000);
        assert_eq!(CStr::from_ptr(pointers[2]).to_bytes(), b"");
    }
}

#[test]
fn test_scratch_string_array_survives_moves() {
    let array = ScratchCStrArray::new(&["first", "second"]);
    let moved = vec![array];
    unsafe {
        let pointers = std::slice::from_raw_parts(moved[0].as_ptr(), 2);
        assert_eq!(CStr::from_ptr(pointers[1]).to_str().unwrap(), "second");
    }
}

#[test]
fn test_booleans() {
    assert_eq!(marshal::gl_bool(true), gl::TRUE);
    assert_eq!(marshal::gl_bool(false), gl::FALSE);
    assert!(marshal::from_gl_bool(2));
    assert!(!marshal::from_gl_bool(gl::FALSE));
}

#[test]
fn test_slice_sizes() {
    let values = [0u32; 5];
    assert_eq!(marshal::count(&values), 5);
    assert_eq!(marshal::byte_len(&values), 20);
    assert!(marshal::data_ptr::<u8>(None).is_null());
    assert_eq!(marshal::offset_ptr(64) as usize, 64);
}

#[test]
fn test_driver_strings() {
    let version = b"4.6.0 NVIDIA 535.54\0";
    assert_eq!(unsafe { marshal::read_string(version.as_ptr()) }.as_deref(),
               Some("4.6.0 NVIDIA 535.54"));
    assert_eq!(unsafe { marshal::read_string(std::ptr::null()) }, None);

    let buffer = b"uniform_block\0\0\0".to_vec();
    assert_eq!(marshal::string_from_buffer(buffer.clone(), 7), "uniform");
    // A length past the buffer is clamped, a negative one reads nothing.
    assert_eq!(marshal::string_from_buffer(buffer.clone(), 100).len(), buffer.len());
    assert_eq!(marshal::string_from_buffer(buffer, -1), "");
    assert_eq!(marshal::string_from_buffer(vec![0xff, b'a'], 2), "\u{fffd}a");
}
