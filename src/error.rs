// glbind/src/error.rs
//
//! Various errors that methods can produce.

use crate::gl;
use crate::gl::types::GLenum;

/// Errors from setting up a `GL` instance or opening the system GL library.
///
/// Individual extension modules never fail to load; missing entry points are left unresolved.
#[derive(Debug)]
pub enum Error {
    /// The system OpenGL library couldn't be located.
    NoGLLibraryFound,
    /// Looking up an OpenGL function address failed for an entry point needed to query the
    /// context (`glGetString`, `glGetIntegerv`, `glGetStringi`).
    GLFunctionNotFound(&'static str),
    /// The context reported a version string that couldn't be parsed.
    UnsupportedGLVersion(Option<String>),
}

/// An error reported by the driver through `glGetError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GLError {
    /// An enumeration parameter is not a legal enumeration for that function.
    InvalidEnum,
    /// A value parameter is not a legal value for that function.
    InvalidValue,
    /// The set of state for a command is not legal for the parameters given to that command.
    InvalidOperation,
    /// A stack pushing operation cannot be done because it would overflow the stack.
    StackOverflow,
    /// A stack popping operation cannot be done because the stack is already at its lowest
    /// point.
    StackUnderflow,
    /// Memory cannot be allocated.
    OutOfMemory,
    /// Reading or writing to a framebuffer that is not complete.
    InvalidFramebufferOperation,
    /// The context has been lost, due to a graphics card reset.
    ContextLost,
    /// A code this crate doesn't know about.
    Unknown(GLenum),
}

impl GLError {
    /// Converts the result of `glGetError`. `GL_NO_ERROR` yields `None`.
    pub fn from_raw(code: GLenum) -> Option<GLError> {
        match code {
            gl::NO_ERROR => None,
            gl::INVALID_ENUM => Some(GLError::InvalidEnum),
            gl::INVALID_VALUE => Some(GLError::InvalidValue),
            gl::INVALID_OPERATION => Some(GLError::InvalidOperation),
            gl::STACK_OVERFLOW => Some(GLError::StackOverflow),
            gl::STACK_UNDERFLOW => Some(GLError::StackUnderflow),
            gl::OUT_OF_MEMORY => Some(GLError::OutOfMemory),
            gl::INVALID_FRAMEBUFFER_OPERATION => Some(GLError::InvalidFramebufferOperation),
            gl::CONTEXT_LOST => Some(GLError::ContextLost),
            code => Some(GLError::Unknown(code)),
        }
    }

    pub fn to_raw(self) -> GLenum {
        match self {
            GLError::InvalidEnum => gl::INVALID_ENUM,
            GLError::InvalidValue => gl::INVALID_VALUE,
            GLError::InvalidOperation => gl::INVALID_OPERATION,
            GLError::StackOverflow => gl::STACK_OVERFLOW,
            GLError::StackUnderflow => gl::STACK_UNDERFLOW,
            GLError::OutOfMemory => gl::OUT_OF_MEMORY,
            GLError::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
            GLError::ContextLost => gl::CONTEXT_LOST,
            GLError::Unknown(code) => code,
        }
    }
}
