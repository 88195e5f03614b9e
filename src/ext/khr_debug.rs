// glbind/src/ext/khr_debug.rs
//
//! Debug output: message callbacks, the message log, debug groups and object labels.

use crate::enums::ObjectIdentifier;
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal::{self, ScratchCStr};

use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr;
use std::slice;

gl_functions! {
    pub struct KHRDebugFunctions {
        fn glDebugMessageControl(source: GLenum, gltype: GLenum, severity: GLenum,
                                 count: GLsizei, ids: *const GLuint, enabled: GLboolean)
            = ["glDebugMessageControlKHR", "glDebugMessageControlARB"];
        fn glDebugMessageInsert(source: GLenum, gltype: GLenum, id: GLuint, severity: GLenum,
                                length: GLsizei, buf: *const GLchar)
            = ["glDebugMessageInsertKHR", "glDebugMessageInsertARB"];
        fn glDebugMessageCallback(callback: GLDEBUGPROC, userParam: *const c_void)
            = ["glDebugMessageCallbackKHR", "glDebugMessageCallbackARB"];
        fn glGetDebugMessageLog(count: GLuint, bufSize: GLsizei, sources: *mut GLenum,
                                types: *mut GLenum, ids: *mut GLuint, severities: *mut GLenum,
                                lengths: *mut GLsizei, messageLog: *mut GLchar) -> GLuint
            = ["glGetDebugMessageLogKHR", "glGetDebugMessageLogARB"];
        fn glPushDebugGroup(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar)
            = ["glPushDebugGroupKHR"];
        fn glPopDebugGroup() = ["glPopDebugGroupKHR"];
        fn glObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei,
                         label: *const GLchar) = ["glObjectLabelKHR"];
        fn glGetObjectLabel(identifier: GLenum, name: GLuint, bufSize: GLsizei,
                            length: *mut GLsizei, label: *mut GLchar)
            = ["glGetObjectLabelKHR"];
        fn glObjectPtrLabel(ptr: *const c_void, length: GLsizei, label: *const GLchar)
            = ["glObjectPtrLabelKHR"];
        fn glGetObjectPtrLabel(ptr: *const c_void, bufSize: GLsizei, length: *mut GLsizei,
                               label: *mut GLchar) = ["glGetObjectPtrLabelKHR"];
        fn glGetPointerv(pname: GLenum, params: *mut *mut c_void) = ["glGetPointervKHR"];
        fn glGetIntegerv(pname: GLenum, data: *mut GLint);
    }
}

gl_extension! {
    pub struct KHRDebug(KHRDebugFunctions) {
        name: "GL_KHR_debug",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_KHR_debug"],
    }
}

gl_enum! {
    pub enum DebugSource {
        Api = gl::DEBUG_SOURCE_API,
        WindowSystem = gl::DEBUG_SOURCE_WINDOW_SYSTEM,
        ShaderCompiler = gl::DEBUG_SOURCE_SHADER_COMPILER,
        ThirdParty = gl::DEBUG_SOURCE_THIRD_PARTY,
        Application = gl::DEBUG_SOURCE_APPLICATION,
        Other = gl::DEBUG_SOURCE_OTHER,
    }
}

gl_enum! {
    pub enum DebugType {
        Error = gl::DEBUG_TYPE_ERROR,
        DeprecatedBehavior = gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR,
        UndefinedBehavior = gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR,
        Portability = gl::DEBUG_TYPE_PORTABILITY,
        Performance = gl::DEBUG_TYPE_PERFORMANCE,
        Marker = gl::DEBUG_TYPE_MARKER,
        PushGroup = gl::DEBUG_TYPE_PUSH_GROUP,
        PopGroup = gl::DEBUG_TYPE_POP_GROUP,
        Other = gl::DEBUG_TYPE_OTHER,
    }
}

gl_enum! {
    pub enum DebugSeverity {
        High = gl::DEBUG_SEVERITY_HIGH,
        Medium = gl::DEBUG_SEVERITY_MEDIUM,
        Low = gl::DEBUG_SEVERITY_LOW,
        Notification = gl::DEBUG_SEVERITY_NOTIFICATION,
    }
}

impl DebugSeverity {
    /// The `log` level debug messages of this severity are forwarded at.
    pub fn log_level(self) -> log::Level {
        match self {
            DebugSeverity::High => log::Level::Error,
            DebugSeverity::Medium => log::Level::Warn,
            DebugSeverity::Low => log::Level::Info,
            DebugSeverity::Notification => log::Level::Debug,
        }
    }
}

/// A message read back from the debug message log.
///
/// Codes the crate doesn't know about come through as `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugMessage {
    pub source: Option<DebugSource>,
    pub message_type: Option<DebugType>,
    pub id: GLuint,
    pub severity: Option<DebugSeverity>,
    pub message: String,
}

// Routes driver messages to the `log` facade.
extern "system" fn log_debug_message(source: GLenum,
                                     gltype: GLenum,
                                     id: GLuint,
                                     severity: GLenum,
                                     length: GLsizei,
                                     message: *const GLchar,
                                     _: *mut c_void) {
    if message.is_null() {
        return;
    }
    let text = unsafe {
        if length >= 0 {
            let bytes = slice::from_raw_parts(message as *const u8, length as usize);
            String::from_utf8_lossy(bytes).into_owned()
        } else {
            CStr::from_ptr(message).to_string_lossy().into_owned()
        }
    };
    let level = DebugSeverity::from_raw(severity).map_or(log::Level::Debug, DebugSeverity::log_level);
    log!(target: "glbind::debug",
         level,
         "[{:?}/{:?} {}] {}",
         DebugSource::from_raw(source),
         DebugType::from_raw(gltype),
         id,
         text.trim_end());
}

fn filter_value<T>(filter: Option<T>) -> GLenum
where
    T: Into<GLenum>,
{
    filter.map_or(gl::DONT_CARE, Into::into)
}

#[allow(clippy::missing_safety_doc)]
impl KHRDebug {
    /// Enables or disables the messages matching the filters. `None` matches anything. A
    /// non-empty `ids` requires `source` and `message_type` to be set and `severity` unset.
    pub unsafe fn debug_message_control(&self,
                                        source: Option<DebugSource>,
                                        message_type: Option<DebugType>,
                                        severity: Option<DebugSeverity>,
                                        ids: &[GLuint],
                                        enabled: bool) {
        self.functions.glDebugMessageControl(filter_value(source),
                                             filter_value(message_type),
                                             filter_value(severity),
                                             marshal::count(ids),
                                             if ids.is_empty() { ptr::null() } else { ids.as_ptr() },
                                             marshal::gl_bool(enabled))
    }

    pub unsafe fn debug_message_insert(&self,
                                       source: DebugSource,
                                       message_type: DebugType,
                                       id: GLuint,
                                       severity: DebugSeverity,
                                       message: &str) {
        let message = ScratchCStr::new(message);
        self.functions.glDebugMessageInsert(source.into(),
                                            message_type.into(),
                                            id,
                                            severity.into(),
                                            message.len(),
                                            message.as_ptr())
    }

    /// Installs a raw callback. `None` removes it, after which messages go to the log.
    #[inline]
    pub unsafe fn debug_message_callback(&self, callback: GLDEBUGPROC, user_param: *const c_void) {
        self.functions.glDebugMessageCallback(callback, user_param)
    }

    /// Forwards every debug message to the `log` facade under the `glbind::debug` target,
    /// at a level derived from its severity.
    pub unsafe fn install_log_callback(&self) {
        self.functions.glDebugMessageCallback(Some(log_debug_message), ptr::null())
    }

    /// Drains up to `count` messages from the message log, oldest first.
    pub unsafe fn get_debug_message_log(&self, count: usize) -> Vec<DebugMessage> {
        let mut max_length = 0;
        self.functions.glGetIntegerv(gl::MAX_DEBUG_MESSAGE_LENGTH, &mut max_length);
        let capacity = count * max_length.max(1) as usize;

        let mut sources = vec![0; count];
        let mut types = vec![0; count];
        let mut ids = vec![0; count];
        let mut severities = vec![0; count];
        let mut lengths = vec![0; count];
        let mut text = vec![0u8; capacity];
        let fetched = self.functions.glGetDebugMessageLog(count as GLuint,
                                                          capacity as GLsizei,
                                                          sources.as_mut_ptr(),
                                                          types.as_mut_ptr(),
                                                          ids.as_mut_ptr(),
                                                          severities.as_mut_ptr(),
                                                          lengths.as_mut_ptr(),
                                                          text.as_mut_ptr() as *mut GLchar);

        let mut messages = Vec::with_capacity(fetched as usize);
        let mut offset = 0;
        for index in 0..(fetched as usize).min(count) {
            // Lengths include the terminator.
            let length = (lengths[index].max(0) as usize).min(text.len() - offset);
            let end = offset + length.saturating_sub(1);
            messages.push(DebugMessage {
                source: DebugSource::from_raw(sources[index]),
                message_type: DebugType::from_raw(types[index]),
                id: ids[index],
                severity: DebugSeverity::from_raw(severities[index]),
                message: String::from_utf8_lossy(&text[offset..end]).into_owned(),
            });
            offset += length;
        }
        messages
    }

    /// Opens a debug group. `source` must be `Application` or `ThirdParty`.
    pub unsafe fn push_debug_group(&self, source: DebugSource, id: GLuint, message: &str) {
        let message = ScratchCStr::new(message);
        self.functions.glPushDebugGroup(source.into(), id, message.len(), message.as_ptr())
    }

    #[inline]
    pub unsafe fn pop_debug_group(&self) {
        self.functions.glPopDebugGroup()
    }

    pub unsafe fn object_label(&self, identifier: ObjectIdentifier, name: GLuint, label: &str) {
        let label = ScratchCStr::new(label);
        self.functions.glObjectLabel(identifier.into(), name, label.len(), label.as_ptr())
    }

    /// Removes the label of an object.
    #[inline]
    pub unsafe fn clear_object_label(&self, identifier: ObjectIdentifier, name: GLuint) {
        self.functions.glObjectLabel(identifier.into(), name, 0, ptr::null())
    }

    pub unsafe fn get_object_label(&self, identifier: ObjectIdentifier, name: GLuint) -> String {
        let mut length = 0;
        self.functions.glGetObjectLabel(identifier.into(), name, 0, &mut length, ptr::null_mut());
        let mut buffer = vec![0u8; length.max(0) as usize + 1];
        self.functions.glGetObjectLabel(identifier.into(),
                                        name,
                                        buffer.len() as GLsizei,
                                        &mut length,
                                        buffer.as_mut_ptr() as *mut GLchar);
        marshal::string_from_buffer(buffer, length)
    }

    /// Labels a sync object.
    pub unsafe fn object_ptr_label(&self, sync: GLsync, label: &str) {
        let label = ScratchCStr::new(label);
        self.functions.glObjectPtrLabel(sync as *const c_void, label.len(), label.as_ptr())
    }

    pub unsafe fn get_object_ptr_label(&self, sync: GLsync) -> String {
        let mut length = 0;
        self.functions.glGetObjectPtrLabel(sync as *const c_void, 0, &mut length, ptr::null_mut());
        let mut buffer = vec![0u8; length.max(0) as usize + 1];
        self.functions.glGetObjectPtrLabel(sync as *const c_void,
                                           buffer.len() as GLsizei,
                                           &mut length,
                                           buffer.as_mut_ptr() as *mut GLchar);
        marshal::string_from_buffer(buffer, length)
    }

    /// `pname` is `GL_DEBUG_CALLBACK_FUNCTION` or `GL_DEBUG_CALLBACK_USER_PARAM`.
    pub unsafe fn get_pointer(&self, pname: GLenum) -> *mut c_void {
        let mut pointer = ptr::null_mut();
        self.functions.glGetPointerv(pname, &mut pointer);
        pointer
    }
}
