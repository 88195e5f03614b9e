// glbind/src/versions/gl15.rs
//
//! OpenGL 1.5: buffer objects and occlusion queries.

use crate::enums::{BufferAccess, BufferParameter, BufferTarget, BufferUsage, QueryObjectParameter};
use crate::enums::QueryTarget;
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal;

use bytemuck::Pod;
use std::os::raw::c_void;
use std::ptr;

gl_functions! {
    pub struct GL15Functions {
        fn glGenQueries(n: GLsizei, ids: *mut GLuint) = ["glGenQueriesARB"];
        fn glDeleteQueries(n: GLsizei, ids: *const GLuint) = ["glDeleteQueriesARB"];
        fn glIsQuery(id: GLuint) -> GLboolean = ["glIsQueryARB"];
        fn glBeginQuery(target: GLenum, id: GLuint) = ["glBeginQueryARB"];
        fn glEndQuery(target: GLenum) = ["glEndQueryARB"];
        fn glGetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint) = ["glGetQueryivARB"];
        fn glGetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint)
            = ["glGetQueryObjectivARB"];
        fn glGetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint)
            = ["glGetQueryObjectuivARB"];
        fn glBindBuffer(target: GLenum, buffer: GLuint) = ["glBindBufferARB"];
        fn glDeleteBuffers(n: GLsizei, buffers: *const GLuint) = ["glDeleteBuffersARB"];
        fn glGenBuffers(n: GLsizei, buffers: *mut GLuint) = ["glGenBuffersARB"];
        fn glIsBuffer(buffer: GLuint) -> GLboolean = ["glIsBufferARB"];
        fn glBufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum)
            = ["glBufferDataARB"];
        fn glBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr,
                           data: *const c_void) = ["glBufferSubDataARB"];
        fn glGetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr,
                              data: *mut c_void) = ["glGetBufferSubDataARB"];
        fn glMapBuffer(target: GLenum, access: GLenum) -> *mut c_void = ["glMapBufferARB"];
        fn glUnmapBuffer(target: GLenum) -> GLboolean = ["glUnmapBufferARB"];
        fn glGetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint)
            = ["glGetBufferParameterivARB"];
        fn glGetBufferPointerv(target: GLenum, pname: GLenum, params: *mut *mut c_void)
            = ["glGetBufferPointervARB"];
    }
}

gl_extension! {
    /// Buffer objects and queries, as promoted from `GL_ARB_vertex_buffer_object` and
    /// `GL_ARB_occlusion_query`.
    pub struct GL15(GL15Functions) {
        name: "GL_VERSION_1_5",
        core: Some(GLVersion::new(1, 5)),
        extensions: [],
    }
}

#[allow(clippy::missing_safety_doc)]
impl GL15 {
    pub unsafe fn gen_queries(&self, count: usize) -> Vec<GLuint> {
        let mut queries = vec![0; count];
        self.functions.glGenQueries(count as GLsizei, queries.as_mut_ptr());
        queries
    }

    #[inline]
    pub unsafe fn gen_query(&self) -> GLuint {
        let mut query = 0;
        self.functions.glGenQueries(1, &mut query);
        query
    }

    #[inline]
    pub unsafe fn delete_queries(&self, queries: &[GLuint]) {
        self.functions.glDeleteQueries(marshal::count(queries), queries.as_ptr())
    }

    #[inline]
    pub unsafe fn is_query(&self, query: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsQuery(query))
    }

    #[inline]
    pub unsafe fn begin_query(&self, target: QueryTarget, query: GLuint) {
        self.functions.glBeginQuery(target.into(), query)
    }

    #[inline]
    pub unsafe fn end_query(&self, target: QueryTarget) {
        self.functions.glEndQuery(target.into())
    }

    /// The name of the query currently active on `target`, or 0.
    pub unsafe fn get_current_query(&self, target: QueryTarget) -> GLuint {
        let mut value = 0;
        self.functions.glGetQueryiv(target.into(), gl::CURRENT_QUERY, &mut value);
        value as GLuint
    }

    pub unsafe fn get_query_counter_bits(&self, target: QueryTarget) -> GLint {
        let mut value = 0;
        self.functions.glGetQueryiv(target.into(), gl::QUERY_COUNTER_BITS, &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_query_object_i(&self, query: GLuint, pname: QueryObjectParameter) -> GLint {
        let mut value = 0;
        self.functions.glGetQueryObjectiv(query, pname.into(), &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_query_object_ui(&self, query: GLuint, pname: QueryObjectParameter) -> GLuint {
        let mut value = 0;
        self.functions.glGetQueryObjectuiv(query, pname.into(), &mut value);
        value
    }

    #[inline]
    pub unsafe fn bind_buffer(&self, target: BufferTarget, buffer: GLuint) {
        self.functions.glBindBuffer(target.into(), buffer)
    }

    #[inline]
    pub unsafe fn delete_buffers(&self, buffers: &[GLuint]) {
        self.functions.glDeleteBuffers(marshal::count(buffers), buffers.as_ptr())
    }

    #[inline]
    pub unsafe fn delete_buffer(&self, buffer: GLuint) {
        self.delete_buffers(&[buffer])
    }

    pub unsafe fn gen_buffers(&self, count: usize) -> Vec<GLuint> {
        let mut buffers = vec![0; count];
        self.functions.glGenBuffers(count as GLsizei, buffers.as_mut_ptr());
        buffers
    }

    #[inline]
    pub unsafe fn gen_buffer(&self) -> GLuint {
        let mut buffer = 0;
        self.functions.glGenBuffers(1, &mut buffer);
        buffer
    }

    #[inline]
    pub unsafe fn is_buffer(&self, buffer: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsBuffer(buffer))
    }

    /// Creates the data store of the bound buffer, initialized with `data`.
    pub unsafe fn buffer_data<T>(&self, target: BufferTarget, data: &[T], usage: BufferUsage)
                                 where T: Pod {
        self.functions.glBufferData(target.into(),
                                    marshal::byte_len(data),
                                    data.as_ptr() as *const c_void,
                                    usage.into())
    }

    /// Creates an uninitialized data store of `size` bytes.
    pub unsafe fn buffer_data_uninit(&self, target: BufferTarget, size: usize, usage: BufferUsage) {
        self.functions.glBufferData(target.into(), size as GLsizeiptr, ptr::null(), usage.into())
    }

    pub unsafe fn buffer_sub_data<T>(&self, target: BufferTarget, offset: usize, data: &[T])
                                     where T: Pod {
        self.functions.glBufferSubData(target.into(),
                                       offset as GLintptr,
                                       marshal::byte_len(data),
                                       data.as_ptr() as *const c_void)
    }

    pub unsafe fn get_buffer_sub_data<T>(&self, target: BufferTarget, offset: usize, data: &mut [T])
                                         where T: Pod {
        self.functions.glGetBufferSubData(target.into(),
                                          offset as GLintptr,
                                          marshal::byte_len(data),
                                          data.as_mut_ptr() as *mut c_void)
    }

    /// Maps the whole data store of the bound buffer. Returns null on failure.
    #[inline]
    pub unsafe fn map_buffer(&self, target: BufferTarget, access: BufferAccess) -> *mut c_void {
        self.functions.glMapBuffer(target.into(), access.into())
    }

    /// Returns `false` if the data store became corrupt while mapped.
    #[inline]
    pub unsafe fn unmap_buffer(&self, target: BufferTarget) -> bool {
        marshal::from_gl_bool(self.functions.glUnmapBuffer(target.into()))
    }

    #[inline]
    pub unsafe fn get_buffer_parameter_i(&self, target: BufferTarget, pname: BufferParameter) -> GLint {
        let mut value = 0;
        self.functions.glGetBufferParameteriv(target.into(), pname.into(), &mut value);
        value
    }

    /// The pointer returned by the mapping currently active on `target`, or null.
    pub unsafe fn get_buffer_map_pointer(&self, target: BufferTarget) -> *mut c_void {
        let mut pointer = ptr::null_mut();
        self.functions.glGetBufferPointerv(target.into(), gl::BUFFER_MAP_POINTER, &mut pointer);
        pointer
    }
}
