// glbind/src/info.rs
//
//! OpenGL information.

use std::fmt::{self, Display, Formatter};

/// The API (OpenGL or OpenGL ES).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GLApi {
    GL,
    GLES,
}

/// An OpenGL version.
///
/// Versions order by major, then minor number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GLVersion {
    pub major: u8,
    pub minor: u8,
}

impl GLVersion {
    #[inline]
    pub const fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Parses the string returned by `glGetString(GL_VERSION)`.
    ///
    /// Desktop GL reports `<major>.<minor>[.<release>] [vendor info]`; OpenGL ES prefixes that
    /// with `OpenGL ES ` (and, for 1.x, a profile such as `CM`).
    pub fn parse(version_string: &str) -> Option<(GLApi, GLVersion)> {
        let (api, rest) = match version_string.strip_prefix("OpenGL ES") {
            Some(rest) => {
                let rest = rest.trim_start_matches(|c: char| c == '-' || c.is_ascii_alphabetic());
                (GLApi::GLES, rest.trim_start())
            }
            None => (GLApi::GL, version_string.trim_start()),
        };

        let number = rest.split(|c: char| c.is_whitespace()).next()?;
        let mut components = number.split('.');
        let major = components.next()?.parse().ok()?;
        let minor = components.next()?
                              .trim_end_matches(|c: char| !c.is_ascii_digit())
                              .parse()
                              .ok()?;
        Some((api, GLVersion::new(major, minor)))
    }
}

impl Display for GLVersion {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}.{}", self.major, self.minor)
    }
}
