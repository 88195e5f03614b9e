// glbind/src/macros.rs
//
//! Declarative macros for function tables, extension modules and typed enums.

/// Declares a function table.
///
/// Each line names an entry point, gives its native signature and, optionally, the alternate
/// names to try when the canonical name does not resolve:
///
/// ```ignore
/// gl_functions! {
///     pub struct ARBClipControlFunctions {
///         fn glClipControl(origin: GLenum, depth: GLenum) = ["glClipControlARB"];
///     }
/// }
/// ```
///
/// The table gets one public `FnPtr` field per entry point and one `unsafe` method of the same
/// name that calls through it.
macro_rules! gl_functions {
    (
        $(#[$attr:meta])*
        pub struct $name:ident {
            $(
                $(#[$fattr:meta])*
                fn $func:ident($($arg:ident: $argty:ty),* $(,)?) $(-> $ret:ty)?
                    $(= [$($alt:literal),+ $(,)?])?;
            )+
        }
    ) => {
        $(#[$attr])*
        #[allow(non_snake_case)]
        #[derive(Clone, Copy, Debug)]
        pub struct $name {
            $(pub $func: $crate::loader::FnPtr,)+
        }

        impl $crate::loader::FunctionTable for $name {
            const SLOTS: &'static [$crate::loader::FnSlot] = &[
                $(
                    $crate::loader::FnSlot {
                        name: stringify!($func),
                        alternates: &[$($($alt),+)?],
                    },
                )+
            ];

            fn load_with<F>(mut loadfn: F) -> $name
            where
                F: FnMut(&'static str) -> *const std::os::raw::c_void,
            {
                $name {
                    $(
                        $func: $crate::loader::resolve(&mut loadfn,
                                                       stringify!($func),
                                                       &[$($($alt),+)?]),
                    )+
                }
            }

            fn pointers(&self) -> Vec<$crate::loader::FnPtr> {
                vec![$(self.$func),+]
            }
        }

        #[allow(non_snake_case, clippy::too_many_arguments, clippy::missing_safety_doc)]
        impl $name {
            $(
                $(#[$fattr])*
                #[inline]
                pub unsafe fn $func(&self, $($arg: $argty),*) $(-> $ret)? {
                    let f = self.$func.get(stringify!($func));
                    std::mem::transmute::<*const std::os::raw::c_void,
                                          extern "system" fn($($argty),*) $(-> $ret)?>(f)($($arg),*)
                }
            )+
        }
    };
}

/// Declares the wrapper struct of an extension module around its function table.
macro_rules! gl_extension {
    (
        $(#[$attr:meta])*
        pub struct $name:ident($functions:ident) {
            name: $unit:literal,
            core: $core:expr,
            extensions: [$($extension:literal),* $(,)?],
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Debug)]
        pub struct $name {
            functions: $functions,
        }

        impl $crate::loader::Extension for $name {
            type Functions = $functions;
            const NAME: &'static str = $unit;
            const CORE_VERSION: Option<$crate::info::GLVersion> = $core;
            const EXTENSION_NAMES: &'static [&'static str] = &[$($extension),*];

            #[inline]
            fn from_functions(functions: $functions) -> $name {
                $name { functions }
            }

            #[inline]
            fn functions(&self) -> &$functions {
                &self.functions
            }
        }
    };
}

/// Declares a typed enum whose variants are GL tokens.
macro_rules! gl_enum {
    (
        $(#[$attr:meta])*
        pub enum $name:ident {
            $(
                $(#[$vattr:meta])*
                $variant:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[repr(u32)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vattr])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Converts a raw token back to the enum, if it names one of the variants.
            pub fn from_raw(value: $crate::gl::types::GLenum) -> Option<$name> {
                $(
                    if value == $value {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl From<$name> for $crate::gl::types::GLenum {
            #[inline]
            fn from(value: $name) -> $crate::gl::types::GLenum {
                value as $crate::gl::types::GLenum
            }
        }
    };
}
