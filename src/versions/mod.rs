// glbind/src/versions/mod.rs
//
//! Entry points that entered core OpenGL directly rather than through an extension.

mod gl11;
mod gl12;
mod gl13;
mod gl14;
mod gl15;
mod gl20;
mod gl21;
mod gl30;
mod gl32;

pub use self::gl11::{GL11Functions, GL11};
pub use self::gl12::{GL12Functions, GL12};
pub use self::gl13::{GL13Functions, GL13};
pub use self::gl14::{GL14Functions, PointParameter, GL14};
pub use self::gl15::{GL15Functions, GL15};
pub use self::gl20::{ActiveVariable, GL20Functions, ProgramParameter, ShaderParameter};
pub use self::gl20::{UniformType, GL20};
pub use self::gl21::{GL21Functions, GL21};
pub use self::gl30::{GL30Functions, GL30};
pub use self::gl32::{GL32Functions, GL32};
