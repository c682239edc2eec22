mod attribute;
mod convert;
mod diagnostic;
mod error;
mod naming;
mod path;
mod validate;
mod value;
pub mod validator;

pub use self::attribute::*;
pub use self::diagnostic::*;
pub use self::error::*;
pub use self::naming::*;
pub use self::path::*;
pub use self::validator::Validator;
pub use self::value::*;
