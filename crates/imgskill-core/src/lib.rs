pub mod consts;
pub mod convert;
pub mod error;
pub mod io;
pub mod model;
pub mod params;
pub mod script;

pub use convert::{convert, Conversion};
pub use error::{ImgSkillError, Result};
