pub mod font;
pub mod resource;

pub use font::{FontError, FontFormat, FontNames, FontProgram, FontProgramParser, SharedFontData};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
