//! Built-in operations

pub mod citation_convert;
pub mod link_convert;
pub mod math_convert;
pub mod remove_after_string;
pub mod remove_single_char_lines;
pub mod update_frontmatter;
pub mod write_file;

pub use self::citation_convert::CitationConvert;
pub use self::link_convert::LinkConvert;
pub use self::math_convert::{MathConvert, MathEngine};
pub use self::remove_after_string::RemoveAfterString;
pub use self::remove_single_char_lines::RemoveSingleCharLines;
pub use self::update_frontmatter::UpdateFrontmatter;
pub use self::write_file::WriteFile;
