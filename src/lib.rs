//! Extract documentation from annotated SCSS functions and mixins.
//!
//! The parsing pipeline is exposed for callers that want to drive it
//! themselves; the `scssdoc` binary wraps it with file handling and
//! rendering.

pub mod model;
pub mod parser;
pub mod render;
pub mod syntax;
pub mod toc;

pub use parser::block::{find_comment_block, parse_comment_block};
pub use parser::line::parse_line;
pub use parser::parse_file;
