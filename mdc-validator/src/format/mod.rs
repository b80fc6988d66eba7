//! Rule-file format handling.
//!
//! - `frontmatter` — header/body layout checks and YAML header parsing

pub mod frontmatter;
