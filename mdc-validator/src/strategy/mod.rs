//! Validation source strategies.
//!
//! Only the filesystem strategy exists. The core checks in `validator` take
//! content as a string, so another source only needs to supply paths and text.

pub mod fs;
