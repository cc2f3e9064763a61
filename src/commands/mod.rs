pub mod clone;
pub mod completions;
pub mod create;
pub mod list;
pub mod resume;
pub mod sh;
