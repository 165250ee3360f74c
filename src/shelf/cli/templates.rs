//! Templates for terminal output, embedded at compile time.
//!
//! Templates are minijinja based and rendered with `trim_blocks`, so a block
//! tag on its own line does not emit a line break. Width math stays in Rust;
//! templates only pick styles and structure.

pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
