//! Document model shared by the composer and the renderers.

pub mod ast;
pub mod record;

pub use ast::ContentBlock;
pub use record::{FieldRecord, NuggetFlags, TopicFlags};
