mod escape;
mod wordml;

use crate::core::ContentBlock;

pub use escape::{escape, escape_xml, is_xml_char};
pub use wordml::{WordMlRenderer, WML_NAMESPACE};

/// Turns a block sequence into a complete document part.
///
/// Rendering is total; any text renders to some markup.
pub trait Renderer {
    fn render(&self, blocks: &[ContentBlock]) -> String;
}
