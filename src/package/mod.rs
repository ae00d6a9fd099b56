//! Package assembler - writes the minimal OOXML part set into a zip container.

pub mod constants;

use self::constants::{content_type as ct, namespace, part, relationship_type, XML_DECLARATION};
use crate::core::ContentBlock;
use crate::render::{Renderer, WordMlRenderer};
use crate::{LineBreakMode, Result};
use log::debug;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Ordered set of package parts, keyed by part name.
///
/// Part names are case-sensitive and forward-slash separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPackage {
    parts: Vec<(String, Vec<u8>)>,
}

impl DocumentPackage {
    /// Builds the four-part package around a rendered main document.
    pub fn minimal(document_xml: String) -> Self {
        Self {
            parts: vec![
                (part::CONTENT_TYPES.to_string(), content_types_xml().into_bytes()),
                (part::PACKAGE_RELS.to_string(), package_rels_xml().into_bytes()),
                (part::MAIN_DOCUMENT.to_string(), document_xml.into_bytes()),
                (part::DOCUMENT_RELS.to_string(), document_rels_xml().into_bytes()),
            ],
        }
    }

    /// Returns the content of the named part.
    pub fn part(&self, name: &str) -> Option<&[u8]> {
        self.parts
            .iter()
            .find(|(part_name, _)| part_name == name)
            .map(|(_, blob)| blob.as_slice())
    }

    /// Part names in write order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(name, _)| name.as_str())
    }

    /// Serializes the package into a deflated zip archive.
    ///
    /// Either the whole archive is returned or an error; never a partial buffer.
    pub fn to_zip(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, blob) in &self.parts {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(blob)?;
            debug!("wrote part {} ({} bytes)", name, blob.len());
        }

        Ok(zip.finish()?.into_inner())
    }
}

/// Renders blocks and packs them into a `.docx` byte buffer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PackageAssembler {
    renderer: WordMlRenderer,
}

impl PackageAssembler {
    pub fn new(line_breaks: LineBreakMode) -> Self {
        Self {
            renderer: WordMlRenderer::new(line_breaks),
        }
    }

    /// Builds the in-memory part set for `blocks`.
    pub fn build(&self, blocks: &[ContentBlock]) -> DocumentPackage {
        DocumentPackage::minimal(self.renderer.render(blocks))
    }

    /// Builds and zips the package for `blocks`.
    pub fn assemble(&self, blocks: &[ContentBlock]) -> Result<Vec<u8>> {
        self.build(blocks).to_zip()
    }
}

fn content_types_xml() -> String {
    format!(
        "{XML_DECLARATION}\n<Types xmlns=\"{}\">\
         <Default Extension=\"rels\" ContentType=\"{}\"/>\
         <Default Extension=\"xml\" ContentType=\"{}\"/>\
         <Override PartName=\"/{}\" ContentType=\"{}\"/>\
         </Types>",
        namespace::OPC_CONTENT_TYPES,
        ct::OPC_RELATIONSHIPS,
        ct::XML,
        part::MAIN_DOCUMENT,
        ct::WML_DOCUMENT_MAIN,
    )
}

fn package_rels_xml() -> String {
    format!(
        "{XML_DECLARATION}\n<Relationships xmlns=\"{}\">\
         <Relationship Id=\"rId1\" Type=\"{}\" Target=\"{}\"/>\
         </Relationships>",
        namespace::OPC_RELATIONSHIPS,
        relationship_type::OFFICE_DOCUMENT,
        part::MAIN_DOCUMENT,
    )
}

// The main document has no outgoing relationships, but Word expects the part.
fn document_rels_xml() -> String {
    format!(
        "{XML_DECLARATION}\n<Relationships xmlns=\"{}\"></Relationships>",
        namespace::OPC_RELATIONSHIPS
    )
}
