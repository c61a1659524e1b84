// src/sitemap/writer.rs
// =============================================================================
// Renders and saves the XML sitemap.
//
// We build the whole document in memory first and only then write it out in a
// single call, so a failure while rendering never leaves a half-written file
// behind.
//
// We use the `quick-xml` crate which:
// - Writes XML as a stream of events (start tag, text, end tag)
// - Escapes text for us (&, <, >, quotes)
// - Can indent the output for humans
// =============================================================================

use crate::error::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::Path;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// Renders a list of URLs as a sitemap document
//
// Parameters:
//   urls: page URLs in the order they should appear
//
// Returns: the complete XML document as a String
pub fn render_sitemap(urls: &[String]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    writer.write_event(Event::Start(urlset))?;

    for url in urls {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        writer.write_event(Event::Start(BytesStart::new("loc")))?;
        writer.write_event(Event::Text(BytesText::new(url)))?;
        writer.write_event(Event::End(BytesEnd::new("loc")))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8_lossy(&writer.into_inner()).into_owned();
    xml.push('\n');
    Ok(xml)
}

// Renders the sitemap and writes it to `path`, replacing any existing file
pub fn write_sitemap(urls: &[String], path: &Path) -> Result<()> {
    let xml = render_sitemap(urls)?;
    std::fs::write(path, xml)?;
    Ok(())
}
