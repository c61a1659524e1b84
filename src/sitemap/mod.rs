// src/sitemap/mod.rs
// =============================================================================
// This module turns the list of crawled URLs into a sitemap file.
//
// Format (sitemaps.org protocol 0.9):
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com/</loc>
//     </url>
//   </urlset>
// =============================================================================

mod writer;

pub use writer::write_sitemap;
