//! Text transforms surrounding the tree view: pretty-print, minify, string
//! escape/unescape, and JSON to XML. All are pure `text -> text` functions;
//! none of them touches materializer state.

mod escape;
mod pretty;
mod xml;

pub use escape::{escape, unescape};
pub use pretty::{minify, pretty_print};
pub use xml::to_xml;
