//! Typed HTML document tree and HTML5 serializer.
//!
//! Pages are built as trees of [`Element`] and text nodes with a chaining
//! construction API, then serialized to escaped HTML5 text.

pub mod node;
pub mod serialize;

pub use node::{Attributes, Document, Element, Node};
pub use serialize::{serialize_document, serialize_element};
