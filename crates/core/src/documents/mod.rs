//! Document store module - the untyped storage contract the gateways sit on.
//!
//! A document store holds named collections of JSON documents. Each document
//! has a store-assigned identifier and a flat field map; the store may stamp
//! fields with its own write time on request.

mod documents_model;
mod documents_traits;
mod memory_store;

pub use documents_model::{
    compare_field_values, deserialize_nullable, merge_fields, sort_documents, Document, DocumentWrite, FieldMap,
    OrderBy, SortDirection,
};
pub use documents_traits::DocumentStoreTrait;
pub use memory_store::InMemoryDocumentStore;
