pub mod binding;
pub mod iri;
pub mod vocab;
