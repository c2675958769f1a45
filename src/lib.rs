//! Locus: gene annotation object model with GFF3 serialization.

pub mod error;

pub mod feature;
pub mod feature_kind;
pub mod gene;
pub mod interval;
pub mod strand;
pub mod transcript;
pub mod writer;
