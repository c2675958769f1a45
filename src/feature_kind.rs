//! Feature kinds emitted in GFF3 column 3.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kind of a sub-transcript feature.
///
/// The kind determines the GFF3 type label and whether the feature's rows
/// carry a per-interval reading-frame phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Exon,
    Cds,
    StartCodon,
    StopCodon,
    FivePrimeUtr,
    ThreePrimeUtr,
    /// A feature type outside the fixed vocabulary; the label passes through
    /// to output unchanged.
    Other(String),
}

impl FeatureKind {
    /// GFF3 column 3 label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Exon => "exon",
            Self::Cds => "CDS",
            Self::StartCodon => "start_codon",
            Self::StopCodon => "stop_codon",
            Self::FivePrimeUtr => "five_prime_UTR",
            Self::ThreePrimeUtr => "three_prime_UTR",
            Self::Other(label) => label,
        }
    }

    /// Only coding segments carry a per-interval reading-frame phase.
    #[must_use]
    pub fn has_phase(&self) -> bool {
        *self == Self::Cds
    }
}

impl FromStr for FeatureKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "exon" => Self::Exon,
            "CDS" => Self::Cds,
            "start_codon" => Self::StartCodon,
            "stop_codon" => Self::StopCodon,
            "five_prime_UTR" => Self::FivePrimeUtr,
            "three_prime_UTR" => Self::ThreePrimeUtr,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
