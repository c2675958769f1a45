//! Transcripts: exon and coding-segment groups under a single gene.

use crate::error::Error;
use crate::feature::Feature;
use crate::feature_kind::FeatureKind;
use crate::interval::Interval;
use crate::strand::Strand;

/// A transcript owning one optional exon group, one optional coding-segment
/// group, and any number of auxiliary single-purpose features.
///
/// The owning gene is referenced by `parent_id` only.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub id: String,
    pub name: String,
    pub interval: Interval,
    pub parent_id: String,
    pub exons: Option<Feature>,
    pub cds: Option<Feature>,
    pub other_features: Vec<Feature>,
}

impl Transcript {
    #[must_use]
    pub fn new(id: String, name: String, interval: Interval, parent_id: String) -> Self {
        Self {
            id,
            name,
            interval,
            parent_id,
            exons: None,
            cds: None,
            other_features: Vec::new(),
        }
    }

    pub fn set_exons(&mut self, exons: Feature) {
        self.exons = Some(exons);
    }

    pub fn set_cds(&mut self, cds: Feature) {
        self.cds = Some(cds);
    }

    pub fn add_feature(&mut self, feature: Feature) {
        self.other_features.push(feature);
    }

    /// Span length of the transcript interval, not the sum of its children.
    #[must_use]
    pub fn length(&self) -> u64 {
        self.interval.length()
    }

    /// Shift the transcript span and every owned feature by `offset`.
    ///
    /// Range validation happens at the gene level only.
    pub fn shift(&mut self, offset: i32) {
        self.interval.shift(offset);
        if let Some(exons) = &mut self.exons {
            exons.shift(offset);
        }
        if let Some(cds) = &mut self.cds {
            cds.shift(offset);
        }
        for feature in &mut self.other_features {
            feature.shift(offset);
        }
    }

    /// Minimum segment length of the coding group.
    ///
    /// A transcript without a coding group, or with a coding group that owns
    /// no segments, has no defined answer.
    pub fn length_of_shortest_cds_segment(&self) -> Result<u64, Error> {
        let cds = self.cds.as_ref().ok_or_else(|| {
            Error::MissingData(format!("transcript '{}' has no CDS", self.id))
        })?;
        cds.length_of_shortest_segment().ok_or_else(|| {
            Error::MissingData(format!("CDS of transcript '{}' has no segments", self.id))
        })
    }

    /// Whether any auxiliary feature has the given kind.
    #[must_use]
    pub fn has_feature(&self, kind: &FeatureKind) -> bool {
        self.other_features.iter().any(|f| f.kind == *kind)
    }

    #[must_use]
    pub fn has_start_codon(&self) -> bool {
        self.has_feature(&FeatureKind::StartCodon)
    }

    #[must_use]
    pub fn has_stop_codon(&self) -> bool {
        self.has_feature(&FeatureKind::StopCodon)
    }

    /// Serialize as GFF3: the mRNA row, then the exon group, the coding
    /// group, and the auxiliary features, each in declaration order.
    #[must_use]
    pub fn to_gff3(&self, sequence_name: &str, source: &str, strand: Strand) -> String {
        let mut out = format!(
            "{sequence_name}\t{source}\tmRNA\t{}\t{}\t.\t{strand}\t.\tID={};Name={};Parent={}\n",
            self.interval.start, self.interval.end, self.id, self.name, self.parent_id
        );
        if let Some(exons) = &self.exons {
            out.push_str(&exons.to_gff3(sequence_name, source, strand));
        }
        if let Some(cds) = &self.cds {
            out.push_str(&cds.to_gff3(sequence_name, source, strand));
        }
        for feature in &self.other_features {
            out.push_str(&feature.to_gff3(sequence_name, source, strand));
        }
        out
    }
}
