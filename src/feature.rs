//! Multi-segment gene features: exons, coding segments, codon markers.

use crate::feature_kind::FeatureKind;
use crate::interval::Interval;
use crate::strand::Strand;

/// A feature composed of one or more intervals under a single transcript.
///
/// `ids` and `intervals` are index-aligned and authoritative. `names`,
/// `scores`, and `phases` are index-aligned with them but may be shorter; a
/// missing entry renders as the `.` placeholder (or, for names, drops the
/// `Name=` attribute). The owning transcript is referenced by `parent_id`
/// only, never by a structural link.
#[derive(Debug, Clone)]
pub struct Feature {
    pub kind: FeatureKind,
    pub ids: Vec<String>,
    pub names: Vec<String>,
    pub intervals: Vec<Interval>,
    pub scores: Vec<f64>,
    pub phases: Vec<u8>,
    pub parent_id: Option<String>,
}

impl Feature {
    #[must_use]
    pub fn new(
        kind: FeatureKind,
        ids: Vec<String>,
        names: Vec<String>,
        intervals: Vec<Interval>,
        scores: Vec<f64>,
        parent_id: Option<String>,
    ) -> Self {
        Self {
            kind,
            ids,
            names,
            intervals,
            scores,
            phases: Vec::new(),
            parent_id,
        }
    }

    /// A coding-segment feature with per-interval reading-frame phases.
    #[must_use]
    pub fn cds(
        ids: Vec<String>,
        names: Vec<String>,
        intervals: Vec<Interval>,
        scores: Vec<f64>,
        phases: Vec<u8>,
        parent_id: Option<String>,
    ) -> Self {
        Self {
            kind: FeatureKind::Cds,
            ids,
            names,
            intervals,
            scores,
            phases,
            parent_id,
        }
    }

    /// Total number of bases covered: the sum of per-interval lengths, not
    /// the enclosing span.
    #[must_use]
    pub fn length(&self) -> u64 {
        self.intervals.iter().map(Interval::length).sum()
    }

    /// Minimum per-interval length, or `None` for a feature with no
    /// intervals.
    #[must_use]
    pub fn length_of_shortest_segment(&self) -> Option<u64> {
        self.intervals.iter().map(Interval::length).min()
    }

    /// Score for the i-th interval, if one was recorded.
    #[must_use]
    pub fn score_at(&self, i: usize) -> Option<f64> {
        self.scores.get(i).copied()
    }

    /// Reading-frame phase for the i-th interval. Always `None` for kinds
    /// that do not carry phases.
    #[must_use]
    pub fn phase_at(&self, i: usize) -> Option<u8> {
        if self.kind.has_phase() {
            self.phases.get(i).copied()
        } else {
            None
        }
    }

    /// Shift every interval by `offset`. No bounds checking happens here;
    /// range validation is the gene's responsibility.
    pub fn shift(&mut self, offset: i32) {
        for interval in &mut self.intervals {
            interval.shift(offset);
        }
    }

    /// GFF3 column 9 for the i-th interval: `ID=`, optional `Name=`, and
    /// `Parent=`. `None` when the feature has no i-th id or no parent id, in
    /// which case no row is emitted for that interval.
    #[must_use]
    pub fn attribute_entry(&self, i: usize) -> Option<String> {
        let id = self.ids.get(i)?;
        let parent_id = self.parent_id.as_deref()?;
        let mut entry = format!("ID={id};");
        if let Some(name) = self.names.get(i) {
            entry.push_str(&format!("Name={name};"));
        }
        entry.push_str(&format!("Parent={parent_id}"));
        Some(entry)
    }

    /// Serialize as GFF3, one row per interval in declaration order.
    ///
    /// Sequence name, source, and strand come from the owning gene.
    #[must_use]
    pub fn to_gff3(&self, sequence_name: &str, source: &str, strand: Strand) -> String {
        let mut out = String::new();
        for (i, interval) in self.intervals.iter().enumerate() {
            let Some(attributes) = self.attribute_entry(i) else {
                continue;
            };
            let score = self
                .score_at(i)
                .map_or_else(|| ".".to_string(), |s| s.to_string());
            let phase = self
                .phase_at(i)
                .map_or_else(|| ".".to_string(), |p| p.to_string());
            out.push_str(&format!(
                "{sequence_name}\t{source}\t{}\t{}\t{}\t{score}\t{strand}\t{phase}\t{attributes}\n",
                self.kind, interval.start, interval.end
            ));
        }
        out
    }
}
