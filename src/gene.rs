//! Genes: the root of the annotation hierarchy.

use crate::error::Error;
use crate::interval::Interval;
use crate::strand::Strand;
use crate::transcript::Transcript;

/// A gene on a named sequence, owning its transcripts.
#[derive(Debug, Clone)]
pub struct Gene {
    pub sequence_name: String,
    pub source: String,
    pub interval: Interval,
    pub strand: Strand,
    pub id: String,
    pub name: String,
    pub score: Option<f64>,
    pub transcripts: Vec<Transcript>,
}

impl Gene {
    #[must_use]
    pub fn new(
        sequence_name: String,
        source: String,
        interval: Interval,
        strand: Strand,
        id: String,
        name: String,
        score: Option<f64>,
    ) -> Self {
        Self {
            sequence_name,
            source,
            interval,
            strand,
            id,
            name,
            score,
            transcripts: Vec::new(),
        }
    }

    pub fn add_transcript(&mut self, transcript: Transcript) {
        self.transcripts.push(transcript);
    }

    /// Span length of the gene interval.
    #[must_use]
    pub fn length(&self) -> u64 {
        self.interval.length()
    }

    /// Shift every coordinate in the owned tree by `offset`.
    ///
    /// A negative offset larger than the gene start would produce
    /// non-positive coordinates; that case fails before any mutation, leaving
    /// the tree unchanged. This is the only level that validates the range.
    pub fn shift(&mut self, offset: i32) -> Result<(), Error> {
        if offset < 0 && i64::from(offset.unsigned_abs()) > i64::from(self.interval.start) {
            return Err(Error::OutOfRange(format!(
                "offset {offset} would shift gene '{}' (start {}) past the sequence origin",
                self.id, self.interval.start
            )));
        }
        self.interval.shift(offset);
        for transcript in &mut self.transcripts {
            transcript.shift(offset);
        }
        Ok(())
    }

    /// Minimum coding-segment length across all transcripts.
    ///
    /// Every transcript must own a coding group with at least one segment.
    pub fn length_of_shortest_cds_segment(&self) -> Result<u64, Error> {
        let mut min_length: Option<u64> = None;
        for transcript in &self.transcripts {
            let length = transcript.length_of_shortest_cds_segment()?;
            min_length = Some(min_length.map_or(length, |m| m.min(length)));
        }
        min_length
            .ok_or_else(|| Error::MissingData(format!("gene '{}' has no transcripts", self.id)))
    }

    /// Serialize the whole tree as GFF3: the gene row, then each transcript
    /// block in declaration order.
    #[must_use]
    pub fn to_gff3(&self) -> String {
        let score = self
            .score
            .map_or_else(|| ".".to_string(), |s| s.to_string());
        let mut out = format!(
            "{}\t{}\tgene\t{}\t{}\t{score}\t{}\t.\tID={};Name={}\n",
            self.sequence_name,
            self.source,
            self.interval.start,
            self.interval.end,
            self.strand,
            self.id,
            self.name
        );
        for transcript in &self.transcripts {
            out.push_str(&transcript.to_gff3(&self.sequence_name, &self.source, self.strand));
        }
        out
    }
}
