//! GFF3 annotation output, plain or gzip-compressed.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::error::Error;
use crate::gene::Gene;

/// Write a GFF3 annotation: the version pragma followed by one block per
/// gene, in order.
pub fn write_gff3<W: Write>(writer: &mut W, genes: &[Gene]) -> Result<(), Error> {
    writer.write_all(b"##gff-version 3\n")?;
    for gene in genes {
        writer.write_all(gene.to_gff3().as_bytes())?;
    }
    Ok(())
}

/// Write a gzip-compressed GFF3 annotation.
pub fn write_gff3_gz<W: Write>(writer: W, genes: &[Gene]) -> Result<(), Error> {
    let mut encoder = GzEncoder::new(writer, Compression::default());
    write_gff3(&mut encoder, genes)?;
    encoder.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;
    use crate::strand::Strand;
    use crate::transcript::Transcript;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn make_gene(id: &str, start: i32, end: i32) -> Gene {
        let mut gene = Gene::new(
            "chr1".to_string(),
            "test".to_string(),
            Interval::new(start, end),
            Strand::Forward,
            id.to_string(),
            id.to_uppercase(),
            None,
        );
        gene.add_transcript(Transcript::new(
            format!("{id}.t1"),
            format!("{id}.T1"),
            Interval::new(start, end),
            id.to_string(),
        ));
        gene
    }

    #[test]
    fn pragma_then_gene_blocks() {
        let genes = [make_gene("gene1", 100, 500), make_gene("gene2", 700, 900)];
        let mut out = Vec::new();
        write_gff3(&mut out, &genes).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "##gff-version 3");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("chr1\ttest\tgene\t100\t500"));
        assert!(lines[3].starts_with("chr1\ttest\tgene\t700\t900"));
    }

    #[test]
    fn empty_annotation_is_pragma_only() {
        let mut out = Vec::new();
        write_gff3(&mut out, &[]).unwrap();
        assert_eq!(out, b"##gff-version 3\n");
    }

    #[test]
    fn gz_output_decompresses_to_plain_output() {
        let genes = [make_gene("gene1", 100, 500)];

        let mut plain = Vec::new();
        write_gff3(&mut plain, &genes).unwrap();

        let mut compressed = Vec::new();
        write_gff3_gz(&mut compressed, &genes).unwrap();

        let mut decompressed = Vec::new();
        GzDecoder::new(compressed.as_slice())
            .read_to_end(&mut decompressed)
            .unwrap();
        assert_eq!(decompressed, plain);
    }
}
