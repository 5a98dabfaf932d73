/// N-Quads text sink
///
/// Serializes each quad as one N-Quads line (label in the graph
/// position). Writes are buffered; callers flush through the
/// `QuadWriter` contract when the stream ends. This sink has no native
/// batch path, so it exercises the sequential fallback of
/// `BatchedSink`.
use crate::error::SinkError;
use crate::quad::Quad;
use crate::sink::QuadWriter;
use std::io::{BufWriter, Write};

pub struct NQuadsWriter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> NQuadsWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }
}

impl<W: Write> QuadWriter for NQuadsWriter<W> {
    fn write_quad(&mut self, quad: &Quad) -> Result<(), SinkError> {
        writeln!(self.out, "{}", quad)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quad::Value;

    #[test]
    fn test_writes_one_line_per_quad() {
        let mut buf = Vec::new();
        {
            let mut writer = NQuadsWriter::new(&mut buf);
            writer
                .write_quad(&Quad::new(
                    Value::iri("sha1:abc"),
                    "rdf:type",
                    Value::iri("git:Commit"),
                ))
                .unwrap();
            writer
                .write_quad(
                    &Quad::new(Value::iri("sha1:abc"), "git:file", Value::iri("sha1:def"))
                        .with_label(Value::literal("a.txt")),
                )
                .unwrap();
            writer.flush().unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "<sha1:abc> <rdf:type> <git:Commit> .\n\
             <sha1:abc> <git:file> <sha1:def> \"a.txt\" .\n"
        );
    }
}
