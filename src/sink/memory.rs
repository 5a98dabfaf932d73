/// In-memory quad sink
///
/// Collects quads into a `Vec`, in write order. Implements the native
/// batch path, so a `BatchedSink` wrapping it forwards whole batches.
/// Used by the integration tests and by library consumers that want to
/// inspect a quad stream before persisting it.
use crate::error::{BatchError, SinkError};
use crate::quad::Quad;
use crate::sink::{BatchQuadWriter, QuadWriter};

#[derive(Debug, Default)]
pub struct MemorySink {
    quads: Vec<Quad>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All quads written so far, in write order.
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Consume the sink and take the collected quads.
    pub fn into_quads(self) -> Vec<Quad> {
        self.quads
    }
}

impl QuadWriter for MemorySink {
    fn write_quad(&mut self, quad: &Quad) -> Result<(), SinkError> {
        self.quads.push(quad.clone());
        Ok(())
    }

    fn as_batch(&mut self) -> Option<&mut dyn BatchQuadWriter> {
        Some(self)
    }
}

impl BatchQuadWriter for MemorySink {
    fn write_quads(&mut self, quads: &[Quad]) -> Result<usize, BatchError> {
        self.quads.extend_from_slice(quads);
        Ok(quads.len())
    }
}
