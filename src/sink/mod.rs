//! Quad destinations and the batched-write adapter
//!
//! A destination implements [`QuadWriter`]; destinations with a native
//! batch path additionally implement [`BatchQuadWriter`] and advertise
//! it through [`QuadWriter::as_batch`]. [`BatchedSink`] gives the
//! importer a uniform batch interface over either kind.

/// In-memory sink collecting quads, batch-capable
pub mod memory;
/// Line-oriented N-Quads text sink
pub mod nquads;

pub use memory::MemorySink;
pub use nquads::NQuadsWriter;

use crate::error::{BatchError, SinkError};
use crate::quad::Quad;

/// One-quad-at-a-time destination.
pub trait QuadWriter {
    /// Write a single quad.
    fn write_quad(&mut self, quad: &Quad) -> Result<(), SinkError>;

    /// Destinations that persist whole batches in one call advertise
    /// that capability here; the default is none.
    fn as_batch(&mut self) -> Option<&mut dyn BatchQuadWriter> {
        None
    }

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Destination that persists a whole batch of quads in one call.
pub trait BatchQuadWriter {
    /// Write a batch, preserving order. On success returns the batch
    /// size; on failure the error reports how many quads were
    /// persisted before it.
    fn write_quads(&mut self, quads: &[Quad]) -> Result<usize, BatchError>;
}

impl<W: QuadWriter + ?Sized> QuadWriter for &mut W {
    fn write_quad(&mut self, quad: &Quad) -> Result<(), SinkError> {
        (**self).write_quad(quad)
    }

    fn as_batch(&mut self) -> Option<&mut dyn BatchQuadWriter> {
        (**self).as_batch()
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }
}

/// Adapts any [`QuadWriter`] into a uniform batch-write interface.
///
/// The underlying mode is probed once at construction: a destination
/// with a native batch path receives whole batches, anything else gets
/// one-quad-at-a-time writes in the same order, stopping at the first
/// failure. Both modes produce an identical fact stream.
pub struct BatchedSink<W: QuadWriter> {
    inner: W,
    native_batch: bool,
}

impl<W: QuadWriter> BatchedSink<W> {
    pub fn new(mut inner: W) -> Self {
        let native_batch = inner.as_batch().is_some();
        Self {
            inner,
            native_batch,
        }
    }

    /// Write a batch of quads, preserving order.
    pub fn write_quads(&mut self, quads: &[Quad]) -> Result<usize, BatchError> {
        if self.native_batch {
            if let Some(bw) = self.inner.as_batch() {
                return bw.write_quads(quads);
            }
        }
        for (i, quad) in quads.iter().enumerate() {
            self.inner.write_quad(quad).map_err(|source| BatchError {
                written: i,
                total: quads.len(),
                source,
            })?;
        }
        Ok(quads.len())
    }

    /// Flush the underlying destination.
    pub fn flush(&mut self) -> Result<(), SinkError> {
        self.inner.flush()
    }

    /// Give back the wrapped destination.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
