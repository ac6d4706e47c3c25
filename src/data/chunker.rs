// ============================================================
// Layer 4 — Unit Chunker
// ============================================================
// Splits the combined review text into pieces the summariser
// can accept.
//
// Why do we need chunking?
//   The summariser has a hard input limit measured in its own
//   units (token ids for a HuggingFace tokenizer, words for the
//   whitespace codec). The ranked reviews usually exceed it.
//
// Greedy fill, no overlap:
//   - Encode the text to units with the summariser's codec
//   - Append units to the current chunk until the next one
//     would push it past `max_units`
//   - Close the chunk and start a new one
//   - Whatever is left becomes a final, possibly short, chunk
//
// Example with max_units=3:
//   Units:   a b c d e f g
//   Chunk 1: a b c
//   Chunk 2: d e f
//   Chunk 3: g
//
// Concatenating the chunks in order gives back the original
// unit sequence exactly.
//
// Reference: Rust Book §8 (Slices)

use tracing::debug;

use crate::domain::traits::UnitCodec;
use crate::error::{ReviewError, Result};

#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    /// Upper bound on units per chunk
    max_units: usize,
}

impl Chunker {
    /// Create a new Chunker. `max_units` must be positive.
    pub fn new(max_units: usize) -> Result<Self> {
        if max_units == 0 {
            return Err(ReviewError::validation("max_units must be a positive integer"));
        }
        Ok(Self { max_units })
    }

    /// Greedy split of an already-encoded unit sequence.
    pub fn chunk_units<U: Clone>(&self, units: &[U]) -> Vec<Vec<U>> {
        let mut chunks = Vec::with_capacity(self.num_chunks(units.len()));
        let mut current: Vec<U> = Vec::with_capacity(self.max_units.min(units.len()));

        for unit in units {
            if current.len() + 1 > self.max_units {
                chunks.push(std::mem::take(&mut current));
            }
            current.push(unit.clone());
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }

    /// Encode `text`, split it, and decode each chunk back to text.
    pub fn chunk<C: UnitCodec>(&self, codec: &C, text: &str) -> Result<Vec<String>> {
        let units = codec.encode(text)?;
        let chunks = self.chunk_units(&units);

        debug!(
            units = units.len(),
            chunks = chunks.len(),
            max_units = self.max_units,
            "chunked summariser input"
        );

        chunks.iter().map(|c| codec.decode(c)).collect()
    }

    /// Returns how many chunks `unit_count` units would produce
    pub fn num_chunks(&self, unit_count: usize) -> usize {
        unit_count.div_ceil(self.max_units)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::tokenizer_store::WhitespaceCodec;
    use proptest::prelude::*;

    #[test]
    fn test_basic_chunking() {
        let c = Chunker::new(3).unwrap();
        let chunks = c.chunk_units(&["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(chunks, vec![vec!["a", "b", "c"], vec!["d", "e", "f"], vec!["g"]]);
    }

    #[test]
    fn test_exact_multiple_has_no_empty_tail() {
        let c = Chunker::new(2).unwrap();
        let chunks = c.chunk_units(&[1, 2, 3, 4]);
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_short_text_gives_one_chunk() {
        let c = Chunker::new(100).unwrap();
        let chunks = c.chunk(&WhitespaceCodec, "just a few words").unwrap();
        assert_eq!(chunks, vec!["just a few words".to_string()]);
    }

    #[test]
    fn test_empty_text_gives_no_chunks() {
        let c = Chunker::new(5).unwrap();
        assert!(c.chunk(&WhitespaceCodec, "").unwrap().is_empty());
    }

    #[test]
    fn test_zero_max_units_is_rejected() {
        let err = Chunker::new(0).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_num_chunks() {
        let c = Chunker::new(4).unwrap();
        assert_eq!(c.num_chunks(0), 0);
        assert_eq!(c.num_chunks(4), 1);
        assert_eq!(c.num_chunks(9), 3);
    }

    proptest! {
        #[test]
        fn chunks_round_trip_and_respect_bound(
            units in proptest::collection::vec(any::<u32>(), 0..300),
            max_units in 1usize..40,
        ) {
            let c = Chunker::new(max_units).unwrap();
            let chunks = c.chunk_units(&units);

            prop_assert!(chunks.iter().all(|ch| !ch.is_empty() && ch.len() <= max_units));
            prop_assert_eq!(chunks.len(), c.num_chunks(units.len()));

            let rebuilt: Vec<u32> = chunks.concat();
            prop_assert_eq!(rebuilt, units);
        }
    }
}
