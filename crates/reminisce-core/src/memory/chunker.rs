//! Overlapping text chunker for memory storage.
//!
//! Uses the `text-splitter` crate to cut text into chunks of at most
//! `max_chunk_size` characters, sharing up to `overlap` characters between
//! neighbours. The splitter prefers the coarsest boundary that fits
//! (paragraphs, lines, sentences, words) and only falls back to hard cuts
//! between characters when a single run of text is too long.

use text_splitter::{ChunkConfig, Characters, TextSplitter};
use uuid::Uuid;

use reminisce_types::config::ChunkingConfig;
use reminisce_types::error::MemoryError;
use reminisce_types::memory::{
    META_CHUNK_INDEX, META_DOCUMENT_ID, META_TEXT, MemoryChunk, Metadata,
};

/// Splits memory text into identified, metadata-tagged chunks.
pub struct Chunker {
    splitter: TextSplitter<Characters>,
}

impl Chunker {
    /// Build a chunker, rejecting sizes the splitter cannot honour.
    pub fn new(config: ChunkingConfig) -> Result<Self, MemoryError> {
        if config.max_chunk_size == 0 {
            return Err(MemoryError::InvalidInput(
                "max_chunk_size must be greater than zero".to_string(),
            ));
        }
        if config.overlap >= config.max_chunk_size {
            return Err(MemoryError::InvalidInput(format!(
                "overlap ({}) must be smaller than max_chunk_size ({})",
                config.overlap, config.max_chunk_size
            )));
        }

        let chunk_config = ChunkConfig::new(config.max_chunk_size)
            .with_overlap(config.overlap)
            .map_err(|e| MemoryError::InvalidInput(format!("invalid chunk configuration: {e}")))?;

        Ok(Self {
            splitter: TextSplitter::new(chunk_config),
        })
    }

    /// Split `text` into chunks sharing one freshly generated `document_id`.
    ///
    /// Caller metadata is copied onto every chunk first; `document_id`,
    /// `chunk_index` and `text` are then written over it so a caller can
    /// never spoof chunk identity.
    pub fn split(
        &self,
        text: &str,
        metadata: Option<&Metadata>,
    ) -> Result<Vec<MemoryChunk>, MemoryError> {
        if text.trim().is_empty() {
            return Err(MemoryError::InvalidInput("text is empty".to_string()));
        }

        let document_id = Uuid::now_v7();

        let chunks: Vec<MemoryChunk> = self
            .splitter
            .chunks(text)
            .enumerate()
            .map(|(i, piece)| {
                let chunk_index = i as u32;
                let mut chunk_metadata = metadata.cloned().unwrap_or_default();
                chunk_metadata.insert(
                    META_DOCUMENT_ID.to_string(),
                    serde_json::Value::String(document_id.to_string()),
                );
                chunk_metadata.insert(META_CHUNK_INDEX.to_string(), chunk_index.into());
                chunk_metadata.insert(
                    META_TEXT.to_string(),
                    serde_json::Value::String(piece.to_string()),
                );

                MemoryChunk {
                    document_id,
                    chunk_index,
                    text: piece.to_string(),
                    metadata: chunk_metadata,
                }
            })
            .collect();

        if chunks.is_empty() {
            return Err(MemoryError::InvalidInput(
                "text produced no chunks".to_string(),
            ));
        }

        tracing::debug!(
            document_id = %document_id,
            chunks = chunks.len(),
            "Split memory text"
        );

        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunker() -> Chunker {
        Chunker::new(ChunkingConfig::default()).unwrap()
    }

    /// ~2,400 characters of distinct sentences, split into paragraphs.
    fn long_memory() -> String {
        (0..48)
            .map(|i| {
                let sentence = format!("On summer day number {i} we walked along the shore. ");
                if i % 6 == 5 {
                    format!("{sentence}\n\n")
                } else {
                    sentence
                }
            })
            .collect()
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = chunker().split("", None).unwrap_err();
        assert!(matches!(err, MemoryError::InvalidInput(_)));
    }

    #[test]
    fn whitespace_text_is_rejected() {
        let err = chunker().split("  \n\t ", None).unwrap_err();
        assert!(matches!(err, MemoryError::InvalidInput(_)));
    }

    #[test]
    fn short_text_is_single_chunk() {
        let chunks = chunker().split("hello world", None).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_index, 0);
        assert_eq!(chunks[0].text, "hello world");
        assert_eq!(chunks[0].metadata[META_TEXT], "hello world");
        assert_eq!(chunks[0].metadata[META_CHUNK_INDEX], 0);
        assert_eq!(
            chunks[0].metadata[META_DOCUMENT_ID],
            chunks[0].document_id.to_string()
        );
    }

    #[test]
    fn long_text_chunks_are_bounded_and_contiguous() {
        let text = long_memory();
        let chunks = chunker().split(&text, None).unwrap();
        assert!(chunks.len() > 1);

        let document_id = chunks[0].document_id;
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index as usize, i);
            assert_eq!(chunk.document_id, document_id);
            assert!(chunk.text.chars().count() <= 500);
            assert!(!chunk.text.is_empty());
        }
    }

    /// Byte span of each chunk in `text`, located in order.
    fn locate(text: &str, chunks: &[MemoryChunk]) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut search_from = 0;
        for chunk in chunks {
            let start = search_from
                + text[search_from..]
                    .find(&chunk.text)
                    .expect("chunk must appear in source after its predecessor");
            spans.push((start, start + chunk.text.len()));
            search_from = start + 1;
        }
        spans
    }

    #[test]
    fn long_text_chunks_reconstruct_source() {
        let text = long_memory();
        let chunks = chunker().split(&text, None).unwrap();
        let spans = locate(&text, &chunks);

        // Neighbours overlap or are separated by whitespace only, and
        // together they span the whole text.
        assert_eq!(spans[0].0, 0);
        assert_eq!(spans.last().unwrap().1, text.trim_end().len());
        for pair in spans.windows(2) {
            let (_, prev_end) = pair[0];
            let (next_start, _) = pair[1];
            if next_start > prev_end {
                assert!(text[prev_end..next_start].trim().is_empty());
            }
        }
    }

    #[test]
    fn consecutive_chunks_share_bounded_overlap() {
        let config = ChunkingConfig::default();
        let text = long_memory();
        let chunks = Chunker::new(config).unwrap().split(&text, None).unwrap();
        let spans = locate(&text, &chunks);
        assert!(spans.len() > 1);

        for pair in spans.windows(2) {
            let (_, prev_end) = pair[0];
            let (next_start, _) = pair[1];
            assert!(
                next_start < prev_end,
                "chunk starting at {next_start} does not overlap predecessor ending at {prev_end}"
            );
            // ASCII source, so bytes are characters.
            assert!(prev_end - next_start <= config.overlap);
        }
    }

    #[test]
    fn zero_overlap_chunks_do_not_share_text() {
        let text = long_memory();
        let chunks = Chunker::new(ChunkingConfig {
            max_chunk_size: 500,
            overlap: 0,
        })
        .unwrap()
        .split(&text, None)
        .unwrap();
        let spans = locate(&text, &chunks);

        for pair in spans.windows(2) {
            assert!(pair[1].0 >= pair[0].1);
        }
    }

    #[test]
    fn text_without_separators_is_hard_cut() {
        let text: String = "abcdefghijklmnopqrstuvwxyz".chars().cycle().take(1_200).collect();
        let chunks = chunker().split(&text, None).unwrap();
        assert!(chunks.len() >= 3);
        for chunk in &chunks {
            assert!(chunk.text.chars().count() <= 500);
        }
        let total: usize = chunks.iter().map(|c| c.text.len()).sum();
        assert!(total >= text.len());
        assert!(text.starts_with(&chunks[0].text));
        assert!(text.ends_with(&chunks.last().unwrap().text));
    }

    #[test]
    fn caller_metadata_applies_but_identity_wins() {
        let mut metadata = Metadata::new();
        metadata.insert("tag".to_string(), "family".into());
        metadata.insert(META_DOCUMENT_ID.to_string(), "spoofed".into());
        metadata.insert(META_CHUNK_INDEX.to_string(), 99.into());
        metadata.insert(META_TEXT.to_string(), "not the chunk".into());

        let chunks = chunker()
            .split("I went to the beach in 1995 with my family.", Some(&metadata))
            .unwrap();

        let chunk_meta = &chunks[0].metadata;
        assert_eq!(chunk_meta["tag"], "family");
        assert_eq!(chunk_meta[META_DOCUMENT_ID], chunks[0].document_id.to_string());
        assert_eq!(chunk_meta[META_CHUNK_INDEX], 0);
        assert_eq!(
            chunk_meta[META_TEXT],
            "I went to the beach in 1995 with my family."
        );
    }

    #[test]
    fn each_call_gets_a_fresh_document_id() {
        let c = chunker();
        let a = c.split("first memory", None).unwrap();
        let b = c.split("first memory", None).unwrap();
        assert_ne!(a[0].document_id, b[0].document_id);
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        assert!(Chunker::new(ChunkingConfig {
            max_chunk_size: 0,
            overlap: 0,
        })
        .is_err());
        assert!(Chunker::new(ChunkingConfig {
            max_chunk_size: 100,
            overlap: 100,
        })
        .is_err());
        assert!(Chunker::new(ChunkingConfig {
            max_chunk_size: 100,
            overlap: 0,
        })
        .is_ok());
    }
}
