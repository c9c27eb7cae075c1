//! Property-based tests for text preparation.

use proptest::prelude::*;

use crate::text::{replace_ligatures, split_into_chunks, ChunkOptions};

// ===== Chunk count and sizes =====

mod chunker_tests {
    use super::*;

    fn window() -> impl Strategy<Value = (usize, usize)> {
        (1usize..40).prop_flat_map(|max_words| (Just(max_words), 0..max_words))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// A text of W words with window M produces ceil(W / M) chunks.
        #[test]
        fn prop_chunk_count(
            words in proptest::collection::vec("[a-z]{1,8}", 0..300),
            (max_words, overlap) in window(),
        ) {
            let text = words.join(" ");
            let chunks: Vec<String> =
                split_into_chunks(&text, "", ChunkOptions::new(max_words, overlap))
                    .unwrap()
                    .collect();

            prop_assert_eq!(chunks.len(), words.len().div_ceil(max_words));
        }

        /// The first chunk holds M words, middle chunks M + O, the last no more.
        #[test]
        fn prop_chunk_sizes_and_overlap(
            words in proptest::collection::vec("[a-z]{1,8}", 1..300),
            (max_words, overlap) in window(),
        ) {
            let text = words.join(" ");
            let header = "Filename: test.pdf\n";
            let raw: Vec<String> =
                split_into_chunks(&text, header, ChunkOptions::new(max_words, overlap))
                    .unwrap()
                    .collect();

            let mut chunks: Vec<Vec<String>> = Vec::with_capacity(raw.len());
            for chunk in &raw {
                prop_assert!(chunk.starts_with(header));
                chunks.push(chunk[header.len()..].split(' ').map(str::to_string).collect());
            }

            let last = chunks.len() - 1;
            for (k, chunk) in chunks.iter().enumerate() {
                let start = (k * max_words).saturating_sub(overlap);
                let end = ((k + 1) * max_words).min(words.len());
                prop_assert_eq!(chunk, &words[start..end].to_vec());

                if k == 0 && k < last {
                    prop_assert_eq!(chunk.len(), max_words);
                } else if k < last {
                    prop_assert_eq!(chunk.len(), max_words + overlap);
                } else {
                    prop_assert!(chunk.len() <= max_words + overlap);
                }

                if k > 0 {
                    let previous = &chunks[k - 1];
                    prop_assert_eq!(&chunk[..overlap], &previous[previous.len() - overlap..]);
                }
            }
        }

        /// Re-running the chunker with the same inputs yields the same sequence.
        #[test]
        fn prop_chunking_is_deterministic(
            text in "[a-z ]{0,400}",
            (max_words, overlap) in window(),
        ) {
            let options = ChunkOptions::new(max_words, overlap);
            let first: Vec<String> = split_into_chunks(&text, "H\n", options).unwrap().collect();
            let second: Vec<String> = split_into_chunks(&text, "H\n", options).unwrap().collect();
            prop_assert_eq!(first, second);
        }

        /// Overlap at or beyond the window size never produces chunks.
        #[test]
        fn prop_non_advancing_window_rejected(
            max_words in 1usize..40,
            extra in 0usize..10,
        ) {
            let result = split_into_chunks("a b c", "", ChunkOptions::new(max_words, max_words + extra));
            prop_assert!(result.is_err());
        }
    }
}

// ===== Normalization =====

mod normalize_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Normalizing already-normalized text changes nothing.
        #[test]
        fn prop_normalization_idempotent(text in "\\PC{0,64}") {
            let once = replace_ligatures(&text);
            let twice = replace_ligatures(&once);
            prop_assert_eq!(once, twice);
        }

        /// Printable ASCII passes through untouched.
        #[test]
        fn prop_ascii_unchanged(text in "[ -~]{0,64}") {
            prop_assert_eq!(replace_ligatures(&text), text);
        }
    }
}
