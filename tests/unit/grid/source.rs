//! Tests for sample source determinism and sequence cycling

#[cfg(test)]
mod tests {
    use noisestack::grid::source::{RandomSource, SampleSource, SequenceSource};

    // Tests seeded sources replay identical sample streams
    // Verified by reseeding one source mid-stream
    #[test]
    fn test_seeded_sources_match() {
        let mut first = RandomSource::seeded(7);
        let mut second = RandomSource::seeded(7);

        for _ in 0..256 {
            assert_eq!(
                first.next_sample(),
                second.next_sample(),
                "Sources with the same seed should produce identical streams"
            );
        }
    }

    // Tests different seeds diverge
    // Verified by ignoring the seed argument
    #[test]
    fn test_different_seeds_diverge() {
        let mut first = RandomSource::seeded(1);
        let mut second = RandomSource::seeded(2);

        let first_stream: Vec<u8> = (0..64).map(|_| first.next_sample()).collect();
        let second_stream: Vec<u8> = (0..64).map(|_| second.next_sample()).collect();

        assert_ne!(
            first_stream, second_stream,
            "Different seeds should produce different streams"
        );
    }

    // Tests entropy-seeded construction produces a usable source
    // Verified by returning a fixed value from next_sample
    #[test]
    fn test_entropy_seeded_source() {
        let mut from_new = RandomSource::new();
        let mut from_default = RandomSource::default();

        let stream: Vec<u8> = (0..512).map(|_| from_new.next_sample()).collect();
        let min = stream.iter().copied().min().unwrap_or(0);
        let max = stream.iter().copied().max().unwrap_or(0);
        assert!(
            max > min,
            "512 uniform samples should not all share one value"
        );

        from_default.next_sample();
    }

    // Tests sequence sources replay their buffer in order and wrap around
    // Verified by resetting the cursor on every call
    #[test]
    fn test_sequence_source_cycles() {
        let mut source = SequenceSource::new(vec![10, 20, 30]);

        let drawn: Vec<u8> = (0..7).map(|_| source.next_sample()).collect();
        assert_eq!(drawn, vec![10, 20, 30, 10, 20, 30, 10]);
    }

    // Tests empty sequences yield zero forever
    // Verified by indexing the empty buffer directly
    #[test]
    fn test_empty_sequence_yields_zero() {
        let mut source = SequenceSource::new(Vec::new());

        for _ in 0..3 {
            assert_eq!(source.next_sample(), 0);
        }
    }
}
