use mdhead::{CLOSE_MARKER, HeadParser, OPEN_MARKER, ParserConfig, parse_bytes, parse_head};
use proptest::prelude::*;

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Bytes biased towards the marker alphabet so partial markers are common.
fn marker_heavy_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::sample::select(b"<!- +>:\n#".to_vec()),
            1 => prop::sample::select(b"abkxyz".to_vec()),
            1 => any::<u8>(),
        ],
        0..96,
    )
}

proptest! {
    #[test]
    fn test_no_open_marker_means_all_body(input in marker_heavy_bytes()) {
        prop_assume!(!contains(&input, OPEN_MARKER));

        let doc = parse_bytes(&input).unwrap();
        prop_assert!(doc.head.is_empty());
        prop_assert_eq!(doc.body, input);
    }

    #[test]
    fn test_body_after_head_is_exact(
        value in "[a-z][a-z ]{0,15}",
        body in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut input = format!("<!-- +\nnote: {value}\n+ -->").into_bytes();
        input.extend_from_slice(&body);

        let doc = parse_bytes(&input).unwrap();
        prop_assert_eq!(doc.head.extra("note"), Some(value.as_str()));
        prop_assert_eq!(&doc.body, &body);

        if !contains(&body, OPEN_MARKER) {
            let again = parse_bytes(&doc.body).unwrap();
            prop_assert!(again.head.is_empty());
            prop_assert_eq!(again.body, body);
        }
    }

    #[test]
    fn test_bytes_are_never_lost(input in marker_heavy_bytes()) {
        if let Ok(doc) = parse_bytes(&input) {
            if doc.body != input {
                // Bytes only leave the body through a complete head block.
                prop_assert!(contains(&input, OPEN_MARKER));
                prop_assert!(contains(&input, CLOSE_MARKER));
                prop_assert!(doc.body.len() + OPEN_MARKER.len() + CLOSE_MARKER.len() <= input.len());
            }
        }
    }

    #[test]
    fn test_chunking_and_mode_agree(input in marker_heavy_bytes(), chunk in 1usize..8) {
        let full = parse_bytes(&input).ok();
        let chunked = HeadParser::with_config(ParserConfig::default().with_read_chunk_size(chunk))
            .parse(input.as_slice())
            .ok();
        let head_only = parse_head(input.as_slice()).ok();

        prop_assert_eq!(&chunked, &full);
        prop_assert_eq!(head_only, full.map(|doc| doc.head));
    }
}
