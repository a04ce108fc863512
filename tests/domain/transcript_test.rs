use phrasecheck::domain::{RecognitionAlternative, RecognitionSegment, Transcript};

fn alternative(text: &str, confidence: f32) -> RecognitionAlternative {
    RecognitionAlternative {
        transcript: text.to_string(),
        confidence: Some(confidence),
    }
}

#[test]
fn given_segments_with_alternatives_when_building_transcript_then_joins_top_alternatives() {
    let segments = vec![
        RecognitionSegment {
            alternatives: vec![alternative("hola", 0.9), alternative("ola", 0.4)],
        },
        RecognitionSegment {
            alternatives: vec![alternative("como estas", 0.8)],
        },
    ];

    let transcript = Transcript::from_segments(&segments);

    assert_eq!(transcript.as_str(), "hola\ncomo estas");
}

#[test]
fn given_segment_without_alternatives_when_building_transcript_then_it_is_skipped() {
    let segments = vec![
        RecognitionSegment::default(),
        RecognitionSegment::single("buenas noches"),
    ];

    let transcript = Transcript::from_segments(&segments);

    assert_eq!(transcript.as_str(), "buenas noches");
}

#[test]
fn given_no_segments_when_building_transcript_then_it_is_empty() {
    let transcript = Transcript::from_segments(&[]);

    assert!(transcript.is_empty());
    assert!(transcript.tokens().is_empty());
}

#[test]
fn given_multi_segment_transcript_when_tokenizing_then_newline_does_not_split() {
    let transcript = Transcript::new("Hola\nComo Estas");
    assert_eq!(transcript.tokens(), vec!["hola\ncomo", "estas"]);
}

#[test]
fn given_tabs_and_repeated_spaces_when_tokenizing_then_only_spaces_split() {
    let transcript = Transcript::new("hola  como\testas ");
    assert_eq!(transcript.tokens(), vec!["hola", "como\testas"]);
}

#[test]
fn given_transcript_with_punctuation_when_tokenizing_then_punctuation_is_kept() {
    let transcript = Transcript::new("Hola. Como estas?");
    assert_eq!(transcript.tokens(), vec!["hola.", "como", "estas?"]);
}
