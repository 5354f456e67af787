use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use openwhen_codec::{
    decode, decode_with_format, encode, Collection, Letter, LetterKind, TokenFormat,
};

// ============================================================================
// Helpers
// ============================================================================

fn at(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).single().expect("valid millis")
}

fn minimal() -> Collection {
    Collection {
        id: "k3x9q2m1a".to_string(),
        letters: vec![Letter::text("a1", "you miss home", "Call me anytime.")],
        ..Default::default()
    }
}

fn populated() -> Collection {
    Collection {
        id: "k3x9q2m1a".to_string(),
        name: "Letters for the road".to_string(),
        recipient: "Sam".to_string(),
        created_at: Some(at(1_739_491_200_123)),
        letters: vec![
            Letter::text("a1", "you miss home", "Call me anytime.")
                .with_release_date(at(1_740_000_000_000)),
            Letter::voice("a2", "you need a laugh", "data:audio/webm;base64,GkXfo59ChoEBQveBAULygQRC84EIQoKE"),
        ],
    }
}

/// Deterministic base64 blob standing in for an embedded recording.
fn fake_recording(bytes: usize) -> String {
    let mut state: u32 = 0x2545_f491;
    let raw: Vec<u8> = (0..bytes)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    format!("data:audio/webm;codecs=opus;base64,{}", STANDARD.encode(raw))
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn populated_collection_round_trips() {
    let collection = populated();
    let token = encode(&collection).expect("encode");
    assert_eq!(decode(&token), Some(collection));
}

#[test]
fn minimal_collection_round_trips() {
    let collection = minimal();
    let token = encode(&collection).expect("encode");
    let decoded = decode(&token).expect("decode");
    assert_eq!(decoded, collection);
    assert_eq!(decoded.name, "");
    assert_eq!(decoded.recipient, "");
    assert_eq!(decoded.created_at, None);
    assert_eq!(decoded.letters[0].kind, LetterKind::Text);
    assert_eq!(decoded.letters[0].audio_payload, None);
}

#[test]
fn current_tokens_decode_as_short_key() {
    let token = encode(&populated()).expect("encode");
    let (_, format) = decode_with_format(&token).expect("decode");
    assert_eq!(format, TokenFormat::ShortKey);
}

#[test]
fn unicode_survives() {
    let collection = Collection {
        id: "u1".to_string(),
        name: "Für dich ❤️".to_string(),
        recipient: "小明".to_string(),
        letters: vec![Letter::text("a", "tu as le cafard 😢", "Ça ira.\nПривет!\n\tالسلام")],
        ..Default::default()
    };
    let token = encode(&collection).expect("encode");
    assert_eq!(decode(&token), Some(collection));
}

#[test]
fn body_containing_delimiter_is_not_misread() {
    let collection = Collection {
        id: "p1".to_string(),
        recipient: "Mom".to_string(),
        letters: vec![Letter::text("a", "rainy|day", "tea | blanket | book")],
        ..Default::default()
    };
    let token = encode(&collection).expect("encode");
    let (decoded, format) = decode_with_format(&token).expect("decode");
    assert_eq!(format, TokenFormat::ShortKey);
    assert_eq!(decoded, collection);
}

#[test]
fn voice_letter_round_trips_byte_for_byte() {
    let recording = fake_recording(150_000);
    let collection = Collection {
        id: "v1".to_string(),
        letters: vec![Letter::voice("a", "you can't sleep", recording.clone())],
        ..Default::default()
    };
    let token = encode(&collection).expect("encode");
    let decoded = decode(&token).expect("decode");
    assert_eq!(decoded.letters[0].kind, LetterKind::Voice);
    assert_eq!(decoded.letters[0].audio_payload.as_deref(), Some(recording.as_str()));
    assert!(decoded.letters[0].text_body.is_empty());
}

#[test]
fn timestamps_keep_millisecond_precision() {
    let mut collection = minimal();
    collection.created_at = Some(at(1_700_000_000_001));
    collection.letters[0].release_date = Some(at(-86_400_000));
    let decoded = decode(&encode(&collection).expect("encode")).expect("decode");
    assert_eq!(decoded.created_at, Some(at(1_700_000_000_001)));
    assert_eq!(decoded.letters[0].release_date, Some(at(-86_400_000)));
}

#[test]
fn sub_millisecond_precision_is_truncated() {
    let precise = Utc.timestamp_opt(1_700_000_000, 123_456_789).single().unwrap();
    let mut collection = minimal();
    collection.created_at = Some(precise);
    let decoded = decode(&encode(&collection).expect("encode")).expect("decode");
    assert_eq!(decoded.created_at, Some(at(1_700_000_000_123)));
}

// ============================================================================
// Order preservation
// ============================================================================

fn with_letters(n: usize) -> Collection {
    Collection {
        id: "o1".to_string(),
        letters: (0..n)
            .map(|i| Letter::text(format!("id{i:02}"), format!("moment {i}"), format!("body {i}")))
            .collect(),
        ..Default::default()
    }
}

#[test]
fn order_is_preserved_for_any_length() {
    for n in [0, 1, 2, 3, 12, 48] {
        let collection = with_letters(n);
        let decoded = decode(&encode(&collection).expect("encode")).expect("decode");
        let ids: Vec<_> = decoded.letters.iter().map(|l| l.id.as_str()).collect();
        let expected: Vec<_> = collection.letters.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, expected, "n = {n}");
    }
}

#[test]
fn reversed_order_stays_reversed() {
    let mut collection = with_letters(10);
    collection.letters.reverse();
    let decoded = decode(&encode(&collection).expect("encode")).expect("decode");
    assert_eq!(decoded.letters.first().map(|l| l.id.as_str()), Some("id09"));
    assert_eq!(decoded, collection);
}

// ============================================================================
// Size economy
// ============================================================================

#[test]
fn elided_fields_make_shorter_tokens() {
    let bare = Collection {
        id: "s1".to_string(),
        letters: vec![Letter::text("a", "you miss home", "")],
        ..Default::default()
    };
    let full = Collection {
        id: "s1".to_string(),
        name: "A long collection name for testing".to_string(),
        recipient: "Alexandra Montgomery".to_string(),
        created_at: Some(at(1_739_491_200_123)),
        letters: vec![Letter {
            id: "a".to_string(),
            kind: LetterKind::Voice,
            label: "you miss home".to_string(),
            text_body: "Some words that are definitely not empty.".to_string(),
            audio_payload: Some("data:audio/webm;base64,GkXfo59ChoEBQveBAULygQ".to_string()),
            release_date: Some(at(1_740_000_000_000)),
        }],
    };
    let bare_token = encode(&bare).expect("encode");
    let full_token = encode(&full).expect("encode");
    assert!(bare_token.len() < full_token.len());
}

#[test]
fn token_alphabet_is_path_safe() {
    let token = encode(&populated()).expect("encode");
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}
