// Unit tests for domain models

use super::*;

#[test]
fn test_time_spec_from_components() {
    let time = TimeSpec::from_components(1, 2, 3, 500).unwrap();
    assert_eq!(time.as_millis(), 3_723_500);
    assert_eq!(time.components(), (1, 2, 3, 500));
}

#[test]
fn test_time_spec_components_carry() {
    // 1:75 is not canonical; components normalise it
    let time = TimeSpec::from_components(0, 1, 75, 0).unwrap();
    assert_eq!(time.components(), (0, 2, 15, 0));
}

#[test]
fn test_time_spec_millis_round_trip() {
    for millis in [0, 1, 999, 1_000, 59_999, 60_000, 3_599_999, 3_600_000, 360_000_001, u64::MAX] {
        assert_eq!(TimeSpec::from_millis(millis).as_millis(), millis);
    }
}

#[test]
fn test_time_spec_canonical_text() {
    assert_eq!(TimeSpec::ZERO.to_canonical(), "00:00:00.000");
    assert_eq!(TimeSpec::from_millis(90_000).to_canonical(), "00:01:30.000");
    assert_eq!(TimeSpec::from_millis(3_672_500).to_canonical(), "01:01:12.500");
    assert_eq!(TimeSpec::from_millis(5).to_canonical(), "00:00:00.005");
}

#[test]
fn test_time_spec_hours_do_not_wrap() {
    let time = TimeSpec::from_components(123, 4, 5, 6).unwrap();
    assert_eq!(time.to_canonical(), "123:04:05.006");
    assert_eq!(format!("{}", time), "123:04:05.006");
}

#[test]
fn test_time_spec_canonical_text_round_trip() {
    for millis in [0, 7, 12_100, 72_500, 3_672_500, 86_400_000, 450_000_123] {
        let time = TimeSpec::from_millis(millis);
        assert_eq!(TimeSpec::parse(&time.to_canonical()).unwrap(), time);
    }
}

#[test]
fn test_time_spec_subtract() {
    let end = TimeSpec::from_millis(5000);
    let start = TimeSpec::from_millis(2000);
    assert_eq!(TimeSpec::subtract(end, start).unwrap(), TimeSpec::from_millis(3000));
    assert_eq!(TimeSpec::subtract(end, end).unwrap(), TimeSpec::ZERO);
}

#[test]
fn test_time_spec_subtract_negative() {
    let result = TimeSpec::subtract(TimeSpec::from_millis(2000), TimeSpec::from_millis(5000));
    assert_eq!(
        result,
        Err(DomainError::NegativeDuration {
            start: "00:00:05.000".to_string(),
            end: "00:00:02.000".to_string(),
        })
    );
}

#[test]
fn test_time_spec_from_seconds_f64() {
    assert_eq!(TimeSpec::from_seconds_f64(5025.123).unwrap().as_millis(), 5_025_123);
    assert_eq!(TimeSpec::from_seconds_f64(0.0004).unwrap(), TimeSpec::ZERO);
    assert!(TimeSpec::from_seconds_f64(-1.0).is_none());
    assert!(TimeSpec::from_seconds_f64(f64::NAN).is_none());
}

#[test]
fn test_time_input_keeps_label() {
    let input = TimeInput::parse(" 1:00 ").unwrap();
    assert_eq!(input.label, "1:00");
    assert_eq!(input.value.as_millis(), 60_000);

    let empty = TimeInput::parse("").unwrap();
    assert_eq!(empty.label, "0");
    assert!(empty.value.is_zero());
}

#[test]
fn test_time_input_invalid() {
    assert!(matches!(
        TimeInput::parse("1:2:3:4"),
        Err(DomainError::InvalidTimeFormat(_))
    ));
}

#[test]
fn test_stream_kind_from_codec_type() {
    assert_eq!(StreamKind::from_codec_type("audio"), Some(StreamKind::Audio));
    assert_eq!(StreamKind::from_codec_type("subtitle"), Some(StreamKind::Subtitle));
    assert_eq!(StreamKind::from_codec_type("video"), None);
    assert_eq!(StreamKind::from_codec_type("attachment"), None);
}

#[test]
fn test_stream_descriptor_display() {
    let stream = StreamDescriptor {
        index: 1,
        kind: StreamKind::Audio,
        language: Some("eng".to_string()),
        title: None,
        codec: Some("aac".to_string()),
        source_index: Some(2),
    };
    assert_eq!(stream.to_string(), "Index: 1, Title: N/A, Language: eng, Codec: aac");
}

#[test]
fn test_fragment_request_rejects_end_before_start() {
    let result = FragmentRequest::new(
        "movie.mkv",
        TimeInput::parse("2:30").unwrap(),
        Some(TimeInput::parse("1:00").unwrap()),
        vec![],
        vec![],
    );
    assert!(matches!(result, Err(DomainError::NegativeDuration { .. })));
}

#[test]
fn test_fragment_request_rejects_empty_path() {
    let result = FragmentRequest::new("  ", TimeInput::from_time(TimeSpec::ZERO), None, vec![], vec![]);
    assert!(matches!(result, Err(DomainError::BadArgs(_))));
}

#[test]
fn test_fragment_request_clip_length() {
    let request = FragmentRequest::new(
        "movie.mkv",
        TimeInput::parse("1:00").unwrap(),
        Some(TimeInput::parse("2:30").unwrap()),
        vec![0],
        vec![],
    )
    .unwrap();
    assert_eq!(request.clip_length().unwrap(), Some(TimeSpec::from_millis(90_000)));

    let open_ended =
        FragmentRequest::new("movie.mkv", TimeInput::parse("1:00").unwrap(), None, vec![], vec![]).unwrap();
    assert_eq!(open_ended.clip_length().unwrap(), None);
}
