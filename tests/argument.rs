use http_argument::{codec, Argument, ArgumentError, Arguments, Charset};

const SHIFT_JIS_VALUE: &str = "%8F%89%8A%FA%92l%91%E5%8D%E3%8Es";
const JAPANESE: &str = "初期値大阪市";

fn check_encodings(label: &str) {
    let mut arg = Argument::parse("name.?", "value_ here", false, label).unwrap();
    assert_eq!(arg.name(), "name.?");
    assert_eq!(arg.value(), "value_ here");
    assert_eq!(arg.encoded_name(), "name.%3F");
    assert_eq!(arg.encoded_value(), "value_+here");
    arg.set_always_encoded(false);
    assert_eq!(arg.encoded_name(), "name.?");
    assert_eq!(arg.encoded_value(), "value_ here");

    // Nothing to unescape, so the pre-encoded input comes back as-is.
    let mut arg = Argument::parse("name.?", "value_ here", true, label).unwrap();
    assert_eq!(arg.name(), "name.?");
    assert_eq!(arg.value(), "value_ here");
    assert_eq!(arg.encoded_name(), "name.%3F");
    assert_eq!(arg.encoded_value(), "value_+here");
    arg.set_always_encoded(false);
    assert_eq!(arg.encoded_name(), "name.?");
    assert_eq!(arg.encoded_value(), "value_ here");

    let mut arg = Argument::parse("name.%3F", "value_+here", true, label).unwrap();
    assert_eq!(arg.name(), "name.?");
    assert_eq!(arg.value(), "value_ here");
    assert_eq!(arg.encoded_name(), "name.%3F");
    assert_eq!(arg.encoded_value(), "value_+here");
    arg.set_always_encoded(false);
    assert_eq!(arg.encoded_name(), "name.?");
    assert_eq!(arg.encoded_value(), "value_ here");

    let mut arg = Argument::parse("", "\0\u{1}\u{7}", false, label).unwrap();
    arg.set_always_encoded(false);
    assert_eq!(arg.encoded_name(), "");
    assert_eq!(arg.encoded_value(), "\0\u{1}\u{7}");
}

#[test]
fn test_cloning() {
    let arg = Argument::new("name.?", "value_ here");
    assert_eq!(arg.name(), "name.?");
    assert_eq!(arg.value(), "value_ here");
    assert_eq!(arg.encoded_name(), "name.%3F");
    assert_eq!(arg.encoded_value(), "value_+here");

    let mut clone = arg.clone();
    assert_eq!(clone.encoded_name(), "name.%3F");
    assert_eq!(clone.encoded_value(), "value_+here");
    assert_eq!(clone.name(), "name.?");
    assert_eq!(clone.value(), "value_ here");

    clone.set_always_encoded(false);
    assert_eq!(arg.encoded_name(), "name.%3F");
    assert!(arg.is_always_encoded());
}

#[test]
fn test_conversion() {
    let pairs = [("name.?", "value_ here"), ("name$of property", "value_.+")];
    let args = Arguments::convert_to_encoded_form(&pairs);

    assert_eq!(args[0].encoded_name(), "name.%3F");
    assert_eq!(args[0].encoded_value(), "value_+here");
    assert_eq!(args[1].encoded_name(), "name%24of+property");
    assert_eq!(args[1].encoded_value(), "value_.%2B");
}

#[test]
fn test_utf8_encoding() {
    check_encodings("UTF-8");
}

#[test]
fn test_shift_jis_encoding() {
    check_encodings("Shift_JIS");
}

#[test]
fn test_us_ascii_encoding() {
    check_encodings("US-ASCII");
}

#[test]
fn test_cp1252_encoding() {
    check_encodings("CP1252");
}

#[test]
fn test_malformed_escape() {
    let err = Argument::parse("s=*&^%~@==y", "\0\u{1}\u{7}", true, "UTF-8").unwrap_err();
    match err {
        ArgumentError::MalformedEscape(ref inner) => assert_eq!(inner.sequence, "%~@"),
        other => panic!("expected malformed escape, got {other:?}"),
    }
    assert!(!err.is_fatal());
}

#[test]
fn test_unsupported_charset() {
    let err = Argument::parse("name.?", "\0\u{1}\u{7}", true, "UTF-9").unwrap_err();
    assert!(matches!(err, ArgumentError::UnsupportedCharset(_)));
    assert!(err.is_fatal());
    assert_eq!(err.to_string(), "unsupported charset: UTF-9");
}

#[test]
fn test_with_shift_jis_charset() {
    let arg = Argument::parse("name.?", SHIFT_JIS_VALUE, true, "Shift_JIS").unwrap();
    assert_eq!(arg.value(), JAPANESE);
}

#[test]
fn test_with_utf8_charset() {
    let arg = Argument::parse("name.?", SHIFT_JIS_VALUE, true, "UTF-8").unwrap();
    assert_ne!(arg.value(), JAPANESE);
}

#[test]
fn test_pre_encoded_round_trip() {
    let sjis = Charset::for_label("Shift_JIS").unwrap();
    for (name, value) in [("検索", "大阪 市"), ("q", "a&b=c"), ("", "")] {
        let arg = Argument::from_encoded(&codec::encode(name, sjis), &codec::encode(value, sjis), sjis).unwrap();
        assert_eq!(arg.name(), name);
        assert_eq!(arg.value(), value);
    }
}

#[test]
fn test_default_policy_matches_codec() {
    let arg = Argument::new("naïve key", "50% off!");
    assert_eq!(arg.encoded_name(), codec::encode("naïve key", Charset::default()));
    assert_eq!(arg.encoded_value(), codec::encode("50% off!", Charset::default()));
}

#[test]
fn test_utf8_output_matches_form_urlencoded() {
    for value in ["name.?", "value_ here", "a*b-c_d.e", "ümlaut & co", "~tilde/slash", "\0\u{1}\u{7}"] {
        let reference = serde_urlencoded::to_string([("k", value)]).unwrap();
        let arg = Argument::new("k", value);
        assert_eq!(arg.to_query_pair(), reference, "{value:?}");
    }
}

#[test]
fn test_unmappable_literals_survive_pre_encoded_input() {
    let arg = Argument::parse("q", "🌍+x", true, "Shift_JIS").unwrap();
    assert_eq!(arg.value(), "🌍 x");

    let args = Arguments::parse_query("日本=%41&k=日本+%41", Charset::for_label("CP1252").unwrap()).unwrap();
    assert_eq!(args[0].name(), "日本");
    assert_eq!(args[0].value(), "A");
    assert_eq!(args[1].value(), "日本 A");
}
