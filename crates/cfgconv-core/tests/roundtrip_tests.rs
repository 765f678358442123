use cfgconv_core::{convert, EmitOptions, Format, Value, TEXT_KEY};

const SAMPLE_JSON: &str = r#"{"name": "app", "debug": true, "threshold": 2.5, "retries": 3, "fallback": null, "tags": ["web", "api"], "server": {"host": "localhost", "ports": [8080, 8081]}}"#;

fn parse(format: Format, text: &str) -> Value {
    format
        .parser()
        .parse(text)
        .unwrap_or_else(|e| panic!("{format} parse failed: {e}\ninput:\n{text}"))
}

/// Assert that emitting and re-parsing in the same format reproduces the
/// canonical tree. Byte-for-byte text equality is not part of the contract;
/// structural equality is.
fn assert_roundtrip(format: Format, value: &Value, options: &EmitOptions) {
    let text = format
        .emitter()
        .emit(value, options)
        .unwrap_or_else(|e| panic!("{format} emit failed: {e}"));
    let reparsed = parse(format, &text);
    assert_eq!(
        &reparsed, value,
        "{format} roundtrip changed the value; emitted text:\n{text}"
    );
}

// ============================================================================
// Same-format roundtrips
// ============================================================================

#[test]
fn json_roundtrip_compact() {
    let value = parse(Format::Json, SAMPLE_JSON);
    assert_roundtrip(Format::Json, &value, &EmitOptions::default());
}

#[test]
fn json_roundtrip_pretty() {
    let value = parse(Format::Json, SAMPLE_JSON);
    for indent in [2, 4, 8] {
        let options = EmitOptions {
            pretty: true,
            indent,
            ..EmitOptions::default()
        };
        assert_roundtrip(Format::Json, &value, &options);
    }
}

#[test]
fn yaml_roundtrip_flow_and_block() {
    let value = parse(Format::Json, SAMPLE_JSON);
    assert_roundtrip(Format::Yaml, &value, &EmitOptions::default());
    assert_roundtrip(Format::Yaml, &value, &EmitOptions::pretty());
}

#[test]
fn yaml_roundtrip_keyword_like_strings() {
    let value = parse(
        Format::Json,
        r#"{"a": "true", "b": "null", "c": "42", "d": "3.14", "e": "", "f": "05", "g": "a: b", "h": "- item"}"#,
    );
    assert_roundtrip(Format::Yaml, &value, &EmitOptions::default());
    assert_roundtrip(Format::Yaml, &value, &EmitOptions::pretty());
}

#[test]
fn toml_roundtrip() {
    // TOML has no null; drop the fallback key.
    let value = parse(
        Format::Json,
        r#"{"name": "app", "debug": true, "threshold": 2.5, "retries": 3, "tags": ["web", "api"], "server": {"host": "localhost", "ports": [8080, 8081]}}"#,
    );
    assert_roundtrip(Format::Toml, &value, &EmitOptions::default());
    assert_roundtrip(Format::Toml, &value, &EmitOptions::pretty());
}

#[test]
fn ini_roundtrip_of_string_sections() {
    // Within INI's native shape (sections of strings) the roundtrip is exact.
    let value = parse(Format::Ini, "[server]\nhost = localhost\nport = 8080\n");
    assert_roundtrip(Format::Ini, &value, &EmitOptions::default());
}

// ============================================================================
// XML roundtrips
// ============================================================================

#[test]
fn xml_roundtrip_preserves_the_element_tree() {
    let parsed = parse(Format::Xml, "<person><name>John</name><age>30</age></person>");

    // Children are always sequences, text lives under the marker key.
    let person = parsed.get("person").expect("person root key");
    let name = person.get("name").and_then(Value::as_array).unwrap();
    assert_eq!(name.len(), 1);
    assert_eq!(name[0].get(TEXT_KEY), Some(&Value::from("John")));
    let age = person.get("age").and_then(Value::as_array).unwrap();
    assert_eq!(age[0].get(TEXT_KEY), Some(&Value::from("30")));

    // The sole top-level key becomes the root again on emission, and the
    // re-parsed tree is equivalent.
    assert_roundtrip(Format::Xml, &parsed, &EmitOptions::default());
    assert_roundtrip(Format::Xml, &parsed, &EmitOptions::pretty());
}

#[test]
fn xml_roundtrip_with_attributes_and_repeated_siblings() {
    let parsed = parse(
        Format::Xml,
        r#"<feed version="2"><entry id="1">first</entry><entry id="2">second</entry></feed>"#,
    );
    let feed = parsed.get("feed").unwrap();
    assert_eq!(feed.get("@version"), Some(&Value::from("2")));
    assert_eq!(feed.get("entry").and_then(Value::as_array).map(Vec::len), Some(2));

    assert_roundtrip(Format::Xml, &parsed, &EmitOptions::default());
}

// ============================================================================
// INI flattening is lossy by design
// ============================================================================

#[test]
fn ini_flattening_is_lossy_and_one_directional() {
    let original = parse(Format::Json, r#"{"section": {"sub": {"k": "v"}}}"#);

    let ini = Format::Ini
        .emitter()
        .emit(&original, &EmitOptions::default())
        .unwrap();
    assert!(ini.contains("[section]"), "unexpected INI output:\n{ini}");
    assert!(ini.contains("sub.k = v"), "unexpected INI output:\n{ini}");

    // The parser yields the dotted key verbatim; the nesting is gone and the
    // roundtrip does NOT reproduce the original tree.
    let reparsed = parse(Format::Ini, &ini);
    assert_ne!(reparsed, original);
    let section = reparsed.get("section").unwrap();
    assert_eq!(section.get("sub.k"), Some(&Value::from("v")));
    assert_eq!(section.get("sub"), None);
}

// ============================================================================
// Cross-format stability
// ============================================================================

#[test]
fn json_to_yaml_to_json_is_structurally_stable() {
    let original = parse(Format::Json, SAMPLE_JSON);
    let yaml = convert(SAMPLE_JSON, "json", "yaml", &EmitOptions::default()).unwrap();
    assert_eq!(parse(Format::Yaml, &yaml), original);

    let pretty = convert(SAMPLE_JSON, "json", "yaml", &EmitOptions::pretty()).unwrap();
    assert_eq!(parse(Format::Yaml, &pretty), original);
}

#[test]
fn json_to_toml_to_json_is_structurally_stable() {
    let input = r#"{"name": "app", "retries": 3, "threshold": 2.5, "server": {"host": "localhost"}}"#;
    let original = parse(Format::Json, input);
    let toml = convert(input, "json", "toml", &EmitOptions::default()).unwrap();
    assert_eq!(parse(Format::Toml, &toml), original);
}
