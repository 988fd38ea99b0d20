use std::path::Path;

use rdfc_manifest::loader::{load_tests, parse_tests};
use rdfc_manifest::serializer::jsonld::{to_json_ld, to_json_ld_string};
use rdfc_manifest::serializer::turtle::to_turtle;
use rdfc_manifest::{entries, Complexity, LoadError, ManifestConfig, Test, VariantKind};
use serde_json::{json, Value};

const CSV: &str = include_str!("data/manifest.csv");

fn tests() -> Vec<Test> {
    parse_tests(CSV.as_bytes()).expect("manifest.csv parses")
}

fn entry<'a>(manifest: &'a Value, id: &str) -> &'a Value {
    manifest["entries"]
        .as_array()
        .expect("entries")
        .iter()
        .find(|e| e["id"] == id)
        .unwrap_or_else(|| panic!("no entry {id}"))
}

#[test]
fn loads_every_row_in_order() {
    let tests = tests();
    let ids: Vec<&str> = tests.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(
        ids,
        ["t001", "t002", "t003", "test038", "t074", "t075", "t076", "t077"]
    );
    assert_eq!(tests[3].rdfc10, VariantKind::Custom("negative-id-conflict".to_owned()));
    assert_eq!(tests[6].rdfc10, VariantKind::Disabled);
}

#[test]
fn multiline_comments_use_lf() {
    let tests = tests();
    let comment = tests[4].comment.as_deref().expect("comment");
    assert_eq!(
        comment,
        "A 10-node clique graph where every node has an edge to every other node.\n\
         Uses the \"poison\" graph from RDFC."
    );
}

#[test]
fn entry_set_and_order() {
    let anchors: Vec<String> = entries(&tests()).into_iter().map(|e| e.anchor).collect();
    assert_eq!(
        anchors,
        ["t001c", "t001m", "t002c", "t003c", "test038c", "t074c", "t075c", "t075m", "t077m"]
    );
}

#[test]
fn t001_example() {
    let manifest = to_json_ld(&tests(), &ManifestConfig::default()).expect("json");
    assert_eq!(
        *entry(&manifest, "#t001c"),
        json!({
            "id": "#t001c",
            "type": "rdfc:RDFC10EvalTest",
            "name": "simple id",
            "comment": null,
            "computationalComplexity": "low",
            "approval": "rdft:Approved",
            "action": "rdfc10/t001-in.nq",
            "result": "rdfc10/t001-rdfc10.nq"
        })
    );
    assert_eq!(entry(&manifest, "#t001m")["name"], "simple id (map test)");
    assert_eq!(entry(&manifest, "#t001m")["result"], "rdfc10/t001-rdfc10map.json");
}

#[test]
fn negative_id_conflict_example() {
    let manifest = to_json_ld(&tests(), &ManifestConfig::default()).expect("json");
    let negative = entry(&manifest, "#test038c");
    assert_eq!(negative["type"], "rdfc:negative-id-conflict");
    assert_eq!(negative["name"], "poison - 10 node clique (negative test)");
    assert_eq!(negative["computationalComplexity"], "high");
    assert!(negative.get("result").is_none());

    let ttl = to_turtle(&tests(), &ManifestConfig::default());
    let block = ttl
        .split("\n\n")
        .find(|b| b.starts_with(":test038c "))
        .expect("turtle block");
    assert!(block.starts_with(":test038c a rdfc:negative-id-conflict;"));
    assert!(!block.contains("mf:result"));
}

#[test]
fn optional_fields() {
    let tests = tests();
    let manifest = to_json_ld(&tests, &ManifestConfig::default()).expect("json");
    let hashed = entry(&manifest, "#t075m");
    assert_eq!(hashed["hashAlgorithm"], "SHA384");
    assert_eq!(hashed["computationalComplexity"], "medium");
    assert_eq!(entry(&manifest, "#t003c")["approval"], "rdft:Proposed");
    assert_eq!(entry(&manifest, "#t003c")["comment"], "A single blank node.");
    assert_eq!(tests[2].computational_complexity(), Complexity::Low);
}

#[test]
fn backslashes_are_doubled_in_both_formats() {
    let csv = "test,name,comment,complexity,approval,hashAlgorithm,rdfc10,rdfc10map\n\
               t1,One,a\\b,0,,,TRUE,FALSE\n\
               t2,Two,,0,,,TRUE,FALSE\n";
    let tests = parse_tests(csv.as_bytes()).expect("parse");
    let config = ManifestConfig::default();

    let json = to_json_ld_string(&tests, &config).expect("json");
    assert!(json.contains(r#""comment": "a\\\\b","#), "{json}");
    let manifest = to_json_ld(&tests, &config).expect("json");
    assert_eq!(entry(&manifest, "#t2c")["comment"], Value::Null);

    let ttl = to_turtle(&tests, &config);
    assert!(ttl.contains(r#"  rdfs:comment "a\\b";"#), "{ttl}");
}

#[test]
fn turtle_escapes_multiline_comments() {
    let ttl = to_turtle(&tests(), &ManifestConfig::default());
    assert!(ttl.contains(
        "  rdfs:comment \"A 10-node clique graph where every node has an edge to every other node.\\n\
         Uses the \\\"poison\\\" graph from RDFC.\";"
    ));
}

#[test]
fn json_and_turtle_have_the_same_entry_count() {
    let tests = tests();
    let config = ManifestConfig::default();
    let manifest = to_json_ld(&tests, &config).expect("json");
    let ttl = to_turtle(&tests, &config);
    let blocks = ttl.lines().filter(|l| l.starts_with(':') && l.contains(" a ")).count();
    assert_eq!(manifest["entries"].as_array().map(Vec::len), Some(blocks));
}

#[test]
fn serialization_is_deterministic() {
    let config = ManifestConfig::default();
    assert_eq!(
        to_json_ld_string(&tests(), &config).expect("json"),
        to_json_ld_string(&tests(), &config).expect("json")
    );
    assert_eq!(to_turtle(&tests(), &config), to_turtle(&tests(), &config));
}

#[test]
fn load_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/manifest.csv");
    assert_eq!(load_tests(&path).expect("load"), tests());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_tests(&dir.path().join("manifest.csv")).expect_err("missing");
    assert!(matches!(err, LoadError::Io { .. }), "{err}");
}
