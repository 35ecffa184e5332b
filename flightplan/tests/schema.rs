use std::fs;
use std::path::PathBuf;

use adexp::{FieldKind, GrammarCatalog, Parser, ParsedValue};
use flightplan::{builtin, load_grammar, load_grammar_set, Error};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/schema")
}

#[test]
fn loads_grammar_file() {
    let grammar = load_grammar(fixtures().join("bfd.json")).expect("BFD grammar should load");

    assert_eq!(grammar.category, "BFD");
    assert_eq!(grammar.version, "0.1");
    assert_eq!(grammar.fields.len(), 7);

    let refdata = grammar.find("REFDATA").expect("REFDATA is declared");
    assert_eq!(refdata.kind, FieldKind::Structured);
    assert!(refdata.mandatory);
    assert_eq!(refdata.children.len(), 3);
    assert!(grammar.find("EQCST").is_some_and(|f| f.is_simple_list()));
}

#[test]
fn loads_grammar_set_from_directory() {
    let set = load_grammar_set(fixtures(), "p2_0.1").expect("set should load");

    assert_eq!(set.name(), "p2_0.1");
    assert_eq!(set.len(), 2);
    assert_eq!(set.get("CFD").map(|g| g.version.as_str()), Some("0.1"));
    assert!(set.grammars().iter().all(|g| g.set_name == "p2_0.1"));
}

#[test]
fn loaded_set_shadows_builtin() {
    let p2 = load_grammar_set(fixtures(), "p2_0.1").expect("set should load");
    let catalog = GrammarCatalog::new([p2, builtin::icas_v01()]).expect("catalog should build");

    let msg = Parser::new(&catalog)
        .parse(
            "-TITLE BFD -REFDATA -SENDER -FAC EBBUZXZQ -RECVR -FAC EBSZZXZQ -SEQNUM 006
             -ARCID DLH151 -BEGIN RTEPTS -PT -PTID WOODY -TO 1235 -FL F210 -END RTEPTS",
        )
        .expect("BFD should parse");

    assert_eq!(msg.set_name(), "p2_0.1");
    assert_eq!(
        msg.get("RTEPTS").and_then(ParsedValue::as_list).map(<[_]>::len),
        Some(1)
    );
}

#[test]
fn rejects_empty_directory() {
    let dir = tempfile::tempdir().expect("temporary directory");
    fs::write(dir.path().join("notes.txt"), "no grammar").expect("writable");

    match load_grammar_set(dir.path(), "empty") {
        Err(Error::EmptyGrammarSet { path }) => assert_eq!(path, dir.path()),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn reports_offending_file() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "category": "BFD", "fields": [ { "name": "TITLE" } ] }"#)
        .expect("writable");

    match load_grammar_set(dir.path(), "broken") {
        Err(Error::Json { path: offending, .. }) => assert_eq!(offending, path),
        other => panic!("unexpected result: {other:?}"),
    }

    match load_grammar(dir.path().join("missing.json")) {
        Err(Error::Io { path: offending, .. }) => {
            assert_eq!(offending, dir.path().join("missing.json"))
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn rejects_invalid_grammar() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join("dup.json");
    fs::write(
        &path,
        r#"{ "category": "BFD", "version": "1", "fields": [
            { "name": "ARCID", "kind": "basic" },
            { "name": "ARCID", "kind": "basic" }
        ] }"#,
    )
    .expect("writable");

    match load_grammar(&path) {
        Err(Error::Adexp(adexp::Error::DuplicateField { category, name })) => {
            assert_eq!(category, "BFD");
            assert_eq!(name, "ARCID");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
