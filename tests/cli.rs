use std::fs;

use modelgen::cli::CommandLineInterface;

const PETSTORE: &str = r##"{
    "swagger": "2.0",
    "definitions": {
        "Owner": {"type": "object", "properties": {"pet": {"$ref": "#/definitions/Pet"}}},
        "Pet": {"type": "object", "properties": {"name": {"type": "string"}}}
    }
}"##;

fn run(args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["modelgen"];
    argv.extend_from_slice(args);
    CommandLineInterface::try_load_from(argv)?.run()
}

#[test]
fn writes_rust_to_nested_out_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("swagger.json");
    fs::write(&input, PETSTORE).unwrap();
    let out = dir.path().join("gen/models.rs");

    run(&["rust", "-i", input.to_str().unwrap(), "-o", out.to_str().unwrap()]).unwrap();

    let text = fs::read_to_string(out).unwrap();
    assert!(text.find("pub struct Pet {").unwrap() < text.find("pub struct Owner {").unwrap());
}

#[test]
fn merges_globbed_inputs_and_prints_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.json"), PETSTORE).unwrap();
    fs::write(
        dir.path().join("b.json"),
        r#"{"components": {"schemas": {"Tag": {"type": "string"}}}}"#,
    )
    .unwrap();
    let out = dir.path().join("order.txt");
    let pattern = format!("{}/*.json", dir.path().display());

    run(&["order", "-i", &pattern, "-o", out.to_str().unwrap()]).unwrap();

    assert_eq!(fs::read_to_string(out).unwrap(), "Pet\nOwner\nTag\n");
}

#[test]
fn cpp_with_json_pointer() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.json");
    fs::write(&input, r#"{"x": {"Id": {"type": "string"}}}"#).unwrap();
    let out = dir.path().join("models.h");

    run(&[
        "cpp", "-i", input.to_str().unwrap(), "--json-pointer", "/x", "--namespace", "acme",
        "-o", out.to_str().unwrap(),
    ])
    .unwrap();

    let text = fs::read_to_string(out).unwrap();
    assert!(text.contains("namespace acme {"));
    assert!(text.contains("class Id {"));
}

#[test]
fn failed_compile_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, r#"{"definitions": {"Bad": {"type": "object"}}}"#).unwrap();
    let out = dir.path().join("models.rs");

    let err = run(&["rust", "-i", input.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .unwrap_err();

    assert!(err.to_string().contains("unhandled record shape for `Bad`"));
    assert!(!out.exists());
}

#[test]
fn duplicate_records_across_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    fs::write(&a, PETSTORE).unwrap();
    fs::write(&b, PETSTORE).unwrap();

    let err = run(&["order", "-i", a.to_str().unwrap(), b.to_str().unwrap()]).unwrap_err();
    assert!(err.to_string().contains("defined more than once"));
}

#[test]
fn self_referencing_record_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cyc.json");
    let doc = r##"{"definitions": {"Node": {"properties": {"next": {"$ref": "#/definitions/Node"}}}}}"##;
    fs::write(&input, doc).unwrap();
    let out = dir.path().join("models.rs");

    let err = run(&["rust", "-i", input.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .unwrap_err();

    assert_eq!(err.to_string(), "reference cycle: Node -> Node");
    assert!(!out.exists());
}
