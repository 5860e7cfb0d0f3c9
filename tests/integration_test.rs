use openapi_typegen::{
    cli::{run, CliArgs},
    document::{load_document, parse_document, DocumentFormat},
    emitter::TypeEmitter,
    error::Error,
    extractor::SchemaExtractor,
    generator::generate,
    options::Options,
    schema::SchemaNode,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

const PETSTORE_TS: &str = include_str!("fixtures/petstore.ts");

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_yaml_end_to_end_generation() {
    let document = load_document(&fixture("petstore.yaml")).expect("Failed to load fixture");
    let output = generate(&document, &Options::default()).expect("Failed to generate");

    assert_eq!(output, PETSTORE_TS);
}

#[test]
fn test_json_and_yaml_produce_identical_output() {
    let yaml = load_document(&fixture("petstore.yaml")).unwrap();
    let json = load_document(&fixture("petstore.json")).unwrap();

    assert_eq!(
        generate(&json, &Options::default()).unwrap(),
        generate(&yaml, &Options::default()).unwrap()
    );
}

#[test]
fn test_extraction_covers_every_operation_and_component() {
    let document = load_document(&fixture("petstore.yaml")).unwrap();
    let extraction = SchemaExtractor::new(&document).extract().unwrap();

    let operations: Vec<_> = extraction.operations.keys().map(String::as_str).collect();
    assert_eq!(operations, vec!["listPets", "createPet", "showPetById", "deletePet"]);

    let components: Vec<_> = extraction.components.keys().map(String::as_str).collect();
    assert_eq!(components, vec!["Pet", "NewPet", "Owner", "Pets"]);
}

#[test]
fn test_wider_indent_scales_every_level() {
    let document = load_document(&fixture("petstore.yaml")).unwrap();
    let output = generate(&document, &Options { indent: 4 }).unwrap();

    let expected: String = PETSTORE_TS
        .lines()
        .map(|line| {
            let trimmed = line.trim_start_matches(' ');
            let depth = (line.len() - trimmed.len()) / 2;
            format!("{}{}\n", " ".repeat(depth * 4), trimmed)
        })
        .collect();
    assert_eq!(output, expected);
}

#[test]
fn test_indentation_tracks_nesting_depth() {
    let document = load_document(&fixture("petstore.yaml")).unwrap();
    let output = generate(&document, &Options::default()).unwrap();

    let mut depth = 0usize;
    for line in output.lines().filter(|line| !line.is_empty()) {
        let trimmed = line.trim_start();
        if trimmed.starts_with('}') {
            depth -= 1;
        }
        assert_eq!(line.len() - trimmed.len(), depth * 2, "line: {:?}", line);
        if trimmed.ends_with('{') {
            depth += 1;
        }
    }
    assert_eq!(depth, 0);
}

#[test]
fn test_missing_operation_id_aborts_generation() {
    let yaml = r#"
paths:
  /pets:
    get:
      operationId: listPets
  /pets/{id}:
    put:
      summary: no id here
components:
  schemas:
    Pet:
      type: object
"#;
    let document = parse_document(yaml, DocumentFormat::Yaml).unwrap();
    let err = generate(&document, &Options::default()).unwrap_err();

    match err {
        Error::MissingOperationId { method, path } => {
            assert_eq!(method, "PUT");
            assert_eq!(path, "/pets/{id}");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_external_references_fall_back_to_any() {
    let yaml = r#"
paths:
  /upload:
    post:
      operationId: upload
      parameters:
        - $ref: 'shared.yaml#/parameters/Trace'
          name: trace
          in: header
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                file:
                  $ref: 'https://example.com/schemas/file.json'
                root:
                  $ref: '#'
"#;
    let document = parse_document(yaml, DocumentFormat::Yaml).unwrap();
    let output = generate(&document, &Options::default()).unwrap();

    assert_eq!(
        output,
        "export interface UploadReq {\n\
         \x20 headers?: {\n\
         \x20   trace?: any;\n\
         \x20 };\n\
         \x20 body?: {\n\
         \x20   file?: any;\n\
         \x20   root?: any;\n\
         \x20 };\n\
         }\n\n\n"
    );
}

#[test]
fn test_emitter_reused_across_independent_schemas() {
    let document = load_document(&fixture("petstore.yaml")).unwrap();
    let extraction = SchemaExtractor::new(&document).extract().unwrap();

    // Emitting a deep declaration first must not shift the next one
    let mut emitter = TypeEmitter::new(Options::default());
    emitter.emit("NewPet", &extraction.components["NewPet"]);
    let offset = emitter.as_str().len();
    emitter.emit("Pet", &extraction.components["Pet"]);

    let mut alone = TypeEmitter::new(Options::default());
    alone.emit("Pet", &extraction.components["Pet"]);

    assert_eq!(&emitter.as_str()[offset..], alone.as_str());
    assert!(matches!(extraction.components["Pets"], SchemaNode::Array(_)));
}

#[test]
fn test_cli_run_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("typegen.json");
    let output = temp_dir.path().join("generated").join("petstore.ts");
    std::fs::write(&config, r#"{ "indent": 2 }"#).unwrap();

    let args = CliArgs {
        input_path: fixture("petstore.json"),
        output_path: Some(output.clone()),
        indent: None,
        config_path: Some(config),
        verbose: false,
    };
    run(args).expect("CLI run failed");

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, PETSTORE_TS);
}
