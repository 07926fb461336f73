use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = workspace_root()
        .join("catalog_api/tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn extract_results(fixture: &Value) -> Value {
    fixture["data"]["results"].clone()
}

// ---------------------------------------------------------------------------
// Positive validation: fixtures conform to their schemas
// ---------------------------------------------------------------------------

#[test]
fn test_products_fixture_conforms_to_schema() {
    let fixture = load_fixture("products.json");
    let schema = load_schema("product.schema.json");
    let data = extract_results(&fixture);

    let validator = jsonschema::draft202012::new(&schema).expect("product schema compiles");
    if let Err(e) = validator.validate(&data) {
        panic!("products fixture failed validation: {e}");
    }
}

#[test]
fn test_search_fixture_conforms_to_schema() {
    let fixture = load_fixture("search.json");
    let schema = load_schema("product.schema.json");
    let data = extract_results(&fixture);

    let validator = jsonschema::draft202012::new(&schema).expect("product schema compiles");
    if let Err(e) = validator.validate(&data) {
        panic!("search fixture failed validation: {e}");
    }
}

#[test]
fn test_single_product_fixture_conforms_to_schema() {
    let fixture = load_fixture("product.json");
    let schema = load_schema("product.schema.json");
    let data = Value::Array(vec![fixture["data"].clone()]);

    let validator = jsonschema::draft202012::new(&schema).expect("product schema compiles");
    if let Err(e) = validator.validate(&data) {
        panic!("product fixture failed validation: {e}");
    }
}

#[test]
fn test_page_envelopes_conform_to_schema() {
    let schema = load_schema("paginated_result.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("page schema compiles");

    for name in ["products.json", "products_empty.json", "search.json"] {
        let fixture = load_fixture(name);
        if let Err(e) = validator.validate(&fixture["data"]) {
            panic!("{name} page failed validation: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_product_schema_rejects_missing_required_field() {
    let fixture = load_fixture("products.json");
    let schema = load_schema("product.schema.json");
    let mut data = extract_results(&fixture);

    data[0]
        .as_object_mut()
        .expect("product is an object")
        .remove("imageUrl");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject product missing imageUrl"
    );
}

#[test]
fn test_product_schema_rejects_string_price() {
    let fixture = load_fixture("products.json");
    let schema = load_schema("product.schema.json");
    let mut data = extract_results(&fixture);

    data[0]
        .as_object_mut()
        .expect("product is an object")
        .insert("price".to_string(), Value::String("89.99".to_string()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject a non-numeric price"
    );
}

#[test]
fn test_page_schema_rejects_zero_page() {
    let fixture = load_fixture("products.json");
    let schema = load_schema("paginated_result.schema.json");
    let mut data = fixture["data"].clone();

    data.as_object_mut()
        .expect("page is an object")
        .insert("page".to_string(), Value::Number(0.into()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject page 0, pages are 1-based"
    );
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn test_product_schema_rejects_additional_properties() {
    let fixture = load_fixture("products.json");
    let schema = load_schema("product.schema.json");
    let mut data = extract_results(&fixture);

    data[0]
        .as_object_mut()
        .expect("product is an object")
        .insert("bogusField".to_string(), Value::Number(123.into()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject additional properties"
    );
}

#[test]
fn test_empty_results_conform() {
    let fixture = load_fixture("products_empty.json");
    let schema = load_schema("product.schema.json");
    let data = extract_results(&fixture);

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(validator.validate(&data).is_ok());
    assert_eq!(data, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Rendered output: the list's JSON output carries schema-valid products
// ---------------------------------------------------------------------------

#[test]
fn test_json_list_output_products_conform_to_schema() {
    use catalog_lib::types::{PaginatedResult, Product, ServiceResponse};
    use catalog_lib::{ListParams, ListView};

    let fixture = load_fixture("products.json");
    let resp: ServiceResponse<PaginatedResult<Product>> =
        serde_json::from_value(fixture).expect("fixture decodes");

    let mut view = ListView::new();
    let ticket = view.begin(ListParams {
        page: 1,
        limit: 10,
        term: None,
    });
    assert!(view.resolve(ticket.seq, Ok(resp)));
    view.image_failed("p-002");

    let output = serde_json::to_value(view.state()).expect("state serializes");
    assert_eq!(output["state"], "populated");
    let products: Vec<Value> = output["items"]
        .as_array()
        .expect("items is an array")
        .iter()
        .map(|item| item["product"].clone())
        .collect();
    assert_eq!(products.len(), 2);

    let schema = load_schema("product.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("product schema compiles");
    if let Err(e) = validator.validate(&Value::Array(products)) {
        panic!("rendered list products failed validation: {e}");
    }
}
