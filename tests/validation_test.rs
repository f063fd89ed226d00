use jvis::error::Error;
use jvis::validation::{
    sanitize_project_name, validate_database, validate_description, validate_entity_name,
    validate_project_name, validate_safe_path, MAX_DESCRIPTION_LENGTH,
};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_sanitize_project_name() {
    assert_eq!(sanitize_project_name("  My Cool App  "), "my-cool-app");
    assert_eq!(sanitize_project_name("api.v2"), "api-v2");
    assert_eq!(sanitize_project_name("shop@home!"), "shophome");
    assert_eq!(sanitize_project_name("-_edge_-"), "edge");
}

#[test]
fn test_validate_project_name() {
    for name in ["my-api", "shop_2", "ab"] {
        assert!(validate_project_name(name).is_ok(), "{name} should be valid");
    }
    for name in ["", "a", "2fast", "Upper", "has space", "-dash"] {
        assert!(
            matches!(validate_project_name(name), Err(Error::ValidationError(_))),
            "{name} should be rejected"
        );
    }
    assert!(validate_project_name(&"a".repeat(65)).is_err());
}

#[test]
fn test_validate_entity_name() {
    assert_eq!(validate_entity_name("  Product ").unwrap(), "product");
    assert_eq!(validate_entity_name("order").unwrap(), "order");
    assert!(validate_entity_name("x").is_err());
    assert!(validate_entity_name("line_item").is_err());
    assert!(validate_entity_name("two words").is_err());
    assert!(validate_entity_name(&"a".repeat(31)).is_err());
}

#[test]
fn test_validate_database() {
    for db in ["postgresql", "mysql", "dynamodb"] {
        assert!(validate_database(db).is_ok());
    }
    let err = validate_database("oracle").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation error: Unknown database 'oracle'. Available: postgresql, mysql, dynamodb."
    );
}

#[test]
fn test_validate_description() {
    assert!(validate_description("").is_ok());
    assert!(validate_description(&"é".repeat(MAX_DESCRIPTION_LENGTH)).is_ok());
    assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LENGTH + 1)).is_err());
}

#[test]
fn test_validate_safe_path() {
    let temp_dir = TempDir::new().unwrap();
    assert!(validate_safe_path(&temp_dir.path().join("project")).is_ok());
    assert!(validate_safe_path(Path::new("relative/project")).is_ok());

    assert!(validate_safe_path(Path::new("../outside")).is_err());
    assert!(validate_safe_path(Path::new("projects/../../etc")).is_err());
    for system in ["/", "/etc", "/usr/", "/proc"] {
        assert!(validate_safe_path(Path::new(system)).is_err(), "{system} should be rejected");
    }
}
