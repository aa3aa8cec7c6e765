use multierror::{CollectExt, ErrorEntry, MultiError, Validate, collect_nested};

/// A small nested document validated the way downstream code would do it
struct Database {
    url: String,
    pool_size: u32,
}

struct Service {
    name: String,
    replicas: String,
    database: Database,
}

impl Validate for Database {
    fn validate(&self) -> MultiError {
        let mut errors = MultiError::new();
        if !self.url.starts_with("postgres://") {
            errors.add(format!("url must use postgres://, got '{}'", self.url));
        }
        if self.pool_size == 0 {
            errors.add("pool_size must be at least 1");
        }
        errors
    }
}

impl Validate for Service {
    fn validate(&self) -> MultiError {
        let mut errors = MultiError::new();
        if self.name.is_empty() {
            errors.add("name is required");
        }
        self.replicas
            .parse::<u16>()
            .collect_err_with_prefix(&mut errors, "replicas: ");
        errors.add_with_prefix(self.database.validate(), "database.");
        errors
    }
}

#[test]
fn test_validation_pass_reports_every_problem() {
    let service = Service {
        name: String::new(),
        replicas: "many".to_string(),
        database: Database {
            url: "mysql://db".to_string(),
            pool_size: 0,
        },
    };

    assert_eq!(
        service.validate().to_string(),
        "encountered 4 errors during validation:
    * name is required
    * replicas: invalid digit found in string
    * database.url must use postgres://, got 'mysql://db'
    * database.pool_size must be at least 1"
    );
}

#[test]
fn test_valid_document_has_no_errors() {
    let service = Service {
        name: "api".to_string(),
        replicas: "3".to_string(),
        database: Database {
            url: "postgres://db".to_string(),
            pool_size: 4,
        },
    };

    assert!(!service.validate().has_any());
    assert!(service.check().is_ok());
}

#[test]
fn test_nested_child_reports() {
    let bad_db = Database {
        url: "sqlite://".to_string(),
        pool_size: 0,
    };

    let mut errors = MultiError::new();
    errors.add("top-level problem");
    collect_nested(bad_db.check(), &mut errors);

    assert_eq!(
        errors.to_string(),
        "encountered 2 errors during validation:
    * top-level problem
    * encountered 2 errors during validation:
        * url must use postgres://, got 'sqlite://'
        * pool_size must be at least 1"
    );
}

#[test]
fn test_golden_nested_output() {
    let mut innermost_error = MultiError::new();
    innermost_error.add("innermost error");

    let mut inner_error = MultiError::new();
    inner_error.add("inner error 1");
    inner_error.add("inner error 2");
    inner_error.add(innermost_error);

    let mut errors = MultiError::new();
    errors.add("Error 1");
    errors.add("Error 2");
    errors.add(inner_error);

    assert_eq!(
        errors.to_string(),
        "encountered 3 errors during validation:
    * Error 1
    * Error 2
    * encountered 3 errors during validation:
        * inner error 1
        * inner error 2
        * encountered 1 error during validation:
            * innermost error"
    );
}

#[test]
fn test_prefix_is_plain_concatenation() {
    let mut errors = MultiError::new();
    errors.add_with_prefix("Error 1", "Prefix:");

    let mut nested = MultiError::new();
    nested.add("Error 3");
    nested.add("Error 4");
    errors.add_with_prefix(nested, "Prefix:");

    assert_eq!(
        errors.into_errors(),
        vec![
            ErrorEntry::from("Prefix:Error 1"),
            ErrorEntry::from("Prefix:Error 3"),
            ErrorEntry::from("Prefix:Error 4"),
        ]
    );
}
