use rworklog::config::Config;
use rworklog::core::auth::{authorize, hash_secret, verify_secret};
use rworklog::errors::{AppError, ErrorKind};

#[test]
fn test_hash_is_salted_and_verifies() {
    let a = hash_secret("open sesame").unwrap();
    let b = hash_secret("open sesame").unwrap();
    assert_ne!(a, b);
    assert!(a.starts_with("$2"));
    assert!(!a.contains("open sesame"));

    assert!(verify_secret("open sesame", &a).unwrap());
    assert!(verify_secret("open sesame", &b).unwrap());
    assert!(!verify_secret("open sesame!", &a).unwrap());
    assert!(!verify_secret("", &a).unwrap());
}

#[test]
fn test_empty_secret_cannot_be_set() {
    assert!(hash_secret("   ").is_err());
}

#[test]
fn test_malformed_hash_is_an_access_error() {
    let err = verify_secret("x", "not-a-hash").unwrap_err();
    assert!(matches!(err, AppError::MalformedSecretHash));
    assert_eq!(err.kind(), ErrorKind::Access);

    // plain `salt:digest` values are not accepted as a stored secret
    let legacy = "00112233445566778899aabbccddeeff:deadbeef";
    assert!(matches!(
        verify_secret("x", legacy),
        Err(AppError::MalformedSecretHash)
    ));
}

#[test]
fn test_authorize_gate() {
    let mut cfg = Config::with_database("unused.sqlite");

    let err = authorize(&cfg, Some("anything")).unwrap_err();
    assert!(matches!(err, AppError::AdminSecretNotSet));
    assert_eq!(err.kind(), ErrorKind::Config);

    cfg.admin_secret_hash = Some(hash_secret("team-lead").unwrap());

    assert!(authorize(&cfg, Some("team-lead")).is_ok());
    assert!(matches!(
        authorize(&cfg, Some("team-leader")),
        Err(AppError::Unauthorized)
    ));
    assert!(matches!(authorize(&cfg, None), Err(AppError::MissingSecret)));
}
