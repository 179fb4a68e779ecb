use std::env;
use trefle_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("TREFLE_TEST_VAR_STRING", "test_value");
    }
    let result: String = get_env_or_default("TREFLE_TEST_VAR_STRING", "default".to_string());
    assert_eq!(result, "test_value");
    unsafe {
        env::remove_var("TREFLE_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    let result: u64 = get_env_or_default("TREFLE_TEST_VAR_MISSING", 30);
    assert_eq!(result, 30);
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("TREFLE_TEST_VAR_INVALID", "not_a_number");
    }
    let result: u32 = get_env_or_default("TREFLE_TEST_VAR_INVALID", 99);
    assert_eq!(result, 99);
    unsafe {
        env::remove_var("TREFLE_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_trims_whitespace() {
    unsafe {
        env::set_var("TREFLE_TEST_VAR_PADDED", " 42 ");
    }
    let result: u32 = get_env_or_default("TREFLE_TEST_VAR_PADDED", 0);
    assert_eq!(result, 42);
    unsafe {
        env::remove_var("TREFLE_TEST_VAR_PADDED");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("TREFLE_TEST_VAR_OPTION", "123");
        env::set_var("TREFLE_TEST_VAR_BLANK", "  ");
    }
    assert_eq!(get_env_or_none::<u32>("TREFLE_TEST_VAR_OPTION"), Some(123));
    assert_eq!(get_env_or_none::<String>("TREFLE_TEST_VAR_BLANK"), None);
    assert_eq!(get_env_or_none::<u32>("TREFLE_TEST_VAR_NOT_SET"), None);
    unsafe {
        env::remove_var("TREFLE_TEST_VAR_OPTION");
        env::remove_var("TREFLE_TEST_VAR_BLANK");
    }
}
