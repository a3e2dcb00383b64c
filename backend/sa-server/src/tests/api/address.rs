use crate::{ApiError, validate_address};

const WRAPPED_SOL_MINT: &str = "So11111111111111111111111111111111111111112";
const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";

#[test]
fn given_mint_address_when_validated_then_accepted() {
    assert!(validate_address(WRAPPED_SOL_MINT, "token").is_ok());
}

#[test]
fn given_32_char_address_when_validated_then_accepted() {
    // Given
    assert_eq!(SYSTEM_PROGRAM.len(), 32);

    // When / Then
    assert!(validate_address(SYSTEM_PROGRAM, "wallet").is_ok());
}

#[test]
fn given_too_short_address_when_validated_then_bad_request_names_kind() {
    let err = validate_address("abc", "pool").unwrap_err();

    match err {
        ApiError::BadRequest { message, .. } => assert_eq!(message, "Invalid pool address"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[test]
fn given_too_long_address_when_validated_then_rejected() {
    let address = "1".repeat(45);

    assert!(validate_address(&address, "token").is_err());
}

#[test]
fn given_non_base58_characters_when_validated_then_rejected() {
    // Given: '0', 'O', 'I' and 'l' are outside the alphabet
    for bad in ['0', 'O', 'I', 'l'] {
        let address = format!("{}{}", &WRAPPED_SOL_MINT[..40], bad);

        // When / Then
        assert!(
            validate_address(&address, "wallet").is_err(),
            "'{bad}' should be rejected"
        );
    }
}
