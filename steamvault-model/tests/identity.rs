use steamvault_model::identity::{
    derive_username, storage_user_id, CredentialScheme, IdentityError, RotateCipher,
    UsernameCredential,
};

#[test]
fn cipher_round_trips_mixed_case() {
    let cipher = RotateCipher::new(5);
    let original = "AbCxYz";
    let encoded = cipher.encode(original);
    assert_ne!(encoded, original);
    assert_eq!(cipher.decode(&encoded), original);
}

#[test]
fn cipher_wraps_modulo_26() {
    assert_eq!(RotateCipher::new(5).encode("xyz"), "cde");
    assert_eq!(RotateCipher::new(31).encode("xyz"), "cde");
}

#[test]
fn cipher_preserves_case_and_non_letters() {
    let cipher = RotateCipher::new(5);
    assert_eq!(cipher.encode("Ab3-z"), "Fg3-e");
}

#[test]
fn default_offset_round_trip() {
    let cipher = RotateCipher::default();
    assert_eq!(cipher.decode(&cipher.encode("SomeUser")), "SomeUser");
}

#[test]
fn storage_id_strips_seven_digit_prefix() {
    assert_eq!(storage_user_id(76561198012345678), Ok(8012345678));
    // Leading zeros after the prefix collapse into a shorter number.
    assert_eq!(storage_user_id(76561190000000042), Ok(42));
}

#[test]
fn storage_id_rejects_short_and_negative_ids() {
    assert_eq!(storage_user_id(1234567), Err(IdentityError::TooShort(1234567)));
    assert_eq!(storage_user_id(-5), Err(IdentityError::Negative(-5)));
}

#[test]
fn storage_id_can_narrow_to_zero() {
    // An all-zero remainder is representable; ingestion rejects it as an
    // invalid key, not the transform.
    assert_eq!(storage_user_id(10000000), Ok(0));
}

#[test]
fn username_from_vanity_slug() {
    assert_eq!(
        derive_username("Display Name", "https://steamcommunity.com/id/gaben/"),
        "gaben"
    );
    assert_eq!(
        derive_username("Display Name", "https://steamcommunity.com/id/gaben"),
        "gaben"
    );
}

#[test]
fn username_fallback_folds_display_name() {
    assert_eq!(
        derive_username("Gabe Newell!", "https://steamcommunity.com/profiles/765611"),
        "gabenewell"
    );
}

#[test]
fn empty_vanity_slug_stays_empty() {
    // Ingestion rejects empty usernames; derivation does not invent one.
    assert_eq!(
        derive_username("Display Name", "https://steamcommunity.com/id/"),
        ""
    );
}

#[test]
fn placeholder_credential_echoes_username() {
    assert_eq!(UsernameCredential.initial_credential("mtgjs"), "mtgjs");
}
