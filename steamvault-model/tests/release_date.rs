use steamvault_model::release_date::{parse_release_date, DateError};

#[test]
fn parses_utc_midnight_epoch() {
    // 2015-03-21T00:00:00Z
    assert_eq!(parse_release_date("21 Mar, 2015"), Ok(1_426_896_000));
}

#[test]
fn long_month_name_matches_on_prefix() {
    assert_eq!(parse_release_date("21 March, 2015"), Ok(1_426_896_000));
}

#[test]
fn epoch_origin_is_a_real_date_not_a_sentinel() {
    assert_eq!(parse_release_date("1 Jan, 1970"), Ok(0));
}

#[test]
fn impossible_calendar_date_is_an_error() {
    assert_eq!(
        parse_release_date("31 Feb, 2015"),
        Err(DateError::InvalidDate {
            year: 2015,
            month: 2,
            day: 31
        })
    );
}

#[test]
fn too_few_tokens() {
    assert!(matches!(
        parse_release_date("2015"),
        Err(DateError::TooFewTokens(_))
    ));
    assert!(matches!(
        parse_release_date(""),
        Err(DateError::TooFewTokens(_))
    ));
}

#[test]
fn month_match_is_case_sensitive() {
    assert!(matches!(
        parse_release_date("21 mar, 2015"),
        Err(DateError::UnknownMonth(_))
    ));
    assert!(matches!(
        parse_release_date("21 Foo, 2015"),
        Err(DateError::UnknownMonth(_))
    ));
}

#[test]
fn short_month_token_is_unknown() {
    assert!(matches!(
        parse_release_date("21 Ma 2015"),
        Err(DateError::UnknownMonth(_))
    ));
}

#[test]
fn non_numeric_day_or_year() {
    assert!(matches!(
        parse_release_date("x Mar, 2015"),
        Err(DateError::InvalidNumber(_))
    ));
    assert!(matches!(
        parse_release_date("21 Mar, soon"),
        Err(DateError::InvalidNumber(_))
    ));
}
