//! # JSON API Tests
//!
//! Sign definition files from parsing to configuration stream.

use pretty_assertions::assert_eq;
use prolite::ProliteError;
use prolite::json_api::{JsonClock, SignDefinition};

const SHOP_SIGN: &str = include_str!("golden/shop_sign.json");

#[test]
fn test_shop_sign_stream() {
    let sign = SignDefinition::from_json(SHOP_SIGN).unwrap();
    let pixels = ["R", "G", "Y", "B", "R", "G", "Y"].map(|p| p.repeat(18)).concat();

    let expected = [
        "<ID02>\r\n<ID02><DP*>\r\n<ID02><DT*>\r\n<ID02><DG*>\r\n",
        &format!("<ID02><GD>{}\r\n", pixels),
        "<ID02><PA>Cafe open\r\n",
        "<ID02><PB>\"Today\" - 10% off\r\n",
        "<ID02><TA>*****AB\r\n",
        "<ID02><TB>51700B\r\n",
        "<T2103011023008>\r\n",
        "<ID02><RPB>\r\n",
    ]
    .concat();
    assert_eq!(sign.configuration().unwrap(), expected);
}

#[test]
fn test_shop_sign_fields() {
    let sign = SignDefinition::from_json(SHOP_SIGN).unwrap();
    assert_eq!(sign.id, 2);
    assert_eq!(sign.show_page, Some(1));
    assert!(matches!(sign.clock, Some(JsonClock::At(at)) if at.year == 2021));
    assert_eq!(sign.pages.len(), 2);
    assert_eq!(sign.timers[1].day_of_week, Some(5));
    assert_eq!(sign.timers[0].hour, None);
}

#[test]
fn test_overrides() {
    let mut sign = SignDefinition::from_json(SHOP_SIGN).unwrap();
    sign.reset = false;
    sign.show_page = None;
    sign.clock = None;

    let stream = sign.configuration().unwrap();
    assert!(stream.starts_with("<ID02><GD>"));
    assert!(stream.ends_with("<ID02><TB>51700B\r\n"));
}

#[test]
fn test_show_page_must_exist() {
    let mut sign = SignDefinition::from_json(SHOP_SIGN).unwrap();
    sign.show_page = Some(2);
    let err = sign.configuration().unwrap_err();
    assert_eq!(err.to_string(), "2 is not a valid page.");
}

#[test]
fn test_first_error_wins() {
    let json = r#"{
        "id": 1,
        "pages": [{"index": 26, "content": "x"}],
        "timers": [{"index": 10, "sequence": [0]}]
    }"#;
    let err = SignDefinition::from_json(json).unwrap().to_display().unwrap_err();
    assert!(matches!(err, ProliteError::InvalidPage(26)));
}

#[test]
fn test_bad_pixels() {
    let json = format!(r#"{{"id": 1, "graphics": [{{"index": 0, "pixels": "{}X"}}]}}"#, "R".repeat(125));
    let err = SignDefinition::from_json(&json).unwrap().to_display().unwrap_err();
    assert_eq!(err.to_string(), "Invalid pixel type X");
}

#[test]
fn test_missing_id() {
    let err = SignDefinition::from_json("{}").unwrap_err();
    assert!(matches!(err, ProliteError::Json(_)));
}
