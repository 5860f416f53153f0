#![cfg(feature = "serde")]

use civiltime::{literals::AUG, Date, Duration, Instant, TimeOfDay};
use proptest::prelude::*;

use common::{dates, instants, times_of_day};

mod common;

#[test]
fn canonical_text_in_json() {
    let date = AUG / 11 / 2009;
    let tod = TimeOfDay::from_hms_nano(9, 30, 0, 250_000_000);
    let instant = Instant::from_nanos(1_249_992_000_000_000_000) + Duration::milliseconds(5);

    assert_eq!(serde_json::to_string(&date).unwrap(), r#""2009-08-11""#);
    assert_eq!(serde_json::to_string(&tod).unwrap(), r#""09:30:00.25""#);
    assert_eq!(
        serde_json::to_string(&instant).unwrap(),
        r#""2009-08-11 12:00:00.005""#
    );

    let value = serde_json::json!({ "date": date, "tod": tod, "instant": instant });
    assert_eq!(value["date"], "2009-08-11");
    assert_eq!(value["tod"], "09:30:00.25");
}

#[test]
fn invalid_text_is_an_error() {
    assert!(serde_json::from_str::<Date>(r#""2009-02-30""#).is_err());
    assert!(serde_json::from_str::<TimeOfDay>(r#""12:61""#).is_err());
    assert!(serde_json::from_str::<Instant>("12").is_err());

    let err = serde_json::from_str::<Instant>(r#""2009-08-11 Nowhere/Fake""#).unwrap_err();
    assert!(err.to_string().contains("Nowhere/Fake"));
}

proptest! {
    #[test]
    fn json_round_trip(d in dates(), tod in times_of_day(), i in instants()) {
        let json = serde_json::to_string(&(d, tod, i)).unwrap();
        let back: (Date, TimeOfDay, Instant) = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, (d, tod, i));
    }
}
