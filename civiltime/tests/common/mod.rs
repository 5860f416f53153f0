// Not every test file uses every helper
#![allow(dead_code)]

use civiltime::{Date, Duration, Instant, TimeOfDay, TimeZoneName};
use proptest::prelude::*;

pub(crate) const NANOS_PER_DAY: i64 = 86_400_000_000_000;

/// Roughly 1699 to 2199, so that local midnights stay within `Instant`.
pub(crate) fn dates() -> impl Strategy<Value = Date> {
    (-99_000i64..84_000).prop_map(|days| {
        Date::from_days_since_epoch(days).expect("day within the representable range")
    })
}

pub(crate) fn times_of_day() -> impl Strategy<Value = TimeOfDay> {
    (0..NANOS_PER_DAY).prop_map(TimeOfDay::from_nanos)
}

/// Instants a few days away from either end of the representable range.
pub(crate) fn instants() -> impl Strategy<Value = Instant> {
    (-8_500_000_000_000_000_000i64..8_500_000_000_000_000_000).prop_map(Instant::from_nanos)
}

/// Instants in the years around the recent DST rule changes.
pub(crate) fn recent_instants() -> impl Strategy<Value = Instant> {
    (1_100_000_000_000_000_000i64..1_800_000_000_000_000_000).prop_map(Instant::from_nanos)
}

pub(crate) fn zone_names() -> impl Strategy<Value = TimeZoneName> {
    prop_oneof![
        Just(TimeZoneName::new("EST")),
        Just(TimeZoneName::new("CST")),
        Just(TimeZoneName::utc()),
        Just(TimeZoneName::new("Europe/Berlin")),
    ]
}

pub(crate) fn hours(n: i64) -> Duration {
    Duration::hours(n)
}

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

#[macro_export]
macro_rules! assert_text_round_trip {
    ($value:expr) => {{
        let value = $value;
        let text = value.to_string();
        let parsed = text.parse();
        assert_eq!(parsed, Ok(value), "round trip through {:?}", text);
    }};

    ($value:expr, $text:expr) => {{
        let value = $value;
        assert_eq!(value.to_string(), $text);
        assert_eq!($text.parse(), Ok(value));
    }};
}
