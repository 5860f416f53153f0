use chrono::FixedOffset;
use civiltime::{
    literals::AUG, Converter, Duration, FixedZones, Instant, TimeOfDay, TimeZoneName,
};
use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};

fn noon() -> Instant {
    Instant::from_nanos(1_249_992_000_000_000_000)
}

fn bench_components_tzdb(b: &mut Bencher) {
    let converter = Converter::new();
    let tz = TimeZoneName::new("America/New_York");
    let mut instant = noon();

    b.iter(|| {
        instant += Duration::minutes(7);
        black_box(converter.components(black_box(instant), &tz))
    });
}

fn bench_components_fixed(b: &mut Bencher) {
    let converter = Converter::with_resolver(
        FixedZones::new().with_zone("Test/East", FixedOffset::east_opt(8 * 3600).unwrap()),
    );
    let tz = TimeZoneName::new("Test/East");
    let mut instant = noon();

    b.iter(|| {
        instant += Duration::minutes(7);
        black_box(converter.components(black_box(instant), &tz))
    });
}

fn bench_instant_from_date_time(b: &mut Bencher) {
    let converter = Converter::new();
    let tz = TimeZoneName::new("Europe/Berlin");
    let tod = TimeOfDay::from_hms(9, 30, 0);

    b.iter(|| black_box(converter.instant_from_date_time(black_box(AUG / 11 / 2009), tod, &tz)));
}

fn bench_parse_instant(b: &mut Bencher) {
    let converter = Converter::new();
    let tz = TimeZoneName::utc();

    b.iter(|| black_box(converter.parse_instant(black_box("2009-08-11 12:00:00.005"), &tz, None)));
}

fn bench_format_instant(b: &mut Bencher) {
    let converter = Converter::new();
    let tz = TimeZoneName::new("EST");

    b.iter(|| black_box(converter.format_instant(black_box(noon()), &tz, None)));
}

fn bench_time_of_day_text(b: &mut Bencher) {
    b.iter(|| black_box(black_box("12:34:56.789").parse::<TimeOfDay>()));
}

fn bench_conversions(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut group = c.benchmark_group("Conversions");
    group.bench_function("components tzdb", bench_components_tzdb);
    group.bench_function("components fixed", bench_components_fixed);
    group.bench_function("instant from date and time", bench_instant_from_date_time);
    group.bench_function("parse instant", bench_parse_instant);
    group.bench_function("format instant", bench_format_instant);
    group.bench_function("parse time of day", bench_time_of_day_text);
}

criterion_group!(benches, bench_conversions);
criterion_main!(benches);
