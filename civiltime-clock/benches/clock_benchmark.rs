use civiltime::Duration;
use civiltime_clock::{Clock, LowResClock, MinstantClock, Mode, QuantaClock, SystemClock};
use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};

fn bench_clock<C: Clock>(b: &mut Bencher, clock: &C) {
    b.iter(|| black_box(clock.now()));
}

fn bench_system(b: &mut Bencher) {
    bench_clock(b, &SystemClock::new());
}

fn bench_quanta(b: &mut Bencher) {
    bench_clock(b, &QuantaClock::new());
}

fn bench_minstant(b: &mut Bencher) {
    bench_clock(b, &MinstantClock::new());
}

fn bench_lowres(b: &mut Bencher) {
    let clock = LowResClock::new(Mode::RealTime, Duration::milliseconds(1))
        .expect("clock should start");
    bench_clock(b, &clock);
}

fn bench_lowres_virtual(b: &mut Bencher) {
    let clock = LowResClock::new(Mode::Virtual, Duration::milliseconds(1))
        .expect("clock should start");
    b.iter(|| black_box(clock.virtual_now()));
}

fn bench_clocks(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut group = c.benchmark_group("Clocks");
    group.bench_function("system", bench_system);
    group.bench_function("quanta", bench_quanta);
    group.bench_function("minstant", bench_minstant);
    group.bench_function("lowres", bench_lowres);
    group.bench_function("lowres virtual", bench_lowres_virtual);
}

criterion_group!(benches, bench_clocks);
criterion_main!(benches);
