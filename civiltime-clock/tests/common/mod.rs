// Not every test file uses every helper
#![allow(dead_code)]

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub(crate) fn sleep_micros(micros: u64) {
    std::thread::sleep(std::time::Duration::from_micros(micros));
}

#[macro_export]
macro_rules! setup {
    ($mode:expr) => {
        setup!($mode, civiltime::Duration::microseconds(1))
    };

    ($mode:expr, $resolution:expr) => {{
        common::init_tracing();
        civiltime_clock::LowResClock::new($mode, $resolution).expect("clock should start")
    }};
}
