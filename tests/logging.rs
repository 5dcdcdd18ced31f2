#![cfg(feature = "logging")]

use std::sync::Mutex;

use bitword::{
    ByteOrder, Field, FieldError,
    bits::{get_bit_field, nth_byte},
};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

// One test per binary: the logger is process-global.
#[test]
fn rejections_are_logged_at_debug() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    assert_eq!(
        get_bit_field(0, 60, 5, ByteOrder::Normal).unwrap_err(),
        FieldError::OutOfBounds
    );
    assert_eq!(nth_byte(0, 9).unwrap_err(), FieldError::ByteIndexOutOfRange);
    assert_eq!(
        Field::new(0, 64)
            .unwrap()
            .set_scaled(&mut 0, -1.0, 1.0, 0.0)
            .unwrap_err(),
        FieldError::ValueOutOfRange
    );

    // accepted descriptors stay silent
    assert_eq!(get_bit_field(0x80, 56, 1, ByteOrder::Normal), Ok(1));

    let records = LOGGER.records.lock().unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|(level, _)| *level == Level::Debug));
    assert_eq!(
        records[0].1,
        "rejected field of 5 bits at bit 60: past end of word"
    );
    assert_eq!(records[1].1, "rejected byte index 9");
    assert_eq!(records[2].1, "rejected scaled value -1 for 64-bit field at bit 0");
}
