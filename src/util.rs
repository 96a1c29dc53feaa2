// Small helpers: label formatting and the console log sink.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Text shown in a cell whose counter is `n`: `2^n` in decimal while it fits in u128.
pub fn power_of_two_label(n: u32) -> String {
    match 1u128.checked_shl(n) {
        Some(v) => v.to_string(),
        None => format!("2^{n}"),
    }
}

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::log_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

pub fn init_logging(level: LevelFilter) {
    // A second install fails harmlessly; only the level is updated.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_powers_of_two() {
        assert_eq!(power_of_two_label(0), "1");
        assert_eq!(power_of_two_label(1), "2");
        assert_eq!(power_of_two_label(3), "8");
        assert_eq!(power_of_two_label(11), "2048");
        assert_eq!(power_of_two_label(64), "18446744073709551616");
    }

    #[test]
    fn labels_switch_to_exponent_past_u128() {
        assert_eq!(
            power_of_two_label(127),
            "170141183460469231731687303715884105728"
        );
        assert_eq!(power_of_two_label(128), "2^128");
        assert_eq!(power_of_two_label(u32::MAX), format!("2^{}", u32::MAX));
    }
}
