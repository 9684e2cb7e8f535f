//! 浏览器控制台日志
//!
//! 把 `log` 门面的输出转发到 `console.*`，格式为 `[LEVEL] message`。

use log::{Level, Log, Metadata, Record};
use wasm_bindgen::JsValue;

pub struct ConsoleLogger {
    level: Level,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    level: if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    },
};

impl ConsoleLogger {
    /// 安装为全局日志器，重复调用无副作用
    pub fn init() {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LOGGER.level.to_level_filter());
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.level(), record.args());
        let value = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}
