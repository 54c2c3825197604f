//! A minimal `log` backend writing `[LEVEL target] message` lines to a swappable sink (stderr by
//! default). Standard output is reserved for answers.
use std::io::{self, Write};
use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

pub type Sink = Box<dyn Write + Send>;

pub struct Logger {
    sink: Mutex<Sink>,
}

lazy_static! {
    static ref LOGGER: Logger = Logger {
        sink: Mutex::new(Box::new(io::stderr())),
    };
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut sink = self.sink.lock();
        // nowhere left to report a failing log sink
        let _ = writeln!(sink, "[{} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

/// Install the logger (once per process) and set the level filter (every call).
pub fn install(level: LevelFilter) {
    if log::set_logger(&*LOGGER).is_err() {
        log::debug!("logger already installed, only updating the level to {}", level);
    }
    log::set_max_level(level);
}

/// Replace the sink, returning the previous one.
pub fn redirect(sink: Sink) -> Sink {
    std::mem::replace(&mut *LOGGER.sink.lock(), sink)
}
