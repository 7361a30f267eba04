//! Logging backend which writes to a file beside the mod.

use chrono::Local;
use eyre::{format_err, Context, Result};
use log::{Level, Metadata, Record};
use once_cell::sync::OnceCell;
use std::{fs::File, io::Write, path::Path, sync::mpsc, sync::Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MessageType {
    Normal,
    Error,
    Warning,
    Debug,
}

impl MessageType {
    fn from_level(level: Level) -> MessageType {
        match level {
            Level::Error => MessageType::Error,
            Level::Warn => MessageType::Warning,
            Level::Info => MessageType::Normal,
            Level::Debug | Level::Trace => MessageType::Debug,
        }
    }

    fn name(self) -> &'static str {
        match self {
            MessageType::Normal => "info",
            MessageType::Error => "error",
            MessageType::Warning => "warning",
            MessageType::Debug => "debug",
        }
    }
}

#[derive(Debug)]
struct Message {
    module: String,
    msg_type: MessageType,
    string: String,
    time: String,
}

impl Message {
    /// Formats the message as a single log line.
    ///      [date time] [module] [level] Text
    fn line(&self) -> String {
        format!(
            "[{}] [{}] [{}] {}\n",
            self.time,
            self.module,
            self.msg_type.name(),
            self.string
        )
    }

    fn write_to(&self, out: &mut impl Write) {
        let _ = out.write_all(self.line().as_bytes());
    }
}

pub struct Logger;

impl Logger {
    pub fn commit(&self, record: &log::Record) {
        let module_path = match record.module_path() {
            Some(path) => path,
            None => return,
        };

        let message = Message {
            module: module_path
                .split("::")
                .last()
                .unwrap_or("unknown")
                .to_string(),
            msg_type: MessageType::from_level(record.level()),
            string: format!("{}", record.args()),
            time: Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        };

        if let Some(sender) = MSG_SENDER.get() {
            if let Ok(sender) = sender.lock() {
                // The receiver only goes away if the writer thread died, and there's nowhere
                // left to report that.
                let _ = sender.send(message);
            }
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.commit(record);
        }
    }

    fn flush(&self) {}
}

static LOGGER: Logger = Logger;
static MSG_SENDER: OnceCell<Mutex<mpsc::Sender<Message>>> = OnceCell::new();

fn max_level() -> log::LevelFilter {
    if cfg!(feature = "debug") {
        log::LevelFilter::max()
    } else {
        log::LevelFilter::Info
    }
}

/// Installs the logger, writing every message to the file at `log_path`.
///
/// Fails if a logger has already been installed, either by us or by someone else in the same
/// process.
pub fn init(log_path: impl AsRef<Path>) -> Result<()> {
    let log_path = log_path.as_ref();

    // Install before touching the file, so a failed init leaves any previous log alone.
    log::set_logger(&LOGGER)
        .map(|_| log::set_max_level(max_level()))
        .map_err(|err| format_err!("Unable to install logger: {}", err))?;

    let mut file = File::create(log_path)
        .wrap_err_with(|| format_err!("Unable to create log file {:?}", log_path))?;

    let (sender, receiver) = mpsc::channel::<Message>();

    MSG_SENDER
        .set(Mutex::new(sender))
        .map_err(|_| format_err!("Logging has already been initialised"))?;

    // Writing happens on a background thread so that logging from game callbacks never waits on
    //  the file system.
    std::thread::spawn(move || {
        for msg in receiver {
            msg.write_to(&mut file);
        }
    });

    Ok(())
}
