use std::{
    fmt::Arguments,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use ::chrono::NaiveDateTime;
use ::env_logger::{Builder, Env, Target};
use ::log::{error, Level};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Все записи уровня `error` (или выше `RUST_LOG`) дописываются в `log_file`.
pub fn init(log_file: &Path) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("error"));

    builder.format(|buf, record| {
        write_record(
            buf,
            ::chrono::Local::now().naive_local(),
            record.level(),
            record.args(),
        )
    });

    match open_log_file(log_file) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
            builder.init();
        }
        Err(err) => {
            builder.target(Target::Stderr);
            builder.init();
            error!("cannot open {}: {err}, logging to stderr", log_file.display());
        }
    }
}

/// `2024-06-01 12:00:00 ERROR: message`
pub fn write_record(
    out: &mut impl Write,
    at: NaiveDateTime,
    level: Level,
    args: &Arguments<'_>,
) -> io::Result<()> {
    writeln!(out, "{} {}: {}", at.format(TIMESTAMP_FORMAT), level, args)
}

/// Открывает файл только на дозапись, создавая недостающие каталоги.
pub fn open_log_file(log_file: &Path) -> io::Result<File> {
    if let Some(dir) = log_file.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    OpenOptions::new().create(true).append(true).open(log_file)
}
