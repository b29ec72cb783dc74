//! Debug logging
//!
//! The terminal belongs to the UI, so logs go to a file in the temp dir.
//! Only debug builds log at all.

#[cfg(debug_assertions)]
pub const LOG_FILE: &str = "searchbar-debug.log";

#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::File;
    use std::io::Write;

    use env_logger::{Builder, Env, Target};

    let path = std::env::temp_dir().join(LOG_FILE);
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(_) => return,
    };

    let _ = Builder::from_env(Env::default().default_filter_or("searchbar=debug"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
