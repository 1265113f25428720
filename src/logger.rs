use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_PATTERN: &str = "{l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_err() {
        init_fallback();
    }
}

/// Advisory warnings go to stderr even without a config file next to the
/// program.
fn init_fallback() {
    match fallback_config() {
        Ok(config) => {
            // fails only when the host program installed a logger first
            if let Err(e) = log4rs::init_config(config) {
                log::debug!("Keeping the installed logger: {}", e);
            }
        }
        Err(e) => eprintln!("Logging disabled, invalid fallback configuration: {}", e),
    }
}

fn fallback_config() -> Result<Config, ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
}
