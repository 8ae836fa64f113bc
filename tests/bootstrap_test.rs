use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use flatwhite::app::models::RuntimeConfig;
use flatwhite::app::{launch, start, BootstrapError};
use flatwhite::application::Application;
use flatwhite::logging::{LogContext, LoggingConfig, MemorySink, Severity};
use flatwhite::{fw_core_info, fw_core_warn};

struct Immediate {
    released: Arc<AtomicBool>,
}

impl Application for Immediate {
    fn run(&mut self, _log: &LogContext) -> anyhow::Result<()> {
        Ok(())
    }
}

impl Drop for Immediate {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

fn captured() -> (LogContext, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let log = LogContext::with_sink("FLATWHITE", "APP", sink.clone()).unwrap();
    (log, sink)
}

#[test]
fn startup_warning_is_a_single_core_record() {
    let (log, sink) = captured();
    fw_core_warn!(log, "Starting FlatWhite3D Engine...");

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].logger, "FLATWHITE");
    assert_eq!(records[0].severity, Severity::Warn);
    assert_eq!(records[0].message, "Starting FlatWhite3D Engine...");
}

#[test]
fn version_template_renders_positionally() {
    let (log, sink) = captured();
    fw_core_info!(log, "version: {0}", 0);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Info);
    assert_eq!(records[0].message, "version: 0");
}

#[test]
fn immediate_application_is_released() {
    let (log, _) = captured();
    let released = Arc::new(AtomicBool::new(false));
    let app = Immediate {
        released: released.clone(),
    };

    start(&log, move || Some(Box::new(app) as Box<dyn Application>)).unwrap();

    assert!(released.load(Ordering::SeqCst));
}

#[test]
fn empty_factory_stops_startup() {
    let (log, _) = captured();
    let err = start(&log, || None).unwrap_err();
    assert!(err.downcast_ref::<BootstrapError>().is_some());
}

#[test]
fn launch_with_console_backend() {
    let released = Arc::new(AtomicBool::new(false));
    let app = Immediate {
        released: released.clone(),
    };
    let config = RuntimeConfig {
        logging: LoggingConfig {
            write_style: env_logger::WriteStyle::Never,
            ..LoggingConfig::default()
        },
        source: None,
    };

    launch(&config, move || Some(Box::new(app) as Box<dyn Application>)).unwrap();

    assert!(released.load(Ordering::SeqCst));
}
