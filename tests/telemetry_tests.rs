#[cfg(test)]
mod tests {
    use sentry_mattermost::telemetry::{get_subscriber, get_subscriber_with_writer, init_subscriber};
    use serial_test::serial;
    use std::io::Write;
    use std::sync::{Arc, Mutex, Once};

    static INIT: Once = Once::new();

    // Initialize telemetry once for all tests
    fn init_test_telemetry() {
        INIT.call_once(|| {
            let subscriber = get_subscriber("test-telemetry".into(), "debug".into());
            init_subscriber(subscriber).unwrap();
        });
    }

    #[derive(Clone, Default)]
    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for BufferWriter {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    #[serial]
    fn test_init_subscriber() {
        init_test_telemetry();

        // Verify we can create spans after initialization
        let span = tracing::info_span!("test_span");
        assert!(!span.is_disabled());
    }

    #[test]
    #[serial]
    fn test_second_global_subscriber_is_rejected() {
        init_test_telemetry();

        let subscriber = get_subscriber("test-telemetry-again".into(), "info".into());
        assert!(init_subscriber(subscriber).is_err());
    }

    #[test]
    #[serial]
    fn test_logs_are_bunyan_json() {
        let buffer = BufferWriter::default();
        let subscriber =
            get_subscriber_with_writer("test-bunyan".into(), "info".into(), buffer.clone());

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("notify", project = "My Project");
            let _guard = span.enter();
            tracing::info!(event = "test_event", "Notification sent successfully");
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let line = output
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
            .find(|v| {
                v["msg"]
                    .as_str()
                    .is_some_and(|m| m.ends_with("Notification sent successfully"))
            })
            .unwrap();

        assert_eq!(line["name"], "test-bunyan");
        assert_eq!(line["project"], "My Project");
        assert_eq!(line["event"], "test_event");
    }
}
