use std::vec::Vec;

use pretty_assertions::assert_eq;
use steno::time::{Clock, TickClock};
use steno::{Level, Logger};
use test_case::test_case;

mod transport {
    //! A recording transport: keeps every write as its own chunk so tests can
    //! check both the number of transport writes and their exact bytes.

    use std::sync::{Arc, Mutex};
    use std::vec::Vec;

    use steno::{Transport, Write};

    #[derive(Debug, Default)]
    pub struct Recording {
        writes: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl Recording {
        /// Returns the transport and a handle to the chunks it will record.
        pub fn new() -> (Self, Arc<Mutex<Vec<Vec<u8>>>>) {
            let writes = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    writes: writes.clone(),
                },
                writes,
            )
        }
    }

    #[derive(Debug)]
    pub struct RecordingWriter {
        writes: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl Write for RecordingWriter {
        fn write(&mut self, bytes: &[u8]) {
            self.writes.lock().unwrap().push(bytes.to_vec());
        }
    }

    impl Transport for Recording {
        type Writer<'a>
            = RecordingWriter
        where
            Self: 'a;

        fn writer(&self) -> Self::Writer<'_> {
            RecordingWriter {
                writes: self.writes.clone(),
            }
        }
    }
}

/// Always reports the same instant; lets tests compare whole records.
#[derive(Debug)]
struct FixedClock(u64);

impl Clock for FixedClock {
    fn timestamp(&self) -> u64 {
        self.0
    }
}

#[test]
fn debug_below_info_threshold_writes_nothing() {
    let (recording, writes) = transport::Recording::new();
    let logger = Logger::new(TickClock::new(), recording);
    logger.set_level(Level::Info);

    steno::debug!(logger, "Is this %s or what?!", c"nice");

    assert_eq!(writes.lock().unwrap().len(), 0);
}

#[test]
fn accepted_call_writes_timestamp_reference_and_argument() {
    let (recording, writes) = transport::Recording::new();
    let logger = Logger::new(FixedClock(7), recording);
    logger.set_level(Level::Info);

    steno::info!(logger, "I am %d years old...", 28);

    let writes = writes.lock().unwrap();
    assert_eq!(writes.len(), 3);
    assert_eq!(writes[0], 7u64.to_ne_bytes());
    assert_eq!(writes[1].len(), size_of::<usize>());
    assert_eq!(writes[2], 28i32.to_ne_bytes());
}

#[test]
fn off_threshold_suppresses_every_level() {
    let (recording, writes) = transport::Recording::new();
    let logger = Logger::new(TickClock::new(), recording);
    logger.set_level(Level::Off);

    steno::debug!(logger, "%d", 1);
    steno::info!(logger, "%d", 2);
    steno::warning!(logger, "%d", 3);
    steno::error!(logger, "%d", 4);

    assert_eq!(writes.lock().unwrap().len(), 0);
}

#[test_case(Level::Debug; "debug threshold")]
#[test_case(Level::Info; "info threshold")]
#[test_case(Level::Warning; "warning threshold")]
#[test_case(Level::Error; "error threshold")]
#[test_case(Level::Off; "off threshold")]
fn the_gate_admits_exactly_the_levels_at_or_above_the_threshold(threshold: Level) {
    for call in [Level::Debug, Level::Info, Level::Warning, Level::Error] {
        let (recording, writes) = transport::Recording::new();
        let logger = Logger::new(FixedClock(0), recording);
        logger.set_level(threshold);

        logger.log(call, &[]);

        let expected = if call >= threshold { 1 } else { 0 };
        assert_eq!(
            writes.lock().unwrap().len(),
            expected,
            "call {call:?} against threshold {threshold:?}"
        );
    }
}

#[test]
fn identical_calls_are_byte_identical_except_for_the_timestamp() {
    let (recording, writes) = transport::Recording::new();
    let logger = Logger::new(TickClock::new(), recording);

    for _ in 0..2 {
        steno::warning!(
            logger,
            "Third string! With multiple %s and more numbers: %d",
            c"args",
            -1124
        );
    }

    let writes = writes.lock().unwrap();
    assert_eq!(writes.len(), 8);
    // The tick clock advances between records.
    assert_ne!(writes[0], writes[4]);
    // Reference and argument bytes repeat exactly.
    assert_eq!(writes[1..4], writes[5..8]);
}

#[test]
fn call_sites_with_identical_text_get_distinct_references() {
    let (recording, writes) = transport::Recording::new();
    let logger = Logger::new(FixedClock(0), recording);

    steno::error!(logger, "Oh boy, error %d just happened", 234556);
    steno::error!(logger, "Oh boy, error %d just happened", 234556);

    let writes = writes.lock().unwrap();
    assert_eq!(writes.len(), 6);
    assert_ne!(writes[1], writes[4]);
    assert_eq!(writes[2], writes[5]);
}

#[test]
fn unsigned_width_four_round_trips() {
    let (recording, writes) = transport::Recording::new();
    let logger = Logger::new(FixedClock(0), recording);

    steno::info!(logger, "raw value %u", 0x12345678u32);

    let writes = writes.lock().unwrap();
    let bytes: [u8; 4] = writes[2].as_slice().try_into().unwrap();
    assert_eq!(u32::from_ne_bytes(bytes), 0x12345678);
}

#[test]
fn string_arguments_carry_their_terminator() {
    let (recording, writes) = transport::Recording::new();
    let logger = Logger::new(FixedClock(0), recording);

    steno::debug!(logger, "%s", c"nice");

    assert_eq!(writes.lock().unwrap()[2], b"nice\0");
}

#[test]
fn length_modifiers_select_the_encoded_width() {
    let (recording, writes) = transport::Recording::new();
    let logger = Logger::new(FixedClock(0), recording);

    steno::info!(
        logger,
        "%hhu %hd %lu %lld",
        200u8,
        -5i16,
        70000u32,
        -9000000000i64
    );

    let writes = writes.lock().unwrap();
    let lengths: Vec<usize> = writes.iter().map(Vec::len).collect();
    assert_eq!(lengths, [8, size_of::<usize>(), 1, 2, 4, 8]);
    assert_eq!(writes[2], [200u8]);
    assert_eq!(writes[3], (-5i16).to_ne_bytes());
    assert_eq!(writes[4], 70000u32.to_ne_bytes());
    assert_eq!(writes[5], (-9000000000i64).to_ne_bytes());
}

#[test]
fn pointer_arguments_encode_their_address() {
    let (recording, writes) = transport::Recording::new();
    let logger = Logger::new(FixedClock(0), recording);

    let value = 42u32;
    let pointer = &value as *const u32;
    steno::debug!(logger, "buffer at %p", pointer);

    assert_eq!(writes.lock().unwrap()[2], (pointer as usize).to_ne_bytes());
}

#[test]
fn interned_user_text_logs_as_its_reference() {
    let (recording, writes) = transport::Recording::new();
    let logger = Logger::new(FixedClock(0), recording);

    let state = steno::intern!("battery low");
    steno::warning!(logger, "entered state %k", state);

    assert_eq!(writes.lock().unwrap()[2], state.to_raw().to_ne_bytes());
}

#[test]
fn intern_yields_one_reference_per_call_site() {
    let first = steno::intern!("shared text");
    let second = steno::intern!("shared text");
    assert_ne!(first, second);

    // The same call site always hands out the same reference.
    let again = [0, 1].map(|_| steno::intern!("stable"));
    assert_eq!(again[0], again[1]);
}

#[test]
fn suppressed_calls_do_not_evaluate_argument_expressions() {
    let (recording, _writes) = transport::Recording::new();
    let logger = Logger::new(TickClock::new(), recording);
    let mut evaluations = 0;

    logger.set_level(Level::Error);
    steno::info!(logger, "%d", {
        evaluations += 1;
        28
    });
    assert_eq!(evaluations, 0);

    logger.set_level(Level::Debug);
    steno::info!(logger, "%d", {
        evaluations += 1;
        28
    });
    assert_eq!(evaluations, 1);
}

#[test]
fn raising_the_threshold_silences_later_calls() {
    let (recording, writes) = transport::Recording::new();
    let logger = Logger::new(TickClock::new(), recording);

    steno::info!(logger, "first");
    logger.set_level(Level::Error);
    steno::info!(logger, "second");

    // Only the first call produced a record (timestamp + reference).
    assert_eq!(writes.lock().unwrap().len(), 2);
}
