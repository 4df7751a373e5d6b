use std::fs;

use chrono::NaiveDate;
use incubator_core::*;
use speculate2::speculate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

speculate! {
    before {
        let temp = tempfile::tempdir().expect("Failed to create temp dir");
        let store = StateStore::new(temp.path().join("incubator_data.json"));
    }

    describe "load" {
        it "returns eight empty slots when no file exists" {
            let state = store.load().expect("Failed to load");
            assert_eq!(state, IncubatorState::default());
            assert_eq!(state.occupied_count(), 0);
        }

        it "reads the eight-element array format" {
            fs::write(
                store.path(),
                r#"["2024-03-05", null, null, null, null, null, null, "2024-02-20"]"#,
            ).expect("Failed to write");

            let state = store.load().expect("Failed to load");
            assert_eq!(state.get(SlotIndex::from_number(1).unwrap()), Some(date(2024, 3, 5)));
            assert_eq!(state.get(SlotIndex::from_number(8).unwrap()), Some(date(2024, 2, 20)));
            assert_eq!(state.occupied_count(), 2);
        }

        it "fails on invalid JSON" {
            fs::write(store.path(), "not json").expect("Failed to write");
            let err = store.load().unwrap_err();
            assert!(matches!(err, IncubatorError::MalformedState { .. }));
            assert!(err.is_fatal());
        }

        it "fails when the array is not eight long" {
            fs::write(store.path(), "[null, null]").expect("Failed to write");
            assert!(matches!(store.load(), Err(IncubatorError::MalformedState { .. })));

            fs::write(store.path(), "[null, null, null, null, null, null, null, null, null]")
                .expect("Failed to write");
            assert!(matches!(store.load(), Err(IncubatorError::MalformedState { .. })));
        }

        it "fails on a date in the wrong format" {
            fs::write(
                store.path(),
                r#"["03/05/2024", null, null, null, null, null, null, null]"#,
            ).expect("Failed to write");
            assert!(matches!(store.load(), Err(IncubatorError::MalformedState { .. })));
        }
    }

    describe "save" {
        it "round-trips the full state" {
            let state = IncubatorState::new([
                Some(date(2024, 3, 5)),
                None,
                Some(date(2024, 2, 29)),
                None,
                None,
                Some(date(2023, 12, 31)),
                None,
                Some(date(2024, 1, 1)),
            ]);

            store.save(&state).expect("Failed to save");
            assert_eq!(store.load().expect("Failed to load"), state);
        }

        it "overwrites the previous state entirely" {
            let mut state = IncubatorState::default();
            state.place(SlotIndex::from_number(2).unwrap(), date(2024, 3, 5));
            store.save(&state).expect("Failed to save");

            store.save(&IncubatorState::default()).expect("Failed to save");
            assert_eq!(store.load().expect("Failed to load"), IncubatorState::default());
        }

        it "writes ISO dates and nulls in slot order" {
            let mut state = IncubatorState::default();
            state.place(SlotIndex::from_number(3).unwrap(), date(2024, 3, 5));
            store.save(&state).expect("Failed to save");

            let raw: Vec<Option<String>> =
                serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
            assert_eq!(raw.len(), 8);
            assert_eq!(raw[2].as_deref(), Some("2024-03-05"));
            assert!(raw.iter().enumerate().all(|(i, v)| i == 2 || v.is_none()));
        }
    }

    describe "audit log" {
        it "reads as empty before anything is written" {
            let log = AuditLog::new(temp.path().join("incubator_log.txt"));
            assert!(log.entries().expect("Failed to read").is_empty());
        }

        it "appends lines in order" {
            let log = AuditLog::new(temp.path().join("incubator_log.txt"));
            let at = date(2024, 3, 5).and_hms_opt(9, 30, 0).unwrap();

            log.append(at, "first").expect("Failed to append");
            log.append(at, "second").expect("Failed to append");

            assert_eq!(
                log.entries().expect("Failed to read"),
                vec![
                    "[2024-03-05 09:30:00] first".to_string(),
                    "[2024-03-05 09:30:00] second".to_string(),
                ]
            );
        }
    }
}
