// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Export through the command language and import back.

use std::fs::{self, File};
use std::io::BufReader;

use calcmd_core::{Error, Outcome, read_csv};

use crate::common::{TempWorkspace, interpreter};

#[test]
fn custom_csv_round_trip() {
    let workspace = TempWorkspace::new();
    let path = workspace.file("events.csv");
    let mut it = interpreter();
    for line in [
        "create event Team  Sync from 2025-03-01T10:00 to 2025-03-01T11:00",
        "create event Holiday on 2025-03-02",
        "create event Gym from 2025-03-03T18:00 to 2025-03-03T19:00 repeats MR for 2 times",
        "edit events description Team  Sync with Bring \"notes\", please",
        "edit events location Holiday with Beach",
        "edit events public Gym with false",
    ] {
        it.execute(line).unwrap();
    }

    let outcome = it.execute(&format!("export cal {}", path.display())).unwrap();
    let Outcome::Exported { path: written } = outcome else {
        panic!("expected an export outcome");
    };
    assert!(written.is_absolute());

    let events = read_csv(BufReader::new(File::open(&written).unwrap())).unwrap();
    assert_eq!(events, it.store().events());
}

#[test]
fn google_csv_layout() {
    let workspace = TempWorkspace::new();
    let path = workspace.file("google.csv");
    let mut it = interpreter();
    it.execute("create event Holiday on 2025-03-02").unwrap();
    it.execute("create event Review from 2025-03-03T13:00 to 2025-03-03T14:15")
        .unwrap();
    it.execute("edit events public Review with false").unwrap();

    it.execute(&format!("export googlecsv {}", path.display()))
        .unwrap();

    let csv = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines,
        [
            "Subject,Start Date,Start Time,End Date,End Time,All Day Event,Description,Location,Private",
            r#""Holiday",03/02/2025,,03/02/2025,,True,"","",False"#,
            r#""Review",03/03/2025,01:00 PM,03/03/2025,02:15 PM,False,"","",True"#,
        ]
    );
}

#[test]
fn export_failure_is_reported() {
    let workspace = TempWorkspace::new();
    let path = workspace.file("missing/dir/out.csv");
    let mut it = interpreter();

    let err = it
        .execute(&format!("export cal {}", path.display()))
        .unwrap_err();
    assert!(matches!(err, Error::Export { .. }));
    assert!(!path.exists());
}
