use super::*;
use chrono::{Local, TimeZone};

fn rec(name: &str) -> FileRecord {
    FileRecord {
        ino: 1,
        mode: "-rw-r--r--".to_owned(),
        nlink: 1,
        owner: "alice".to_owned(),
        group: "staff".to_owned(),
        size: 0,
        mtime: ModTime::from_unix_secs(0),
        name: name.to_owned(),
    }
}

#[test]
fn sort_orders_names_byte_wise_ascending() {
    let mut records: Vec<FileRecord> = ["b", "a.txt", "..", ".", "B"]
        .iter()
        .map(|n| rec(n))
        .collect();

    sort_by_name(&mut records);

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    // Ordinal comparison: uppercase sorts before lowercase, and `.` sorts
    // before `..` as a strict prefix.
    assert_eq!(names, vec![".", "..", "B", "a.txt", "b"]);
}

#[test]
fn sort_is_stable_for_duplicate_names() {
    let mut records = vec![rec("same"), rec("same"), rec("same")];
    records[0].ino = 10;
    records[1].ino = 20;
    records[2].ino = 30;

    sort_by_name(&mut records);

    let inos: Vec<u64> = records.iter().map(|r| r.ino).collect();
    assert_eq!(inos, vec![10, 20, 30]);
}

#[test]
fn mod_time_breaks_down_local_datetime() {
    let dt = Local.with_ymd_and_hms(2024, 3, 5, 7, 9, 30).unwrap();
    let mt = ModTime::from_datetime(dt);

    assert_eq!(mt.year, 2024);
    assert_eq!(mt.month, "Mar");
    assert_eq!(mt.day, 5);
    assert_eq!(mt.hour, 7);
    assert_eq!(mt.minute, 9);
}

#[test]
fn mod_time_uses_english_month_abbreviations() {
    let expected = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    for (month0, abbrev) in expected.iter().enumerate() {
        let dt = Local
            .with_ymd_and_hms(2024, month0 as u32 + 1, 15, 12, 0, 0)
            .unwrap();
        let mt = ModTime::from_datetime(dt);
        assert_eq!(mt.month, *abbrev);
    }
}
