use crate::definitions::ASIA_KHANDYGA;
use crate::*;
use alloc::vec::Vec;
extern crate std;

#[test]
fn lookup() {
    assert_eq!(ASIA_KHANDYGA.offset_at(354898800).abbreviation, "YAKST");
    assert_eq!(ASIA_KHANDYGA.offset_at(1315832400).utc_offset, 36000);
    assert_eq!(ASIA_KHANDYGA.offset_at(1072882799).utc_offset, 32400);
    assert_eq!(ASIA_KHANDYGA.offset_at(i64::MIN).abbreviation, "LMT");
}

#[test]
fn registry() {
    assert!(definitions::get("Asia/Khandyga").is_ok());
    assert_eq!(definitions::get("Asia/Yakutsk"), Err(TzError::InvalidTimezone));
}

#[test]
fn tzif_round_trip() {
    let buf = tzif::encode(&ASIA_KHANDYGA).unwrap();
    assert_eq!(tzif::decode(&buf, "Asia/Khandyga").unwrap(), ASIA_KHANDYGA);
}

#[test]
fn transitions_between() {
    let ats: Vec<i64> = ASIA_KHANDYGA
        .transitions_between(1300000000, 1500000000)
        .map(|t| t.at.timestamp_floor())
        .collect();
    assert_eq!(ats, std::vec![1301155200, 1315832400, 1414252800]);
}
