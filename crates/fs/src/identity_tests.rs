use super::*;

#[test]
fn current_uid_resolves_to_a_name() {
    let uid = users::get_current_uid();
    let name = owner_name(uid);
    assert!(!name.is_empty());
}

#[test]
fn current_gid_resolves_to_a_name() {
    let gid = users::get_current_gid();
    let name = group_name(gid);
    assert!(!name.is_empty());
}

#[test]
fn unresolvable_uid_falls_back_to_decimal_id() {
    // u32::MAX is reserved as an invalid uid sentinel and never has a
    // passwd entry.
    assert_eq!(owner_name(u32::MAX), u32::MAX.to_string());
}

#[test]
fn unresolvable_gid_falls_back_to_decimal_id() {
    assert_eq!(group_name(u32::MAX), u32::MAX.to_string());
}
