use log::debug;
use users::{get_group_by_gid, get_user_by_uid};

/// Resolve a uid to a user name. A missing passwd entry falls back to the
/// decimal id instead of failing the listing.
pub fn owner_name(uid: u32) -> String {
    match get_user_by_uid(uid) {
        Some(user) => user.name().to_string_lossy().into_owned(),
        None => {
            debug!("[identity] no passwd entry for uid {uid}, using numeric id");
            uid.to_string()
        }
    }
}

/// Resolve a gid to a group name, with the same decimal fallback.
pub fn group_name(gid: u32) -> String {
    match get_group_by_gid(gid) {
        Some(group) => group.name().to_string_lossy().into_owned(),
        None => {
            debug!("[identity] no group entry for gid {gid}, using numeric id");
            gid.to_string()
        }
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
