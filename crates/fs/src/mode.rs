//! Symbolic mode strings in the style of `ls -l`.

// libc's mode_t is u16 on some platforms; normalize to the u32 that
// std::os::unix::fs::MetadataExt::mode returns.
const S_IFMT: u32 = libc::S_IFMT as u32;
const S_IFSOCK: u32 = libc::S_IFSOCK as u32;
const S_IFLNK: u32 = libc::S_IFLNK as u32;
const S_IFREG: u32 = libc::S_IFREG as u32;
const S_IFBLK: u32 = libc::S_IFBLK as u32;
const S_IFDIR: u32 = libc::S_IFDIR as u32;
const S_IFCHR: u32 = libc::S_IFCHR as u32;
const S_IFIFO: u32 = libc::S_IFIFO as u32;

const S_IRUSR: u32 = libc::S_IRUSR as u32;
const S_IWUSR: u32 = libc::S_IWUSR as u32;
const S_IXUSR: u32 = libc::S_IXUSR as u32;
const S_IRGRP: u32 = libc::S_IRGRP as u32;
const S_IWGRP: u32 = libc::S_IWGRP as u32;
const S_IXGRP: u32 = libc::S_IXGRP as u32;
const S_IROTH: u32 = libc::S_IROTH as u32;
const S_IWOTH: u32 = libc::S_IWOTH as u32;
const S_IXOTH: u32 = libc::S_IXOTH as u32;
const S_ISUID: u32 = libc::S_ISUID as u32;
const S_ISGID: u32 = libc::S_ISGID as u32;
const S_ISVTX: u32 = libc::S_ISVTX as u32;

/// Encode raw stat mode bits as the fixed 10-character `ls -l` string,
/// e.g. `drwxr-xr-x` or `-rwsr-xr-x`.
pub fn mode_string(mode: u32) -> String {
    let mut out = String::with_capacity(10);

    out.push(type_glyph(mode));

    out.push(if mode & S_IRUSR != 0 { 'r' } else { '-' });
    out.push(if mode & S_IWUSR != 0 { 'w' } else { '-' });
    out.push(exec_slot(mode & S_IXUSR != 0, mode & S_ISUID != 0, 's'));

    out.push(if mode & S_IRGRP != 0 { 'r' } else { '-' });
    out.push(if mode & S_IWGRP != 0 { 'w' } else { '-' });
    out.push(exec_slot(mode & S_IXGRP != 0, mode & S_ISGID != 0, 's'));

    out.push(if mode & S_IROTH != 0 { 'r' } else { '-' });
    out.push(if mode & S_IWOTH != 0 { 'w' } else { '-' });
    out.push(exec_slot(mode & S_IXOTH != 0, mode & S_ISVTX != 0, 't'));

    out
}

fn type_glyph(mode: u32) -> char {
    match mode & S_IFMT {
        S_IFSOCK => 's',
        S_IFLNK => 'l',
        S_IFREG => '-',
        S_IFBLK => 'b',
        S_IFDIR => 'd',
        S_IFCHR => 'c',
        S_IFIFO => 'p',
        _ => '?',
    }
}

/// An execute slot shows `x`/`-` normally; a set-id or sticky bit replaces
/// it with the special letter, lowercase when the execute bit is also set.
fn exec_slot(exec: bool, special: bool, special_ch: char) -> char {
    match (special, exec) {
        (true, true) => special_ch,
        (true, false) => special_ch.to_ascii_uppercase(),
        (false, true) => 'x',
        (false, false) => '-',
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
