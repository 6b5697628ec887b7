use super::*;

#[test]
fn copyright_line_includes_the_year() {
    assert_eq!(copyright_line(Some(2026)), "Your trusted legal partner. \u{a9} 2026 All Rights Reserved.");
}

#[test]
fn copyright_line_without_a_clock() {
    assert_eq!(copyright_line(None), "Your trusted legal partner. \u{a9} All Rights Reserved.");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_builds_have_no_clock() {
    assert_eq!(current_year(), None);
}
