use leptos::reactive::owner::Owner;

use super::*;

#[test]
fn guard_reports_unmounted_after_owner_cleanup() {
    let owner = Owner::new();
    let guard = owner.with(MountGuard::install);
    assert!(guard.is_mounted());
    owner.cleanup();
    assert!(!guard.is_mounted());
}

#[test]
fn clones_share_the_flag() {
    let owner = Owner::new();
    let guard = owner.with(MountGuard::install);
    let clone = guard.clone();
    owner.cleanup();
    assert!(!clone.is_mounted());
}
