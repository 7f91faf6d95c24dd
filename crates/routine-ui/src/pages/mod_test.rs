use super::*;

#[test]
fn settle_keeps_success() {
    assert_eq!(settle::<u8>(Ok(3)), Some(Ok(3)));
}

#[test]
fn settle_hides_failures_that_redirect() {
    let mut error = ApiError::network("offline");
    error.redirect_pending = true;
    assert_eq!(settle::<u8>(Err(error)), None);
}

#[test]
fn settle_surfaces_other_failures() {
    let error = ApiError::network("offline");
    assert_eq!(
        settle::<u8>(Err(error)),
        Some(Err("Request failed: offline".to_owned()))
    );
}
