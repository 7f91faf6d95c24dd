use super::*;

#[test]
fn empty_session_is_logged_out() {
    let session = SessionContext::in_memory();
    assert!(!session.is_logged_in());
    assert_eq!(session.bearer_token(), None);
    assert_eq!(session.current_username(), None);
}

#[test]
fn sign_in_writes_both_keys() {
    let store = Arc::new(MemorySessionStore::new());
    let session = SessionContext::new(store.clone());

    session.sign_in("ana", "tok-1").unwrap();

    assert!(session.is_logged_in());
    assert_eq!(session.bearer_token().as_deref(), Some("tok-1"));
    assert_eq!(session.current_username().as_deref(), Some("ana"));
    assert_eq!(store.get("campaigns_token").as_deref(), Some("tok-1"));
    assert!(store.get("user").is_some());
}

#[test]
fn sign_out_clears_both_keys() {
    let session = SessionContext::in_memory();
    session.sign_in("ana", "tok-1").unwrap();

    session.sign_out().unwrap();

    assert!(!session.is_logged_in());
    assert_eq!(session.bearer_token(), None);
}

#[test]
fn presence_and_bearer_keys_are_independent() {
    let store = Arc::new(MemorySessionStore::new());
    let session = SessionContext::new(store.clone());

    store.set("campaigns_token", "tok-only").unwrap();
    assert!(!session.is_logged_in());
    assert_eq!(session.bearer_token().as_deref(), Some("tok-only"));

    store.remove("campaigns_token").unwrap();
    store.set("user", "not json").unwrap();
    assert!(session.is_logged_in());
    assert_eq!(session.bearer_token(), None);
    assert_eq!(session.current_username(), None);
}

#[test]
fn custom_keys_are_honoured() {
    let store = Arc::new(MemorySessionStore::new());
    let keys = SessionKeys {
        presence: "who",
        bearer: "jwt",
    };
    let session = SessionContext::with_keys(store.clone(), keys);

    store.set("jwt", "abc").unwrap();
    store.set("who", "{}").unwrap();

    assert!(session.is_logged_in());
    assert_eq!(session.bearer_token().as_deref(), Some("abc"));
}
