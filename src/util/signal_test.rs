use super::*;

#[test]
fn website_loaded_reaches_window_listeners() {
    assert_eq!(WEBSITE_LOADED.name, "websiteLoaded");
    assert_eq!(WEBSITE_LOADED.target, SignalTarget::Window);
}
