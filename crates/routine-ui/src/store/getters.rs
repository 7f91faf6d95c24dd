//! Read-only views over the store state.

use super::StoreState;

pub fn sidebar_opened(state: &StoreState) -> bool {
    state.app.sidebar_opened
}

pub fn is_loading(state: &StoreState) -> bool {
    state.app.is_loading
}

pub fn page_title(state: &StoreState) -> String {
    state.app.page_title.clone()
}

pub fn current_locale(state: &StoreState) -> String {
    state.i18n.locale.clone()
}

pub fn available_locales(state: &StoreState) -> Vec<String> {
    let mut locales: Vec<String> = state.i18n.translations.keys().cloned().collect();
    locales.sort();
    locales
}
