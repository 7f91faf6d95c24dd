//! `app` feature module: layout chrome state.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub sidebar_opened: bool,
    pub is_loading: bool,
    /// Translation key of the current page's heading; empty before the first
    /// route resolves.
    pub page_title: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sidebar_opened: true,
            is_loading: false,
            page_title: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMutation {
    ToggleSidebar,
    SetLoading(bool),
    SetPageTitle(String),
}

impl AppMutation {
    pub fn name(&self) -> &'static str {
        match self {
            AppMutation::ToggleSidebar => "app/TOGGLE_SIDEBAR",
            AppMutation::SetLoading(_) => "app/SET_LOADING",
            AppMutation::SetPageTitle(_) => "app/SET_PAGE_TITLE",
        }
    }

    pub(super) fn apply(self, state: &mut AppState) {
        match self {
            AppMutation::ToggleSidebar => state.sidebar_opened = !state.sidebar_opened,
            AppMutation::SetLoading(loading) => state.is_loading = loading,
            AppMutation::SetPageTitle(title) => state.page_title = title,
        }
    }
}
