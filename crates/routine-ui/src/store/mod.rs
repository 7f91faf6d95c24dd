//! Global application store.
//!
//! One reactive container holds the `app` module, the i18n module and the
//! shared API client. State is only reachable by shared reference; every change
//! goes through [`Store::commit`], which in strict mode records the mutation.

pub mod app;
pub mod getters;
pub mod i18n;

use std::collections::VecDeque;
use std::sync::Arc;

use leptos::prelude::*;
use routine_client::{
    create_api, ApiClient, ApiError, ClientConfig, Navigator, RedirectPolicy, SessionContext,
};
use tracing::{debug, info};

use app::{AppMutation, AppState};
use i18n::{I18nMutation, I18nPlugin, I18nState};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreState {
    pub app: AppState,
    pub i18n: I18nState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    App(AppMutation),
    I18n(I18nMutation),
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::App(m) => m.name(),
            Mutation::I18n(m) => m.name(),
        }
    }

    fn apply(self, state: &mut StoreState) {
        match self {
            Mutation::App(m) => m.apply(&mut state.app),
            Mutation::I18n(m) => m.apply(&mut state.i18n),
        }
    }
}

impl From<AppMutation> for Mutation {
    fn from(m: AppMutation) -> Self {
        Mutation::App(m)
    }
}

impl From<I18nMutation> for Mutation {
    fn from(m: I18nMutation) -> Self {
        Mutation::I18n(m)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitRecord {
    pub seq: u64,
    pub mutation: &'static str,
}

/// Number of commit records kept in strict mode; older ones are dropped.
pub const COMMIT_LOG_LIMIT: usize = 64;

#[derive(Clone, Debug, Default)]
struct CommitLog {
    last_seq: u64,
    records: VecDeque<CommitRecord>,
}

impl CommitLog {
    fn record(&mut self, mutation: &'static str) -> u64 {
        self.last_seq += 1;
        if self.records.len() == COMMIT_LOG_LIMIT {
            self.records.pop_front();
        }
        self.records.push_back(CommitRecord {
            seq: self.last_seq,
            mutation,
        });
        self.last_seq
    }
}

pub trait StorePlugin {
    fn install(&self, store: &Store);
}

#[derive(Clone)]
pub struct Store {
    state: ArcRwSignal<StoreState>,
    commits: ArcRwSignal<CommitLog>,
    api: ApiClient,
    strict: bool,
}

impl Store {
    pub fn new(api: ApiClient, strict: bool) -> Self {
        Self {
            state: ArcRwSignal::new(StoreState::default()),
            commits: ArcRwSignal::new(CommitLog::default()),
            api,
            strict,
        }
    }

    pub fn with_plugin(self, plugin: &impl StorePlugin) -> Self {
        plugin.install(&self);
        self
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn commit(&self, mutation: impl Into<Mutation>) {
        let mutation = mutation.into();
        if self.strict {
            let name = mutation.name();
            self.commits.update(|log| {
                let seq = log.record(name);
                debug!("commit #{seq} {name}");
            });
        }
        self.state.update(|state| mutation.apply(state));
    }

    /// Tracked read; re-runs the surrounding reactive closure on change.
    pub fn with_state<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        self.state.with(f)
    }

    pub fn get<R>(&self, getter: fn(&StoreState) -> R) -> R {
        self.state.with(|state| getter(state))
    }

    pub fn get_untracked<R>(&self, getter: fn(&StoreState) -> R) -> R {
        self.state.with_untracked(|state| getter(state))
    }

    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, &[])
    }

    pub fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.state.with(|state| state.i18n.translate(key, params))
    }

    /// The most recent commits, oldest first.
    pub fn commits(&self) -> Vec<CommitRecord> {
        self.commits
            .with_untracked(|log| log.records.iter().cloned().collect())
    }

    /// Sequence number of the last commit, counting ones no longer kept.
    pub fn last_commit_seq(&self) -> u64 {
        self.commits.with_untracked(|log| log.last_seq)
    }
}

/// Build the application store: API client wired to the session and the
/// redirect policy, `app` module, getters and the i18n plugin, strict mode on.
pub fn create_store(
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
    origin: Option<&str>,
) -> Result<Store, ApiError> {
    let config = ClientConfig::from_env(origin)?;
    info!("api base url {}", config.base_url());
    let policy = Arc::new(RedirectPolicy::new(navigator));
    let api = create_api(config, session, policy)?;
    Ok(Store::new(api, true).with_plugin(&I18nPlugin::default()))
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
