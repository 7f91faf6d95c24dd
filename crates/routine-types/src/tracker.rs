use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Routine {
    #[serde(default)]
    pub url: Option<String>,
    pub id: u64,
    pub title: String,
    /// Username of the owning account; assigned by the server.
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewRoutine {
    pub title: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub title: String,
    /// Hyperlink or primary key of the parent routine.
    pub routine: serde_json::Value,
    #[serde(default)]
    pub schedule: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    pub timing: String,
    pub day: String,
    pub task: serde_json::Value,
    pub time: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Snippet {
    #[serde(default)]
    pub url: Option<String>,
    pub id: u64,
    #[serde(default)]
    pub highlight: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub title: String,
    pub code: String,
    #[serde(default)]
    pub linenos: bool,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub style: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub url: Option<String>,
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub snippets: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Paginated envelope used by list endpoints when pagination is enabled.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A list response: either a bare array or a paginated envelope.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Paged(page) => page.results,
            Listing::Plain(items) => items,
        }
    }
}
