//! Route table.
//!
//! Paths are matched exactly, in declaration order; the first match wins.
//! Deferred entries are built after the route mounts instead of with the
//! initial render.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Profile,
    DockerCompose,
    Table,
    Posts,
    About,
    Forbidden,
}

impl Page {
    /// Translation key used for the document title.
    pub fn title_key(self) -> &'static str {
        match self {
            Page::Home => "nav.home",
            Page::Login => "login.title",
            Page::Register => "register.title",
            Page::Profile => "profile.title",
            Page::DockerCompose => "docker.title",
            Page::Table => "table.title",
            Page::Posts => "posts.title",
            Page::About => "about.title",
            Page::Forbidden => "forbidden.title",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewBinding {
    Eager(Page),
    Deferred(Page),
}

impl ViewBinding {
    pub fn page(self) -> Page {
        match self {
            ViewBinding::Eager(page) | ViewBinding::Deferred(page) => page,
        }
    }

    pub fn is_deferred(self) -> bool {
        matches!(self, ViewBinding::Deferred(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: ViewBinding,
}

const fn route(path: &'static str, name: Option<&'static str>, view: ViewBinding) -> RouteEntry {
    RouteEntry { path, name, view }
}

pub const ROUTES: &[RouteEntry] = &[
    route("/", Some("home"), ViewBinding::Eager(Page::Home)),
    route("/login", None, ViewBinding::Eager(Page::Login)),
    route("/register", None, ViewBinding::Eager(Page::Register)),
    route("/profile", Some("profile"), ViewBinding::Deferred(Page::Profile)),
    route(
        "/docker-compose",
        Some("docker-compose"),
        ViewBinding::Eager(Page::DockerCompose),
    ),
    route("/table", Some("table"), ViewBinding::Eager(Page::Table)),
    route("/reference", Some("reference"), ViewBinding::Eager(Page::Table)),
    route("/posts", Some("posts"), ViewBinding::Deferred(Page::Posts)),
    route("/about", Some("about"), ViewBinding::Deferred(Page::About)),
    // Redirect targets of the API client.
    route("/auth/login", Some("auth-login"), ViewBinding::Eager(Page::Login)),
    route("/forbidden", Some("forbidden"), ViewBinding::Eager(Page::Forbidden)),
];

#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
    entries: &'static [RouteEntry],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(ROUTES)
    }
}

impl RouteTable {
    pub const fn new(entries: &'static [RouteEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    pub fn resolve(&self, path: &str) -> Option<&'static RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn path_for_name(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.name == Some(name))
            .map(|entry| entry.path)
    }

    pub fn declares(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
