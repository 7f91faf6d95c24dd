//! Translation catalogs kept in the store.
//!
//! The plugin registers the bundled catalogs as an `i18n` module; switching
//! language is an ordinary committed mutation.

use std::collections::HashMap;

use tracing::warn;

use super::{Mutation, Store, StorePlugin};

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct I18nState {
    pub locale: String,
    pub fallback_locale: String,
    pub translations: HashMap<String, HashMap<String, String>>,
}

impl I18nState {
    pub fn locale_exists(&self, locale: &str) -> bool {
        self.translations.contains_key(locale)
    }

    /// Look up `key` in the current locale, then the fallback locale, then
    /// return the key itself. `{name}` placeholders are filled from `params`.
    pub fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = [self.locale.as_str(), self.fallback_locale.as_str()]
            .iter()
            .find_map(|locale| self.translations.get(*locale)?.get(key))
            .map(String::as_str)
            .unwrap_or(key);
        interpolate(template, params)
    }
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = template.to_owned();
    for (name, value) in params {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum I18nMutation {
    AddLocale {
        locale: String,
        translations: HashMap<String, String>,
    },
    SetLocale(String),
    SetFallbackLocale(String),
}

impl I18nMutation {
    pub fn name(&self) -> &'static str {
        match self {
            I18nMutation::AddLocale { .. } => "i18n/ADD_LOCALE",
            I18nMutation::SetLocale(_) => "i18n/SET_LOCALE",
            I18nMutation::SetFallbackLocale(_) => "i18n/SET_FALLBACK_LOCALE",
        }
    }

    pub(super) fn apply(self, state: &mut I18nState) {
        match self {
            I18nMutation::AddLocale {
                locale,
                translations,
            } => {
                state.translations.entry(locale).or_default().extend(translations);
            }
            I18nMutation::SetLocale(locale) => {
                if !state.locale_exists(&locale) {
                    warn!("locale {locale} has no translations, falling back");
                }
                state.locale = locale;
            }
            I18nMutation::SetFallbackLocale(locale) => state.fallback_locale = locale,
        }
    }
}

/// Installs the bundled catalogs and selects the default locale.
pub struct I18nPlugin {
    catalogs: Vec<(&'static str, &'static [(&'static str, &'static str)])>,
    locale: &'static str,
}

impl Default for I18nPlugin {
    fn default() -> Self {
        Self {
            catalogs: vec![("en", EN), ("es", ES)],
            locale: DEFAULT_LOCALE,
        }
    }
}

impl StorePlugin for I18nPlugin {
    fn install(&self, store: &Store) {
        for (locale, entries) in &self.catalogs {
            let translations = entries
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect();
            store.commit(Mutation::I18n(I18nMutation::AddLocale {
                locale: (*locale).to_owned(),
                translations,
            }));
        }
        store.commit(Mutation::I18n(I18nMutation::SetFallbackLocale(
            DEFAULT_LOCALE.to_owned(),
        )));
        store.commit(Mutation::I18n(I18nMutation::SetLocale(
            self.locale.to_owned(),
        )));
    }
}

pub const EN: &[(&str, &str)] = &[
    ("app.title", "Routine Tracker"),
    ("nav.home", "Home"),
    ("nav.table", "Routines"),
    ("nav.reference", "Reference"),
    ("nav.posts", "Posts"),
    ("nav.docker_compose", "Docker Compose"),
    ("nav.profile", "Profile"),
    ("nav.about", "About"),
    ("nav.toggle_sidebar", "Toggle menu"),
    ("nav.language", "Español"),
    ("home.welcome", "Welcome back, {name}"),
    ("home.subtitle", "Track your daily routines and the tasks inside them"),
    ("login.title", "Sign in"),
    ("login.username", "Username"),
    ("login.password", "Password"),
    ("login.submit", "Sign In"),
    ("login.register", "Create an account"),
    ("register.title", "Create account"),
    ("register.email", "Email"),
    ("register.submit", "Register"),
    ("register.done", "Account created, you can sign in now"),
    ("profile.title", "Profile"),
    ("profile.signed_in_as", "Signed in as {name}"),
    ("profile.sign_out", "Sign out"),
    ("profile.account", "Account #{id}, {count} snippets"),
    ("table.title", "Routines"),
    ("table.empty", "No routines yet"),
    ("table.new", "New routine"),
    ("table.add", "Add"),
    ("table.tasks", "Tasks"),
    ("table.no_tasks", "No tasks yet"),
    ("table.new_task", "New task"),
    ("table.schedules", "Schedules"),
    ("table.no_schedules", "Nothing scheduled"),
    ("posts.title", "Posts"),
    ("posts.empty", "No posts yet"),
    ("docker.title", "Docker Compose"),
    ("docker.subtitle", "Run the tracker API locally"),
    ("about.title", "About"),
    ("about.body", "A small front end for the routine tracker API."),
    ("forbidden.title", "Access denied"),
    ("forbidden.body", "Your account is not allowed to view this page."),
    ("not_found.title", "Page not found."),
    ("common.loading", "Loading..."),
    ("common.load_failed", "Failed to load: {error}"),
];

pub const ES: &[(&str, &str)] = &[
    ("app.title", "Registro de Rutinas"),
    ("nav.home", "Inicio"),
    ("nav.table", "Rutinas"),
    ("nav.reference", "Referencia"),
    ("nav.posts", "Publicaciones"),
    ("nav.profile", "Perfil"),
    ("nav.about", "Acerca de"),
    ("nav.toggle_sidebar", "Mostrar menú"),
    ("nav.language", "English"),
    ("home.welcome", "Hola de nuevo, {name}"),
    ("home.subtitle", "Sigue tus rutinas diarias y sus tareas"),
    ("login.title", "Iniciar sesión"),
    ("login.username", "Usuario"),
    ("login.password", "Contraseña"),
    ("login.submit", "Entrar"),
    ("login.register", "Crear una cuenta"),
    ("register.title", "Crear cuenta"),
    ("register.email", "Correo"),
    ("register.submit", "Registrarse"),
    ("register.done", "Cuenta creada, ya puedes iniciar sesión"),
    ("profile.title", "Perfil"),
    ("profile.signed_in_as", "Sesión iniciada como {name}"),
    ("profile.sign_out", "Cerrar sesión"),
    ("profile.account", "Cuenta #{id}, {count} fragmentos"),
    ("table.title", "Rutinas"),
    ("table.empty", "Aún no hay rutinas"),
    ("table.new", "Nueva rutina"),
    ("table.add", "Añadir"),
    ("table.tasks", "Tareas"),
    ("table.no_tasks", "Aún no hay tareas"),
    ("table.new_task", "Nueva tarea"),
    ("table.schedules", "Horarios"),
    ("table.no_schedules", "Nada programado"),
    ("posts.title", "Publicaciones"),
    ("posts.empty", "Aún no hay publicaciones"),
    ("docker.subtitle", "Ejecuta la API localmente"),
    ("about.title", "Acerca de"),
    ("about.body", "Un pequeño cliente para la API de rutinas."),
    ("forbidden.title", "Acceso denegado"),
    ("forbidden.body", "Tu cuenta no puede ver esta página."),
    ("not_found.title", "Página no encontrada."),
    ("common.loading", "Cargando..."),
    ("common.load_failed", "Error al cargar: {error}"),
];
