pub mod tracker;
pub use tracker::*;

/// Token returned by the tracker API when credentials are exchanged.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuthToken {
    pub token: String,
}
