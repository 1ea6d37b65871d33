use crate::{
    config::{ClientConfig, PathEncoding},
    error::Result,
    io::net::{get_json, http_client},
    types::{Model, Repo},
};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

/// Fetches model descriptions from a registry.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct RegistryClient {
    http: Client,
    scheme: String,
    path_encoding: PathEncoding,
}

impl RegistryClient {
    /// Plain `http`, no deadline, verbatim path segments.
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: http_client(config.timeout())?,
            scheme: config.scheme.clone(),
            path_encoding: config.path_encoding,
        })
    }

    /// Wraps an existing transport, e.g. one tuned by the caller.
    pub fn with_http_client(http: Client, config: &ClientConfig) -> Self {
        Self {
            http,
            scheme: config.scheme.clone(),
            path_encoding: config.path_encoding,
        }
    }

    /// `{scheme}://{host}/v1/repos/{user}/{name}/models/{id}`
    pub fn model_url(&self, repo: &Repo, id: &str) -> String {
        model_url(&self.scheme, repo, id, self.path_encoding)
    }

    /// Fetches one model. Exactly one request is issued; nothing is retried.
    pub fn get_model(&self, repo: &Repo, id: &str) -> Result<Model> {
        self.get_model_as(repo, id)
    }

    /// Like [`RegistryClient::get_model`], decoding into a caller-owned schema.
    pub fn get_model_as<T: DeserializeOwned>(&self, repo: &Repo, id: &str) -> Result<T> {
        let url = self.model_url(repo, id);
        get_json(&self.http, &url)
    }
}

/// Fetches one model with a default client.
pub fn fetch_model(repo: &Repo, id: &str) -> Result<Model> {
    RegistryClient::new()?.get_model(repo, id)
}

pub fn model_url(scheme: &str, repo: &Repo, id: &str, encoding: PathEncoding) -> String {
    let seg = |s: &str| -> String {
        match encoding {
            PathEncoding::Verbatim => s.to_string(),
            PathEncoding::Percent => urlencoding::encode(s).into_owned(),
        }
    };

    format!(
        "{scheme}://{host}/v1/repos/{user}/{name}/models/{id}",
        host = repo.host,
        user = seg(&repo.user),
        name = seg(&repo.name),
        id = seg(id),
    )
}
