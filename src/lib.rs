//! # model-registry-client
//!
//! Blocking client that looks up a single model description on a model
//! registry (`GET /v1/repos/{user}/{name}/models/{id}`) and decodes it.

pub mod config;
pub mod error;
pub mod io;
pub mod registry;
pub mod types;

pub use crate::{
    config::{ClientConfig, PathEncoding},
    error::{FetchError, RepoParseError, Result},
    registry::{fetch_model, model_url, RegistryClient},
    types::{ArgumentType, Artifact, Config, Environment, Example, Model, Repo, RunArgument},
};
