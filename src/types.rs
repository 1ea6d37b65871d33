use crate::error::RepoParseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Location of a model repository on a registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Repo {
    pub host: String,
    pub user: String,
    pub name: String,
}

impl Repo {
    pub fn new(host: impl Into<String>, user: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.user, self.name)
    }
}

impl FromStr for Repo {
    type Err = RepoParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        let [host, user, name] = parts.as_slice() else {
            return Err(RepoParseError::Format(s.to_string()));
        };

        for (segment, value) in [("host", host), ("user", user), ("name", name)] {
            if value.is_empty() {
                return Err(RepoParseError::EmptySegment {
                    input: s.to_string(),
                    segment,
                });
            }
        }

        Ok(Repo::new(*host, *user, *name))
    }
}

/// Model description as served by the registry.
///
/// Every field defaults, so keys missing from the document decode to zero values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    pub id: String,
    #[serde(deserialize_with = "skip_null_items")]
    pub artifacts: Vec<Artifact>,
    pub config: Option<Config>,
    #[serde(deserialize_with = "skip_null_values")]
    pub run_arguments: BTreeMap<String, RunArgument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artifact {
    pub target: String,
    pub uri: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub environment: Option<Environment>,
    pub model: String,
    #[serde(deserialize_with = "skip_null_items")]
    pub examples: Vec<Example>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    pub python_version: String,
    pub python_requirements: String,
    pub python_extra_index_urls: Vec<String>,
    pub python_find_links: Vec<String>,
    pub python_packages: Vec<String>,
    pub system_packages: Vec<String>,
    pub architectures: Vec<String>,
    pub cuda: String,
    pub cudnn: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Example {
    pub input: BTreeMap<String, String>,
    pub output: String,
}

/// Input type of a run argument.
///
/// Types this client does not know are kept as [`ArgumentType::Other`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArgumentType {
    #[default]
    String,
    Int,
    Float,
    Bool,
    Path,
    Other(String),
}

impl ArgumentType {
    pub fn as_str(&self) -> &str {
        match self {
            ArgumentType::String => "str",
            ArgumentType::Int => "int",
            ArgumentType::Float => "float",
            ArgumentType::Bool => "bool",
            ArgumentType::Path => "Path",
            ArgumentType::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for ArgumentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "str" => ArgumentType::String,
            "int" => ArgumentType::Int,
            "float" => ArgumentType::Float,
            "bool" => ArgumentType::Bool,
            "Path" => ArgumentType::Path,
            _ => ArgumentType::Other(s),
        }
    }
}

impl From<ArgumentType> for String {
    fn from(t: ArgumentType) -> Self {
        match t {
            ArgumentType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunArgument {
    #[serde(rename = "type")]
    pub kind: ArgumentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

// `null` lists and `null` entries decode as absent
fn skip_null_items<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(d)?;
    Ok(items.into_iter().flatten().flatten().collect())
}

fn skip_null_values<'de, D, T>(d: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Option<BTreeMap<String, Option<T>>> = Option::deserialize(d)?;
    Ok(entries
        .into_iter()
        .flatten()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect())
}
