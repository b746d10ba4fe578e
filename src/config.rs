use super::*;

/// Where the API lives. URLs are built as `{base_uri}{version}/{path}{suffix}`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
  pub base_uri: String,
  pub suffix: String,
  pub version: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_uri: Self::BASE_URI.into(),
      suffix: Self::SUFFIX.into(),
      version: Self::VERSION.into(),
    }
  }
}

impl Config {
  const BASE_URI: &str = "https://hacker-news.firebaseio.com/";

  const SUFFIX: &str = ".json";

  const VERSION: &str = "v0";

  /// The defaults, with each field overridden by `HN_API_BASE_URI`,
  /// `HN_API_SUFFIX`, or `HN_API_VERSION` when set.
  pub fn from_env() -> Self {
    Self::from_vars(|key| env::var(key).ok())
  }

  fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
    let defaults = Self::default();

    Self {
      base_uri: var("HN_API_BASE_URI").unwrap_or(defaults.base_uri),
      suffix: var("HN_API_SUFFIX").unwrap_or(defaults.suffix),
      version: var("HN_API_VERSION").unwrap_or(defaults.version),
    }
  }

  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}{}/{path}{}", self.base_uri, self.version, self.suffix)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_urls_point_at_firebase() {
    assert_eq!(
      Config::default().url("item/8863"),
      "https://hacker-news.firebaseio.com/v0/item/8863.json"
    );

    assert_eq!(
      Config::default().url("maxitem"),
      "https://hacker-news.firebaseio.com/v0/maxitem.json"
    );
  }

  #[test]
  fn variables_override_defaults() {
    let config = Config::from_vars(|key| match key {
      "HN_API_BASE_URI" => Some("http://127.0.0.1:8080/".into()),
      "HN_API_VERSION" => Some("v1".into()),
      _ => None,
    });

    assert_eq!(config.suffix, ".json");
    assert_eq!(
      config.url("topstories"),
      "http://127.0.0.1:8080/v1/topstories.json"
    );
  }

  #[test]
  fn no_variables_means_defaults() {
    assert_eq!(Config::from_vars(|_| None), Config::default());
  }
}
