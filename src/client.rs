use super::*;

/// Fetches items, users, and lists from the API. Cloning is cheap and clones
/// share one connection pool.
#[derive(Clone, Debug, Default)]
pub struct Client {
  client: reqwest::Client,
  config: Config,
}

impl Client {
  const MAX_IN_FLIGHT: usize = 16;

  const NOT_FOUND_BODY: &str = "404 page not found";

  /// Recently changed items and profiles.
  ///
  /// # Errors
  ///
  /// Fails on transport errors, a missing resource, or a malformed body.
  pub async fn changes(&self) -> Result<Changes> {
    self.get("updates").await
  }

  /// # Errors
  ///
  /// See [`Client::fetch`].
  pub async fn comment(&self, id: u64) -> Result<Comment> {
    self.fetch(id).await
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Fetches item `id` and narrows it into `V`.
  ///
  /// # Errors
  ///
  /// Fetch failures ([`Error::Network`], [`Error::NotFound`],
  /// [`Error::Decode`]) are returned as they are; an item of another kind is
  /// an [`Error::KindMismatch`].
  pub async fn fetch<V: Variant>(&self, id: u64) -> Result<V> {
    let raw = self.raw_item(id).await?;

    resolve(id, raw).map_err(|mismatch| {
      warn!(
        id,
        expected = %mismatch.expected,
        actual = ?mismatch.actual,
        "item has unexpected kind"
      );

      mismatch.into()
    })
  }

  async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let url = self.config.url(path);

    debug!(%url, "fetching");

    let response = self
      .client
      .get(&url)
      .send()
      .await
      .map_err(Self::network(&url))?;

    if response.status() == StatusCode::NOT_FOUND {
      debug!(%url, "not found");
      return Err(Error::NotFound { url });
    }

    let body = response
      .error_for_status()
      .map_err(Self::network(&url))?
      .text()
      .await
      .map_err(Self::network(&url))?;

    if Self::is_missing(&body) {
      debug!(%url, "not found");
      return Err(Error::NotFound { url });
    }

    serde_json::from_str(&body).map_err(|source| Error::Decode { source, url })
  }

  /// Whether a successful response body still means there is nothing there.
  /// The API answers unknown ids with `null`.
  fn is_missing(body: &str) -> bool {
    let body = body.trim();
    body == "null" || body == Self::NOT_FOUND_BODY
  }

  /// Fetches item `id` as whatever kind it is.
  ///
  /// # Errors
  ///
  /// Fails like [`Client::raw_item`], or with [`Error::UnknownKind`] for
  /// kinds this crate has no variant for.
  pub async fn item(&self, id: u64) -> Result<Item> {
    Item::from_raw(id, self.raw_item(id).await?)
  }

  /// Fetches the newest item.
  ///
  /// # Errors
  ///
  /// Fails like [`Client::max_item_id`] and [`Client::item`].
  pub async fn max_item(&self) -> Result<Item> {
    let id = self.max_item_id().await?;
    self.item(id).await
  }

  /// The id of the newest item.
  ///
  /// # Errors
  ///
  /// Fails on transport errors or a body that is not a bare integer.
  pub async fn max_item_id(&self) -> Result<u64> {
    self.get("maxitem").await
  }

  fn network(url: &str) -> impl FnOnce(reqwest::Error) -> Error {
    let url = url.to_owned();
    move |source| Error::Network { source, url }
  }

  pub fn new(config: Config) -> Self {
    Self {
      client: reqwest::Client::new(),
      config,
    }
  }

  /// # Errors
  ///
  /// See [`Client::fetch`].
  pub async fn part(&self, id: u64) -> Result<Part> {
    self.fetch(id).await
  }

  /// # Errors
  ///
  /// See [`Client::fetch`].
  pub async fn poll(&self, id: u64) -> Result<Poll> {
    self.fetch(id).await
  }

  /// Fetches item `id` without narrowing it.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::NotFound`] when there is no such item, otherwise on
  /// transport errors or a malformed body.
  pub async fn raw_item(&self, id: u64) -> Result<RawItem> {
    self.get(&format!("item/{id}")).await
  }

  /// # Errors
  ///
  /// See [`Client::fetch`].
  pub async fn story(&self, id: u64) -> Result<Story> {
    self.fetch(id).await
  }

  /// The stories among the first `count` entries of the front page, in rank
  /// order. Job postings share the ranking and are skipped.
  ///
  /// # Errors
  ///
  /// Fails if the ranking or any of its items cannot be fetched.
  pub async fn top_stories(&self, count: usize) -> Result<Vec<Story>> {
    let ids = self.top_story_ids().await?;

    let items = stream::iter(
      ids.into_iter().take(count).map(|id| self.raw_item(id)),
    )
    .buffered(Self::MAX_IN_FLIGHT)
    .try_collect::<Vec<_>>()
    .await?;

    Ok(
      items
        .into_iter()
        .filter_map(|raw| match resolve::<Story>(raw.id, raw) {
          Ok(story) => Some(story),
          Err(mismatch) => {
            debug!(id = mismatch.id, actual = ?mismatch.actual, "skipping");
            None
          }
        })
        .collect(),
    )
  }

  /// Ids of the current front page, best first. The API returns at most 500.
  ///
  /// # Errors
  ///
  /// Fails on transport errors or a malformed body.
  pub async fn top_story_ids(&self) -> Result<Vec<u64>> {
    self.get("topstories").await
  }

  /// Fetches the profile of `name`.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::NotFound`] when there is no such user, otherwise on
  /// transport errors or a malformed body.
  pub async fn user(&self, name: &str) -> Result<User> {
    self.get(&format!("user/{name}")).await
  }
}
