//! A thin client for the read-only Hacker News API.
//!
//! Items come back from `item/{id}.json` as an untyped [`RawItem`] and are
//! narrowed into a typed variant ([`Story`], [`Comment`], [`Poll`], [`Part`])
//! by their `type` tag. Asking for the wrong variant is a [`KindMismatch`].
//!
//! ```no_run
//! # async fn run() -> hn_items::Result {
//! let client = hn_items::Client::default();
//!
//! let story = client.story(8863).await?;
//!
//! println!("{} by {}", story.title, story.author);
//! # Ok(())
//! # }
//! ```

use {
  futures::stream::{self, StreamExt, TryStreamExt},
  reqwest::StatusCode,
  serde::{Deserialize, Serialize, de::DeserializeOwned},
  std::{
    env,
    fmt::{self, Display, Formatter},
    str::FromStr,
  },
  text::{format_points, plain_text, truncate},
  tracing::{debug, warn},
};

pub use {
  changes::Changes,
  client::Client,
  comment::Comment,
  config::Config,
  error::{Error, KindMismatch},
  item::Item,
  kind::Kind,
  part::Part,
  poll::Poll,
  raw_item::RawItem,
  resolve::{Variant, resolve, resolve_or_default},
  story::Story,
  user::User,
};

mod changes;
mod client;
mod comment;
mod config;
mod error;
mod item;
mod kind;
mod part;
mod poll;
mod raw_item;
mod resolve;
mod story;
pub mod text;
mod user;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
