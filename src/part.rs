use super::*;

/// One option of a [`Poll`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Part {
  #[serde(rename = "by")]
  pub author: String,
  pub id: u64,
  /// The poll this option belongs to.
  #[serde(rename = "parent")]
  pub parent_id: u64,
  pub score: i64,
  pub text: String,
  pub time: i64,
}

impl Display for Part {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{} ({}) | poll #{} | #{}",
      truncate(&plain_text(&self.text), 120),
      format_points(self.score),
      self.parent_id,
      self.id
    )
  }
}

impl Variant for Part {
  const KIND: Kind = Kind::PollOption;

  fn project(raw: RawItem) -> Self {
    Self {
      author: raw.author,
      id: raw.id,
      parent_id: raw.parent_id,
      score: raw.score,
      text: raw.text,
      time: raw.time,
    }
  }
}
