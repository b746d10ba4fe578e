use super::*;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Comment {
  #[serde(rename = "by")]
  pub author: String,
  #[serde(rename = "kids")]
  pub child_ids: Vec<u64>,
  pub id: u64,
  #[serde(rename = "parent")]
  pub parent_id: u64,
  /// HTML, as the API sends it.
  pub text: String,
  pub time: i64,
}

impl Display for Comment {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    writeln!(
      f,
      "{} replying to #{} | {} replies | #{}",
      self.author,
      self.parent_id,
      self.child_ids.len(),
      self.id
    )?;

    write!(f, "{}", plain_text(&self.text))
  }
}

impl Variant for Comment {
  const KIND: Kind = Kind::Comment;

  fn project(raw: RawItem) -> Self {
    Self {
      author: raw.author,
      child_ids: raw.child_ids,
      id: raw.id,
      parent_id: raw.parent_id,
      text: raw.text,
      time: raw.time,
    }
  }
}
