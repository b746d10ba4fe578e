use super::*;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Poll {
  #[serde(rename = "by")]
  pub author: String,
  #[serde(rename = "kids")]
  pub child_ids: Vec<u64>,
  pub id: u64,
  /// Ids of the poll's options, each a [`Part`].
  #[serde(rename = "parts")]
  pub poll_option_ids: Vec<u64>,
  pub score: i64,
  pub text: String,
  pub time: i64,
  pub title: String,
}

impl Display for Poll {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    writeln!(f, "{}", self.title)?;

    let text = plain_text(&self.text);

    if !text.is_empty() {
      writeln!(f, "{text}")?;
    }

    write!(
      f,
      "{} by {} | {} options | {} comments | #{}",
      format_points(self.score),
      self.author,
      self.poll_option_ids.len(),
      self.child_ids.len(),
      self.id
    )
  }
}

impl Variant for Poll {
  const KIND: Kind = Kind::Poll;

  fn project(raw: RawItem) -> Self {
    Self {
      author: raw.author,
      child_ids: raw.child_ids,
      id: raw.id,
      poll_option_ids: raw.poll_option_ids,
      score: raw.score,
      text: raw.text,
      time: raw.time,
      title: raw.title,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_parts() {
    let poll = serde_json::from_str::<Poll>(
      r#"{"by":"pg","id":126809,"parts":[126810,126811],"score":46,"title":"Poll","type":"poll"}"#,
    )
    .unwrap();

    assert_eq!(poll.poll_option_ids, vec![126_810, 126_811]);
    assert!(poll.child_ids.is_empty());
  }

  #[test]
  fn display_counts_options() {
    let poll = Poll {
      author: "pg".into(),
      id: 126_809,
      poll_option_ids: vec![126_810, 126_811, 126_812],
      score: 46,
      title: "Poll: explicit support for polls?".into(),
      ..Poll::default()
    };

    assert_eq!(
      poll.to_string(),
      "Poll: explicit support for polls?\n\
       46 points by pg | 3 options | 0 comments | #126809"
    );
  }
}
