use super::*;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Story {
  #[serde(rename = "by")]
  pub author: String,
  #[serde(rename = "kids")]
  pub child_ids: Vec<u64>,
  pub id: u64,
  pub score: i64,
  pub time: i64,
  pub title: String,
  pub url: String,
}

impl Display for Story {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    writeln!(f, "{}", self.title)?;

    if !self.url.is_empty() {
      writeln!(f, "{}", self.url)?;
    }

    write!(
      f,
      "{} by {} | {} comments | #{}",
      format_points(self.score),
      self.author,
      self.child_ids.len(),
      self.id
    )
  }
}

impl Variant for Story {
  const KIND: Kind = Kind::Story;

  fn project(raw: RawItem) -> Self {
    Self {
      author: raw.author,
      child_ids: raw.child_ids,
      id: raw.id,
      score: raw.score,
      time: raw.time,
      title: raw.title,
      url: raw.url,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_shows_title_link_and_points() {
    let story = Story {
      author: "dhouston".into(),
      child_ids: vec![8952, 9224],
      id: 8863,
      score: 111,
      time: 1_175_714_200,
      title: "My YC app: Dropbox".into(),
      url: "http://www.getdropbox.com/u/2/screencast.html".into(),
    };

    assert_eq!(
      story.to_string(),
      "My YC app: Dropbox\n\
       http://www.getdropbox.com/u/2/screencast.html\n\
       111 points by dhouston | 2 comments | #8863"
    );
  }

  #[test]
  fn display_skips_missing_link() {
    let story = Story {
      author: "pg".into(),
      id: 1,
      score: 1,
      title: "Ask HN".into(),
      ..Story::default()
    };

    assert_eq!(story.to_string(), "Ask HN\n1 point by pg | 0 comments | #1");
  }

  #[test]
  fn decodes_api_json() {
    let story = serde_json::from_str::<Story>(
      r#"{"by":"dhouston","id":8863,"kids":[8952],"score":111,"time":1175714200,"title":"My YC app","type":"story","url":"http://www.getdropbox.com"}"#,
    )
    .unwrap();

    assert_eq!(story.author, "dhouston");
    assert_eq!(story.child_ids, vec![8952]);
  }
}
