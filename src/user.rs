use super::*;

/// A profile from `user/{name}.json`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct User {
  /// Self-description, in HTML.
  pub about: String,
  /// Account creation time, in unix seconds.
  pub created: i64,
  pub delay: i64,
  /// The username; user ids are case-sensitive.
  pub id: String,
  pub karma: i64,
  #[serde(rename = "submitted")]
  pub submitted_ids: Vec<u64>,
}

impl Display for User {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{} | {} karma | {} submissions",
      self.id,
      self.karma,
      self.submitted_ids.len()
    )?;

    let about = plain_text(&self.about);

    if !about.is_empty() {
      write!(f, "\n{about}")?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_api_json() {
    let user = serde_json::from_str::<User>(
      r#"{"about":"Programmer","created":1313690722,"delay":0,"id":"chimeracoder","karma":1439,"submitted":[8429364,8427757]}"#,
    )
    .unwrap();

    assert_eq!(
      user,
      User {
        about: "Programmer".into(),
        created: 1_313_690_722,
        delay: 0,
        id: "chimeracoder".into(),
        karma: 1439,
        submitted_ids: vec![8_429_364, 8_427_757],
      }
    );
  }

  #[test]
  fn display_without_about() {
    let user = User {
      id: "pg".into(),
      karma: 155_111,
      submitted_ids: vec![1, 2, 3],
      ..User::default()
    };

    assert_eq!(user.to_string(), "pg | 155111 karma | 3 submissions");
  }
}
