use super::*;

/// Recently changed items and profiles, from `updates.json`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Changes {
  #[serde(rename = "items")]
  pub item_ids: Vec<u64>,
  #[serde(rename = "profiles")]
  pub profile_names: Vec<String>,
}

impl Display for Changes {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    writeln!(f, "{} changed items", self.item_ids.len())?;

    for id in &self.item_ids {
      writeln!(f, "  #{id}")?;
    }

    write!(f, "{} changed profiles", self.profile_names.len())?;

    for name in &self.profile_names {
      write!(f, "\n  {name}")?;
    }

    Ok(())
  }
}
