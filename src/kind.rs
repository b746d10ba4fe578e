use super::*;

/// The `type` tag of an item.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
  Comment,
  Poll,
  PollOption,
  Story,
}

impl Display for Kind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.tag())
  }
}

impl FromStr for Kind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::all()
      .iter()
      .copied()
      .find(|kind| kind.tag() == s)
      .ok_or_else(|| Error::InvalidKind(s.to_string()))
  }
}

impl Kind {
  pub fn all() -> &'static [Kind] {
    &[Kind::Comment, Kind::Poll, Kind::PollOption, Kind::Story]
  }

  /// The tag exactly as the API spells it.
  pub fn tag(self) -> &'static str {
    match self {
      Kind::Comment => "comment",
      Kind::Poll => "poll",
      Kind::PollOption => "pollopt",
      Kind::Story => "story",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tags_parse_back_into_kinds() {
    for kind in Kind::all() {
      assert_eq!(kind.tag().parse::<Kind>().unwrap(), *kind);
    }
  }

  #[test]
  fn parsing_is_case_sensitive() {
    assert!(matches!(
      "Story".parse::<Kind>(),
      Err(Error::InvalidKind(tag)) if tag == "Story"
    ));
  }

  #[test]
  fn poll_option_uses_api_spelling() {
    assert_eq!(Kind::PollOption.to_string(), "pollopt");
    assert!("job".parse::<Kind>().is_err());
  }
}
