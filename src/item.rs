use super::*;

/// Any item, narrowed to whichever variant its `type` tag names.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Item {
  #[serde(rename = "comment")]
  Comment(Comment),
  #[serde(rename = "pollopt")]
  Part(Part),
  #[serde(rename = "poll")]
  Poll(Poll),
  #[serde(rename = "story")]
  Story(Story),
}

impl Display for Item {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Item::Comment(comment) => Display::fmt(comment, f),
      Item::Part(part) => Display::fmt(part, f),
      Item::Poll(poll) => Display::fmt(poll, f),
      Item::Story(story) => Display::fmt(story, f),
    }
  }
}

impl From<Comment> for Item {
  fn from(comment: Comment) -> Self {
    Item::Comment(comment)
  }
}

impl From<Part> for Item {
  fn from(part: Part) -> Self {
    Item::Part(part)
  }
}

impl From<Poll> for Item {
  fn from(poll: Poll) -> Self {
    Item::Poll(poll)
  }
}

impl From<Story> for Item {
  fn from(story: Story) -> Self {
    Item::Story(story)
  }
}

impl Item {
  /// Narrows `raw`, fetched as item `id`, by its own `type` tag.
  ///
  /// # Errors
  ///
  /// Returns [`Error::UnknownKind`] when the tag is missing or is not one of
  /// the kinds in [`Kind`], such as `job`.
  pub fn from_raw(id: u64, raw: RawItem) -> Result<Self> {
    let Some(kind) = raw
      .kind
      .as_deref()
      .and_then(|tag| tag.parse::<Kind>().ok())
    else {
      return Err(Error::UnknownKind { id, kind: raw.kind });
    };

    Ok(match kind {
      Kind::Comment => Item::Comment(Comment::project(raw)),
      Kind::Poll => Item::Poll(Poll::project(raw)),
      Kind::PollOption => Item::Part(Part::project(raw)),
      Kind::Story => Item::Story(Story::project(raw)),
    })
  }

  pub fn id(&self) -> u64 {
    match self {
      Item::Comment(comment) => comment.id,
      Item::Part(part) => part.id,
      Item::Poll(poll) => poll.id,
      Item::Story(story) => story.id,
    }
  }

  pub fn kind(&self) -> Kind {
    match self {
      Item::Comment(_) => Kind::Comment,
      Item::Part(_) => Kind::PollOption,
      Item::Poll(_) => Kind::Poll,
      Item::Story(_) => Kind::Story,
    }
  }
}
