use super::*;

/// An item as the API returns it, before it is narrowed by kind.
///
/// Every field is optional on the wire; absent fields decode to their zero
/// value, so a missing score and a score of zero look the same.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RawItem {
  #[serde(rename = "by")]
  pub author: String,
  #[serde(rename = "kids")]
  pub child_ids: Vec<u64>,
  pub dead: bool,
  pub deleted: bool,
  pub id: u64,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  #[serde(rename = "parent")]
  pub parent_id: u64,
  #[serde(rename = "parts")]
  pub poll_option_ids: Vec<u64>,
  pub score: i64,
  pub text: String,
  pub time: i64,
  pub title: String,
  pub url: String,
}

impl RawItem {
  /// Whether the `type` tag is exactly `kind`'s tag.
  pub fn is(&self, kind: Kind) -> bool {
    self.kind.as_deref() == Some(kind.tag())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_wire_names() {
    let raw = serde_json::from_str::<RawItem>(
      r#"{"by":"pg","id":160705,"parent":160704,"score":335,"text":"Yes, ban them","time":1207886576,"type":"pollopt"}"#,
    )
    .unwrap();

    assert_eq!(raw.author, "pg");
    assert_eq!(raw.id, 160_705);
    assert_eq!(raw.parent_id, 160_704);
    assert_eq!(raw.score, 335);
    assert_eq!(raw.time, 1_207_886_576);
    assert_eq!(raw.kind.as_deref(), Some("pollopt"));
    assert!(raw.is(Kind::PollOption));
  }

  #[test]
  fn absent_fields_default_to_zero_values() {
    let raw =
      serde_json::from_str::<RawItem>(r#"{"by":"dhouston","type":"story"}"#)
        .unwrap();

    assert_eq!(
      raw,
      RawItem {
        author: "dhouston".into(),
        kind: Some("story".into()),
        ..RawItem::default()
      }
    );
  }

  #[test]
  fn deleted_items_decode() {
    let raw = serde_json::from_str::<RawItem>(
      r#"{"deleted":true,"id":2922709,"parent":2921983,"time":1314215049,"type":"comment"}"#,
    )
    .unwrap();

    assert!(raw.deleted);
    assert!(!raw.dead);
    assert!(raw.author.is_empty());
    assert!(raw.is(Kind::Comment));
  }

  #[test]
  fn missing_tag_matches_no_kind() {
    let raw = RawItem::default();

    assert!(Kind::all().iter().all(|kind| !raw.is(*kind)));
  }

  #[test]
  fn unknown_fields_are_ignored() {
    let raw = serde_json::from_str::<RawItem>(
      r#"{"descendants":71,"id":8863,"poll":126809,"type":"story"}"#,
    )
    .unwrap();

    assert_eq!(raw.id, 8863);
  }
}
