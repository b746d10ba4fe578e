use super::*;

/// A typed view of an item, built from a [`RawItem`] of kind [`Self::KIND`].
pub trait Variant: Default + Sized {
  const KIND: Kind;

  /// Copies the fields this variant keeps. Callers must have checked the
  /// kind first; [`resolve`] is the checked entry point.
  fn project(raw: RawItem) -> Self;
}

/// Narrows `raw`, fetched as item `id`, into `V`.
///
/// # Errors
///
/// Returns [`KindMismatch`] when the item's `type` tag is not `V::KIND`.
pub fn resolve<V: Variant>(id: u64, raw: RawItem) -> Result<V, KindMismatch> {
  if raw.is(V::KIND) {
    Ok(V::project(raw))
  } else {
    Err(KindMismatch {
      actual: raw.kind,
      expected: V::KIND,
      id,
    })
  }
}

/// Like [`resolve`], but always hands back a value: the zero value of `V`
/// alongside the error on mismatch, never fields of the mismatched item.
pub fn resolve_or_default<V: Variant>(
  id: u64,
  raw: RawItem,
) -> (V, Option<KindMismatch>) {
  match resolve(id, raw) {
    Ok(variant) => (variant, None),
    Err(error) => (V::default(), Some(error)),
  }
}
