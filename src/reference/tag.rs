//! Revision tags - cheap "did anything change" markers.
//!
//! A global revision counter ticks every time a tracked value is dirtied.
//! Each tag reports the revision of its latest change; a consumer snapshots
//! `tag.value()` and later asks `tag.validate(snapshot)` to learn whether
//! anything it depended on changed since.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Monotonically increasing revision marker.
pub type Revision = u64;

/// Revision of a tag that never changes.
pub const CONSTANT: Revision = 0;

/// Revision every fresh dirtyable tag starts at.
pub const INITIAL: Revision = 1;

// =============================================================================
// Global Revision Counter
// =============================================================================

thread_local! {
    /// Latest revision handed out on this thread.
    static CURRENT_REVISION: Cell<Revision> = const { Cell::new(INITIAL) };
}

/// Get the latest revision handed out.
pub fn current_revision() -> Revision {
    CURRENT_REVISION.with(|rev| rev.get())
}

fn bump_revision() -> Revision {
    CURRENT_REVISION.with(|rev| {
        let next = rev.get() + 1;
        rev.set(next);
        next
    })
}

// =============================================================================
// DirtyableTag
// =============================================================================

/// A tag that can be explicitly dirtied.
///
/// Clones share the same revision cell.
#[derive(Clone)]
pub struct DirtyableTag {
    revision: Rc<Cell<Revision>>,
}

impl DirtyableTag {
    pub fn new() -> Self {
        Self {
            revision: Rc::new(Cell::new(INITIAL)),
        }
    }

    /// Revision of the latest change.
    pub fn value(&self) -> Revision {
        self.revision.get()
    }

    /// Record a change.
    pub fn dirty(&self) {
        self.revision.set(bump_revision());
    }
}

impl Default for DirtyableTag {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DirtyableTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DirtyableTag").field(&self.value()).finish()
    }
}

// =============================================================================
// Tag
// =============================================================================

/// Change-tracking tag.
#[derive(Clone, Debug, Default)]
pub enum Tag {
    /// Never changes.
    #[default]
    Constant,
    /// Changes whenever the underlying [`DirtyableTag`] is dirtied.
    Dirtyable(DirtyableTag),
    /// Changes whenever any member changes.
    Combined(Rc<[Tag]>),
}

impl Tag {
    /// Combine several tags into one.
    ///
    /// Constant members are dropped; a single remaining member is returned
    /// as-is.
    pub fn combine(tags: impl IntoIterator<Item = Tag>) -> Tag {
        let mut live: Vec<Tag> = tags.into_iter().filter(|t| !t.is_constant()).collect();
        match live.len() {
            0 => Tag::Constant,
            1 => live.pop().unwrap_or_default(),
            _ => Tag::Combined(live.into()),
        }
    }

    /// Revision of the latest change seen by this tag.
    pub fn value(&self) -> Revision {
        match self {
            Tag::Constant => CONSTANT,
            Tag::Dirtyable(tag) => tag.value(),
            Tag::Combined(tags) => tags.iter().map(Tag::value).max().unwrap_or(CONSTANT),
        }
    }

    /// `true` if nothing changed since `snapshot` was taken.
    pub fn validate(&self, snapshot: Revision) -> bool {
        self.value() <= snapshot
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Tag::Constant)
    }
}

impl From<DirtyableTag> for Tag {
    fn from(tag: DirtyableTag) -> Self {
        Tag::Dirtyable(tag)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_tag_always_valid() {
        let tag = Tag::Constant;
        assert_eq!(tag.value(), CONSTANT);
        assert!(tag.validate(CONSTANT));
    }

    #[test]
    fn test_dirtyable_tag_invalidates() {
        let tag = DirtyableTag::new();
        let snapshot = Tag::from(tag.clone()).value();
        assert!(Tag::from(tag.clone()).validate(snapshot));

        tag.dirty();
        assert!(!Tag::from(tag.clone()).validate(snapshot));

        let snapshot = tag.value();
        assert!(Tag::from(tag).validate(snapshot));
    }

    #[test]
    fn test_combined_tag_tracks_members() {
        let a = DirtyableTag::new();
        let b = DirtyableTag::new();
        let combined = Tag::combine([Tag::from(a.clone()), Tag::Constant, Tag::from(b.clone())]);
        assert!(matches!(combined, Tag::Combined(_)));

        let snapshot = combined.value();
        a.dirty();
        assert!(!combined.validate(snapshot));

        let snapshot = combined.value();
        b.dirty();
        assert!(!combined.validate(snapshot));
    }

    #[test]
    fn test_combine_collapses() {
        assert!(Tag::combine([Tag::Constant, Tag::Constant]).is_constant());

        let a = DirtyableTag::new();
        assert!(matches!(
            Tag::combine([Tag::Constant, Tag::from(a)]),
            Tag::Dirtyable(_)
        ));
    }
}
