use std::borrow::Cow;

/// A classified `[[...]]` link interior.
///
/// The same split feeds both sides of indexing: `target()` is resolved
/// against the title table for graph edges, `indexable_text()` is what the
/// owning page indexes as words, whether or not the target resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link<'a> {
    /// `[[Target|display text]]` -- only the display text is indexed.
    Piped { target: &'a str, label: &'a str },
    /// `[[Namespace:Title]]` -- the target is the string as written; both
    /// segments are indexed as words.
    Namespaced { target: &'a str },
    /// `[[Target]]` -- the target doubles as the indexable text.
    Plain { target: &'a str },
}

impl<'a> Link<'a> {
    /// Classify the interior of a link span (bracket delimiters already
    /// stripped). The pipe form wins over the colon form, splitting once on
    /// the first `|`.
    pub fn parse(interior: &'a str) -> Self {
        if let Some((target, label)) = interior.split_once('|') {
            Link::Piped { target, label }
        } else if interior.contains(':') {
            Link::Namespaced { target: interior }
        } else {
            Link::Plain { target: interior }
        }
    }

    /// The title this link points at.
    pub fn target(&self) -> &'a str {
        match self {
            Link::Piped { target, .. } | Link::Namespaced { target } | Link::Plain { target } => {
                target
            }
        }
    }

    /// The text indexed on the owning page. Owned only in the namespaced
    /// case, where each `:` becomes a space so both segments tokenize.
    pub fn indexable_text(&self) -> Cow<'a, str> {
        match self {
            Link::Piped { label, .. } => Cow::Borrowed(label),
            Link::Namespaced { target } => Cow::Owned(target.replace(':', " ")),
            Link::Plain { target } => Cow::Borrowed(target),
        }
    }
}
