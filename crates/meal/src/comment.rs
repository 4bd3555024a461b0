use crate::Comment;

pub trait AddComment {
    fn add_comment(&mut self, content: String);
}

impl<F: FnMut(String)> AddComment for F {
    fn add_comment(&mut self, content: String) {
        self(content)
    }
}

/// Comments attached to a meal, kept in the order the caller supplied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentThread(Vec<Comment>);

impl CommentThread {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self(comments)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Comment] {
        &self.0
    }
}

impl From<Vec<Comment>> for CommentThread {
    fn from(comments: Vec<Comment>) -> Self {
        Self::new(comments)
    }
}

impl<'a> IntoIterator for &'a CommentThread {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommentOutcome {
    Added(String),
    Blank,
    Disabled,
}

pub struct CommentComposer {
    draft: String,
    disabled: bool,
    add: Box<dyn AddComment>,
}

impl std::fmt::Debug for CommentComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentComposer")
            .field("draft", &self.draft)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl CommentComposer {
    pub fn new(add: impl AddComment + 'static) -> Self {
        Self {
            draft: String::new(),
            disabled: false,
            add: Box::new(add),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        if !self.disabled {
            self.draft = draft.into();
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Sends the trimmed draft and clears it. Whitespace-only drafts are
    /// left untouched.
    pub fn submit(&mut self) -> CommentOutcome {
        if self.disabled {
            return CommentOutcome::Disabled;
        }

        let content = self.draft.trim();
        if content.is_empty() {
            tracing::debug!("blank comment ignored");
            return CommentOutcome::Blank;
        }

        let content = content.to_owned();
        self.add.add_comment(content.clone());
        self.draft.clear();

        CommentOutcome::Added(content)
    }
}
