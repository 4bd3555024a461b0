use crate::{
    AddComment, Comment, CommentComposer, CommentThread, FieldErrors, FormDefaults, MealEntry,
    RawMealInput, Role,
};

pub trait SubmitMeal {
    fn submit(&mut self, entry: MealEntry);
}

impl<F: FnMut(MealEntry)> SubmitMeal for F {
    fn submit(&mut self, entry: MealEntry) {
        self(entry)
    }
}

pub trait CancelForm {
    fn cancel(&mut self);
}

impl<F: FnMut()> CancelForm for F {
    fn cancel(&mut self) {
        self()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Submitted(MealEntry),
    Rejected(FieldErrors),
    Disabled,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Meal entry form for both creating and editing.
///
/// The form owns no I/O: a valid entry goes to the submit collaborator and
/// the caller reports the in-flight state back through
/// [`MealForm::set_submitting`].
pub struct MealForm<S, C> {
    defaults: FormDefaults,
    on_submit: S,
    on_cancel: C,
    submitting: bool,
    role: Role,
    comments: CommentThread,
    composer: Option<CommentComposer>,
}

impl<S: SubmitMeal, C: CancelForm> MealForm<S, C> {
    pub fn new(defaults: FormDefaults, on_submit: S, on_cancel: C) -> Self {
        Self {
            defaults,
            on_submit,
            on_cancel,
            submitting: false,
            role: Role::default(),
            comments: CommentThread::default(),
            composer: None,
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = CommentThread::new(comments);
        self
    }

    /// Grants comment composition. Only a reviewing role gets a composer;
    /// the collaborator is dropped otherwise.
    pub fn with_reviewer(mut self, role: Role, add_comment: impl AddComment + 'static) -> Self {
        self.role = role;
        self.composer = role.can_review().then(|| {
            let mut composer = CommentComposer::new(add_comment);
            composer.set_disabled(self.submitting);
            composer
        });
        self
    }

    pub fn defaults(&self) -> &FormDefaults {
        &self.defaults
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
        if let Some(composer) = self.composer.as_mut() {
            composer.set_disabled(submitting);
        }
    }

    pub fn comments(&self) -> &CommentThread {
        &self.comments
    }

    pub fn comment_composer(&mut self) -> Option<&mut CommentComposer> {
        self.composer.as_mut()
    }

    pub fn submit(&mut self, raw: RawMealInput) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Disabled;
        }

        match self.defaults.apply(raw).validate() {
            Ok(entry) => {
                tracing::info!(meal_type = %entry.meal_type, "meal entry submitted");
                self.on_submit.submit(entry.clone());
                SubmitOutcome::Submitted(entry)
            }
            Err(errors) => SubmitOutcome::Rejected(errors),
        }
    }

    /// Returns `false` when the form is disabled.
    pub fn cancel(&mut self) -> bool {
        if self.submitting {
            return false;
        }

        self.on_cancel.cancel();
        true
    }
}
