//! 表单页面控制器
//!
//! Create and edit pages for groups and URLs share one state machine:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──▶ Succeeded
//!   │                    └──────▶ SubmitFailed
//!   └──(invalid)──▶ ValidationFailed
//! ```
//!
//! Validation runs before any request is built; an invalid form never
//! reaches the API.

use std::time::Duration;

use serde_json::Value;

use crate::controllers::{RequestGeneration, RequestToken};
use crate::error::{CoreError, CoreResult, SUBMIT_FALLBACK_MESSAGE};
use crate::notification::NotificationCenter;
use crate::services::{Resource, ResourceApi};
use crate::types::{Envelope, Url, UrlGrp};

/// Delay before the URL form returns to its list.
pub const URL_FORM_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Whether the form edits an existing entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

/// 表单状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    ValidationFailed,
    SubmitFailed,
}

/// When to return to the list after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSuccess {
    Immediate,
    Delayed(Duration),
}

/// An entity that has a create/edit form.
pub trait FormEntity: Resource + Default {
    /// Navigation rule after success.
    const AFTER_SUCCESS: AfterSuccess;

    /// First failing rule, as [`CoreError::Validation`].
    fn validate(&self) -> CoreResult<()>;

    /// Copy with text fields trimmed.
    #[must_use]
    fn normalized(&self) -> Self;

    /// Copy carrying `id`.
    #[must_use]
    fn with_id(&self, id: i64) -> Self;

    fn success_message(mode: FormMode) -> &'static str;
}

fn require(value: &str, field: &'static str, message: &'static str) -> CoreResult<()> {
    if value.trim().is_empty() {
        Err(CoreError::Validation { field, message })
    } else {
        Ok(())
    }
}

impl FormEntity for UrlGrp {
    const AFTER_SUCCESS: AfterSuccess = AfterSuccess::Immediate;

    fn validate(&self) -> CoreResult<()> {
        require(&self.name, "name", "El nombre es obligatorio")
    }

    fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            ..self.clone()
        }
    }

    fn with_id(&self, id: i64) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    fn success_message(mode: FormMode) -> &'static str {
        match mode {
            FormMode::Create => "Grupo creado correctamente",
            FormMode::Edit { .. } => "Grupo actualizado correctamente",
        }
    }
}

impl FormEntity for Url {
    const AFTER_SUCCESS: AfterSuccess = AfterSuccess::Delayed(URL_FORM_REDIRECT_DELAY);

    fn validate(&self) -> CoreResult<()> {
        require(&self.name, "name", "El nombre es obligatorio")?;
        require(&self.link, "link", "El enlace es obligatorio")?;
        if self.id_url_grp == 0 {
            return Err(CoreError::Validation {
                field: "id_UrlGrp",
                message: "Debe seleccionar un grupo",
            });
        }
        Ok(())
    }

    fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            link: self.link.trim().to_string(),
            ..self.clone()
        }
    }

    fn with_id(&self, id: i64) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    fn success_message(mode: FormMode) -> &'static str {
        match mode {
            FormMode::Create => "Url creada correctamente",
            FormMode::Edit { .. } => "Url actualizada correctamente",
        }
    }
}

/// A validated payload ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission<T> {
    pub token: RequestToken,
    pub mode: FormMode,
    pub payload: T,
}

impl<T: FormEntity> Submission<T> {
    /// Send the payload: `create` in create mode, `update` in edit mode.
    pub async fn dispatch<A>(&self, api: &A) -> CoreResult<Envelope<Value>>
    where
        A: ResourceApi<T> + ?Sized,
    {
        match self.mode {
            FormMode::Create => api.create(&self.payload).await,
            FormMode::Edit { .. } => api.update(&self.payload).await,
        }
    }
}

/// Result of a completed submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded {
        message: &'static str,
        after: AfterSuccess,
    },
    Failed {
        message: String,
    },
}

/// Create/edit form state.
#[derive(Debug)]
pub struct FormController<T> {
    value: T,
    mode: FormMode,
    status: FormStatus,
    error: Option<String>,
    success: Option<&'static str>,
    generation: RequestGeneration,
}

impl<T: FormEntity> FormController<T> {
    /// Blank form in create mode.
    #[must_use]
    pub fn create() -> Self {
        Self::with_mode(T::default(), FormMode::Create)
    }

    /// Form pre-filled from `entity`, in edit mode.
    #[must_use]
    pub fn edit(entity: T) -> Self {
        let id = entity.id();
        Self::with_mode(entity, FormMode::Edit { id })
    }

    /// Edit mode when an entity is given, create mode otherwise.
    #[must_use]
    pub fn from_entity(entity: Option<T>) -> Self {
        entity.map_or_else(Self::create, Self::edit)
    }

    fn with_mode(value: T, mode: FormMode) -> Self {
        Self {
            value,
            mode,
            status: FormStatus::Idle,
            error: None,
            success: None,
            generation: RequestGeneration::new(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Inline error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn success_message(&self) -> Option<&'static str> {
        self.success
    }

    #[must_use]
    pub fn generation(&self) -> &RequestGeneration {
        &self.generation
    }

    /// Change a field. Clears the inline error.
    pub fn update_field(&mut self, edit: impl FnOnce(&mut T)) {
        edit(&mut self.value);
        self.error = None;
        if matches!(
            self.status,
            FormStatus::ValidationFailed | FormStatus::SubmitFailed
        ) {
            self.status = FormStatus::Idle;
        }
    }

    /// Validate and start a submit.
    ///
    /// Fails with [`CoreError::SubmitInProgress`] while a previous submit is
    /// outstanding, and with [`CoreError::Validation`] when a rule fails (the
    /// message is also kept as the inline error).
    pub fn begin_submit(&mut self) -> CoreResult<Submission<T>> {
        if self.status == FormStatus::Submitting {
            return Err(CoreError::SubmitInProgress);
        }

        let payload = self.value.normalized();
        if let Err(e) = payload.validate() {
            log::debug!("form validation failed: {e}");
            self.status = FormStatus::ValidationFailed;
            self.error = Some(e.user_message());
            return Err(e);
        }

        let id = match self.mode {
            FormMode::Create => 0,
            FormMode::Edit { id } => id,
        };

        self.status = FormStatus::Submitting;
        self.error = None;
        self.success = None;
        Ok(Submission {
            token: self.generation.next_token(),
            mode: self.mode,
            payload: payload.with_id(id),
        })
    }

    /// Apply the API answer. `None` when the token is stale.
    pub fn finish_submit(
        &mut self,
        token: RequestToken,
        result: CoreResult<Envelope<Value>>,
    ) -> Option<SubmitOutcome> {
        if !self.generation.is_current(token) {
            log::debug!("dropping stale submit result (token {})", token.value());
            return None;
        }

        match result {
            Ok(envelope) if envelope.is_success => {
                let message = T::success_message(self.mode);
                log::info!("{message}");
                self.status = FormStatus::Succeeded;
                self.success = Some(message);
                Some(SubmitOutcome::Succeeded {
                    message,
                    after: T::AFTER_SUCCESS,
                })
            }
            Ok(envelope) => Some(self.fail(envelope.message)),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("submit failed: {e}");
                } else {
                    log::error!("submit failed: {e}");
                }
                Some(self.fail(Some(e.user_message())))
            }
        }
    }

    fn fail(&mut self, message: Option<String>) -> SubmitOutcome {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| SUBMIT_FALLBACK_MESSAGE.to_string());
        self.status = FormStatus::SubmitFailed;
        self.error = Some(message.clone());
        SubmitOutcome::Failed { message }
    }

    /// Page left: a pending submit result is dropped.
    pub fn leave(&mut self) {
        self.generation.invalidate();
    }

    /// Validate, send, and apply the answer in place. On success the
    /// message is also published to `notifications`.
    pub async fn submit<A>(
        &mut self,
        api: &A,
        notifications: &NotificationCenter,
    ) -> CoreResult<SubmitOutcome>
    where
        A: ResourceApi<T> + ?Sized,
    {
        let submission = self.begin_submit()?;
        let result = submission.dispatch(api).await;
        let outcome = self
            .finish_submit(submission.token, result)
            .unwrap_or_else(|| SubmitOutcome::Failed {
                message: SUBMIT_FALLBACK_MESSAGE.to_string(),
            });
        if let SubmitOutcome::Succeeded { message, .. } = &outcome {
            notifications.show_success(*message);
        }
        Ok(outcome)
    }
}

/// Group form
pub type UrlGrpForm = FormController<UrlGrp>;

/// URL form
pub type UrlForm = FormController<Url>;
