//! Studio dispatcher
//!
//! Maps each user action onto exactly one call into the pipeline or the
//! session store. The front end builds a [`StudioAction`], hands it to
//! [`PetNameStudio::handle`] and redraws from the returned [`StudioOutcome`]
//! and [`PetNameStudio::store`].

use crate::ports::generation_gateway::GenerationGateway;
use crate::ports::progress::{GenerationProgress, NoProgress};
use crate::use_cases::generate_name::{GenerateError, GenerateNameUseCase};
use petname_domain::{
    Creativity, DomainError, GenerationRequest, NameRecord, NameStyle, RecordId, SessionStore,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Raw form input, as typed by the user
///
/// Validation happens in [`GenerationForm::into_request`], so a bad form is
/// rejected before anything else runs.
#[derive(Debug, Clone, Default)]
pub struct GenerationForm {
    pub pet_type: String,
    pub color: String,
    pub personality_traits: Vec<String>,
    pub style: NameStyle,
    pub creativity: f32,
}

impl GenerationForm {
    pub fn new(pet_type: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            pet_type: pet_type.into(),
            color: color.into(),
            personality_traits: Vec::new(),
            style: NameStyle::default(),
            creativity: Creativity::DEFAULT,
        }
    }

    pub fn with_traits(mut self, traits: Vec<String>) -> Self {
        self.personality_traits = traits;
        self
    }

    pub fn with_style(mut self, style: NameStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_creativity(mut self, creativity: f32) -> Self {
        self.creativity = creativity;
        self
    }

    pub fn into_request(self) -> Result<GenerationRequest, DomainError> {
        let creativity = Creativity::new(self.creativity)?;
        Ok(GenerationRequest::new(&self.pet_type, &self.color)?
            .with_traits(self.personality_traits)
            .with_style(self.style)
            .with_creativity(creativity))
    }
}

/// A user action
#[derive(Debug, Clone)]
pub enum StudioAction {
    Generate(GenerationForm),
    ToggleFavorite(RecordId),
    ClearHistory,
}

/// What an action did
#[derive(Debug, Clone)]
pub enum StudioOutcome {
    Generated(NameRecord),
    /// `favorited` is `None` when the id was not in History
    FavoriteToggled {
        id: RecordId,
        favorited: Option<bool>,
    },
    Cleared,
}

/// One interactive session: the pipeline plus the store it writes to
pub struct PetNameStudio<G: GenerationGateway + 'static> {
    use_case: GenerateNameUseCase<G>,
    store: SessionStore,
}

impl<G: GenerationGateway + 'static> PetNameStudio<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            use_case: GenerateNameUseCase::new(gateway),
            store: SessionStore::new(),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn gateway(&self) -> &Arc<G> {
        self.use_case.gateway()
    }

    /// Dispatch an action with default (no-op) progress
    pub async fn handle(&mut self, action: StudioAction) -> Result<StudioOutcome, GenerateError> {
        self.handle_with_progress(action, &NoProgress).await
    }

    /// Dispatch an action with progress callbacks
    pub async fn handle_with_progress(
        &mut self,
        action: StudioAction,
        progress: &dyn GenerationProgress,
    ) -> Result<StudioOutcome, GenerateError> {
        match action {
            StudioAction::Generate(form) => {
                let request = form.into_request()?;
                let record = self
                    .use_case
                    .execute_with_progress(request, &mut self.store, progress)
                    .await?;
                Ok(StudioOutcome::Generated(record))
            }
            StudioAction::ToggleFavorite(id) => {
                let favorited = self.store.toggle_favorite(id);
                debug!(%id, ?favorited, "Toggled favorite");
                Ok(StudioOutcome::FavoriteToggled { id, favorited })
            }
            StudioAction::ClearHistory => {
                info!("Clearing {} history entries", self.store.len());
                self.store.clear_history();
                Ok(StudioOutcome::Cleared)
            }
        }
    }
}
