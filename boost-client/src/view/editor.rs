use shared::{Employer, Entity, EntityId, HttpResponse, Related};

use crate::ClientResult;
use crate::client::HttpClient;
use crate::navigation::Navigator;
use crate::service::{EmployerService, EntityService};

/// Form state behind a create/edit view
///
/// The form is the record itself: callers edit it through [`form_mut`]
/// and [`select_employer`], then [`save`] sends it. For kinds that
/// reference an Employer, the editor also keeps the option list for the
/// employer picker, always containing the currently selected employer.
///
/// [`form_mut`]: EntityEditor::form_mut
/// [`select_employer`]: EntityEditor::select_employer
/// [`save`]: EntityEditor::save
pub struct EntityEditor<E, C, N> {
    service: EntityService<E, C>,
    employer_service: Option<EmployerService<C>>,
    navigator: N,
    form: E,
    employers_shared_collection: Vec<Employer>,
    is_saving: bool,
}

impl<E, C, N> EntityEditor<E, C, N>
where
    E: Entity + Related,
    C: HttpClient,
    N: Navigator,
{
    pub fn new(service: EntityService<E, C>, navigator: N) -> Self {
        Self {
            service,
            employer_service: None,
            navigator,
            form: E::default(),
            employers_shared_collection: Vec::new(),
            is_saving: false,
        }
    }

    /// Source of the employer options; ignored for kinds without an employer
    pub fn with_employer_service(mut self, employer_service: EmployerService<C>) -> Self {
        if E::has_employer_reference() {
            self.employer_service = Some(employer_service);
        }
        self
    }

    /// Show a resolved record and load the relationship options
    pub async fn open(&mut self, entity: E) -> ClientResult<()> {
        self.update_form(entity);
        self.load_relationship_options().await
    }

    /// Replace the form with `entity`, keeping its employer selectable
    pub fn update_form(&mut self, entity: E) {
        self.employers_shared_collection =
            merge_employer(&self.employers_shared_collection, entity.employer());
        self.form = entity;
    }

    /// Reload the employer options, keeping the current selection in them
    pub async fn load_relationship_options(&mut self) -> ClientResult<()> {
        let Some(employer_service) = &self.employer_service else {
            return Ok(());
        };

        let employers = employer_service.query(None).await?.body.unwrap_or_default();
        self.employers_shared_collection = merge_employer(&employers, self.form.employer());
        Ok(())
    }

    pub fn form(&self) -> &E {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut E {
        &mut self.form
    }

    pub fn employers_shared_collection(&self) -> &[Employer] {
        &self.employers_shared_collection
    }

    /// Pick an employer from the options; `false` if `id` is not offered
    pub fn select_employer(&mut self, id: EntityId) -> bool {
        let selected = self
            .employers_shared_collection
            .iter()
            .find(|e| e.id == Some(id))
            .cloned();
        match selected {
            Some(employer) => {
                self.form.set_employer(Some(employer));
                true
            }
            None => false,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    /// Create or update depending on whether the form has an identifier.
    ///
    /// On success the view returns to the previous route. On failure the
    /// user stays on the form and the error is handed back.
    pub async fn save(&mut self) -> ClientResult<HttpResponse<E>> {
        self.is_saving = true;
        let entity = self.form.clone();
        let result = if entity.identifier().is_some() {
            self.service.update(&entity).await
        } else {
            self.service.create(&entity).await
        };
        self.is_saving = false;

        match &result {
            Ok(_) => self.previous_state(),
            Err(e) => tracing::warn!(entity = E::NAME, error = %e, "Save failed"),
        }
        result
    }

    pub fn previous_state(&self) {
        self.navigator.back();
    }
}

fn merge_employer(collection: &[Employer], selected: Option<&Employer>) -> Vec<Employer> {
    shared::merge_missing(collection, [selected])
}
