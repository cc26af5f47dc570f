use crate::domain::staff::api;
use contracts::domain::staff::aggregate::StaffForm;
use contracts::shared::validation::{Validate, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the staff create/edit form
#[derive(Clone, Copy)]
pub struct StaffDetailsViewModel {
    pub form: RwSignal<StaffForm>,
    pub errors: RwSignal<ValidationErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub notice: RwSignal<Option<String>>,
    pub saved: RwSignal<bool>,
}

impl StaffDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(StaffForm::default()),
            errors: RwSignal::new(ValidationErrors::default()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            notice: RwSignal::new(None),
            saved: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load(&self, id: Option<i64>) {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_by_id(existing_id).await {
                Ok(staff) => vm.form.set(StaffForm::from_record(&staff)),
                Err(e) => vm.notice.set(Some(e.to_string())),
            }
            vm.loading.set(false);
        });
    }

    pub fn save(&self) {
        let current = self.form.get_untracked();
        match current.validate() {
            Ok(()) => self.errors.set(ValidationErrors::default()),
            Err(validation) => {
                self.errors.set(validation);
                return;
            }
        }

        let vm = *self;
        vm.saving.set(true);
        vm.notice.set(None);
        spawn_local(async move {
            match api::save(&current).await {
                Ok(()) => vm.saved.set(true),
                Err(e) => vm.notice.set(Some(e.to_string())),
            }
            vm.saving.set(false);
        });
    }
}
