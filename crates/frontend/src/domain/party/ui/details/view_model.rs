use crate::domain::party::api;
use crate::shared::subrecords;
use contracts::domain::party::aggregate::PartyForm;
use contracts::shared::validation::{Validate, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the party create/edit form
#[derive(Clone, Copy)]
pub struct PartyDetailsViewModel {
    pub form: RwSignal<PartyForm>,
    pub errors: RwSignal<ValidationErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub notice: RwSignal<Option<String>>,
    pub saved: RwSignal<bool>,
}

impl PartyDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PartyForm::default()),
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
                Ok(party) => vm.form.set(PartyForm::from_record(&party)),
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

    pub fn add_address(&self) {
        self.form.update(|f| subrecords::append_row(&mut f.party_addresses));
    }

    pub fn remove_address(&self, index: usize) {
        self.form.update(|f| {
            subrecords::remove_row(&mut f.party_addresses, &mut f.removed_address_ids, index);
        });
    }

    pub fn can_remove_address(&self) -> bool {
        self.form.with(|f| subrecords::can_remove(&f.party_addresses))
    }
}
