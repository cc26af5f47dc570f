use crate::domain::order::api;
use crate::domain::party::api as party_api;
use crate::domain::staff::api as staff_api;
use crate::shared::subrecords;
use contracts::domain::order::aggregate::OrderForm;
use contracts::shared::envelope::IdAndName;
use contracts::shared::validation::{Validate, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the order create/edit form
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub form: RwSignal<OrderForm>,
    pub errors: RwSignal<ValidationErrors>,
    pub parties: RwSignal<Vec<IdAndName>>,
    pub staff: RwSignal<Vec<IdAndName>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub notice: RwSignal<Option<String>>,
    /// Flips once after a successful save; the view navigates on it
    pub saved: RwSignal<bool>,
}

impl OrderDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(OrderForm::default()),
            errors: RwSignal::new(ValidationErrors::default()),
            parties: RwSignal::new(Vec::new()),
            staff: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            notice: RwSignal::new(None),
            saved: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Load picker options and, in edit mode, the record itself
    pub fn load(&self, id: Option<i64>) {
        let vm = *self;
        spawn_local(async move {
            match party_api::fetch_options().await {
                Ok(options) => vm.parties.set(options),
                Err(e) => log::error!("failed to load party options: {}", e),
            }
            match staff_api::fetch_options().await {
                Ok(options) => vm.staff.set(options),
                Err(e) => log::error!("failed to load staff options: {}", e),
            }
        });

        if let Some(existing_id) = id {
            let vm = *self;
            vm.loading.set(true);
            spawn_local(async move {
                match api::fetch_by_id(existing_id).await {
                    Ok(order) => vm.form.set(OrderForm::from_record(&order)),
                    Err(e) => vm.notice.set(Some(e.to_string())),
                }
                vm.loading.set(false);
            });
        }
    }

    /// Validate locally, then submit. Server-side rejections land in
    /// `notice`, local ones in `errors`.
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

    pub fn add_lot(&self) {
        self.form.update(|f| subrecords::append_row(&mut f.order_details));
    }

    pub fn remove_lot(&self, index: usize) {
        self.form.update(|f| {
            subrecords::remove_row(&mut f.order_details, &mut f.removed_lot_ids, index);
        });
    }

    pub fn can_remove_lot(&self) -> bool {
        self.form.with(|f| subrecords::can_remove(&f.order_details))
    }
}
