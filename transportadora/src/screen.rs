//! Generic entity management screen.
//!
//! `EntityScreen` is pure state: every user action either updates it directly
//! or hands back a `Mutation` for the caller to run against a
//! `ResourceClient`, then report with `finish_mutation`. `load_rows` and
//! `run_mutation` chain those steps against any `ScreenCell`, so a screen
//! held behind a UI signal is sequenced the same way as one owned outright.

use shared::{FieldError, Result};
use shared_http::api::RecordId;
use tracing::{info, warn};

use crate::catalog::{self, Managed};
use crate::directory::Directory;
use crate::forms::FormValues;
use crate::gateway::{Gateway, HasResource};
use crate::notification::Notification;
use crate::ports::ResourceClient;

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<E> {
    Idle,
    Loading,
    Loaded(Vec<E>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub mode: DialogMode,
    pub form: FormValues,
    pub errors: Vec<FieldError>,
    pub saving: bool,
}

impl Dialog {
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// A write the screen wants performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<E> {
    Create(E),
    Update(RecordId, E),
    Delete(RecordId),
}

impl<E: Managed> Mutation<E> {
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::Create(_) => MutationKind::Create,
            Mutation::Update(..) => MutationKind::Update,
            Mutation::Delete(_) => MutationKind::Delete,
        }
    }

    pub async fn run(&self, client: &dyn ResourceClient<E>) -> Result<()> {
        match self {
            Mutation::Create(record) => client.create(record).await.map(|_| ()),
            Mutation::Update(id, record) => client.update(*id, record).await.map(|_| ()),
            Mutation::Delete(id) => client.delete(*id).await.map(|_| ()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityScreen<E> {
    list: ListState<E>,
    directory: Directory,
    dialog: Option<Dialog>,
    confirm_delete: Option<RecordId>,
    deleting: bool,
    notification: Option<Notification>,
}

impl<E: Managed> Default for EntityScreen<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Managed> EntityScreen<E> {
    pub fn new() -> Self {
        Self {
            list: ListState::Idle,
            directory: Directory::default(),
            dialog: None,
            confirm_delete: None,
            deleting: false,
            notification: None,
        }
    }

    pub fn list(&self) -> &ListState<E> {
        &self.list
    }

    pub fn rows(&self) -> &[E] {
        match &self.list {
            ListState::Loaded(rows) => rows,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.list, ListState::Loading)
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn pending_delete(&self) -> Option<RecordId> {
        self.confirm_delete
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn begin_load(&mut self) {
        self.list = ListState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Vec<E>>) {
        match result {
            Ok(rows) => self.list = ListState::Loaded(rows),
            Err(e) => {
                warn!("Loading {} failed: {}", E::COLLECTION, e);
                self.list = ListState::Loaded(Vec::new());
                self.notify(Notification::error(catalog::load_failed_message::<E>()));
            }
        }
    }

    pub fn set_directory(&mut self, directory: Directory) {
        self.directory = directory;
    }

    pub fn open_create(&mut self) {
        self.dialog = Some(Dialog {
            mode: DialogMode::Create,
            form: FormValues::blank(E::FIELDS),
            errors: Vec::new(),
            saving: false,
        });
    }

    /// Opens the edit dialog pre-filled from the listed row; `false` if the id is not listed.
    pub fn open_edit(&mut self, id: RecordId) -> bool {
        let Some(row) = self.rows().iter().find(|row| row.id() == Some(id)) else {
            return false;
        };
        let form = FormValues::from_record(E::FIELDS, row);
        self.dialog = Some(Dialog {
            mode: DialogMode::Edit(id),
            form,
            errors: Vec::new(),
            saving: false,
        });
        true
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.form.set(name, value);
            dialog.errors.retain(|e| e.field != name);
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Validates the open form. Invalid input keeps the dialog open with its
    /// field errors and yields nothing to send.
    pub fn begin_save(&mut self) -> Option<Mutation<E>> {
        let dialog = self.dialog.as_mut().filter(|d| !d.saving)?;
        match dialog.form.parse::<E>(E::FIELDS) {
            Ok(record) => {
                dialog.errors.clear();
                dialog.saving = true;
                Some(match dialog.mode {
                    DialogMode::Create => Mutation::Create(record),
                    DialogMode::Edit(id) => Mutation::Update(id, record),
                })
            }
            Err(errors) => {
                dialog.errors = errors;
                None
            }
        }
    }

    pub fn request_delete(&mut self, id: RecordId) {
        self.confirm_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.confirm_delete = None;
        }
    }

    pub fn begin_delete(&mut self) -> Option<Mutation<E>> {
        if self.deleting {
            return None;
        }
        let id = self.confirm_delete?;
        self.deleting = true;
        Some(Mutation::Delete(id))
    }

    /// Records the outcome of a mutation. Returns `true` when the list must be refetched.
    pub fn finish_mutation(&mut self, kind: MutationKind, result: Result<()>) -> bool {
        let succeeded = result.is_ok();
        let notification = match (kind, result) {
            (MutationKind::Create, Ok(())) => {
                info!("{} created", E::LABEL);
                Notification::success(catalog::created_message::<E>())
            }
            (MutationKind::Update, Ok(())) => {
                info!("{} updated", E::LABEL);
                Notification::success(catalog::updated_message::<E>())
            }
            (MutationKind::Delete, Ok(())) => {
                info!("{} deleted", E::LABEL);
                Notification::success(catalog::deleted_message::<E>())
            }
            (MutationKind::Create | MutationKind::Update, Err(e)) => {
                warn!("Saving {} failed: {}", E::NOUN, e);
                Notification::error(catalog::save_failed_message::<E>())
            }
            (MutationKind::Delete, Err(e)) => {
                warn!("Deleting {} failed: {}", E::NOUN, e);
                Notification::error(
                    e.server_message()
                        .map(str::to_string)
                        .unwrap_or_else(catalog::delete_failed_message::<E>),
                )
            }
        };

        match kind {
            MutationKind::Create | MutationKind::Update => self.dialog = None,
            MutationKind::Delete => {
                self.confirm_delete = None;
                self.deleting = false;
            }
        }
        self.notify(notification);
        succeeded
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Rendered table body: row id plus one cell per header.
    pub fn table_rows(&self) -> Vec<(Option<RecordId>, Vec<String>)> {
        self.rows()
            .iter()
            .map(|row| (row.id(), row.cells(&self.directory)))
            .collect()
    }

    pub async fn refresh(&mut self, client: &dyn ResourceClient<E>) {
        load_rows(self, client).await;
    }

    /// Loads the reference lists, then the rows.
    pub async fn mount(&mut self, gateway: &Gateway)
    where
        Gateway: HasResource<E>,
    {
        self.set_directory(Directory::load(gateway, E::LOOKUPS).await);
        let client = gateway.resource();
        self.refresh(client.as_ref()).await;
    }

    pub async fn save(&mut self, client: &dyn ResourceClient<E>) {
        let Some(mutation) = self.begin_save() else {
            return;
        };
        self.apply(mutation, client).await;
    }

    pub async fn confirm_delete(&mut self, client: &dyn ResourceClient<E>) {
        let Some(mutation) = self.begin_delete() else {
            return;
        };
        self.apply(mutation, client).await;
    }

    async fn apply(&mut self, mutation: Mutation<E>, client: &dyn ResourceClient<E>) {
        run_mutation(self, mutation, client).await;
    }
}

/// Holder of an `EntityScreen` that can lend it out between awaits.
pub trait ScreenCell<E> {
    fn update<R>(&mut self, f: impl FnOnce(&mut EntityScreen<E>) -> R) -> R;
}

impl<E> ScreenCell<E> for EntityScreen<E> {
    fn update<R>(&mut self, f: impl FnOnce(&mut EntityScreen<E>) -> R) -> R {
        f(self)
    }
}

pub async fn load_rows<E: Managed>(cell: &mut impl ScreenCell<E>, client: &dyn ResourceClient<E>) {
    cell.update(|screen| screen.begin_load());
    let result = client.find_all().await;
    cell.update(|screen| screen.finish_load(result));
}

/// Runs the write, reports it, and refetches the rows after a success.
pub async fn run_mutation<E: Managed>(
    cell: &mut impl ScreenCell<E>,
    mutation: Mutation<E>,
    client: &dyn ResourceClient<E>,
) {
    let result = mutation.run(client).await;
    let kind = mutation.kind();
    if cell.update(|screen| screen.finish_mutation(kind, result)) {
        load_rows(cell, client).await;
    }
}
