//! View drivers
//!
//! Run one view action end-to-end against a [`BlogApi`]: begin, await the
//! backend, finish. Hosts that can hold `&mut` across an await (the terminal
//! front-end, tests) use these; the Leptos front-end calls the same
//! begin/finish pairs around `spawn_local`.

use crate::api::BlogApi;
use crate::view::{DeleteOutcome, DetailView, FormError, FormView, ListView, SubmitOutcome};

/// Populate an edit form. No-op in create mode.
pub async fn load_form<A: BlogApi>(view: &mut FormView<A::Upload>, api: &A) {
    if let Some((ticket, id)) = view.begin_load() {
        let result = api.get_post(&id).await;
        view.finish_load(ticket, result);
    }
}

/// Validate and submit the form.
pub async fn submit_form<A>(
    view: &mut FormView<A::Upload>,
    api: &A,
) -> Result<SubmitOutcome, FormError>
where
    A: BlogApi,
    A::Upload: Clone,
{
    let (ticket, submission) = view.begin_submit()?;
    let result = api.save_post(submission).await;
    Ok(view.finish_submit(ticket, result))
}

pub async fn load_list<A: BlogApi>(view: &mut ListView, api: &A) {
    let ticket = view.begin_load();
    let result = api.list_posts().await;
    view.finish_load(ticket, result);
}

/// Send the confirmed delete. `None` when no confirmation is open.
pub async fn confirm_delete<A: BlogApi>(view: &mut ListView, api: &A) -> Option<DeleteOutcome> {
    let (ticket, id) = view.confirm_delete()?;
    let result = api.delete_post(&id).await;
    Some(view.finish_delete(ticket, result))
}

pub async fn load_detail<A: BlogApi>(view: &mut DetailView, api: &A) {
    if let Some((ticket, id)) = view.begin_load() {
        let result = api.get_post(&id).await;
        view.finish_load(ticket, result);
    }
}
