//! Menu administration: validated create, update, and delete.

use backoffice_core::error::CoreError;
use backoffice_core::hierarchy::{validate_reparent, MAX_ANCESTRY_DEPTH};
use backoffice_core::menu::{validate_present_fields, validate_required_fields, ROOT_PARENT_ID};
use backoffice_core::menu_ids::MenuIdSet;
use backoffice_core::types::DbId;

use crate::models::menu::{CreateMenu, Menu, UpdateMenu};
use crate::store::{MenuStore, StoreResult};

/// Reject access to a menu outside the caller's permitted set.
pub fn ensure_permitted(permitted: &MenuIdSet, menu_id: DbId) -> Result<(), CoreError> {
    if permitted.contains(menu_id) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Menu {menu_id} is not in your authorization group"
        )))
    }
}

/// Validate and insert a new menu.
///
/// Name, module, and url are required; the parent, when given, must be the
/// root or an existing menu. The name is stored trimmed so that name lookups
/// match it.
pub async fn create_menu<S>(store: &S, input: &CreateMenu) -> StoreResult<Menu>
where
    S: MenuStore + ?Sized,
{
    validate_required_fields(&input.name, &input.module, &input.url)?;
    if let Some(parent_id) = input.parent_id {
        ensure_parent_exists(store, parent_id).await?;
    }
    let input = CreateMenu {
        name: input.name.trim().to_string(),
        ..input.clone()
    };
    store.insert(&input).await
}

/// Validate and apply a partial update.
///
/// Present string fields must be non-blank and a new name is trimmed. A
/// patch with no present field is rejected with [`CoreError::EmptyUpdate`], and a new parent must exist
/// and must not be the menu itself or one of its descendants. Returns
/// `None` if the menu does not exist.
pub async fn update_menu<S>(store: &S, id: DbId, input: &UpdateMenu) -> StoreResult<Option<Menu>>
where
    S: MenuStore + ?Sized,
{
    validate_present_fields(
        input.name.as_deref(),
        input.module.as_deref(),
        input.url.as_deref(),
    )?;
    if input.is_empty() {
        return Err(CoreError::EmptyUpdate.into());
    }

    if let Some(new_parent) = input.parent_id {
        ensure_parent_exists(store, new_parent).await?;
        let chain = ancestry(store, new_parent).await?;
        validate_reparent(id, new_parent, &chain)?;
    }

    let input = UpdateMenu {
        name: input.name.as_deref().map(|name| name.trim().to_string()),
        ..input.clone()
    };
    store.update(id, &input).await
}

/// Delete a menu. Returns `true` if it existed.
///
/// Children are not removed or reparented.
pub async fn delete_menu<S>(store: &S, id: DbId) -> StoreResult<bool>
where
    S: MenuStore + ?Sized,
{
    store.delete(id).await
}

async fn ensure_parent_exists<S>(store: &S, parent_id: DbId) -> StoreResult<()>
where
    S: MenuStore + ?Sized,
{
    if parent_id == ROOT_PARENT_ID {
        return Ok(());
    }
    if parent_id < 0 || store.find_by_id(parent_id).await?.is_none() {
        return Err(
            CoreError::Validation(format!("Parent menu {parent_id} does not exist")).into(),
        );
    }
    Ok(())
}

/// `start` followed by its ancestors, stopping at the root, at a missing
/// menu, at an already-visited id, or one past [`MAX_ANCESTRY_DEPTH`].
async fn ancestry<S>(store: &S, start: DbId) -> StoreResult<Vec<DbId>>
where
    S: MenuStore + ?Sized,
{
    let mut chain = Vec::new();
    let mut current = start;
    while current != ROOT_PARENT_ID && chain.len() <= MAX_ANCESTRY_DEPTH {
        if chain.contains(&current) {
            break;
        }
        chain.push(current);
        match store.find_by_id(current).await? {
            Some(menu) => current = menu.parent_id,
            None => break,
        }
    }
    Ok(chain)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
