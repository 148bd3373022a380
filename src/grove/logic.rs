//! Study Grove economy rules as pure state transitions.
//!
//! Every function validates first and mutates only on success, so a
//! rejected call leaves the player exactly as it was.

use super::catalog::{self, Category, CatalogItem};
use super::error::Rejection;
use super::state::{CharacterId, PlayerState, PET_HUNGER_MAX};

// ── Shop ───────────────────────────────────────────────────────────────

/// Buy one catalog item.
///
/// Checks run in order: the item exists, a decor item is not owned yet,
/// the player can afford it.
pub fn purchase(
    state: &mut PlayerState,
    item_id: &str,
) -> Result<&'static CatalogItem, Rejection> {
    let item = catalog::lookup(item_id)?;

    if item.category == Category::Decor && state.owns(item.id) {
        return Err(Rejection::AlreadyOwned(item.name));
    }
    let price = u64::from(item.price);
    if state.currency < price {
        return Err(Rejection::InsufficientFunds {
            price: item.price,
            currency: state.currency,
        });
    }

    state.currency -= price;
    match item.category {
        Category::Decor => state.inventory.push(item.id),
        Category::Pet => {
            // A new adoption replaces the previous pet; food stays.
            state.pet_type = item.pet;
            state.pet_hunger = 0;
        }
        Category::Food => state.pet_food += 1,
    }
    Ok(item)
}

// ── Pet ────────────────────────────────────────────────────────────────

pub fn feed_pet(state: &mut PlayerState) -> Result<(), Rejection> {
    if state.pet_type.is_none() {
        return Err(Rejection::NoPet);
    }
    if state.pet_food == 0 {
        return Err(Rejection::NoFood);
    }
    if state.pet_hunger >= PET_HUNGER_MAX {
        return Err(Rejection::PetFull);
    }
    state.pet_food -= 1;
    state.pet_hunger += 1;
    Ok(())
}

// ── Study reward ───────────────────────────────────────────────────────

/// Pay out a finished session. Only the study timer's completion calls this.
pub(super) fn apply_study_reward(state: &mut PlayerState, amount: u32) {
    let amount = u64::from(amount);
    state.currency += amount;
    state.total_minutes_studied += amount;
    state.completed_sessions += 1;
}

// ── Character ──────────────────────────────────────────────────────────

pub fn select_character(state: &mut PlayerState, id: &str) -> Result<CharacterId, Rejection> {
    let character = CharacterId::from_id(id)?;
    state.character = character;
    Ok(character)
}
