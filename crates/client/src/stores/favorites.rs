//! Favorites store, persisted through the storage module.

use dioxus::prelude::*;
use skycast_shared::{FavoriteCity, FavoritesList};

use crate::storage;

const STORAGE_KEY: &str = "skycast_favorites";

/// Saved cities, loaded from storage on first access. Mutate only through
/// [`add_favorite`] and [`remove_favorite`] so every change is persisted.
pub static FAVORITES: GlobalSignal<FavoritesList> =
    Signal::global(|| storage::load(STORAGE_KEY).unwrap_or_default());

/// Save a city. Returns `false` if it was already saved.
pub fn add_favorite(city: FavoriteCity) -> bool {
    let added = FAVORITES.write().add(city);
    if added {
        persist();
    }
    added
}

/// Remove a saved city by id, returning the removed entry.
pub fn remove_favorite(id: &str) -> Option<FavoriteCity> {
    let removed = FAVORITES.write().remove(id);
    if removed.is_some() {
        persist();
    }
    removed
}

pub fn is_favorite(id: &str) -> bool {
    FAVORITES.read().contains(id)
}

fn persist() {
    storage::save(STORAGE_KEY, &*FAVORITES.read());
}
