//! Shop catalog: every purchasable decoration, pet and food item.

use serde::Serialize;

use super::error::Rejection;
use super::state::PlayerState;

/// Currency glyph shown next to every price.
pub const CURRENCY_ICON: &str = "🍄";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Category {
    Decor,
    Pet,
    Food,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PetKind {
    Cat,
    Dog,
}

impl PetKind {
    pub fn name(&self) -> &'static str {
        match self {
            PetKind::Cat => "Cat",
            PetKind::Dog => "Dog",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            PetKind::Cat => "🐱",
            PetKind::Dog => "🐶",
        }
    }
}

/// A purchasable entry. `pet` is `Some` exactly when `category` is `Pet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub glyph: &'static str,
    pub category: Category,
    pub pet: Option<PetKind>,
}

/// Shop contents in display order.
pub const CATALOG: [CatalogItem; 7] = [
    CatalogItem {
        id: "pet_cat",
        name: "Cat Companion",
        price: 1,
        glyph: "🐱",
        category: Category::Pet,
        pet: Some(PetKind::Cat),
    },
    CatalogItem {
        id: "pet_dog",
        name: "Dog Companion",
        price: 1,
        glyph: "🐶",
        category: Category::Pet,
        pet: Some(PetKind::Dog),
    },
    CatalogItem {
        id: "pet_snack",
        name: "Pet Snack",
        price: 1,
        glyph: "🍖",
        category: Category::Food,
        pet: None,
    },
    CatalogItem {
        id: "flower_hat",
        name: "Flower Hat",
        price: 10,
        glyph: "🌼",
        category: Category::Decor,
        pet: None,
    },
    CatalogItem {
        id: "mushroom_lamp",
        name: "Mushroom Lamp",
        price: 20,
        glyph: "🍄",
        category: Category::Decor,
        pet: None,
    },
    CatalogItem {
        id: "leaf_rug",
        name: "Leaf Rug",
        price: 12,
        glyph: "🍃",
        category: Category::Decor,
        pet: None,
    },
    CatalogItem {
        id: "tea_set",
        name: "Tea Set",
        price: 15,
        glyph: "🍵",
        category: Category::Decor,
        pet: None,
    },
];

pub fn list_all() -> &'static [CatalogItem] {
    &CATALOG
}

pub fn lookup(id: &str) -> Result<&'static CatalogItem, Rejection> {
    CATALOG
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| Rejection::NotFound(id.to_string()))
}

/// Whether the shop should show this entry as already owned.
///
/// Food is never owned. A pet counts as owned while it is the current pet.
pub fn is_owned(item: &CatalogItem, player: &PlayerState) -> bool {
    match item.category {
        Category::Decor => player.owns(item.id),
        Category::Pet => item.pet.is_some() && player.pet_type == item.pet,
        Category::Food => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(lookup("leaf_rug").map(|i| i.price), Ok(12));
        assert_eq!(
            lookup("dragon_egg"),
            Err(Rejection::NotFound("dragon_egg".into()))
        );
    }

    #[test]
    fn list_all_keeps_declared_order() {
        let ids: Vec<&str> = list_all().iter().map(|i| i.id).collect();
        assert_eq!(
            ids,
            vec![
                "pet_cat",
                "pet_dog",
                "pet_snack",
                "flower_hat",
                "mushroom_lamp",
                "leaf_rug",
                "tea_set"
            ]
        );
    }

    #[test]
    fn catalog_invariants() {
        for item in list_all() {
            assert!(item.price > 0, "{} must have a positive price", item.id);
            assert_eq!(
                item.pet.is_some(),
                item.category == Category::Pet,
                "{} pet kind must be present iff category is pet",
                item.id
            );
        }
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn ownership_labels() {
        let mut player = PlayerState::new();
        let cat = lookup("pet_cat").unwrap();
        let dog = lookup("pet_dog").unwrap();
        let snack = lookup("pet_snack").unwrap();
        let rug = lookup("leaf_rug").unwrap();

        assert!(!is_owned(cat, &player));
        assert!(!is_owned(rug, &player));

        player.pet_type = Some(PetKind::Cat);
        player.inventory.push("leaf_rug");
        player.pet_food = 3;

        assert!(is_owned(cat, &player));
        assert!(!is_owned(dog, &player));
        assert!(is_owned(rug, &player));
        assert!(!is_owned(snack, &player));
    }
}
