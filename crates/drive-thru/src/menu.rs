//! # Menu
//!
//! The static demo menu and the name-keyed price lookup used when an order
//! line arrives without an explicit price. The menu is injected into the
//! order actor as its context, so price resolution happens exactly once, at
//! creation time.

/// One purchasable item.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: f64,
    pub description: &'static str,
}

/// A named group of menu items.
#[derive(Debug, Clone)]
pub struct MenuCategory {
    pub category: &'static str,
    pub items: Vec<MenuItem>,
}

/// The price table consulted for order lines without an explicit price.
#[derive(Debug, Clone)]
pub struct Menu {
    categories: Vec<MenuCategory>,
}

impl Menu {
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    /// The standard demo menu.
    pub fn standard() -> Self {
        Self::new(vec![
            MenuCategory {
                category: "Burgers",
                items: vec![
                    MenuItem {
                        name: "Gemini Classic",
                        price: 5.99,
                        description: "1/4lb Grass-fed Beef, Aged Cheddar, Heirloom Tomato, Butter Lettuce, Secret Gemini Sauce",
                    },
                    MenuItem {
                        name: "Double Nebula",
                        price: 7.99,
                        description: "Two 1/4lb Beef Patties, Double Smoked Bacon, Crispy Onion Rings, Pepper Jack Cheese",
                    },
                ],
            },
            MenuCategory {
                category: "Sides",
                items: vec![
                    MenuItem {
                        name: "Asteroid Fries",
                        price: 2.99,
                        description: "Hand-cut Russet Potatoes, Himalayan Sea Salt, Rosemary Infusion",
                    },
                    MenuItem {
                        name: "Onion Rings",
                        price: 3.49,
                        description: "Jumbo Sweet Onions, Craft Beer Batter, Panko Crust",
                    },
                ],
            },
            MenuCategory {
                category: "Drinks",
                items: vec![
                    MenuItem {
                        name: "Galaxy Shake",
                        price: 4.99,
                        description: "A2 Organic Milk, Madagascar Vanilla Bean, Edible Silver Stars",
                    },
                    MenuItem {
                        name: "Nebula Soda",
                        price: 1.99,
                        description: "Sparkling Mineral Water, Natural Black Cherry Extract",
                    },
                ],
            },
        ])
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Case-insensitive price lookup by item name.
    ///
    /// Returns `None` for names not on the menu; callers treat that as a
    /// zero-priced line, not an error.
    pub fn price_for(&self, name: &str) -> Option<f64> {
        self.categories.iter().find_map(|category| {
            category
                .items
                .iter()
                .find(|item| item.name.eq_ignore_ascii_case(name))
                .map(|item| item.price)
        })
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let menu = Menu::standard();
        assert_eq!(menu.price_for("Gemini Classic"), Some(5.99));
        assert_eq!(menu.price_for("gemini classic"), Some(5.99));
        assert_eq!(menu.price_for("GALAXY SHAKE"), Some(4.99));
    }

    #[test]
    fn unknown_name_has_no_price() {
        let menu = Menu::standard();
        assert_eq!(menu.price_for("Quantum Quesadilla"), None);
    }
}
