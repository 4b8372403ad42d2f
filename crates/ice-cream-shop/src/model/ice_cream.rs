use std::fmt::Debug;

/// A product that can be added to an [`Order`](crate::model::Order).
///
/// Description and cost are fixed per variant; flavor and toppings are the
/// customer's choices. Every operation is total: a missing flavor or an empty
/// topping list is never an error.
pub trait IceCream: Debug {
    fn description(&self) -> &str;

    fn cost(&self) -> f64;

    fn flavor(&self) -> Option<&str>;

    /// Toppings in the order they were added.
    fn toppings(&self) -> &[String];

    /// Overwrites any previously chosen flavor.
    fn set_flavor(&mut self, flavor: String);

    /// Appends a topping. Duplicates are kept.
    fn add_topping(&mut self, topping: String);
}

/// The plain cone: "Basic Ice Cream" at 2.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicIceCream {
    flavor: Option<String>,
    toppings: Vec<String>,
}

impl BasicIceCream {
    pub const DESCRIPTION: &'static str = "Basic Ice Cream";
    pub const COST: f64 = 2.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flavor while building, e.g. `BasicIceCream::new().with_flavor("Vanilla")`.
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.set_flavor(flavor.into());
        self
    }

    pub fn with_topping(mut self, topping: impl Into<String>) -> Self {
        self.add_topping(topping.into());
        self
    }
}

impl IceCream for BasicIceCream {
    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn cost(&self) -> f64 {
        Self::COST
    }

    fn flavor(&self) -> Option<&str> {
        self.flavor.as_deref()
    }

    fn toppings(&self) -> &[String] {
        &self.toppings
    }

    fn set_flavor(&mut self, flavor: String) {
        self.flavor = Some(flavor);
    }

    fn add_topping(&mut self, topping: String) {
        self.toppings.push(topping);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ice_cream_constants() {
        let cone = BasicIceCream::new();
        assert_eq!(cone.description(), "Basic Ice Cream");
        assert_eq!(cone.cost(), 2.0);
        assert_eq!(cone.flavor(), None);
        assert!(cone.toppings().is_empty());
    }

    #[test]
    fn test_set_flavor_overwrites() {
        let mut cone = BasicIceCream::new().with_flavor("Vanilla");
        cone.set_flavor("Pistachio".to_string());
        assert_eq!(cone.flavor(), Some("Pistachio"));
    }

    #[test]
    fn test_toppings_keep_order_and_duplicates() {
        let cone = BasicIceCream::new()
            .with_topping("Sprinkles")
            .with_topping("Fudge")
            .with_topping("Sprinkles");
        assert_eq!(cone.toppings(), ["Sprinkles", "Fudge", "Sprinkles"]);
        // Choices never change the price.
        assert_eq!(cone.cost(), 2.0);
    }
}
