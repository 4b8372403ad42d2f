use crate::model::IceCream;
use pattern_framework::{NotifyError, Observer, ObserverRegistry, Priced};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::rc::Rc;
use tracing::debug;

/// Type-safe identifier for an item within one order.
///
/// Two identical cones added to the same order get different ids, so removal
/// targets one specific item rather than "any equal item".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// Anything that wants to hear about an order's status changes.
pub type OrderObserver = dyn Observer<Order>;

/// Represents a customer order.
///
/// # Patterns
/// An `Order` is both the **aggregate** that owns its ice creams and the
/// **subject** of the Observer pattern: [`Order::set_status`] notifies every
/// registered [`OrderObserver`] before returning.
///
/// It also implements [`Priced`], so it can sit at the bottom of a decorator
/// chain (see [`crate::decorators`]).
#[derive(Debug)]
pub struct Order {
    items: Vec<(ItemId, Box<dyn IceCream>)>,
    next_item_id: u64,
    status: Option<String>,
    observers: ObserverRegistry<Order>,
    description: Option<String>,
}

impl Order {
    /// What [`Priced::description`] reports for an order built without a description.
    pub const UNSET_DESCRIPTION: &'static str = "null";

    /// Creates an empty order: no items, no observers, status unset.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_item_id: 1,
            status: None,
            observers: ObserverRegistry::new(),
            description: None,
        }
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    // --- Items ---

    /// Appends `item` and returns the id it was filed under.
    pub fn add_item(&mut self, item: Box<dyn IceCream>) -> ItemId {
        let id = ItemId::from(self.next_item_id);
        self.next_item_id += 1;
        debug!(item_id = %id, description = item.description(), "Item added");
        self.items.push((id, item));
        id
    }

    /// Removes the item filed under `id`, if it is still in the order.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Box<dyn IceCream>> {
        let index = self.items.iter().position(|(item_id, _)| *item_id == id)?;
        let (_, item) = self.items.remove(index);
        debug!(item_id = %id, remaining = self.items.len(), "Item removed");
        Some(item)
    }

    pub fn item(&self, id: ItemId) -> Option<&dyn IceCream> {
        self.items
            .iter()
            .find(|(item_id, _)| *item_id == id)
            .map(|(_, item)| item.as_ref())
    }

    /// Mutable access, e.g. to pick a flavor after the item was added.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut (dyn IceCream + 'static)> {
        self.items
            .iter_mut()
            .find(|(item_id, _)| *item_id == id)
            .map(|(_, item)| item.as_mut())
    }

    /// Items in the order they were added.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &dyn IceCream)> + '_ {
        self.items.iter().map(|(id, item)| (*id, item.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // --- Observers ---

    pub fn add_observer(&mut self, observer: Rc<OrderObserver>) {
        self.observers.add(observer);
    }

    /// Unregisters `observer`; unknown handles are ignored.
    pub fn remove_observer(&mut self, observer: &Rc<OrderObserver>) {
        if !self.observers.remove(observer) {
            debug!("remove_observer: handle was not registered");
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // --- Status ---

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Overwrites the status, then notifies every observer in registration order.
    ///
    /// # Errors
    /// Returns the first observer failure. Observers registered after the failing
    /// one are not notified; the new status is kept either way.
    pub fn set_status(&mut self, status: impl Into<String>) -> Result<(), NotifyError> {
        let status = status.into();
        debug!(%status, observers = self.observers.len(), "Status changed");
        self.status = Some(status);
        self.observers.notify(self)
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Priced for Order {
    /// The base description given to the builder, or `null` when none was.
    fn description(&self) -> String {
        self.description.as_deref().unwrap_or(Self::UNSET_DESCRIPTION).to_string()
    }

    /// Sum of item costs; `0.0` for an empty order.
    fn calculate_total(&self) -> f64 {
        self.items.iter().map(|(_, item)| item.cost()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BasicIceCream;
    use pattern_framework::mock::MockObserver;

    fn cone() -> Box<dyn IceCream> {
        Box::new(BasicIceCream::new())
    }

    #[test]
    fn test_empty_order() {
        let order = Order::new();
        assert_eq!(order.calculate_total(), 0.0);
        assert_eq!(order.status(), None);
        assert_eq!(order.description(), "null");
        assert!(order.is_empty());
    }

    #[test]
    fn test_item_ids_are_sequential() {
        let mut order = Order::new();
        let first = order.add_item(cone());
        let second = order.add_item(cone());
        assert_eq!(first, ItemId(1));
        assert_eq!(second, ItemId(2));
        assert_eq!(second.to_string(), "item_2");
    }

    #[test]
    fn test_item_ids_continue_past_u32_range() {
        let mut order = Order::new();
        order.next_item_id = u64::from(u32::MAX);

        let last_small = order.add_item(cone());
        let first_large = order.add_item(cone());

        assert_eq!(last_small, ItemId(u64::from(u32::MAX)));
        assert_eq!(first_large, ItemId(u64::from(u32::MAX) + 1));
        assert!(order.remove_item(last_small).is_some());
        assert!(order.item(first_large).is_some());
    }

    #[test]
    fn test_remove_item_targets_identity() {
        let mut order = Order::new();
        let first = order.add_item(cone());
        let second = order.add_item(cone());

        assert!(order.remove_item(first).is_some());
        assert_eq!(order.items().map(|(id, _)| id).collect::<Vec<_>>(), vec![second]);
        // Already gone: silent no-op.
        assert!(order.remove_item(first).is_none());
        assert_eq!(order.calculate_total(), 2.0);
    }

    #[test]
    fn test_item_mut_changes_choices() {
        let mut order = Order::new();
        let id = order.add_item(cone());
        if let Some(item) = order.item_mut(id) {
            item.set_flavor("Mint".to_string());
            item.add_topping("Chocolate Chips".to_string());
        }

        let item = order.item(id).unwrap();
        assert_eq!(item.flavor(), Some("Mint"));
        assert_eq!(item.toppings(), ["Chocolate Chips"]);
        assert!(order.item(ItemId(99)).is_none());
    }

    #[test]
    fn test_observer_sees_new_status() {
        let mock = Rc::new(MockObserver::with_snapshot(|o: &Order| {
            o.status().map(str::to_owned)
        }));
        mock.expect_update().return_ok();

        let mut order = Order::new();
        order.add_observer(mock.clone());
        order.set_status("Placed").unwrap();

        assert_eq!(order.status(), Some("Placed"));
        assert_eq!(mock.calls(), vec![Some("Placed".to_string())]);
        mock.verify();
    }

    #[test]
    fn test_removed_observer_is_not_notified() {
        let mock = Rc::new(MockObserver::<Order>::new());
        let handle: Rc<OrderObserver> = mock.clone();

        let mut order = Order::new();
        order.add_observer(handle.clone());
        order.remove_observer(&handle);
        // Removing twice is harmless.
        order.remove_observer(&handle);

        order.set_status("Placed").unwrap();
        assert_eq!(order.observer_count(), 0);
        assert_eq!(mock.call_count(), 0);
    }
}
