//! Cart commands.

use std::fmt::Write;

use bebek_core::{Cart, CartItem, MenuItemId, Storage, menu};

use super::CommandError;

/// Render the cart lines and totals.
#[must_use]
pub fn show(storage: &impl Storage) -> String {
    render(&Cart::load(storage))
}

/// Add one of a set.
///
/// # Errors
///
/// Returns [`CommandError::UnknownItem`] if the ID is not on the menu.
pub fn add(storage: &mut impl Storage, id: i32) -> Result<String, CommandError> {
    let set = menu::find(MenuItemId::new(id)).ok_or(CommandError::UnknownItem(id))?;

    let mut cart = Cart::load(&*storage);
    cart.add_item(CartItem::from(set));
    cart.save(storage);

    tracing::info!(id, quantity = cart.quantity_of(set.id), "Added to cart");
    Ok(render(&cart))
}

/// Set a line's quantity; zero or below removes it.
///
/// # Errors
///
/// Returns [`CommandError::UnknownItem`] if the ID is not on the menu and
/// [`CommandError::Cart`] if the quantity is above the per-line limit.
pub fn set(storage: &mut impl Storage, id: i32, quantity: i64) -> Result<String, CommandError> {
    let id = menu::find(MenuItemId::new(id))
        .ok_or(CommandError::UnknownItem(id))?
        .id;

    let mut cart = Cart::load(&*storage);
    cart.update_quantity(id, quantity)?;
    cart.save(storage);

    Ok(render(&cart))
}

/// Remove a line.
#[must_use]
pub fn remove(storage: &mut impl Storage, id: i32) -> String {
    let mut cart = Cart::load(&*storage);
    cart.remove_item(MenuItemId::new(id));
    cart.save(storage);

    render(&cart)
}

fn render(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Cart is empty.\n".to_owned();
    }

    let mut out = String::new();
    for item in cart.items() {
        let _ = writeln!(
            out,
            "  [{:>3}] {:<20} {:>3} x {:>10} {:>11}",
            item.id.as_i32(),
            item.name,
            item.quantity,
            item.price.to_string(),
            item.line_total().to_string()
        );
    }

    let totals = cart.totals();
    let _ = writeln!(out, "Items     {}", totals.item_count);
    let _ = writeln!(out, "Subtotal  {}", totals.subtotal);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bebek_core::MemoryStorage;

    use super::*;

    #[test]
    fn test_add_twice_bumps_quantity() {
        let mut storage = MemoryStorage::new();
        add(&mut storage, 1).unwrap();
        let text = add(&mut storage, 1).unwrap();

        let cart = Cart::load(&storage);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(MenuItemId::new(1)), 2);
        assert!(text.contains("Subtotal  RM 34.00"));
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let mut storage = MemoryStorage::new();
        assert!(matches!(
            add(&mut storage, 5),
            Err(CommandError::UnknownItem(5))
        ));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_set_zero_removes() {
        let mut storage = MemoryStorage::new();
        add(&mut storage, 102).unwrap();
        set(&mut storage, 102, 3).unwrap();
        assert_eq!(Cart::load(&storage).quantity_of(MenuItemId::new(102)), 3);

        let text = set(&mut storage, 102, 0).unwrap();
        assert!(Cart::load(&storage).is_empty());
        assert_eq!(text, "Cart is empty.\n");
    }

    #[test]
    fn test_set_above_limit_is_rejected() {
        let mut storage = MemoryStorage::new();
        add(&mut storage, 1).unwrap();
        add(&mut storage, 2).unwrap();

        let err = set(&mut storage, 1, i64::from(u32::MAX)).unwrap_err();
        assert!(matches!(err, CommandError::Cart(_)));
        assert!(err.to_string().starts_with("At most 99"));

        let text = show(&storage);
        assert!(text.contains("Items     2"));
    }

    #[test]
    fn test_remove() {
        let mut storage = MemoryStorage::new();
        add(&mut storage, 1).unwrap();
        add(&mut storage, 2).unwrap();
        remove(&mut storage, 1);

        let cart = Cart::load(&storage);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id, MenuItemId::new(2));
    }

    #[test]
    fn test_show_empty() {
        assert_eq!(show(&MemoryStorage::new()), "Cart is empty.\n");
    }
}
