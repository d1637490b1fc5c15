//! Checkout command.

use bebek_core::preferences::find_bank;
use bebek_core::{Checkout, OrderPreferences, OrderType, PaymentMethod, Storage};
use chrono::{DateTime, FixedOffset, Utc};
use rand::Rng;

use super::{CommandError, receipt};

/// Selections given on the command line. `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct Selections {
    pub order_type: Option<OrderType>,
    pub payment: Option<PaymentMethod>,
    pub bank: Option<String>,
}

/// Persist the selections, then confirm the order.
///
/// Selections are saved even when a guard rejects the order, so a retry
/// only needs the missing piece.
///
/// # Errors
///
/// Returns an error for delivery, an unknown bank, or a failed guard.
pub fn run<R: Rng>(
    storage: &mut impl Storage,
    selections: Selections,
    rng: &mut R,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Result<String, CommandError> {
    let mut preferences = OrderPreferences::load(&*storage);

    if let Some(order_type) = selections.order_type {
        if !order_type.is_available() {
            return Err(CommandError::DeliveryUnavailable);
        }
        preferences.order_type = order_type;
    }
    if let Some(method) = selections.payment {
        preferences.payment_method = Some(method);
    }
    if let Some(raw) = selections.bank {
        let bank = find_bank(&raw).ok_or(CommandError::UnknownBank(raw))?;
        preferences.selected_bank = Some(bank.name.to_owned());
    }
    preferences.save(storage);

    let record = Checkout::load(&*storage).confirm(storage, rng, now)?;
    Ok(receipt::render(&record, offset))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bebek_core::storage::keys;
    use bebek_core::{Cart, CheckoutError, MemoryStorage, ReceiptRecord};
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::commands::cart;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 7, 4, 0).unwrap()
    }

    fn myt() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    #[test]
    fn test_cash_checkout_writes_receipt_and_clears_cart() {
        let mut storage = MemoryStorage::new();
        cart::add(&mut storage, 1).unwrap();
        cart::add(&mut storage, 1).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let text = run(&mut storage, Selections::default(), &mut rng, now(), myt()).unwrap();

        assert!(storage.get(keys::CART).is_none());
        let record = ReceiptRecord::load(&storage).unwrap();
        assert_eq!(record.payment, "Cash at outlet");
        assert!(text.contains(&record.code.to_string()));
        assert!(text.contains("RM 34.00"));
        assert!(text.contains("19 Oct 2026, 3:04 pm"));
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let mut storage = MemoryStorage::new();
        let mut rng = StdRng::seed_from_u64(7);

        let err = run(&mut storage, Selections::default(), &mut rng, now(), myt()).unwrap_err();
        assert!(matches!(err, CommandError::Checkout(CheckoutError::EmptyCart)));
        assert!(storage.get(keys::RECEIPT).is_none());
    }

    #[test]
    fn test_fpx_needs_bank_then_succeeds() {
        let mut storage = MemoryStorage::new();
        cart::add(&mut storage, 103).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let fpx = Selections {
            payment: Some(PaymentMethod::Fpx),
            ..Selections::default()
        };
        let err = run(&mut storage, fpx, &mut rng, now(), myt()).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Checkout(CheckoutError::MissingBankSelection)
        ));
        assert!(!Cart::load(&storage).is_empty());
        assert_eq!(storage.get(keys::PAYMENT_METHOD).as_deref(), Some("fpx"));

        let bank = Selections {
            bank: Some("Bank Islam".to_string()),
            ..Selections::default()
        };
        let text = run(&mut storage, bank, &mut rng, now(), myt()).unwrap();
        assert!(text.contains("FPX (Bank Islam)"));
    }

    #[test]
    fn test_delivery_and_unknown_bank_are_rejected() {
        let mut storage = MemoryStorage::new();
        let mut rng = StdRng::seed_from_u64(7);

        let delivery = Selections {
            order_type: Some(OrderType::Delivery),
            ..Selections::default()
        };
        assert!(matches!(
            run(&mut storage, delivery, &mut rng, now(), myt()),
            Err(CommandError::DeliveryUnavailable)
        ));

        let bank = Selections {
            bank: Some("Swiss Bank".to_string()),
            ..Selections::default()
        };
        assert!(matches!(
            run(&mut storage, bank, &mut rng, now(), myt()),
            Err(CommandError::UnknownBank(_))
        ));
        assert!(storage.is_empty());
    }
}
