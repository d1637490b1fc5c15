//! End-to-end ordering flow: menu, cart, checkout and receipt.

use axum::http::StatusCode;
use bebek_core::MAX_QUANTITY;
use bebek_integration_tests::TestClient;
use bebek_storefront::config::StorefrontConfig;

/// Find the first `BTG-` code in the page and check it has five digits.
fn order_code(body: &str) -> String {
    let start = body.find("BTG-").unwrap_or_else(|| panic!("no order code in page"));
    let code: String = body[start..].chars().take(9).collect();
    let digits = &code[4..];
    assert_eq!(digits.len(), 5, "code {code}");
    assert!(digits.chars().all(|c| c.is_ascii_digit()), "code {code}");
    code
}

async fn add(client: &mut TestClient, id: &str) {
    client
        .post_form("/cart/add", &[("id", id)])
        .await
        .assert_redirect("/menu");
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();
    let response = client.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_landing_page_links_to_menu() {
    let mut client = TestClient::new();
    let response = client.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Featured Dishes"));
    assert!(response.body.contains("href=\"/menu\""));
    assert!(response.body.contains("<span class=\"cart-count\">0</span>"));
}

#[tokio::test]
async fn test_menu_lists_catalogue() {
    let mut client = TestClient::new();
    let response = client.get("/menu").await;

    assert_eq!(response.status, StatusCode::OK);
    for name in ["Set Bebek A", "Set Bebek D", "Set Ayam Kampung A", "Set Ayam Kampung D"] {
        assert!(response.body.contains(name), "missing {name}");
    }
    assert!(response.body.contains("RM 145.00"));
    assert!(response.body.contains("Your cart is empty."));
}

// =============================================================================
// Cart
// =============================================================================

#[tokio::test]
async fn test_adding_same_set_twice_bumps_quantity() {
    let mut client = TestClient::new();
    add(&mut client, "1").await;
    add(&mut client, "1").await;

    let menu = client.get("/menu").await;
    assert!(menu.body.contains("(2 in cart)"));
    assert_eq!(menu.body.matches("class=\"cart-line\"").count(), 1);
    assert!(menu.body.contains("RM 34.00"));

    let home = client.get("/").await;
    assert!(home.body.contains("<span class=\"cart-count\">2</span>"));
}

#[tokio::test]
async fn test_unknown_set_is_rejected() {
    let mut client = TestClient::new();
    let response = client.post_form("/cart/add", &[("id", "999")]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quantity_zero_or_below_removes_line() {
    let mut client = TestClient::new();
    add(&mut client, "101").await;
    add(&mut client, "2").await;

    client
        .post_form("/cart/update", &[("id", "101"), ("quantity", "0")])
        .await
        .assert_redirect("/menu");
    client
        .post_form("/cart/update", &[("id", "2"), ("quantity", "-3")])
        .await
        .assert_redirect("/menu");

    let menu = client.get("/menu").await;
    assert!(menu.body.contains("Your cart is empty."));
}

#[tokio::test]
async fn test_update_and_remove() {
    let mut client = TestClient::new();
    add(&mut client, "3").await;
    add(&mut client, "4").await;

    client
        .post_form("/cart/update", &[("id", "3"), ("quantity", "4")])
        .await
        .assert_redirect("/menu");
    client
        .post_form("/cart/remove", &[("id", "4")])
        .await
        .assert_redirect("/menu");

    let menu = client.get("/menu").await;
    assert_eq!(menu.body.matches("class=\"cart-line\"").count(), 1);
    // 4 x RM 19
    assert!(menu.body.contains("RM 76.00"));
}

#[tokio::test]
async fn test_oversized_quantities_are_rejected_and_pages_still_render() {
    let mut client = TestClient::new();
    add(&mut client, "1").await;
    add(&mut client, "2").await;

    for id in ["1", "2"] {
        let response = client
            .post_form("/cart/update", &[("id", id), ("quantity", "4294967295")])
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    let menu = client.get("/menu").await;
    assert_eq!(menu.status, StatusCode::OK);
    assert!(menu.body.contains("RM 35.00"));

    let max = MAX_QUANTITY.to_string();
    for id in ["1", "2"] {
        client
            .post_form("/cart/update", &[("id", id), ("quantity", max.as_str())])
            .await
            .assert_redirect("/menu");
    }
    // Already full: stays at the limit
    add(&mut client, "1").await;

    let menu = client.get("/menu").await;
    assert_eq!(menu.status, StatusCode::OK);
    assert!(menu.body.contains(&format!("({max} in cart)")));
    assert!(menu.body.contains(" disabled>+</button>"));
    assert_eq!(client.get("/checkout").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_proceed_requires_items_and_acknowledgement() {
    let mut client = TestClient::new();

    client
        .post_form("/cart/proceed", &[("acknowledged", "yes")])
        .await
        .assert_redirect("/menu");
    let menu = client.get("/menu").await;
    assert!(menu.body.contains("Cart is empty. Add your sets again from the menu."));

    add(&mut client, "1").await;
    client
        .post_form("/cart/proceed", &[])
        .await
        .assert_redirect("/menu");
    let menu = client.get("/menu").await;
    assert!(menu.body.contains("Tick the box"));

    client
        .post_form("/cart/proceed", &[("acknowledged", "yes")])
        .await
        .assert_redirect("/checkout");
}

#[tokio::test]
async fn test_flash_is_shown_once() {
    let mut client = TestClient::new();
    client
        .post_form("/cart/proceed", &[])
        .await
        .assert_redirect("/menu");

    assert!(client.get("/menu").await.body.contains("role=\"alert\""));
    assert!(!client.get("/menu").await.body.contains("role=\"alert\""));
}

// =============================================================================
// Checkout guards
// =============================================================================

#[tokio::test]
async fn test_empty_cart_checkout_redirects_to_menu_without_receipt() {
    let mut client = TestClient::new();

    client
        .post_form(
            "/checkout/pay",
            &[("order_type", "pickup"), ("payment_method", "cash")],
        )
        .await
        .assert_redirect("/menu");

    let menu = client.get("/menu").await;
    assert!(menu.body.contains("Cart is empty. Add your sets again from the menu."));
    client.get("/receipt").await.assert_redirect("/menu");
}

#[tokio::test]
async fn test_fpx_without_bank_is_rejected() {
    let mut client = TestClient::new();
    add(&mut client, "1").await;

    client
        .post_form(
            "/checkout/pay",
            &[("order_type", "pickup"), ("payment_method", "fpx"), ("bank", "")],
        )
        .await
        .assert_redirect("/checkout");

    let checkout = client.get("/checkout").await;
    assert!(checkout.body.contains("Please choose a bank for FPX payment."));
    assert!(checkout.body.contains("Set Bebek A"));
    client.get("/receipt").await.assert_redirect("/menu");
}

#[tokio::test]
async fn test_missing_payment_method_is_rejected() {
    let mut client = TestClient::new();
    add(&mut client, "1").await;

    client
        .post_form("/checkout/pay", &[("payment_method", "")])
        .await
        .assert_redirect("/checkout");

    let checkout = client.get("/checkout").await;
    assert!(checkout.body.contains("Select a payment method first!"));
}

#[tokio::test]
async fn test_delivery_is_refused() {
    let mut client = TestClient::new();
    add(&mut client, "1").await;

    client
        .post_form("/checkout/preferences", &[("order_type", "delivery")])
        .await
        .assert_redirect("/checkout");

    let checkout = client.get("/checkout").await;
    assert!(checkout.body.contains("Delivery is coming soon."));
    assert!(checkout.body.contains("value=\"pickup\" checked"));
}

#[tokio::test]
async fn test_invalid_payment_method_is_bad_request() {
    let mut client = TestClient::new();
    let response = client
        .post_form("/checkout/preferences", &[("payment_method", "crypto")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Confirmation and receipt
// =============================================================================

#[tokio::test]
async fn test_cash_order_produces_receipt_and_clears_cart() {
    let mut client = TestClient::new();
    add(&mut client, "1").await;
    add(&mut client, "1").await;
    client
        .post_form("/cart/proceed", &[("acknowledged", "yes")])
        .await
        .assert_redirect("/checkout");

    let checkout = client.get("/checkout").await;
    assert!(checkout.body.contains("2 items"));
    assert!(checkout.body.contains("RM 34.00"));

    client
        .post_form(
            "/checkout/pay",
            &[("order_type", "pickup"), ("payment_method", "cash")],
        )
        .await
        .assert_redirect("/receipt");

    let receipt = client.get("/receipt").await;
    assert_eq!(receipt.status, StatusCode::OK);
    let code = order_code(&receipt.body);
    assert!(receipt.body.contains("Set Bebek A"));
    assert!(receipt.body.contains("2 x RM 17.00"));
    assert!(receipt.body.contains("RM 34.00"));
    assert!(receipt.body.contains("Cash at outlet"));
    assert!(receipt.body.contains("Pickup"));

    // Cart is gone, receipt stays
    assert!(client.get("/menu").await.body.contains("Your cart is empty."));
    assert!(client.get("/checkout").await.body.contains("Cart is empty."));
    let again = client.get("/receipt").await;
    assert_eq!(order_code(&again.body), code);
}

#[tokio::test]
async fn test_fpx_order_names_bank() {
    let mut client = TestClient::new();
    add(&mut client, "104").await;

    client
        .post_form(
            "/checkout/preferences",
            &[("payment_method", "fpx"), ("bank", "Maybank2u")],
        )
        .await
        .assert_redirect("/checkout");
    let checkout = client.get("/checkout").await;
    assert!(checkout.body.contains("value=\"Maybank2u\" checked"));

    client
        .post_form("/checkout/pay", &[])
        .await
        .assert_redirect("/receipt");

    let receipt = client.get("/receipt").await;
    assert!(receipt.body.contains("FPX (Maybank2u)"));
    assert!(receipt.body.contains("RM 145.00"));
}

#[tokio::test]
async fn test_next_order_replaces_receipt() {
    let mut client = TestClient::new();

    add(&mut client, "1").await;
    client
        .post_form("/checkout/pay", &[("payment_method", "cash")])
        .await
        .assert_redirect("/receipt");
    let first = client.get("/receipt").await;
    assert!(first.body.contains("Set Bebek A"));

    add(&mut client, "2").await;
    client
        .post_form("/checkout/pay", &[("payment_method", "cash")])
        .await
        .assert_redirect("/receipt");
    let second = client.get("/receipt").await;
    assert!(second.body.contains("Set Bebek B"));
    assert!(!second.body.contains("Set Bebek A"));
}

#[tokio::test]
async fn test_visitors_do_not_share_carts() {
    let mut alice = TestClient::new();
    add(&mut alice, "1").await;

    let mut bob = alice.new_visitor();
    assert!(bob.get("/menu").await.body.contains("Your cart is empty."));
    bob.get("/receipt").await.assert_redirect("/menu");

    assert!(alice.get("/menu").await.body.contains("(1 in cart)"));
}

#[tokio::test]
async fn test_session_store_stays_bounded() {
    let config = StorefrontConfig {
        max_sessions: 3,
        ..StorefrontConfig::default()
    };
    let first = TestClient::with_config(config);

    for _ in 0..9 {
        add(&mut first.new_visitor(), "2").await;
    }
    let mut last = first.new_visitor();
    add(&mut last, "1").await;

    assert!(first.session_count().await <= 3);
    assert!(last.get("/menu").await.body.contains("(1 in cart)"));
}
