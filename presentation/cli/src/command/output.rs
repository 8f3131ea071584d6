//! Plain-text rendering of domain data for the terminal.

use business::domain::cart::model::Cart;
use business::domain::notification::model::Notification;
use business::domain::order::model::Order;
use business::domain::product::model::{ProductDetail, ProductSummary};
use business::domain::user::model::UserProfile;

/// Formats a VND amount with dot grouping, e.g. `1.990.000 ₫`.
pub fn price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} ₫", sign, grouped)
}

pub fn product_line(product: &ProductSummary) -> String {
    match &product.brand {
        Some(brand) => format!("#{:<5} {} ({}) {}", product.id, product.name, brand, price(product.price)),
        None => format!("#{:<5} {} {}", product.id, product.name, price(product.price)),
    }
}

pub fn product_detail(detail: &ProductDetail) -> String {
    let mut lines = vec![format!("#{} {}", detail.id, detail.name)];
    if let Some(description) = &detail.description {
        lines.push(description.clone());
    }
    for attribute in &detail.attributes {
        let variant = [attribute.color.as_deref(), attribute.size.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" / ");
        let stock = if attribute.in_stock() { "" } else { " (out of stock)" };
        lines.push(format!(
            "  attribute #{} {} {}{}",
            attribute.id,
            variant,
            price(attribute.price),
            stock
        ));
    }
    lines.join("\n")
}

pub fn cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Cart is empty".to_string();
    }
    let mut lines: Vec<String> = cart
        .items()
        .iter()
        .map(|item| {
            format!(
                "  [{}] {} x{} {}",
                item.id,
                item.product_name,
                item.quantity,
                price(item.line_total())
            )
        })
        .collect();
    lines.push(format!(
        "Total: {} ({} items)",
        price(cart.total_price()),
        cart.total_quantity()
    ));
    lines.join("\n")
}

pub fn order_line(order: &Order) -> String {
    format!(
        "#{:<5} {} status {} {}",
        order.id,
        order.order_type,
        order.status,
        price(order.total_price)
    )
}

pub fn notification_line(notification: &Notification) -> String {
    let marker = if notification.is_read { " " } else { "*" };
    format!(
        "{} #{:<4} {}: {}",
        marker, notification.id, notification.title, notification.body
    )
}

pub fn profile(profile: &UserProfile) -> String {
    let roles = profile
        .roles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let mut lines = vec![
        format!("{} <{}>", profile.display_name(), profile.email),
        format!("roles: {}", roles),
    ];
    if let Some(phone) = &profile.phone_number {
        lines.push(format!("phone: {}", phone));
    }
    if let Some(address) = &profile.address {
        lines.push(format!("address: {}", address));
    }
    lines.join("\n")
}
