use reqwest::Method;

/// Whether a call may carry the stored bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

/// One backend route: method, path relative to the base URL, and access.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub access: Access,
}

impl Endpoint {
    fn public(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            access: Access::Public,
        }
    }

    fn authenticated(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            access: Access::Authenticated,
        }
    }

    pub fn is_public(&self) -> bool {
        self.access == Access::Public
    }

    pub fn login() -> Self {
        Self::public(Method::POST, "auth/log-in")
    }

    pub fn register() -> Self {
        Self::public(Method::POST, "auth/register")
    }

    pub fn home() -> Self {
        Self::public(Method::GET, "home")
    }

    pub fn product_detail(id: i64) -> Self {
        Self::public(Method::GET, format!("home/product/{}", id))
    }

    pub fn add_to_cart(product_att_id: i64) -> Self {
        Self::authenticated(Method::POST, format!("cart/add/{}", product_att_id))
    }

    pub fn view_cart() -> Self {
        Self::authenticated(Method::GET, "cart/view")
    }

    pub fn place_order() -> Self {
        Self::authenticated(Method::POST, "cart/place-order")
    }

    pub fn my_orders() -> Self {
        Self::authenticated(Method::GET, "cart/my-order")
    }

    pub fn my_info() -> Self {
        Self::authenticated(Method::GET, "users/profile/my-info")
    }

    pub fn update_profile() -> Self {
        Self::authenticated(Method::PUT, "users/profile/update")
    }

    pub fn create_zalopay() -> Self {
        Self::authenticated(Method::POST, "payment/zalopay/create")
    }

    pub fn payment_status(order_id: i64) -> Self {
        Self::authenticated(Method::GET, format!("payment/status/{}", order_id))
    }

    pub fn notifications() -> Self {
        Self::authenticated(Method::GET, "notifications")
    }

    pub fn mark_notification_read(id: i64) -> Self {
        Self::authenticated(Method::PUT, format!("notifications/{}/read", id))
    }

    pub fn register_device_token() -> Self {
        Self::authenticated(Method::POST, "notifications/device-token")
    }

    pub fn remove_device_token() -> Self {
        Self::authenticated(Method::DELETE, "notifications/device-token")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mark_catalog_and_auth_routes_public() {
        for endpoint in [
            Endpoint::login(),
            Endpoint::register(),
            Endpoint::home(),
            Endpoint::product_detail(3),
        ] {
            assert!(endpoint.is_public(), "{} should be public", endpoint.path);
        }
    }

    #[test]
    fn should_require_token_for_cart_and_profile_routes() {
        for endpoint in [
            Endpoint::add_to_cart(1),
            Endpoint::view_cart(),
            Endpoint::place_order(),
            Endpoint::my_orders(),
            Endpoint::my_info(),
            Endpoint::update_profile(),
            Endpoint::create_zalopay(),
            Endpoint::payment_status(1),
            Endpoint::notifications(),
            Endpoint::mark_notification_read(1),
            Endpoint::register_device_token(),
            Endpoint::remove_device_token(),
        ] {
            assert_eq!(endpoint.access, Access::Authenticated, "{}", endpoint.path);
        }
    }

    #[test]
    fn should_embed_ids_in_paths() {
        assert_eq!(Endpoint::add_to_cart(42).path, "cart/add/42");
        assert_eq!(Endpoint::payment_status(7).path, "payment/status/7");
        assert_eq!(
            Endpoint::mark_notification_read(9),
            Endpoint {
                method: Method::PUT,
                path: "notifications/9/read".to_string(),
                access: Access::Authenticated,
            }
        );
    }
}
