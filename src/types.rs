use serde::Serialize;

/// JSON body for the HTTP POST transport: {"price": <number>}.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceUpdate {
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_body_shape() {
        let body = serde_json::to_string(&PriceUpdate { price: 1.0825 }).unwrap();
        assert_eq!(body, r#"{"price":1.0825}"#);
    }
}
