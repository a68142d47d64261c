use crate::context::ResponseContext;

/// The CSP nonce to embed in the page, or `""` when the response has none.
pub fn resolve_nonce(res: &impl ResponseContext) -> String {
    res.nonce().unwrap_or_default().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ResponseLocals;

    #[test]
    fn test_resolve_nonce() {
        let with_nonce = ResponseLocals {
            nonce: Some("abc".to_owned()),
        };
        assert_eq!(resolve_nonce(&with_nonce), "abc");
        assert_eq!(resolve_nonce(&ResponseLocals::default()), "");
    }
}
