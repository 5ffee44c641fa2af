use serde::{Deserialize, Serialize};

/// Standard success/failure wrapper every backend endpoint returns.
///
/// The executor unwraps this before handing data back, so endpoint methods
/// only ever see the typed payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub error: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Paginated collection payload: `{ count, results }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

/// Post-deserialization invariant check, applied by the executor to every
/// payload. Shape errors from serde catch missing/mistyped fields; this
/// catches values that parse but cannot be trusted.
pub trait Validate {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl<T> Validate for Page<T> {
    fn validate(&self) -> Result<(), String> {
        if self.results.len() as u64 > self.count {
            return Err(format!(
                "page carries {} results but claims count {}",
                self.results.len(),
                self.count
            ));
        }
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl Validate for serde_json::Value {}
impl Validate for () {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_within_count_is_valid() {
        let page = Page { count: 5, results: vec![1, 2, 3] };
        assert!(page.validate().is_ok());
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn page_overflowing_count_is_invalid() {
        let page = Page { count: 1, results: vec![1, 2] };
        assert!(page.validate().is_err());
    }

    #[test]
    fn envelope_defaults_error_to_false() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"data": [1, 2]}"#).unwrap();
        assert!(!env.error);
        assert_eq!(env.data.unwrap(), vec![1, 2]);
    }
}
