use flexa_style::TextAlign;
use flexa_traits::{MeasureError, TextMeasureRequest, TextMeasurer};
use flexa_types::Size;
use std::collections::HashMap;
use std::sync::RwLock;

// --- Cache Keys ---

/// Owned copy of every field of a [`TextMeasureRequest`]. Floats are keyed by bit pattern.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct MeasureKey {
    pub family: String,
    pub font_size: u32,
    pub line_height: u32,
    pub text: String,
    pub align: TextAlign,
    pub max_width: Option<u32>,
    pub no_wrap: bool,
}

impl From<&TextMeasureRequest<'_>> for MeasureKey {
    fn from(req: &TextMeasureRequest<'_>) -> Self {
        Self {
            family: req.font_family.to_string(),
            font_size: req.font_size.to_bits(),
            line_height: req.line_height.to_bits(),
            text: req.text.to_string(),
            align: req.align,
            max_width: req.max_width.map(f32::to_bits),
            no_wrap: req.no_wrap,
        }
    }
}

// --- The Wrapper ---

/// Memoizes the results of any [`TextMeasurer`].
///
/// The cache is owned by the caller and survives across layout runs, so unchanged text
/// is measured once. Failed measurements are never stored. A poisoned lock degrades to
/// measuring without the cache.
pub struct CachedMeasurer<M> {
    inner: M,
    measurements: RwLock<HashMap<MeasureKey, Size>>,
}

impl<M: TextMeasurer> CachedMeasurer<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            measurements: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.measurements.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut c) = self.measurements.write() {
            c.clear();
        }
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedMeasurer<M> {
    fn measure(&self, request: &TextMeasureRequest<'_>) -> Result<Size, MeasureError> {
        let key = MeasureKey::from(request);
        if let Ok(c) = self.measurements.read() {
            if let Some(size) = c.get(&key) {
                return Ok(*size);
            }
        }

        let size = self.inner.measure(request)?;
        if let Ok(mut c) = self.measurements.write() {
            c.insert(key, size);
        }
        Ok(size)
    }

    fn name(&self) -> &'static str {
        "CachedMeasurer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexa_traits::FnMeasurer;
    use std::cell::Cell;

    fn request(text: &str, max_width: Option<f32>) -> TextMeasureRequest<'_> {
        TextMeasureRequest {
            font_family: "sans-serif",
            font_size: 10.0,
            line_height: 12.0,
            text,
            align: TextAlign::Left,
            max_width,
            no_wrap: max_width.is_none(),
        }
    }

    #[test]
    fn test_repeated_requests_hit_cache() {
        let calls = Cell::new(0);
        let cached = CachedMeasurer::new(FnMeasurer::new(|req: &TextMeasureRequest<'_>| {
            calls.set(calls.get() + 1);
            Ok(Size::new(req.text.len() as f32, 12.0))
        }));

        assert_eq!(cached.measure(&request("abc", None)).unwrap(), Size::new(3.0, 12.0));
        assert_eq!(cached.measure(&request("abc", None)).unwrap(), Size::new(3.0, 12.0));
        assert_eq!(calls.get(), 1);

        // A different constraint is a different entry.
        cached.measure(&request("abc", Some(50.0))).unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(cached.len(), 2);
    }

    #[test]
    fn test_clear_drops_entries() {
        let cached = CachedMeasurer::new(FnMeasurer::new(|_req: &TextMeasureRequest<'_>| {
            Ok(Size::new(1.0, 1.0))
        }));
        cached.measure(&request("x", None)).unwrap();
        assert!(!cached.is_empty());
        cached.clear();
        assert!(cached.is_empty());
    }

    #[test]
    fn test_errors_are_not_cached() {
        let calls = Cell::new(0);
        let cached = CachedMeasurer::new(FnMeasurer::new(|req: &TextMeasureRequest<'_>| {
            calls.set(calls.get() + 1);
            Err(MeasureError::FontNotFound(req.font_family.to_string()))
        }));
        assert!(cached.measure(&request("x", None)).is_err());
        assert!(cached.measure(&request("x", None)).is_err());
        assert_eq!(calls.get(), 2);
        assert!(cached.is_empty());
    }
}
