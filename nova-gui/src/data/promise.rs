use druid::Data;

/// A value that is loaded in the background. `Deferred` doubles as the
/// loading flag; there is no error state, failed loads resolve with
/// whatever fallback the caller decides on.
#[derive(Clone, Debug, Data)]
pub enum Promise<T: Data> {
    Empty,
    Deferred,
    Resolved(T),
}

impl<T: Data> Promise<T> {
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(val) => Some(val),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub fn defer(&mut self) {
        *self = Self::Deferred;
    }

    pub fn resolve(&mut self, val: T) {
        *self = Self::Resolved(val);
    }
}

impl<T: Data> Default for Promise<T> {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_loading_transitions() {
        let mut promise: Promise<u32> = Promise::default();
        assert!(!promise.is_deferred());
        assert!(!promise.is_resolved());

        promise.defer();
        assert!(promise.is_deferred());

        promise.resolve(7);
        assert!(!promise.is_deferred());
        assert_eq!(promise.resolved(), Some(&7));

        promise.clear();
        assert!(promise.resolved().is_none());
    }
}
