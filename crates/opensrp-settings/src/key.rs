use std::marker::PhantomData;

/// Names one top-level entry of a [`SettingsEnvelope`](crate::SettingsEnvelope) together with
/// the type its value is read back as.
///
/// Settings pulled from the server are untyped JSON. Reading through a `Key` deserializes the
/// entry into `T`; an entry of the wrong shape reads as missing.
///
/// ```rust
/// use opensrp_settings::{Key, SettingsEnvelope};
/// use serde_json::json;
///
/// const FACILITY: Key<String> = Key::new("facility");
///
/// let envelope: SettingsEnvelope =
///     serde_json::from_value(json!({ "facility": "A" })).unwrap();
/// assert_eq!(envelope.get(FACILITY), Some("A".to_string()));
/// ```
#[derive(Debug)]
pub struct Key<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    #[allow(missing_docs)]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The entry name inside the envelope.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}
