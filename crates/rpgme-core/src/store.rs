//! The owner of the character record and the display name.

use tracing::trace;

use crate::character::{CharacterConfig, PartialConfig};
use crate::field::Field;
use crate::value::FieldValue;

/// What changed in a [`ConfigStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// One field was set. Emitted even when the value did not change.
    FieldChanged {
        /// The field that was set.
        field: Field,
        /// Value before the update.
        old: FieldValue,
        /// Value after the update.
        new: FieldValue,
    },
    /// The display name was set.
    NameChanged(String),
    /// Several fields were merged in at once.
    Hydrated(Vec<Field>),
}

impl StoreEvent {
    /// Returns true if the event can change the seed.
    pub fn touches_record(&self) -> bool {
        !matches!(self, StoreEvent::NameChanged(_))
    }
}

/// Handle returned by [`ConfigStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&StoreEvent, &CharacterConfig)>;

/// Holds the current character record and display name.
///
/// All writes go through the store, which notifies subscribers after every
/// write.
pub struct ConfigStore {
    config: CharacterConfig,
    name: String,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(CharacterConfig::default())
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("config", &self.config)
            .field("name", &self.name)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ConfigStore {
    /// A store holding the given record and an empty name.
    pub fn new(config: CharacterConfig) -> Self {
        Self {
            config,
            name: String::new(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// The current record.
    pub fn get(&self) -> &CharacterConfig {
        &self.config
    }

    /// A copy of the current record.
    pub fn snapshot(&self) -> CharacterConfig {
        self.config
    }

    /// The current display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a field from raw widget input.
    ///
    /// The input is coerced with [`FieldValue::coerce`]; toggle fields are
    /// then collapsed to 0/1. Other fields are stored unchecked.
    pub fn set_field(&mut self, field: Field, raw: &str) -> StoreEvent {
        self.set_value(field, FieldValue::coerce(raw))
    }

    /// Set a field from an already-typed value.
    pub fn set_value(&mut self, field: Field, value: FieldValue) -> StoreEvent {
        let new = normalize(field, value);
        let slot = self.config.slot_mut(field);
        let old = *slot;
        *slot = new;

        let event = StoreEvent::FieldChanged { field, old, new };
        self.notify(&event);
        event
    }

    /// Set the display name. Does not touch the record.
    pub fn set_name(&mut self, name: impl Into<String>) -> StoreEvent {
        self.name = name.into();
        let event = StoreEvent::NameChanged(self.name.clone());
        self.notify(&event);
        event
    }

    /// Merge assignments into the record. Unassigned fields keep their values.
    pub fn apply_partial(&mut self, partial: &PartialConfig) -> StoreEvent {
        let mut fields = Vec::with_capacity(partial.len());
        for &(field, value) in partial.iter() {
            *self.config.slot_mut(field) = normalize(field, value);
            if !fields.contains(&field) {
                fields.push(field);
            }
        }

        let event = StoreEvent::Hydrated(fields);
        self.notify(&event);
        event
    }

    /// Register a change listener.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&StoreEvent, &CharacterConfig) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: &StoreEvent) {
        trace!(?event, "store changed");
        for (_, listener) in &mut self.listeners {
            listener(event, &self.config);
        }
    }
}

fn normalize(field: Field, value: FieldValue) -> FieldValue {
    if field.is_toggle() {
        value.to_toggle()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn set_field_coerces_and_stores() {
        let mut store = ConfigStore::default();
        let event = store.set_field(Field::Hair, "7");
        assert_eq!(store.get().hair, FieldValue::Int(7));
        assert_eq!(
            event,
            StoreEvent::FieldChanged {
                field: Field::Hair,
                old: FieldValue::Int(0),
                new: FieldValue::Int(7),
            }
        );
    }

    #[test]
    fn out_of_range_passes_through() {
        let mut store = ConfigStore::default();
        store.set_field(Field::Face, "42");
        assert_eq!(store.get().face, FieldValue::Int(42));
        store.set_field(Field::Size, "9000");
        assert_eq!(store.get().size, FieldValue::Int(9000));
    }

    #[test]
    fn malformed_input_stores_sentinel() {
        let mut store = ConfigStore::default();
        store.set_field(Field::Shirt, "blue");
        assert!(store.get().shirt.is_nan());
    }

    #[test]
    fn toggles_are_clamped() {
        let mut store = ConfigStore::default();
        store.set_field(Field::Base, "5");
        assert_eq!(store.get().base, FieldValue::Int(1));
        store.set_field(Field::Fire, "nope");
        assert_eq!(store.get().fire, FieldValue::Int(0));
        store.set_value(Field::Walking, FieldValue::Int(-1));
        assert_eq!(store.get().walking, FieldValue::Int(1));
    }

    #[test]
    fn set_name_leaves_record_alone() {
        let mut store = ConfigStore::default();
        let before = store.snapshot();
        let event = store.set_name("Aria");
        assert_eq!(store.name(), "Aria");
        assert_eq!(store.snapshot(), before);
        assert!(!event.touches_record());
    }

    #[test]
    fn apply_partial_merges() {
        let mut store = ConfigStore::default();
        store.set_field(Field::Size, "300");
        let partial = PartialConfig::new()
            .with(Field::Hair, 4)
            .with(Field::Base, 3);
        let event = store.apply_partial(&partial);

        assert_eq!(store.get().hair, FieldValue::Int(4));
        assert_eq!(store.get().base, FieldValue::Int(1));
        assert_eq!(store.get().size, FieldValue::Int(300));
        assert_eq!(event, StoreEvent::Hydrated(vec![Field::Hair, Field::Base]));
    }

    #[test]
    fn listeners_see_every_write() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ConfigStore::default();
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |event, config| {
            sink.borrow_mut().push((event.clone(), config.hair));
        });

        store.set_field(Field::Hair, "2");
        store.set_field(Field::Hair, "2");
        store.set_name("Bo");
        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(seen.borrow()[0].1, FieldValue::Int(2));

        assert!(store.unsubscribe(id));
        store.set_field(Field::Hair, "3");
        assert_eq!(seen.borrow().len(), 3);
        assert!(!store.unsubscribe(id));
    }
}
