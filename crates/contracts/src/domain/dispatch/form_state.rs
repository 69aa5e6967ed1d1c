use super::record::{DispatchRecord, SystemEntry};
use crate::catalogs;

// ============================================================================
// Card state
// ============================================================================

/// Editable state of one system card.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemCardState {
    pub customer_name: String,
    pub plant_type: String,
    /// Checked flags, parallel to [`catalogs::COMPONENT_NAMES`].
    pub components: Vec<bool>,
}

impl SystemCardState {
    fn new() -> Self {
        Self {
            customer_name: String::new(),
            plant_type: String::new(),
            components: vec![false; catalogs::COMPONENT_NAMES.len()],
        }
    }

    /// Snapshot this card as a wire entry, keyed by component display name.
    pub fn to_entry(&self) -> SystemEntry {
        SystemEntry {
            customer_name: self.customer_name.clone(),
            plant_type: self.plant_type.clone(),
            components: catalogs::COMPONENT_NAMES
                .iter()
                .zip(self.components.iter())
                .map(|(name, checked)| (name.to_string(), *checked))
                .collect(),
        }
    }
}

impl Default for SystemCardState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Form state
// ============================================================================

/// In-memory snapshot of the whole dispatch form.
///
/// The UI binds to this struct and everything checkable without a rendering
/// surface lives here: count clamping, card regeneration, validation and
/// record assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub date_time: String,
    pub store: String,
    pub technician: String,
    pub district: String,
    /// Raw text of the count input. Forced to `"20"` after a clamp.
    pub system_count: String,
    pub cards: Vec<SystemCardState>,
    clamped: bool,
}

impl FormState {
    pub fn new(date_time: String) -> Self {
        Self {
            date_time,
            store: String::new(),
            technician: String::new(),
            district: String::new(),
            system_count: String::new(),
            cards: Vec::new(),
            clamped: false,
        }
    }

    /// Parsed system count; anything unparsable counts as 0.
    pub fn parsed_count(&self) -> i64 {
        self.system_count.trim().parse().unwrap_or(0)
    }

    /// Re-generate the card list from a count-input edit.
    ///
    /// Counts above [`catalogs::MAX_SYSTEMS`] are forced down to the cap and
    /// the stored input text is corrected to match; counts below 1 clear the
    /// card area. Regeneration always discards previously entered card data.
    pub fn apply_system_count(&mut self, raw: &str) {
        self.system_count = raw.to_string();
        self.clamped = false;

        let requested = self.parsed_count();
        if requested > catalogs::MAX_SYSTEMS as i64 {
            self.system_count = catalogs::MAX_SYSTEMS.to_string();
            self.clamped = true;
            self.regenerate(catalogs::MAX_SYSTEMS);
        } else if requested > 0 {
            self.regenerate(requested as usize);
        } else {
            self.cards.clear();
        }
    }

    fn regenerate(&mut self, count: usize) {
        self.cards = (0..count).map(|_| SystemCardState::new()).collect();
    }

    /// Whether the card area is shown at all.
    pub fn cards_visible(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Text for the count display node, e.g. `"3 systems to configure"`.
    pub fn count_display(&self) -> String {
        if self.clamped {
            return format!("{} systems to configure (max)", catalogs::MAX_SYSTEMS);
        }
        match self.cards.len() {
            1 => "1 system to configure".to_string(),
            n => format!("{} systems to configure", n),
        }
    }

    pub fn set_customer_name(&mut self, index: usize, value: String) {
        if let Some(card) = self.cards.get_mut(index) {
            card.customer_name = value;
        }
    }

    pub fn set_plant_type(&mut self, index: usize, value: String) {
        if let Some(card) = self.cards.get_mut(index) {
            card.plant_type = value;
        }
    }

    pub fn set_component(&mut self, index: usize, component: usize, checked: bool) {
        if let Some(flag) = self
            .cards
            .get_mut(index)
            .and_then(|card| card.components.get_mut(component))
        {
            *flag = checked;
        }
    }

    /// Aggregate required-field check.
    ///
    /// Yields no per-field detail; the caller shows one generic message.
    pub fn is_valid(&self) -> bool {
        if self.date_time.is_empty()
            || self.store.is_empty()
            || self.technician.is_empty()
            || self.district.is_empty()
            || self.parsed_count() < 1
        {
            return false;
        }
        self.cards
            .iter()
            .all(|card| !card.customer_name.trim().is_empty() && !card.plant_type.is_empty())
    }

    /// Assemble the submission payload from the current cards, in card order.
    ///
    /// `totalSystems` is taken from the card list length, so the payload
    /// invariant `systems.len() == totalSystems` holds by construction.
    pub fn to_record(&self) -> DispatchRecord {
        DispatchRecord {
            date_time: self.date_time.clone(),
            store: self.store.clone(),
            technician: self.technician.clone(),
            district: self.district.clone(),
            total_systems: self.cards.len() as u32,
            systems: self.cards.iter().map(SystemCardState::to_entry).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form(count: usize) -> FormState {
        let mut form = FormState::new("2025-08-05T09:30".to_string());
        form.store = "Ghazipur".to_string();
        form.technician = "Upender".to_string();
        form.district = "Ballia".to_string();
        form.apply_system_count(&count.to_string());
        for i in 0..count {
            form.set_customer_name(i, format!("Customer {}", i + 1));
            form.set_plant_type(i, "3 Kw".to_string());
        }
        form
    }

    #[test]
    fn generates_exactly_count_cards_with_unchecked_components() {
        for count in 1..=catalogs::MAX_SYSTEMS {
            let mut form = FormState::new(String::new());
            form.apply_system_count(&count.to_string());
            assert_eq!(form.cards.len(), count);
            for card in &form.cards {
                assert_eq!(card.components.len(), catalogs::COMPONENT_NAMES.len());
                assert!(card.components.iter().all(|checked| !checked));
                assert!(card.customer_name.is_empty());
                assert!(card.plant_type.is_empty());
            }
        }
    }

    #[test]
    fn counts_above_the_cap_are_clamped_and_input_text_corrected() {
        let mut form = FormState::new(String::new());
        form.apply_system_count("25");
        assert_eq!(form.cards.len(), 20);
        assert_eq!(form.system_count, "20");
        assert_eq!(form.count_display(), "20 systems to configure (max)");

        // Entering exactly the cap is not a clamp.
        form.apply_system_count("20");
        assert_eq!(form.cards.len(), 20);
        assert_eq!(form.count_display(), "20 systems to configure");
    }

    #[test]
    fn zero_or_unparsable_count_clears_and_hides_the_card_area() {
        for raw in ["0", "-3", "", "abc"] {
            let mut form = FormState::new(String::new());
            form.apply_system_count("4");
            form.apply_system_count(raw);
            assert!(form.cards.is_empty(), "cards left over for input {raw:?}");
            assert!(!form.cards_visible());
            assert_eq!(form.count_display(), "0 systems to configure");
        }
    }

    #[test]
    fn validator_rejects_each_missing_required_field() {
        assert!(filled_form(2).is_valid());

        let mut form = filled_form(2);
        form.date_time.clear();
        assert!(!form.is_valid());

        let mut form = filled_form(2);
        form.store.clear();
        assert!(!form.is_valid());

        let mut form = filled_form(2);
        form.technician.clear();
        assert!(!form.is_valid());

        let mut form = filled_form(2);
        form.district.clear();
        assert!(!form.is_valid());

        let mut form = filled_form(2);
        form.system_count.clear();
        assert!(!form.is_valid());

        let mut form = filled_form(2);
        form.set_customer_name(1, "   ".to_string());
        assert!(!form.is_valid());

        let mut form = filled_form(2);
        form.set_plant_type(0, String::new());
        assert!(!form.is_valid());
    }

    #[test]
    fn record_assembly_preserves_order_and_covers_the_component_catalog() {
        let mut form = filled_form(2);
        form.set_customer_name(0, "Alice".to_string());
        form.set_customer_name(1, "Bob".to_string());
        form.set_plant_type(0, "3 Kw".to_string());
        form.set_plant_type(1, "6 Kw".to_string());
        // Check "Module" and "Inverter" on the first system only.
        form.set_component(0, 0, true);
        form.set_component(0, 1, true);

        let record = form.to_record();
        assert_eq!(record.total_systems, 2);
        assert_eq!(record.systems.len(), 2);
        assert_eq!(record.systems[0].customer_name, "Alice");
        assert_eq!(record.systems[1].customer_name, "Bob");
        assert_eq!(record.systems[0].plant_type, "3 Kw");
        assert_eq!(record.systems[1].plant_type, "6 Kw");

        for entry in &record.systems {
            assert_eq!(entry.components.len(), catalogs::COMPONENT_NAMES.len());
        }
        assert_eq!(record.systems[0].components["Module"], true);
        assert_eq!(record.systems[0].components["Inverter"], true);
        assert_eq!(record.systems[0].components["ACDB"], false);
        assert!(record.systems[1].components.values().all(|checked| !checked));
    }

    #[test]
    fn fresh_state_matches_reset_expectations() {
        let form = FormState::new("2025-08-05T09:30".to_string());
        assert_eq!(form.count_display(), "0 systems to configure");
        assert!(form.cards.is_empty());
        assert!(form.system_count.is_empty());
        assert!(form.store.is_empty());
        assert_eq!(form.date_time, "2025-08-05T09:30");
    }

    #[test]
    fn regeneration_discards_previous_card_data() {
        let mut form = filled_form(2);
        form.set_component(0, 3, true);
        form.apply_system_count("3");

        assert_eq!(form.cards.len(), 3);
        for card in &form.cards {
            assert!(card.customer_name.is_empty());
            assert!(card.plant_type.is_empty());
            assert!(card.components.iter().all(|checked| !checked));
        }
    }

    #[test]
    fn count_display_pluralizes() {
        let mut form = FormState::new(String::new());
        form.apply_system_count("1");
        assert_eq!(form.count_display(), "1 system to configure");
        form.apply_system_count("2");
        assert_eq!(form.count_display(), "2 systems to configure");
    }
}
