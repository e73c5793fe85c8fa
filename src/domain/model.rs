use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// Identity of a destination, used by activities to point back at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DestinationId(Uuid);

impl DestinationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DestinationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    id: DestinationId,
    name: String,
    activities: Vec<Activity>,
}

impl Destination {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: DestinationId::new(),
            name: name.into(),
            activities: Vec::new(),
        }
    }

    pub fn id(&self) -> DestinationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Appends without checking duplicates or whether `activity` points back here.
    pub fn add_activity(&mut self, activity: Activity) {
        tracing::debug!(
            destination = %self.name,
            activity = %activity.name,
            "Adding activity"
        );
        self.activities.push(activity);
    }
}

/// An offering at a destination. Cost and capacity are stored as given,
/// negative values included.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    name: String,
    description: String,
    cost: Decimal,
    capacity: i64,
    destination: DestinationId,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cost: Decimal,
        capacity: i64,
        destination: &Destination,
    ) -> Self {
        Self::with_destination_id(name, description, cost, capacity, destination.id())
    }

    pub fn with_destination_id(
        name: impl Into<String>,
        description: impl Into<String>,
        cost: Decimal,
        capacity: i64,
        destination: DestinationId,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            cost,
            capacity,
            destination,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn destination(&self) -> DestinationId {
        self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_activity_appends() {
        let mut destination = Destination::new("Test Destination");
        let first = Activity::new("First", "Description", Decimal::new(50000, 2), 200, &destination);
        let second = Activity::new("Second", "Description", Decimal::new(100, 0), 10, &destination);

        destination.add_activity(first.clone());
        assert_eq!(destination.activities().len(), 1);

        destination.add_activity(second.clone());
        assert_eq!(destination.activities().len(), 2);
        assert_eq!(destination.activities().last(), Some(&second));
        assert_eq!(destination.activities()[0], first);
    }

    #[test]
    fn test_add_activity_allows_duplicates() {
        let mut destination = Destination::new("Test Destination");
        let activity = Activity::new("Tour", "Description", Decimal::ONE, 1, &destination);

        destination.add_activity(activity.clone());
        destination.add_activity(activity);

        assert_eq!(destination.activities().len(), 2);
    }

    #[test]
    fn test_activity_getters() {
        let destination = Destination::new("Test Destination");
        let activity = Activity::new(
            "Test Activity",
            "Description",
            Decimal::new(50000, 2),
            200,
            &destination,
        );

        assert_eq!(activity.name(), "Test Activity");
        assert_eq!(activity.description(), "Description");
        assert_eq!(activity.cost(), Decimal::new(500, 0));
        assert_eq!(activity.capacity(), 200);
        assert_eq!(activity.destination(), destination.id());
    }

    #[test]
    fn test_activity_accepts_negative_values() {
        let destination = Destination::new("Nowhere");
        let activity = Activity::new("Odd", "", Decimal::new(-5, 0), -3, &destination);

        assert_eq!(activity.cost(), Decimal::new(-5, 0));
        assert_eq!(activity.capacity(), -3);
    }

    #[test]
    fn test_destination_ids_are_distinct() {
        let paris = Destination::new("Paris");
        let also_paris = Destination::new("Paris");
        assert_ne!(paris.id(), also_paris.id());
    }
}
