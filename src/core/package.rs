use crate::core::report::ReportSettings;
use crate::domain::model::{Activity, Destination};
use crate::domain::passenger::Passenger;
use crate::domain::ports::Traveler;
use crate::utils::error::Result;
use std::io::Write;

/// Aggregate root: an itinerary of destinations plus a passenger roster.
#[derive(Debug, Clone)]
pub struct TravelPackage {
    name: String,
    passenger_capacity: usize,
    itinerary: Vec<Destination>,
    passengers: Vec<Passenger>,
}

impl TravelPackage {
    pub fn new(name: impl Into<String>, passenger_capacity: usize) -> Self {
        Self {
            name: name.into(),
            passenger_capacity,
            itinerary: Vec::new(),
            passengers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared roster size. Informational only; enrolment never checks it.
    pub fn passenger_capacity(&self) -> usize {
        self.passenger_capacity
    }

    pub fn itinerary(&self) -> &[Destination] {
        &self.itinerary
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// First passenger in roster order carrying `number`.
    pub fn passenger(&self, number: u32) -> Option<&Passenger> {
        self.passengers
            .iter()
            .find(|p| p.passenger_number() == number)
    }

    pub fn add_destination(&mut self, destination: Destination) {
        tracing::debug!(package = %self.name, destination = %destination.name(), "Adding destination");
        self.itinerary.push(destination);
    }

    pub fn add_passenger(&mut self, passenger: impl Into<Passenger>) {
        let passenger = passenger.into();
        tracing::debug!(
            package = %self.name,
            passenger = passenger.passenger_number(),
            tier = %passenger.tier(),
            "Enrolling passenger"
        );
        self.passengers.push(passenger);
        if self.passengers.len() > self.passenger_capacity {
            tracing::debug!(
                enrolled = self.passengers.len(),
                capacity = self.passenger_capacity,
                "Roster exceeds declared capacity"
            );
        }
    }

    /// Number of roster entries that take up a place on every activity.
    pub fn capacity_consumers(&self) -> i64 {
        self.passengers
            .iter()
            .filter(|p| p.counts_against_capacity())
            .count() as i64
    }

    /// Activity capacity minus every standard and gold passenger on the roster.
    /// The same package-wide count is subtracted from every activity.
    pub fn remaining_capacity(&self, activity: &Activity) -> i64 {
        let mut remaining = activity.capacity();
        for passenger in &self.passengers {
            if passenger.counts_against_capacity() {
                remaining = remaining.saturating_sub(1);
            }
        }
        remaining
    }

    /// `(destination, activity, remaining)` in itinerary order, for rows with room left.
    pub fn available_activities(&self) -> Vec<(&Destination, &Activity, i64)> {
        self.itinerary
            .iter()
            .flat_map(|d| d.activities().iter().map(move |a| (d, a)))
            .map(|(d, a)| (d, a, self.remaining_capacity(a)))
            .filter(|(_, _, remaining)| *remaining > 0)
            .collect()
    }

    /// Every activity whose back-reference matches the destination that holds it.
    pub fn enrolled_activities(&self) -> Vec<(&Destination, &Activity)> {
        let mut activities = Vec::new();
        for destination in &self.itinerary {
            for activity in destination.activities() {
                if activity.destination() == destination.id() {
                    activities.push((destination, activity));
                }
            }
        }
        activities
    }

    pub fn write_itinerary<W: Write>(&self, out: &mut W, settings: &ReportSettings) -> Result<()> {
        writeln!(out, "Travel Package: {}", self.name)?;
        for destination in &self.itinerary {
            writeln!(out, "Destination: {}", destination.name())?;
            for activity in destination.activities() {
                writeln!(out, "Activity: {}", activity.name())?;
                writeln!(out, "Description: {}", activity.description())?;
                writeln!(out, "Cost: {} {}", settings.currency_symbol, activity.cost())?;
                writeln!(out, "Capacity: {}", activity.capacity())?;
            }
            writeln!(out)?;
        }
        tracing::debug!(destinations = self.itinerary.len(), "Wrote itinerary");
        Ok(())
    }

    pub fn write_passenger_list<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Passenger List for Travel Package: {}", self.name)?;
        writeln!(out, "Capacity: {}", self.passenger_capacity)?;
        writeln!(out, "Number of Passengers Enrolled: {}", self.passengers.len())?;
        for passenger in &self.passengers {
            writeln!(
                out,
                "Passenger: {} - Passenger Number: {}",
                passenger.name(),
                passenger.passenger_number()
            )?;
        }
        tracing::debug!(passengers = self.passengers.len(), "Wrote passenger list");
        Ok(())
    }

    /// The enrolled section lists every activity in the package; passengers
    /// are not linked to individual activities.
    pub fn write_passenger_details<W: Write>(
        &self,
        out: &mut W,
        passenger: &Passenger,
        settings: &ReportSettings,
    ) -> Result<()> {
        writeln!(out, "Passenger Details:")?;
        writeln!(out, "Name: {}", passenger.name())?;
        writeln!(out, "Passenger Number: {}", passenger.passenger_number())?;
        // Only standard passengers show a balance
        if let Passenger::Standard(standard) = passenger {
            writeln!(out, "Balance: {}{}", settings.currency_symbol, standard.balance())?;
        }

        let lines: Vec<String> = self
            .enrolled_activities()
            .into_iter()
            .map(|(destination, activity)| {
                format!(
                    "{} at {} - {}{}",
                    activity.name(),
                    destination.name(),
                    settings.currency_symbol,
                    activity.cost()
                )
            })
            .collect();

        if !lines.is_empty() {
            writeln!(out, "Activities Enrolled:")?;
            for line in &lines {
                writeln!(out, "{}", line)?;
            }
        }
        tracing::debug!(
            passenger = passenger.passenger_number(),
            activities = lines.len(),
            "Wrote passenger details"
        );
        Ok(())
    }

    pub fn write_available_activities<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Available Activities:")?;
        let available = self.available_activities();
        for (destination, activity, remaining) in &available {
            writeln!(
                out,
                "{} at {} - Spaces Available: {}",
                activity.name(),
                destination.name(),
                remaining
            )?;
        }
        tracing::debug!(
            rows = available.len(),
            consumers = self.capacity_consumers(),
            "Wrote available activities"
        );
        Ok(())
    }

    pub fn print_itinerary(&self, settings: &ReportSettings) -> Result<()> {
        self.write_itinerary(&mut std::io::stdout().lock(), settings)
    }

    pub fn print_passenger_list(&self) -> Result<()> {
        self.write_passenger_list(&mut std::io::stdout().lock())
    }

    pub fn print_passenger_details(
        &self,
        passenger: &Passenger,
        settings: &ReportSettings,
    ) -> Result<()> {
        self.write_passenger_details(&mut std::io::stdout().lock(), passenger, settings)
    }

    pub fn print_available_activities(&self) -> Result<()> {
        self.write_available_activities(&mut std::io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DestinationId;
    use crate::domain::passenger::{GoldPassenger, PremiumPassenger, StandardPassenger};
    use rust_decimal::Decimal;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_add_destination_appends() {
        let mut package = TravelPackage::new("Test Package", 500);
        package.add_destination(Destination::new("First"));
        package.add_destination(Destination::new("Second"));

        let names: Vec<&str> = package.itinerary().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_add_passenger_ignores_declared_capacity() {
        let mut package = TravelPackage::new("Tiny", 1);
        package.add_passenger(StandardPassenger::new("A", 1, Decimal::ZERO));
        package.add_passenger(PremiumPassenger::new("B", 2));

        assert_eq!(package.passengers().len(), 2);
        assert_eq!(package.passengers()[1].name(), "B");
        assert_eq!(package.passenger(2).map(|p| p.name()), Some("B"));
        assert!(package.passenger(3).is_none());
    }

    #[test]
    fn test_remaining_capacity_ignores_premium() {
        let mut package = TravelPackage::new("Test", 10);
        let mut destination = Destination::new("Paris");
        let activity = Activity::new("Tour", "", Decimal::ONE, 5, &destination);
        destination.add_activity(activity.clone());
        package.add_destination(destination);

        package.add_passenger(StandardPassenger::new("A", 1, Decimal::ZERO));
        package.add_passenger(GoldPassenger::new("B", 2, Decimal::ZERO));
        package.add_passenger(PremiumPassenger::new("C", 3));

        assert_eq!(package.capacity_consumers(), 2);
        assert_eq!(package.remaining_capacity(&activity), 3);
    }

    #[test]
    fn test_remaining_capacity_saturates_at_minimum() {
        let mut package = TravelPackage::new("Test", 10);
        let destination = Destination::new("Paris");
        let activity = Activity::new("Tour", "", Decimal::ONE, i64::MIN, &destination);
        package.add_passenger(StandardPassenger::new("A", 1, Decimal::ZERO));

        assert_eq!(package.remaining_capacity(&activity), i64::MIN);
        assert!(package.available_activities().is_empty());
    }

    #[test]
    fn test_full_activity_is_not_available() {
        let mut package = TravelPackage::new("Test", 10);
        let mut destination = Destination::new("Paris");
        destination.add_activity(Activity::new("Full", "", Decimal::ONE, 1, &destination));
        destination.add_activity(Activity::new("Open", "", Decimal::ONE, 2, &destination));
        package.add_destination(destination);
        package.add_passenger(StandardPassenger::new("A", 1, Decimal::ZERO));

        let output = render(|out| package.write_available_activities(out));

        assert!(!output.contains("Full at Paris"));
        assert!(output.contains("Open at Paris - Spaces Available: 1"));
    }

    #[test]
    fn test_mismatched_back_reference_is_filtered_from_details() {
        let mut package = TravelPackage::new("Test", 10);
        let mut destination = Destination::new("Paris");
        let elsewhere = DestinationId::new();
        destination.add_activity(Activity::new("Here", "", Decimal::ONE, 5, &destination));
        destination.add_activity(Activity::with_destination_id("Stray", "", Decimal::ONE, 5, elsewhere));
        package.add_destination(destination);
        let passenger: Passenger = PremiumPassenger::new("C", 3).into();

        let output = render(|out| {
            package.write_passenger_details(out, &passenger, &ReportSettings::default())
        });

        assert!(output.contains("Here at Paris"));
        assert!(!output.contains("Stray"));
    }

    #[test]
    fn test_print_to_stdout() {
        let mut package = TravelPackage::new("Test", 10);
        package.add_destination(Destination::new("Paris"));
        package.add_passenger(PremiumPassenger::new("C", 3));
        let settings = ReportSettings::default();

        assert!(package.print_itinerary(&settings).is_ok());
        assert!(package.print_passenger_list().is_ok());
        assert!(package
            .print_passenger_details(&package.passengers()[0], &settings)
            .is_ok());
        assert!(package.print_available_activities().is_ok());
    }

    #[test]
    fn test_details_without_activities_omit_section() {
        let package = TravelPackage::new("Empty", 10);
        let passenger: Passenger = GoldPassenger::new("B", 2, Decimal::new(20000, 0)).into();

        let output = render(|out| {
            package.write_passenger_details(out, &passenger, &ReportSettings::default())
        });

        assert!(output.contains("Name: B"));
        assert!(!output.contains("Balance"));
        assert!(!output.contains("Activities Enrolled"));
    }
}
