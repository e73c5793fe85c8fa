use crate::domain::ports::Traveler;
use crate::domain::pricing::gold_discount;
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FareClass {
    Standard,
    Gold,
    Premium,
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FareClass::Standard => "standard",
            FareClass::Gold => "gold",
            FareClass::Premium => "premium",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardPassenger {
    name: String,
    passenger_number: u32,
    balance: Decimal,
}

impl StandardPassenger {
    pub fn new(name: impl Into<String>, passenger_number: u32, balance: Decimal) -> Self {
        Self {
            name: name.into(),
            passenger_number,
            balance,
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Subtracts `amount` with no floor; the balance may go negative.
    /// Saturates at the `Decimal` bounds instead of overflowing.
    pub fn deduct_balance(&mut self, amount: Decimal) {
        self.balance = self.balance.saturating_sub(amount);
        tracing::debug!(
            passenger = self.passenger_number,
            %amount,
            balance = %self.balance,
            "Deducted from standard balance"
        );
    }
}

impl Traveler for StandardPassenger {
    fn name(&self) -> &str {
        &self.name
    }

    fn passenger_number(&self) -> u32 {
        self.passenger_number
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoldPassenger {
    name: String,
    passenger_number: u32,
    balance: Decimal,
}

impl GoldPassenger {
    pub fn new(name: impl Into<String>, passenger_number: u32, balance: Decimal) -> Self {
        Self {
            name: name.into(),
            passenger_number,
            balance,
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// See [`gold_discount`] for how `percentage` is scaled.
    pub fn apply_discount(&mut self, percentage: Decimal) {
        let discount = gold_discount(percentage, self.balance);
        self.balance = self.balance.saturating_sub(discount);
        tracing::debug!(
            passenger = self.passenger_number,
            %percentage,
            %discount,
            balance = %self.balance,
            "Applied gold discount"
        );
    }
}

impl Traveler for GoldPassenger {
    fn name(&self) -> &str {
        &self.name
    }

    fn passenger_number(&self) -> u32 {
        self.passenger_number
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PremiumPassenger {
    name: String,
    passenger_number: u32,
}

impl PremiumPassenger {
    pub fn new(name: impl Into<String>, passenger_number: u32) -> Self {
        Self {
            name: name.into(),
            passenger_number,
        }
    }
}

impl Traveler for PremiumPassenger {
    fn name(&self) -> &str {
        &self.name
    }

    fn passenger_number(&self) -> u32 {
        self.passenger_number
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Passenger {
    Standard(StandardPassenger),
    Gold(GoldPassenger),
    Premium(PremiumPassenger),
}

impl Passenger {
    pub fn tier(&self) -> FareClass {
        match self {
            Passenger::Standard(_) => FareClass::Standard,
            Passenger::Gold(_) => FareClass::Gold,
            Passenger::Premium(_) => FareClass::Premium,
        }
    }

    /// `None` for premium passengers, which carry no balance at all.
    pub fn balance(&self) -> Option<Decimal> {
        match self {
            Passenger::Standard(p) => Some(p.balance()),
            Passenger::Gold(p) => Some(p.balance()),
            Passenger::Premium(_) => None,
        }
    }

    /// Premium passengers never take up activity capacity.
    pub fn counts_against_capacity(&self) -> bool {
        matches!(self, Passenger::Standard(_) | Passenger::Gold(_))
    }

    fn traveler(&self) -> &dyn Traveler {
        match self {
            Passenger::Standard(p) => p,
            Passenger::Gold(p) => p,
            Passenger::Premium(p) => p,
        }
    }
}

impl Traveler for Passenger {
    fn name(&self) -> &str {
        self.traveler().name()
    }

    fn passenger_number(&self) -> u32 {
        self.traveler().passenger_number()
    }
}

impl From<StandardPassenger> for Passenger {
    fn from(passenger: StandardPassenger) -> Self {
        Passenger::Standard(passenger)
    }
}

impl From<GoldPassenger> for Passenger {
    fn from(passenger: GoldPassenger) -> Self {
        Passenger::Gold(passenger)
    }
}

impl From<PremiumPassenger> for Passenger {
    fn from(passenger: PremiumPassenger) -> Self {
        Passenger::Premium(passenger)
    }
}
