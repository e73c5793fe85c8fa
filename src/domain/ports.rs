/// Capabilities shared by every fare class.
pub trait Traveler {
    fn name(&self) -> &str;
    fn passenger_number(&self) -> u32;
}
