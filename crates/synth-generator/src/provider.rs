//! Pluggable provider for realistic personal data.
//!
//! The email, name, phone, and address field types delegate to a
//! [`FakeProvider`] rather than hand-rolled literals. The default
//! implementation is backed by the `fake` crate; every draw goes through the
//! caller-supplied RNG so seeded generation stays reproducible.

use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::RngCore;

/// Source of locale-appropriate synthetic personal data.
pub trait FakeProvider {
    /// A plausible email address.
    fn email(&self, rng: &mut dyn RngCore) -> String;

    /// A person's full name.
    fn full_name(&self, rng: &mut dyn RngCore) -> String;

    /// A phone number.
    fn phone_number(&self, rng: &mut dyn RngCore) -> String;

    /// A single-line postal address.
    fn address(&self, rng: &mut dyn RngCore) -> String;

    /// A short run of free-form text.
    fn text(&self, rng: &mut dyn RngCore) -> String;
}

/// Default [`FakeProvider`] backed by the `fake` crate (en locale).
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerProvider;

impl FakeProvider for FakerProvider {
    fn email(&self, rng: &mut dyn RngCore) -> String {
        SafeEmail().fake_with_rng(rng)
    }

    fn full_name(&self, rng: &mut dyn RngCore) -> String {
        Name().fake_with_rng(rng)
    }

    fn phone_number(&self, rng: &mut dyn RngCore) -> String {
        PhoneNumber().fake_with_rng(rng)
    }

    fn address(&self, rng: &mut dyn RngCore) -> String {
        // fake has no single-line address generator, so compose one.
        let building: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let state: String = StateAbbr().fake_with_rng(rng);
        let zip: String = ZipCode().fake_with_rng(rng);
        format!("{building} {street}, {city}, {state} {zip}")
    }

    fn text(&self, rng: &mut dyn RngCore) -> String {
        Sentence(3..9).fake_with_rng(rng)
    }
}
