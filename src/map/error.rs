use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// No free cellar slot was left for a genuinely new key. The map is unchanged.
#[derive(Debug, PartialEq, Eq)]
pub struct MapFull;

impl Display for MapFull {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No free cellar slot left for a new key!")
    }
}

impl Error for MapFull {}

/// The key passed to a create-new-only insertion is already live. The existing entry is left
/// untouched.
#[derive(Debug, PartialEq, Eq)]
pub struct KeyAlreadyExists;

impl Display for KeyAlreadyExists {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key is already present in the map!")
    }
}

impl Error for KeyAlreadyExists {}

/// The requested capacity and address scale don't produce a usable layout: the map needs at
/// least one home slot and at least one cellar slot.
#[derive(Debug, PartialEq)]
pub struct InvalidLayout {
    pub cap_total: usize,
    pub address_scale: f64,
}

impl Display for InvalidLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to lay out a map with {} total slots at address scale {}!",
            self.cap_total, self.address_scale
        )
    }
}

impl Error for InvalidLayout {}

/// The ways a create-new-only insertion can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum InsertError {
    KeyAlreadyExists(KeyAlreadyExists),
    MapFull(MapFull),
}
