//! Transmission Medium Profiles
//!
//! ## Overview
//!
//! Every calculation runs against one medium profile: the physical
//! characteristics of the cable, fibre or radio channel the signal travels
//! through. The built-in table is a `static` constant: built at compile time,
//! never mutated, shared freely between threads.
//!
//! ## Guided vs Unguided
//!
//! Guided media confine the signal physically (coax, fibre, twisted pair) and
//! only lose power along the line. Unguided media radiate into open space and
//! also pay free-space path loss:
//!
//! ```text
//! FSPL(dB) = 20·log10(d_km) + 20·log10(f_MHz) − 147.55
//! ```
//!
//! ## Built-in Media
//!
//! ```text
//! id              class     loss dB/km  noise dBm  BW MHz  max Mbps
//! ---------------------------------------------------------------
//! coaxial-cable   guided       0.5        -90        100     1000
//! optical-fiber   guided       0.2        -95       1000    10000
//! twisted-pair    guided       1.0        -85         50      100
//! wifi            unguided     8.0        -70         20      150
//! radio           unguided    12.0        -65         10       50
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sigtrans_core::medium::{lookup, Medium, MediumClass};
//!
//! let fiber = lookup("optical-fiber")?;
//! assert_eq!(fiber.class, MediumClass::Guided);
//!
//! // Typed access when the medium is known at compile time
//! assert_eq!(Medium::Wifi.profile().bandwidth_mhz, 20.0);
//! # Ok::<(), sigtrans_core::SignalError>(())
//! ```

use core::fmt;
use core::str::FromStr;

use crate::errors::{SignalError, SignalResult};
use crate::traits::MediumCatalog;

/// Whether the medium physically confines the signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediumClass {
    /// Cable or fibre; no free-space loss
    Guided,
    /// Radio channel; free-space path loss applies
    Unguided,
}

impl MediumClass {
    /// True for guided media
    pub const fn is_guided(self) -> bool {
        matches!(self, Self::Guided)
    }
}

impl fmt::Display for MediumClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guided => f.pad("guided"),
            Self::Unguided => f.pad("unguided"),
        }
    }
}

/// Physical characteristics of one transmission medium
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MediumProfile {
    /// Display name
    pub name: &'static str,

    /// Guided or unguided
    pub class: MediumClass,

    /// Attenuation coefficient (dB/km)
    pub loss_per_km: f64,

    /// Baseline thermal/ambient noise reference (dBm)
    pub noise_floor_dbm: f64,

    /// Usable channel bandwidth (MHz)
    pub bandwidth_mhz: f64,

    /// Hard ceiling on derived channel capacity (Mbps)
    pub max_capacity_mbps: f64,
}

/// Identifier paired with its profile
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MediumEntry {
    /// Lookup key
    pub id: &'static str,

    /// Physical characteristics
    pub profile: MediumProfile,
}

impl MediumEntry {
    /// Flattened view for selection controls
    pub fn catalog_entry(&self) -> CatalogEntry {
        CatalogEntry {
            id: self.id,
            name: self.profile.name,
            class: self.profile.class,
            loss_per_km: self.profile.loss_per_km,
            bandwidth_mhz: self.profile.bandwidth_mhz,
            max_capacity_mbps: self.profile.max_capacity_mbps,
        }
    }
}

/// One option of the medium selection list
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogEntry {
    /// Lookup key
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Guided or unguided
    pub class: MediumClass,
    /// Attenuation coefficient (dB/km)
    pub loss_per_km: f64,
    /// Usable channel bandwidth (MHz)
    pub bandwidth_mhz: f64,
    /// Capacity ceiling (Mbps)
    pub max_capacity_mbps: f64,
}

/// Built-in media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Medium {
    /// Coaxial copper cable
    #[default]
    CoaxialCable,
    /// Single-mode optical fibre
    OpticalFiber,
    /// Unshielded twisted pair
    TwistedPair,
    /// 2.4 GHz wireless LAN
    Wifi,
    /// Terrestrial radio link
    Radio,
}

impl Medium {
    /// Every built-in medium, in table order
    pub const ALL: [Medium; 5] = [
        Self::CoaxialCable,
        Self::OpticalFiber,
        Self::TwistedPair,
        Self::Wifi,
        Self::Radio,
    ];

    const fn index(self) -> usize {
        match self {
            Self::CoaxialCable => 0,
            Self::OpticalFiber => 1,
            Self::TwistedPair => 2,
            Self::Wifi => 3,
            Self::Radio => 4,
        }
    }

    /// Lookup key for this medium
    pub fn id(self) -> &'static str {
        MEDIUM_TABLE[self.index()].id
    }

    /// Physical characteristics of this medium
    pub fn profile(self) -> &'static MediumProfile {
        &MEDIUM_TABLE[self.index()].profile
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for Medium {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|medium| medium.id() == s)
            .ok_or(SignalError::UnknownMedium)
    }
}

/// The built-in profile table
pub static MEDIUM_TABLE: [MediumEntry; 5] = [
    MediumEntry {
        id: "coaxial-cable",
        profile: MediumProfile {
            name: "Coaxial Cable",
            class: MediumClass::Guided,
            loss_per_km: 0.5,
            noise_floor_dbm: -90.0,
            bandwidth_mhz: 100.0,
            max_capacity_mbps: 1000.0,
        },
    },
    MediumEntry {
        id: "optical-fiber",
        profile: MediumProfile {
            name: "Optical Fiber",
            class: MediumClass::Guided,
            loss_per_km: 0.2,
            noise_floor_dbm: -95.0,
            bandwidth_mhz: 1000.0,
            max_capacity_mbps: 10000.0,
        },
    },
    MediumEntry {
        id: "twisted-pair",
        profile: MediumProfile {
            name: "Twisted Pair Cable",
            class: MediumClass::Guided,
            loss_per_km: 1.0,
            noise_floor_dbm: -85.0,
            bandwidth_mhz: 50.0,
            max_capacity_mbps: 100.0,
        },
    },
    MediumEntry {
        id: "wifi",
        profile: MediumProfile {
            name: "WiFi (2.4GHz)",
            class: MediumClass::Unguided,
            loss_per_km: 8.0,
            noise_floor_dbm: -70.0,
            bandwidth_mhz: 20.0,
            max_capacity_mbps: 150.0,
        },
    },
    MediumEntry {
        id: "radio",
        profile: MediumProfile {
            name: "Radio Waves",
            class: MediumClass::Unguided,
            loss_per_km: 12.0,
            noise_floor_dbm: -65.0,
            bandwidth_mhz: 10.0,
            max_capacity_mbps: 50.0,
        },
    },
];

/// Catalog backed by the built-in table
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCatalog;

impl MediumCatalog for StandardCatalog {
    fn entries(&self) -> &[MediumEntry] {
        &MEDIUM_TABLE
    }
}

/// Resolve an identifier against the built-in table
pub fn lookup(medium_id: &str) -> SignalResult<&'static MediumProfile> {
    medium_id.parse::<Medium>().map(Medium::profile).map_err(|err| {
        log_warn!("Unknown medium id {:?}", medium_id);
        err
    })
}

/// Enumerate the built-in table for selection controls
pub fn catalog() -> impl Iterator<Item = CatalogEntry> {
    MEDIUM_TABLE.iter().map(MediumEntry::catalog_entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_medium_resolves_to_its_own_entry() {
        for medium in Medium::ALL {
            let profile = lookup(medium.id()).unwrap();
            assert_eq!(profile, medium.profile());
            assert_eq!(medium.id().parse::<Medium>(), Ok(medium));
        }
    }

    #[test]
    fn identifiers_are_unique() {
        for (i, a) in MEDIUM_TABLE.iter().enumerate() {
            for b in &MEDIUM_TABLE[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        assert_eq!(lookup("satellite"), Err(SignalError::UnknownMedium));
        assert_eq!(lookup(""), Err(SignalError::UnknownMedium));
        // Matching is exact
        assert_eq!(lookup("WiFi"), Err(SignalError::UnknownMedium));
        assert!("coaxial-cable ".parse::<Medium>().is_err());
    }

    #[test]
    fn coaxial_matches_reference_profile() {
        let coax = Medium::CoaxialCable.profile();
        assert_eq!(coax.class, MediumClass::Guided);
        assert_eq!(coax.loss_per_km, 0.5);
        assert_eq!(coax.noise_floor_dbm, -90.0);
        assert_eq!(coax.bandwidth_mhz, 100.0);
        assert_eq!(coax.max_capacity_mbps, 1000.0);
    }

    #[test]
    fn radio_media_are_unguided() {
        assert!(!Medium::Wifi.profile().class.is_guided());
        assert!(!Medium::Radio.profile().class.is_guided());
        assert!(Medium::OpticalFiber.profile().class.is_guided());
    }

    #[test]
    fn profiles_have_positive_characteristics() {
        for entry in &MEDIUM_TABLE {
            assert!(entry.profile.loss_per_km > 0.0, "{}", entry.id);
            assert!(entry.profile.bandwidth_mhz > 0.0, "{}", entry.id);
            assert!(entry.profile.max_capacity_mbps > 0.0, "{}", entry.id);
        }
    }

    #[test]
    fn catalog_follows_table_order() {
        let mut count = 0;
        for (entry, medium) in catalog().zip(Medium::ALL) {
            assert_eq!(entry.id, medium.id());
            assert_eq!(entry.name, medium.profile().name);
            count += 1;
        }
        assert_eq!(count, MEDIUM_TABLE.len());
    }

    #[test]
    fn standard_catalog_agrees_with_lookup() {
        let catalog = StandardCatalog;
        assert_eq!(catalog.lookup("radio"), lookup("radio"));
        assert_eq!(catalog.lookup("fiber"), Err(SignalError::UnknownMedium));
    }

    #[test]
    fn default_medium_is_coaxial() {
        assert_eq!(Medium::default(), Medium::CoaxialCable);
    }
}
