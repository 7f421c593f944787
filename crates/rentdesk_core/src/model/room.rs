//! Room domain model.
//!
//! # Responsibility
//! - Define the room record with its status-driven detail blocks.
//! - Validate the single-block and open-ended invariants.
//!
//! # Invariants
//! - At most one detail block is populated, chosen by the current status.
//! - An open-ended occupancy or pre-booking carries no end date.

use crate::model::{next_entity_id, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Mutually exclusive room lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Reserved,
}

impl RoomStatus {
    /// Stable display/storage label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
            Self::Reserved => "Reserved",
        }
    }
}

impl Display for RoomStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occupancy block for an occupied room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub open_ended: bool,
}

/// Maintenance block for a room under maintenance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceWork {
    pub cost: f64,
    pub date: Option<NaiveDate>,
}

/// Pre-booking block for a reserved room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreBooking {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub open_ended: bool,
    pub tenant_name: Option<String>,
    pub tenant_phone: Option<String>,
}

/// Status detail block. The enum shape guarantees at most one is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomDetails {
    Occupancy(Occupancy),
    Maintenance(MaintenanceWork),
    PreBooking(PreBooking),
}

impl RoomDetails {
    /// Returns the status this block belongs to.
    pub fn status(&self) -> RoomStatus {
        match self {
            Self::Occupancy(_) => RoomStatus::Occupied,
            Self::Maintenance(_) => RoomStatus::Maintenance,
            Self::PreBooking(_) => RoomStatus::Reserved,
        }
    }
}

/// Canonical room record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Stable creation-ordered id.
    pub id: EntityId,
    /// Display label used by tenants/payments to reference the room.
    pub room_number: String,
    /// Free-form category label ("Studio", "1BHK", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Monthly rent.
    pub rent: f64,
    /// Monthly expense estimate.
    pub monthly_expenses: f64,
    pub status: RoomStatus,
    pub building: Option<String>,
    pub floor: Option<String>,
    /// Detail block matching `status`; `None` for available rooms.
    pub details: Option<RoomDetails>,
    /// Image references (data URIs or URLs).
    pub images: Vec<String>,
}

impl Room {
    /// Creates an available room with a fresh id and zeroed finances.
    pub fn new(room_number: impl Into<String>) -> Self {
        Self {
            id: next_entity_id(),
            room_number: room_number.into(),
            kind: String::new(),
            rent: 0.0,
            monthly_expenses: 0.0,
            status: RoomStatus::Available,
            building: None,
            floor: None,
            details: None,
            images: Vec::new(),
        }
    }

    /// Drops a detail block that no longer matches the current status.
    ///
    /// Entering a status enables its block; leaving it makes the stale block
    /// irrelevant and it must not survive the transition.
    pub fn normalize_details(&mut self) {
        if let Some(details) = &self.details {
            if details.status() != self.status {
                self.details = None;
            }
        }
    }

    /// Checks the single-block and open-ended invariants.
    pub fn validate(&self) -> Result<(), RoomValidationError> {
        if let Some(details) = &self.details {
            if details.status() != self.status {
                return Err(RoomValidationError::DetailBlockMismatch {
                    status: self.status,
                    block_status: details.status(),
                });
            }
        }

        match &self.details {
            Some(RoomDetails::Occupancy(occupancy))
                if occupancy.open_ended && occupancy.end_date.is_some() =>
            {
                Err(RoomValidationError::OpenEndedWithEndDate)
            }
            Some(RoomDetails::PreBooking(booking))
                if booking.open_ended && booking.end_date.is_some() =>
            {
                Err(RoomValidationError::OpenEndedWithEndDate)
            }
            _ => Ok(()),
        }
    }
}

/// Room invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomValidationError {
    /// The populated detail block belongs to a different status.
    DetailBlockMismatch {
        status: RoomStatus,
        block_status: RoomStatus,
    },
    /// An open-ended occupancy or pre-booking carries an end date.
    OpenEndedWithEndDate,
}

impl Display for RoomValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DetailBlockMismatch {
                status,
                block_status,
            } => write!(
                f,
                "room status is {status} but detail block belongs to {block_status}"
            ),
            Self::OpenEndedWithEndDate => {
                write!(f, "open-ended stay must not carry an end date")
            }
        }
    }
}

impl Error for RoomValidationError {}

#[cfg(test)]
mod tests {
    use super::{Occupancy, PreBooking, Room, RoomDetails, RoomStatus, RoomValidationError};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_room_is_available_and_valid() {
        let room = Room::new("101");
        assert_eq!(room.status, RoomStatus::Available);
        assert!(room.details.is_none());
        room.validate().unwrap();
    }

    #[test]
    fn mismatched_block_fails_validation() {
        let mut room = Room::new("102");
        room.status = RoomStatus::Available;
        room.details = Some(RoomDetails::Occupancy(Occupancy::default()));

        let err = room.validate().unwrap_err();
        assert!(matches!(
            err,
            RoomValidationError::DetailBlockMismatch {
                status: RoomStatus::Available,
                block_status: RoomStatus::Occupied,
            }
        ));
    }

    #[test]
    fn normalize_drops_stale_block_after_status_change() {
        let mut room = Room::new("103");
        room.status = RoomStatus::Occupied;
        room.details = Some(RoomDetails::Occupancy(Occupancy {
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 6, 1)),
            open_ended: false,
        }));
        room.validate().unwrap();

        room.status = RoomStatus::Available;
        room.normalize_details();
        assert!(room.details.is_none());
        room.validate().unwrap();
    }

    #[test]
    fn open_ended_occupancy_rejects_end_date() {
        let mut room = Room::new("104");
        room.status = RoomStatus::Occupied;
        room.details = Some(RoomDetails::Occupancy(Occupancy {
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 6, 1)),
            open_ended: true,
        }));

        assert_eq!(
            room.validate().unwrap_err(),
            RoomValidationError::OpenEndedWithEndDate
        );
    }

    #[test]
    fn open_ended_pre_booking_rejects_end_date() {
        let mut room = Room::new("105");
        room.status = RoomStatus::Reserved;
        room.details = Some(RoomDetails::PreBooking(PreBooking {
            start_date: Some(date(2024, 7, 1)),
            end_date: Some(date(2024, 8, 1)),
            open_ended: true,
            tenant_name: Some("Sara".to_string()),
            tenant_phone: None,
        }));

        assert_eq!(
            room.validate().unwrap_err(),
            RoomValidationError::OpenEndedWithEndDate
        );
    }
}
