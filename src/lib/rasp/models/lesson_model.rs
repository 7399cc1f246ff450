//! Module with lesson model built from rasp.rea.ru's schedule fragments
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use serde::{Deserialize, Serialize};

use crate::rasp::errors::RaspError;

/// Calendar date in `DD.MM.YYYY` form, exactly as the site prints it.
pub type DateToken = String;

/// One of the eight fixed daily time slots of the timetable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LessonSlot(u8);

impl LessonSlot {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 8;

    /// All slots of a day, in order.
    pub fn all() -> impl Iterator<Item = LessonSlot> {
        (Self::FIRST..=Self::LAST).map(LessonSlot)
    }
}

impl TryFrom<u8> for LessonSlot {
    type Error = RaspError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::FIRST..=Self::LAST).contains(&value) {
            Ok(LessonSlot(value))
        } else {
            Err(RaspError::InvalidSlot(value))
        }
    }
}

impl From<LessonSlot> for u8 {
    fn from(slot: LessonSlot) -> Self {
        slot.0
    }
}

impl fmt::Display for LessonSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Building and room numbers, e.g. `5` and `304` for "5 корпус - 304".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Room {
    pub building: String,
    pub room: String,
}

/// A model for describing a single lesson card.
/// Consists of:
/// 1. Subject name, taken from the card heading
/// 2. Lesson type (lecture, seminar, ...), taken from the emphasized text
/// 3. Room, absent when the card doesn't name one
/// 4. Teachers in the order the card lists them
/// 5. Group or subgroup label, empty when the card doesn't name one
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Lesson {
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "room_pair")]
    pub room: Option<Room>,
    pub teachers: Vec<String>,
    pub group: String,
}

/// Lessons of one date keyed by slot. Every slot is present, free ones map to `[]`.
pub type DayInfo = BTreeMap<LessonSlot, Vec<Lesson>>;

/// Days of one week keyed by date.
pub type WeekInfo = BTreeMap<DateToken, DayInfo>;

/// Dates of one week.
pub type WeekDates = BTreeSet<DateToken>;

/// Rooms go over the wire as `[building, room]`, or `[]` when unknown.
mod room_pair {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::Room;

    pub fn serialize<S: Serializer>(room: &Option<Room>, serializer: S) -> Result<S::Ok, S::Error> {
        match room {
            Some(room) => serializer.collect_seq([&room.building, &room.room]),
            None => serializer.collect_seq(std::iter::empty::<&String>()),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Room>, D::Error> {
        let parts = Vec::<String>::deserialize(deserializer)?;
        match <[String; 2]>::try_from(parts) {
            Ok([building, room]) => Ok(Some(Room { building, room })),
            Err(parts) if parts.is_empty() => Ok(None),
            Err(parts) => Err(D::Error::invalid_length(
                parts.len(),
                &"an empty or two-element room pair",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cover_the_whole_day() {
        let slots = LessonSlot::all().map(u8::from).collect::<Vec<_>>();
        assert_eq!(slots, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn slot_out_of_range_is_rejected() {
        assert!(matches!(
            LessonSlot::try_from(0),
            Err(RaspError::InvalidSlot(0))
        ));
        assert!(matches!(
            LessonSlot::try_from(9),
            Err(RaspError::InvalidSlot(9))
        ));
        assert_eq!(u8::from(LessonSlot::try_from(8).unwrap()), 8);
    }

    #[test]
    fn lesson_serializes_room_as_pair() {
        let lesson = Lesson {
            subject: "Эконометрика".to_string(),
            kind: "Лекция".to_string(),
            room: Some(Room {
                building: "5".to_string(),
                room: "304".to_string(),
            }),
            teachers: vec!["Иванов Иван Иванович".to_string()],
            group: "15.06д-э03а/19б".to_string(),
        };
        let json = serde_json::to_value(&lesson).unwrap();
        assert_eq!(json["type"], "Лекция");
        assert_eq!(json["room"], serde_json::json!(["5", "304"]));
        let back: Lesson = serde_json::from_value(json).unwrap();
        assert_eq!(back, lesson);
    }

    #[test]
    fn missing_room_serializes_as_empty_list() {
        let json = serde_json::to_value(Lesson::default()).unwrap();
        assert_eq!(json["room"], serde_json::json!([]));
        assert_eq!(json["group"], "");
    }

    #[test]
    fn day_info_keys_serialize_as_slot_numbers() {
        let day = LessonSlot::all()
            .map(|slot| (slot, Vec::new()))
            .collect::<DayInfo>();
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.starts_with("{\"1\":[]"));
        let back: DayInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day);
    }
}
