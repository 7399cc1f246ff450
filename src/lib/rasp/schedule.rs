//! Week, day and lesson lookups for a group or a teacher.
//!
//! Schedule data is best-effort: a sub-request that fails is logged and
//! contributes an empty result, so the returned structure always has every
//! date of the week and every slot of a day.
use futures::future;
use log::{debug, warn};
use reqwest::Method;

use super::{
    extractor::{extract_dates, extract_lessons},
    models::lesson_model::{DayInfo, Lesson, LessonSlot, WeekDates, WeekInfo},
    transport::{Transport, DETAILS_PATH, SCHEDULE_CARD_PATH},
};

/// The site matches selections case-sensitively against lower-cased names.
pub fn normalize_selection(selection: &str) -> String {
    selection.to_lowercase()
}

/// Returns the dates of week `week_num` (`-1` for the current one).
pub async fn dates<T: Transport>(transport: &T, selection: &str, week_num: i32) -> WeekDates {
    let selection = normalize_selection(selection);
    let week_num = week_num.to_string();
    let params = [
        ("selection", selection.as_str()),
        ("weekNum", week_num.as_str()),
        ("catfilter", "1"),
    ];
    match transport.fetch(Method::GET, SCHEDULE_CARD_PATH, &params).await {
        Ok(card) => {
            let week_dates = extract_dates(&card);
            debug!("Week {} of {} has {} dates", week_num, selection, week_dates.len());
            week_dates
        }
        Err(err) => {
            warn!("No dates for {} week {}: {}", selection, week_num, err);
            WeekDates::new()
        }
    }
}

/// Returns lessons held in `slot` on `date`, an empty list for a free slot.
pub async fn lesson_info<T: Transport>(
    transport: &T,
    selection: &str,
    date: &str,
    slot: LessonSlot,
) -> Vec<Lesson> {
    let selection = normalize_selection(selection);
    let slot = slot.to_string();
    let params = [
        ("selection", selection.as_str()),
        ("date", date),
        ("timeSlot", slot.as_str()),
    ];
    match transport.fetch(Method::GET, DETAILS_PATH, &params).await {
        Ok(fragment) => extract_lessons(&fragment),
        Err(err) => {
            warn!("No lessons for {} on {} slot {}: {}", selection, date, slot, err);
            Vec::new()
        }
    }
}

/// Requests all eight slots of `date` at once and waits for every one of them.
pub async fn day_info<T: Transport>(transport: &T, selection: &str, date: &str) -> DayInfo {
    let slots = LessonSlot::all().collect::<Vec<_>>();
    let lessons = future::join_all(
        slots
            .iter()
            .map(|&slot| lesson_info(transport, selection, date, slot)),
    )
    .await;
    slots.into_iter().zip(lessons).collect()
}

/// Resolves the dates of the week, then every day of it concurrently.
pub async fn week_info<T: Transport>(transport: &T, selection: &str, week_num: i32) -> WeekInfo {
    let week_dates = dates(transport, selection, week_num).await;
    let days = future::join_all(
        week_dates
            .iter()
            .map(|date| day_info(transport, selection, date)),
    )
    .await;
    week_dates.into_iter().zip(days).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_lower_cased() {
        assert_eq!(normalize_selection("15.06Д-Э03А/19Б"), "15.06д-э03а/19б");
        assert_eq!(normalize_selection("Иванов И.И."), "иванов и.и.");
    }
}
