use log::info;
use serde::Serialize;

use super::{
    errors::RaspError,
    models::{lesson_model::LessonSlot, Command},
    schedule, selectors,
    transport::Transport,
};

fn to_json<V: Serialize>(value: &V) -> Result<String, RaspError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Runs one lookup against the site and returns its result as pretty JSON.
pub async fn run<T: Transport>(transport: &T, command: &Command) -> Result<String, RaspError> {
    info!("Running {:?}", command);
    match command {
        Command::Faculties => to_json(&selectors::faculties(transport).await?),
        Command::Cathedras => to_json(&selectors::cathedras(transport).await?),
        Command::Courses { faculty } => to_json(&selectors::courses(transport, faculty).await?),
        Command::StudyTypes { faculty, course } => {
            to_json(&selectors::study_types(transport, faculty, course).await?)
        }
        Command::Groups {
            faculty,
            course,
            study_type,
        } => to_json(&selectors::groups(transport, faculty, course, study_type).await?),
        Command::Teachers { cathedra } => to_json(&selectors::teachers(transport, cathedra).await?),
        Command::Dates { selection, week } => {
            to_json(&schedule::dates(transport, selection, *week).await)
        }
        Command::Day { selection, date } => {
            to_json(&schedule::day_info(transport, selection, date).await)
        }
        Command::Week { selection, week } => {
            to_json(&schedule::week_info(transport, selection, *week).await)
        }
        Command::Lesson {
            selection,
            date,
            slot,
        } => {
            let slot = LessonSlot::try_from(*slot)?;
            to_json(&schedule::lesson_info(transport, selection, date, slot).await)
        }
    }
}
