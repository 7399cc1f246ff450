//! Pulls structured data out of the site's HTML fragments.
//!
//! Three response shapes are understood: the navigator's `<select>` controls,
//! the weekly schedule card (only its dates are used) and the lesson details
//! fragment made of `div[data-subgroup]` cards. Schedule markup is not stable,
//! so a field that can't be found comes back empty instead of failing.
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::{
    errors::RaspError,
    models::lesson_model::{Lesson, Room, WeekDates},
};

/// Placeholder options of the navigator, never real choices.
const SENTINEL_OPTIONS: [&str; 2] = ["na", ""];

static NAMED: LazyLock<Selector> = LazyLock::new(|| selector("[name]"));
static OPTION: LazyLock<Selector> = LazyLock::new(|| selector("option"));
static CARD: LazyLock<Selector> = LazyLock::new(|| selector("div[data-subgroup]"));
static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h1, h2, h3, h4, h5, h6"));
static EMPHASIS: LazyLock<Selector> = LazyLock::new(|| selector("strong, em, b"));

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"[0-9]{2}\.[0-9]{2}\.[0-9]{4}"));
static ROOM_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"Аудитория:\s+(\d+)\s+\w+\s+-\s+(\d+)\s"));
static TEACHER_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"</i> ([\w ]+)</a>"));
static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"Группа\s+([\w./\- \d()]+)\s+<br\s*/?>"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("hardcoded selector must parse")
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hardcoded pattern must compile")
}

/// Collapses runs of whitespace in the element's text.
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns values of all options of the control named `name`,
/// skipping the site's placeholder entries.
pub fn extract_options(fragment: &str, name: &str) -> Result<Vec<String>, RaspError> {
    let html = Html::parse_fragment(fragment);
    let control = html
        .select(&NAMED)
        .find(|element| element.value().attr("name") == Some(name))
        .ok_or_else(|| RaspError::MissingSelector {
            name: name.to_owned(),
        })?;
    let options = control
        .select(&OPTION)
        .map(|option| match option.value().attr("value") {
            Some(value) => value.to_owned(),
            None => element_text(option),
        })
        .filter(|value| !SENTINEL_OPTIONS.contains(&value.as_str()))
        .collect::<Vec<_>>();
    debug!("Found {} options for {}", options.len(), name);
    Ok(options)
}

/// Returns every distinct `DD.MM.YYYY` token found in `text`.
pub fn extract_dates(text: &str) -> WeekDates {
    DATE_RE
        .find_iter(text)
        .map(|date| date.as_str().to_owned())
        .collect()
}

/// Returns the lesson cards of a details fragment. Cards without a heading are dropped.
pub fn extract_lessons(fragment: &str) -> Vec<Lesson> {
    let html = Html::parse_fragment(fragment);
    html.select(&CARD).filter_map(parse_card).collect()
}

fn parse_card(card: ElementRef) -> Option<Lesson> {
    let Some(heading) = card.select(&HEADING).next() else {
        debug!("Dropping lesson card without a heading");
        return None;
    };
    let markup = card.inner_html().replace("&nbsp;", " ");

    let kind = card
        .select(&EMPHASIS)
        .next()
        .map(element_text)
        .unwrap_or_default();
    let room = ROOM_RE.captures(&markup).map(|caps| Room {
        building: caps[1].to_owned(),
        room: caps[2].to_owned(),
    });
    let teachers = TEACHER_RE
        .captures_iter(&markup)
        .map(|caps| caps[1].trim().to_owned())
        .filter(|teacher| !teacher.is_empty())
        .collect();
    let group = GROUP_RE
        .captures(&markup)
        .map(|caps| caps[1].trim().to_owned())
        .unwrap_or_default();

    Some(Lesson {
        subject: element_text(heading),
        kind,
        room,
        teachers,
        group,
    })
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
