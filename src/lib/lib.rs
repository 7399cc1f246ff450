//! Scraper for the rasp.rea.ru timetable: selector hierarchy lookups and
//! week/day/lesson schedule assembly over the site's AJAX fragments.
pub mod rasp;
