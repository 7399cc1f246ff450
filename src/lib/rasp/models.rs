use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::rasp::errors::RaspError;

pub mod lesson_model;

pub const DEFAULT_BASE_URL: &str = "https://rasp.rea.ru";

/// The site's own default course, used until a course is picked.
pub const DEFAULT_COURSE: &str = "1-й курс";

/// The site's marker for "current week".
pub const CURRENT_WEEK: i32 = -1;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the site address and request timeout.
/// 2. Verbosity switch for logging.
/// 3. The lookup to perform.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(short, long)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all faculties
    Faculties,
    /// List all cathedras
    Cathedras,
    /// List courses of a faculty
    Courses { faculty: String },
    /// List study types of a faculty and course
    StudyTypes {
        faculty: String,
        #[arg(long, default_value = DEFAULT_COURSE)]
        course: String,
    },
    /// List groups of a faculty, course and study type
    Groups {
        faculty: String,
        course: String,
        study_type: String,
    },
    /// List teachers of a cathedra
    Teachers { cathedra: String },
    /// Dates of a week for a group or teacher
    Dates {
        selection: String,
        #[arg(long, default_value_t = CURRENT_WEEK, allow_negative_numbers = true)]
        week: i32,
    },
    /// All lessons of one date
    Day { selection: String, date: String },
    /// All lessons of a week
    Week {
        selection: String,
        #[arg(long, default_value_t = CURRENT_WEEK, allow_negative_numbers = true)]
        week: i32,
    },
    /// Lessons of one slot of one date
    Lesson {
        selection: String,
        date: String,
        slot: u8,
    },
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Address of the timetable site, without trailing slash
/// 2. Optional timeout applied to every request, in seconds
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    pub base_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Defaults, then config.json if it exists, then `RASP_*` environment variables.
    pub fn load(config_json_path: &Path) -> Result<Config, RaspError> {
        Ok(Figment::from(Serialized::defaults(Config::default()))
            .merge(Json::file(config_json_path))
            .merge(Env::prefixed("RASP_"))
            .extract()?)
    }
}

/// Levels of the selector hierarchy, named after the site's form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyLevel {
    Faculty,
    Cathedra,
    Course,
    StudyType,
    Group,
    Teacher,
}

impl HierarchyLevel {
    pub fn field_name(self) -> &'static str {
        match self {
            HierarchyLevel::Faculty => "Faculty",
            HierarchyLevel::Cathedra => "Cathedra",
            HierarchyLevel::Course => "Course",
            HierarchyLevel::StudyType => "Type",
            HierarchyLevel::Group => "Group",
            HierarchyLevel::Teacher => "Teacher",
        }
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn config_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = Config::load(Path::new("missing.json")).unwrap();
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn config_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.json",
                r#"{ "base_url": "http://localhost:8080", "request_timeout_secs": 5 }"#,
            )?;
            jail.set_env("RASP_REQUEST_TIMEOUT_SECS", "10");
            let config = Config::load(Path::new("config.json")).unwrap();
            assert_eq!(config.base_url, "http://localhost:8080");
            assert_eq!(config.request_timeout_secs, Some(10));
            Ok(())
        });
    }

    #[test]
    fn args_parse_week_sentinel() {
        let args = Args::parse_from(["rasp", "week", "15.06Д-Э03А/19Б", "--week", "-1"]);
        assert_eq!(
            args.command,
            Command::Week {
                selection: "15.06Д-Э03А/19Б".to_string(),
                week: -1
            }
        );
        let args = Args::parse_from(["rasp", "study-types", "Факультет"]);
        assert_eq!(
            args.command,
            Command::StudyTypes {
                faculty: "Факультет".to_string(),
                course: DEFAULT_COURSE.to_string()
            }
        );
    }
}
