use log::info;
use reqwest::Method;

use super::{
    errors::RaspError,
    extractor::extract_options,
    models::HierarchyLevel,
    transport::{Transport, NAVIGATOR_PATH},
};

/* The navigator decides which dependent selector to fill in from the form
 * fields it gets and from `ChangedNode`, the control the user touched last. */
async fn get_options<T: Transport>(
    transport: &T,
    level: HierarchyLevel,
    form: &[(&str, &str)],
) -> Result<Vec<String>, RaspError> {
    let fragment = transport.fetch(Method::POST, NAVIGATOR_PATH, form).await?;
    let options = extract_options(&fragment, level.field_name())?;
    info!("Got {} options for {:?}", options.len(), level);
    Ok(options)
}

/// Returns list of all faculties
pub async fn faculties<T: Transport>(transport: &T) -> Result<Vec<String>, RaspError> {
    let form = [("ChangedNode", "Faculty")];
    get_options(transport, HierarchyLevel::Faculty, &form).await
}

/// Returns list of all cathedras
pub async fn cathedras<T: Transport>(transport: &T) -> Result<Vec<String>, RaspError> {
    let form = [("ChangedNode", "Cathedra")];
    get_options(transport, HierarchyLevel::Cathedra, &form).await
}

/// Returns list of courses based on faculty
pub async fn courses<T: Transport>(transport: &T, faculty: &str) -> Result<Vec<String>, RaspError> {
    let form = [("Faculty", faculty), ("ChangedNode", "Faculty")];
    get_options(transport, HierarchyLevel::Course, &form).await
}

/// Returns types of study (bachelor, master or specialist) based on faculty and course.
/// Callers without a chosen course pass [`DEFAULT_COURSE`](super::models::DEFAULT_COURSE).
pub async fn study_types<T: Transport>(
    transport: &T,
    faculty: &str,
    course: &str,
) -> Result<Vec<String>, RaspError> {
    let form = [
        ("Faculty", faculty),
        ("Course", course),
        ("ChangedNode", "Course"),
    ];
    get_options(transport, HierarchyLevel::StudyType, &form).await
}

/// Returns list of groups based on faculty, course and type of study
pub async fn groups<T: Transport>(
    transport: &T,
    faculty: &str,
    course: &str,
    study_type: &str,
) -> Result<Vec<String>, RaspError> {
    let form = [
        ("Faculty", faculty),
        ("Course", course),
        ("Type", study_type),
        ("ChangedNode", "Type"),
    ];
    get_options(transport, HierarchyLevel::Group, &form).await
}

/// Returns list of teachers based on cathedra
pub async fn teachers<T: Transport>(
    transport: &T,
    cathedra: &str,
) -> Result<Vec<String>, RaspError> {
    let form = [("Cathedra", cathedra), ("ChangedNode", "Cathedra")];
    get_options(transport, HierarchyLevel::Teacher, &form).await
}
